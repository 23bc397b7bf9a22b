//! Random password generation.
//!
//! Passwords are drawn uniformly from ASCII letters (both cases) plus a
//! fixed punctuation set — no lookalike filtering, no digit/symbol
//! quotas.

use rand::Rng;

use crate::errors::{CredVaultError, Result};

/// Default generated password length.
pub const DEFAULT_PASSWORD_LENGTH: usize = 25;

/// The character pool: 26 lowercase + 26 uppercase letters and 27 symbols.
const CHARSET: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ/*-+=:;.,?!'()[]{}|&%$#@^~_";

/// Generate a random password of `length` characters.
///
/// `length` must be at least 1.
pub fn generate_password(length: usize) -> Result<String> {
    if length == 0 {
        return Err(CredVaultError::InvalidInput(
            "password length must be at least 1".into(),
        ));
    }

    let mut rng = rand::rng();
    let password: String = (0..length)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect();

    Ok(password)
}
