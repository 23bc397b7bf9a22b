//! AES-256-GCM authenticated encryption of password strings.
//!
//! `encrypt` produces a self-contained *ciphertext token*: a fresh random
//! 12-byte nonce is prepended to the ciphertext (which carries the 16-byte
//! auth tag), and the whole buffer is base64-encoded so it can live inside
//! the JSON vault file as an ordinary string.
//!
//! Layout of the decoded token:
//!   [ 12-byte nonce | ciphertext + 16-byte auth tag ]

use aes_gcm::aead::{Aead, KeyInit, OsRng};
use aes_gcm::{AeadCore, Aes256Gcm, Nonce};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use zeroize::Zeroize;

use crate::crypto::keyfile::VaultKey;
use crate::errors::{CredVaultError, Result};

/// Size of the AES-256-GCM nonce in bytes.
const NONCE_LEN: usize = 12;

/// Encrypt `plaintext` under the vault key into a printable token.
///
/// Every call draws a new random nonce, so encrypting the same plaintext
/// twice yields different tokens.
pub fn encrypt(key: &VaultKey, plaintext: &str) -> Result<String> {
    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| CredVaultError::EncryptionFailed(format!("invalid key length: {e}")))?;

    let nonce = Aes256Gcm::generate_nonce(&mut OsRng);

    let ciphertext = cipher
        .encrypt(&nonce, plaintext.as_bytes())
        .map_err(|e| CredVaultError::EncryptionFailed(format!("encryption error: {e}")))?;

    // Prepend the nonce so the token is self-contained.
    let mut buf = Vec::with_capacity(NONCE_LEN + ciphertext.len());
    buf.extend_from_slice(&nonce);
    buf.extend_from_slice(&ciphertext);

    Ok(BASE64.encode(buf))
}

/// Decrypt a token produced by [`encrypt`].
///
/// Malformed base64, a truncated token, an auth-tag mismatch, and
/// non-UTF-8 plaintext all collapse into the single opaque
/// `DecryptionFailed` error. The caller must not be able to tell
/// wrong-key apart from tampered-data.
pub fn decrypt(key: &VaultKey, token: &str) -> Result<String> {
    let data = BASE64
        .decode(token)
        .map_err(|_| CredVaultError::DecryptionFailed)?;

    // Make sure we have at least a nonce worth of bytes.
    if data.len() < NONCE_LEN {
        return Err(CredVaultError::DecryptionFailed);
    }

    let (nonce_bytes, ciphertext) = data.split_at(NONCE_LEN);
    let nonce = Nonce::from_slice(nonce_bytes);

    let cipher =
        Aes256Gcm::new_from_slice(key.as_bytes()).map_err(|_| CredVaultError::DecryptionFailed)?;

    let plaintext = cipher
        .decrypt(nonce, ciphertext)
        .map_err(|_| CredVaultError::DecryptionFailed)?;

    // Zeroize the bytes inside the error before discarding them.
    String::from_utf8(plaintext).map_err(|e| {
        let mut bad_bytes = e.into_bytes();
        bad_bytes.zeroize();
        CredVaultError::DecryptionFailed
    })
}
