//! Cryptographic primitives for CredVault.
//!
//! This module provides:
//! - AES-256-GCM token encryption and decryption (`encryption`)
//! - The single vault key file lifecycle (`keyfile`)
//! - Random password generation (`passgen`)

pub mod encryption;
pub mod keyfile;
pub mod passgen;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{encrypt, decrypt, VaultKey, ...};
pub use encryption::{decrypt, encrypt};
pub use keyfile::{generate_key_if_absent, VaultKey};
pub use passgen::{generate_password, DEFAULT_PASSWORD_LENGTH};
