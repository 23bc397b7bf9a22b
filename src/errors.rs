use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur in CredVault.
#[derive(Debug, Error)]
pub enum CredVaultError {
    // --- Key errors ---
    #[error("Key file missing or empty at {0} — run `credvault init` first")]
    KeyUnavailable(PathBuf),

    #[error("Key file corrupt: {0}")]
    KeyCorrupt(String),

    // --- Crypto errors ---
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("Decryption failed — wrong key or corrupted data")]
    DecryptionFailed,

    // --- Identity errors ---
    #[error("Invalid service reference '{0}' — cannot derive a host")]
    InvalidIdentity(String),

    // --- Vault errors ---
    #[error("No credential stored for '{0}'")]
    CredentialNotFound(String),

    #[error("Invalid vault format: {0}")]
    InvalidVaultFormat(String),

    // --- Input errors ---
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // --- CLI errors ---
    #[error("User cancelled operation")]
    UserCancelled,
}

/// Convenience type alias for CredVault results.
pub type Result<T> = std::result::Result<T, CredVaultError>;
