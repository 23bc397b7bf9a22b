//! Vault module — the persisted credential collection.
//!
//! This module provides:
//! - `CredentialRecord` and its decrypted views (`record`)
//! - High-level `VaultStore` over the JSON vault file (`store`)
//! - The single-value contact-email file (`contact`)

pub mod contact;
pub mod record;
pub mod store;

// Re-export the most commonly used items.
pub use record::{CredentialListing, CredentialRecord, DecryptedCredential};
pub use store::VaultStore;
