//! Credential record types stored inside the vault.
//!
//! The vault file only ever holds `CredentialRecord` — the password stays
//! an opaque ciphertext token on disk and in memory until a caller
//! explicitly asks for a decrypted view.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single credential as persisted in the vault file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialRecord {
    /// Normalized `https://www.<host>` form, used for identity matching.
    pub canonical_url: String,

    /// Derived short service name (subdomain + domain, or bare host).
    pub display_name: String,

    /// The password as a base64 ciphertext token (nonce + ciphertext).
    pub encrypted_password: String,

    /// Optional account email for this service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// When this credential was first saved.
    pub created_at: DateTime<Utc>,

    /// When this credential was last changed.
    pub updated_at: DateTime<Utc>,
}

/// A credential with its password decrypted, as returned by lookups.
#[derive(Debug, Clone)]
pub struct DecryptedCredential {
    pub service_key: String,
    pub canonical_url: String,
    pub display_name: String,
    pub password: String,
    pub email: Option<String>,
}

/// One row of a bulk listing.
///
/// `password` is `None` when that record's token failed to decrypt —
/// a single bad record must not abort the whole listing.
#[derive(Debug, Clone)]
pub struct CredentialListing {
    pub service_key: String,
    pub canonical_url: String,
    pub display_name: String,
    pub password: Option<String>,
    pub email: Option<String>,
    pub updated_at: DateTime<Utc>,
}
