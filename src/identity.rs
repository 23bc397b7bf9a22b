//! Service identity normalization.
//!
//! Callers hand us whatever they have — a full URL with a path, a bare
//! hostname, with or without a scheme or `www.` — and every variant must
//! map to the same stored identity. The canonical URL doubles as the
//! service key in the vault, so normalization has to be deterministic.

use serde::{Deserialize, Serialize};

use crate::errors::{CredVaultError, Result};

/// The normalized identity derived from a raw service reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceIdentity {
    /// Normalized `https://www.<host>` form. Also the vault's service key.
    pub canonical_url: String,

    /// Short human-readable name: subdomain + domain, or the bare host.
    pub display_name: String,
}

impl ServiceIdentity {
    /// Normalize a raw service reference.
    ///
    /// Strips a leading `http://`/`https://` scheme and a leading `www.`
    /// label, then takes everything before the first `/` as the host.
    /// The canonical URL is always rebuilt as `https://www.<host>`,
    /// regardless of whether the input carried `www.`.
    ///
    /// No TLD validation is performed — any non-empty host is accepted.
    pub fn parse(raw: &str) -> Result<Self> {
        let host = extract_host(raw);
        if host.is_empty() {
            return Err(CredVaultError::InvalidIdentity(raw.to_string()));
        }

        Ok(Self {
            canonical_url: format!("https://www.{host}"),
            display_name: display_name(host),
        })
    }

    /// The service key records are stored under.
    pub fn service_key(&self) -> &str {
        &self.canonical_url
    }
}

/// Strip scheme and `www.`, then cut at the first `/`.
fn extract_host(raw: &str) -> &str {
    let stripped = raw
        .strip_prefix("https://")
        .or_else(|| raw.strip_prefix("http://"))
        .unwrap_or(raw);
    let stripped = stripped.strip_prefix("www.").unwrap_or(stripped);

    stripped.split('/').next().unwrap_or("")
}

/// Subdomain + domain when the host has at least two labels
/// (`mail.example.com` -> `mail.example`), otherwise the host itself
/// (`localhost` -> `localhost`).
fn display_name(host: &str) -> String {
    let mut labels = host.split('.');
    match (labels.next(), labels.next()) {
        (Some(first), Some(second)) => format!("{first}.{second}"),
        (Some(first), None) => first.to_string(),
        (None, _) => String::new(),
    }
}
