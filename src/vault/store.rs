//! High-level vault operations used by CLI commands.
//!
//! `VaultStore` owns the path to the vault file and the loaded key, so
//! the rest of the application can work with simple method calls like
//! `store.save_credential("https://mail.example.com", "hunter2", None)`.
//!
//! The vault file is one JSON map `service_key -> CredentialRecord`; the
//! whole file is the unit of read and write. Every mutation follows the
//! same load -> merge -> write sequence, serialized behind a per-store
//! mutex, and every write lands via temp-file + rename so a crash never
//! leaves a half-written vault behind.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::Utc;

use crate::crypto::encryption::{decrypt, encrypt};
use crate::crypto::keyfile::VaultKey;
use crate::errors::{CredVaultError, Result};
use crate::identity::ServiceIdentity;

use super::record::{CredentialListing, CredentialRecord, DecryptedCredential};

/// In-memory shape of the vault file. BTreeMap keeps the serialized
/// output deterministic across rewrites.
type RecordMap = BTreeMap<String, CredentialRecord>;

/// The main vault handle. Create one with `VaultStore::open`, then use
/// its methods to manage credentials.
pub struct VaultStore {
    /// Path to the vault file on disk.
    path: PathBuf,

    /// The vault key, threaded in once at startup.
    key: VaultKey,

    /// Serializes load -> mutate -> write sequences. The guarded state
    /// lives on disk, so a poisoned lock carries nothing to recover.
    gate: Mutex<()>,
}

impl VaultStore {
    /// Open a store over the vault file at `path` with a loaded key.
    ///
    /// Does not touch the filesystem — call [`ensure_initialized`]
    /// (or any operation, which initializes lazily) to create the file.
    ///
    /// [`ensure_initialized`]: VaultStore::ensure_initialized
    pub fn open(path: impl Into<PathBuf>, key: VaultKey) -> Self {
        Self {
            path: path.into(),
            key,
            gate: Mutex::new(()),
        }
    }

    /// Returns the path to the vault file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    // ------------------------------------------------------------------
    // Initialization
    // ------------------------------------------------------------------

    /// Guarantee the vault file exists and parses as an empty map if it
    /// was missing or zero-length. Idempotent — a populated vault is
    /// left untouched.
    pub fn ensure_initialized(&self) -> Result<()> {
        let _guard = self.lock_gate();
        if !vault_file_present(&self.path) {
            self.write_records(&RecordMap::new())?;
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Credential operations
    // ------------------------------------------------------------------

    /// Save a credential for a raw service reference.
    ///
    /// The reference is normalized first and the record is keyed by its
    /// canonical URL, so `https://mail.example.com/login` and
    /// `mail.example.com` land on the same entry. Saving an existing
    /// key replaces the whole record (only `created_at` survives).
    ///
    /// Returns the derived identity so callers can echo the display name.
    pub fn save_credential(
        &self,
        raw_service: &str,
        password: &str,
        email: Option<&str>,
    ) -> Result<ServiceIdentity> {
        if password.is_empty() {
            return Err(CredVaultError::InvalidInput(
                "password cannot be empty".into(),
            ));
        }
        let identity = ServiceIdentity::parse(raw_service)?;

        let encrypted_password = encrypt(&self.key, password)?;

        let _guard = self.lock_gate();
        let mut records = self.load_records()?;

        let now = Utc::now();
        let created_at = records
            .get(identity.service_key())
            .map_or(now, |existing| existing.created_at);

        let record = CredentialRecord {
            canonical_url: identity.canonical_url.clone(),
            display_name: identity.display_name.clone(),
            encrypted_password,
            email: email.map(str::to_string),
            created_at,
            updated_at: now,
        };

        records.insert(identity.canonical_url.clone(), record);
        self.write_records(&records)?;

        Ok(identity)
    }

    /// Fetch a record as stored, password still encrypted.
    pub fn get(&self, service_key: &str) -> Result<CredentialRecord> {
        let records = self.load_records()?;
        records
            .get(service_key)
            .cloned()
            .ok_or_else(|| CredVaultError::CredentialNotFound(service_key.to_string()))
    }

    /// Fetch a credential with its password decrypted.
    ///
    /// `service_key` may be a raw service reference — it is normalized
    /// to its canonical URL before lookup.
    pub fn get_credential(&self, service_key: &str) -> Result<DecryptedCredential> {
        let key = self.normalize_key(service_key)?;
        let record = self.get(&key)?;
        let password = decrypt(&self.key, &record.encrypted_password)?;

        Ok(DecryptedCredential {
            service_key: key,
            canonical_url: record.canonical_url,
            display_name: record.display_name,
            password,
            email: record.email,
        })
    }

    /// All records as stored, passwords still encrypted.
    pub fn list_records(&self) -> Result<Vec<(String, CredentialRecord)>> {
        Ok(self.load_records()?.into_iter().collect())
    }

    /// All credentials with passwords decrypted.
    ///
    /// A record whose token fails to decrypt is reported with
    /// `password: None` instead of aborting the rest of the listing.
    pub fn list_credentials(&self) -> Result<Vec<CredentialListing>> {
        let records = self.load_records()?;
        let mut listings = Vec::with_capacity(records.len());

        for (service_key, record) in records {
            let password = decrypt(&self.key, &record.encrypted_password).ok();
            listings.push(CredentialListing {
                service_key,
                canonical_url: record.canonical_url,
                display_name: record.display_name,
                password,
                email: record.email,
                updated_at: record.updated_at,
            });
        }

        Ok(listings)
    }

    /// Linear scan for a record whose `canonical_url` field matches.
    pub fn find_by_canonical_url(&self, url: &str) -> Result<Option<(String, CredentialRecord)>> {
        let records = self.load_records()?;
        Ok(records
            .into_iter()
            .find(|(_, record)| record.canonical_url == url))
    }

    /// Check whether a raw service reference is already registered,
    /// matched by canonical URL. Returns the decrypted credential on a
    /// hit, `None` otherwise.
    pub fn is_registered(&self, raw_service: &str) -> Result<Option<DecryptedCredential>> {
        let identity = ServiceIdentity::parse(raw_service)?;

        match self.find_by_canonical_url(&identity.canonical_url)? {
            Some((service_key, record)) => {
                let password = decrypt(&self.key, &record.encrypted_password)?;
                Ok(Some(DecryptedCredential {
                    service_key,
                    canonical_url: record.canonical_url,
                    display_name: record.display_name,
                    password,
                    email: record.email,
                }))
            }
            None => Ok(None),
        }
    }

    /// Re-encrypt and replace only the password of an existing record.
    ///
    /// Fails with `CredentialNotFound` if the service key is absent;
    /// display name, canonical URL, and email are left untouched.
    pub fn update_password(&self, service_key: &str, new_password: &str) -> Result<()> {
        if new_password.is_empty() {
            return Err(CredVaultError::InvalidInput(
                "password cannot be empty".into(),
            ));
        }
        let key = self.normalize_key(service_key)?;
        let encrypted_password = encrypt(&self.key, new_password)?;

        let _guard = self.lock_gate();
        let mut records = self.load_records()?;

        let record = records
            .get_mut(&key)
            .ok_or_else(|| CredVaultError::CredentialNotFound(key.clone()))?;

        record.encrypted_password = encrypted_password;
        record.updated_at = Utc::now();

        self.write_records(&records)
    }

    /// Returns `true` if a record exists for the service key.
    /// Metadata-only — no decryption is performed.
    pub fn contains(&self, service_key: &str) -> Result<bool> {
        let key = self.normalize_key(service_key)?;
        Ok(self.load_records()?.contains_key(&key))
    }

    /// Number of stored credentials.
    pub fn count(&self) -> Result<usize> {
        Ok(self.load_records()?.len())
    }

    // ------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------

    /// Read and parse the whole vault file. A missing or empty file
    /// reads as an empty map, matching `ensure_initialized`.
    fn load_records(&self) -> Result<RecordMap> {
        if !vault_file_present(&self.path) {
            return Ok(RecordMap::new());
        }

        let data = fs::read(&self.path)?;
        serde_json::from_slice(&data)
            .map_err(|e| CredVaultError::InvalidVaultFormat(format!("vault JSON: {e}")))
    }

    /// Serialize the whole map and write it to disk atomically.
    ///
    /// The temp file is created in the same directory so the rename is
    /// guaranteed to stay on one filesystem.
    fn write_records(&self, records: &RecordMap) -> Result<()> {
        let json = serde_json::to_vec_pretty(records)
            .map_err(|e| CredVaultError::SerializationError(format!("vault: {e}")))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let parent = self.path.parent().unwrap_or(Path::new("."));
        let tmp_path = parent.join(format!(
            ".{}.tmp",
            self.path.file_name().unwrap_or_default().to_string_lossy()
        ));

        fs::write(&tmp_path, &json)?;
        fs::rename(&tmp_path, &self.path)?;

        Ok(())
    }

    // ------------------------------------------------------------------
    // Helpers
    // ------------------------------------------------------------------

    /// Canonicalize a lookup key. A stored canonical URL passes through
    /// unchanged; anything else is normalized the same way `save` does.
    fn normalize_key(&self, service_key: &str) -> Result<String> {
        Ok(ServiceIdentity::parse(service_key)?.canonical_url)
    }

    fn lock_gate(&self) -> std::sync::MutexGuard<'_, ()> {
        self.gate.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// A vault file counts as present only if it exists and is non-empty.
fn vault_file_present(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.len() > 0).unwrap_or(false)
}
