//! The vault key file — the single symmetric key every credential is
//! encrypted under.
//!
//! Exactly one key exists per vault instance. It is generated once
//! (`generate_key_if_absent`, safe to call on every startup) and never
//! rotated: replacing the key file makes every stored ciphertext
//! permanently unreadable, because no re-encryption path exists.

use std::fs;
use std::path::Path;

use aes_gcm::aead::rand_core::RngCore;
use aes_gcm::aead::OsRng;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::errors::{CredVaultError, Result};

/// Length of the vault key in bytes (AES-256).
pub const KEY_LEN: usize = 32;

/// The loaded vault key. Wraps the raw bytes so they are zeroized when
/// the handle is dropped. Obtain one handle at startup and pass it into
/// the store — there is no ambient/global key access.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct VaultKey([u8; KEY_LEN]);

impl VaultKey {
    /// Wrap raw key bytes. Mainly useful in tests; normal callers go
    /// through [`VaultKey::load`].
    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Load the key from `path`.
    ///
    /// Fails with `KeyUnavailable` if the file is missing or empty, and
    /// with `KeyCorrupt` if it holds anything other than exactly 32
    /// bytes. Deterministic and side-effect-free, so repeated loads are
    /// safe.
    pub fn load(path: &Path) -> Result<Self> {
        if !key_file_present(path) {
            return Err(CredVaultError::KeyUnavailable(path.to_path_buf()));
        }

        let data = fs::read(path)?;
        let bytes: [u8; KEY_LEN] = data.as_slice().try_into().map_err(|_| {
            CredVaultError::KeyCorrupt(format!(
                "expected exactly {} key bytes, found {}",
                KEY_LEN,
                data.len()
            ))
        })?;

        Ok(Self(bytes))
    }

    /// Raw key bytes, for handing to the cipher.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// Generate and persist a fresh random vault key if none exists yet.
///
/// A missing file and a zero-length file both count as "absent" — the
/// latter happens when a previous run crashed between create and write.
/// Returns `true` if a new key was written, `false` if one was already
/// in place. Idempotent, safe to call on every startup.
pub fn generate_key_if_absent(path: &Path) -> Result<bool> {
    if key_file_present(path) {
        return Ok(false);
    }

    let mut key = [0u8; KEY_LEN];
    OsRng.fill_bytes(&mut key);

    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, key)?;
    key.zeroize();

    // On Unix, restrict permissions to owner-only read/write.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let perms = fs::Permissions::from_mode(0o600);
        fs::set_permissions(path, perms)?;
    }

    Ok(true)
}

/// A key file counts as present only if it exists and is non-empty.
fn key_file_present(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.len() > 0).unwrap_or(false)
}
