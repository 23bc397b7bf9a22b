//! The single-value contact-email file.
//!
//! Lives next to the vault file but outside it: one JSON object
//! (`{"email": "..."}`) holding the owner's contact address. Not
//! encrypted — it is not a secret, just a convenience for autofill.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{CredVaultError, Result};

#[derive(Debug, Serialize, Deserialize)]
struct ContactFile {
    email: String,
}

/// Read the stored contact email, if the file exists.
pub fn load_contact_email(path: &Path) -> Result<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }

    let data = fs::read(path)?;
    let contact: ContactFile = serde_json::from_slice(&data)
        .map_err(|e| CredVaultError::InvalidVaultFormat(format!("contact JSON: {e}")))?;

    Ok(Some(contact.email))
}

/// Replace the stored contact email, creating the file if needed.
pub fn store_contact_email(path: &Path, email: &str) -> Result<()> {
    if email.is_empty() {
        return Err(CredVaultError::InvalidInput("email cannot be empty".into()));
    }

    let json = serde_json::to_vec_pretty(&ContactFile {
        email: email.to_string(),
    })
    .map_err(|e| CredVaultError::SerializationError(format!("contact: {e}")))?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    // Same temp-file + rename discipline as the vault file.
    let parent = path.parent().unwrap_or(Path::new("."));
    let tmp_path = parent.join(format!(
        ".{}.tmp",
        path.file_name().unwrap_or_default().to_string_lossy()
    ));

    fs::write(&tmp_path, &json)?;
    fs::rename(&tmp_path, path)?;

    Ok(())
}
