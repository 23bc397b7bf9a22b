use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{CredVaultError, Result};

/// Project-level configuration, loaded from `.credvault.toml`.
///
/// Every field has a sensible default so CredVault works out-of-the-box
/// without any config file at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Directory (relative to the project root) where vault files live.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// File name of the credential vault inside `data_dir`.
    #[serde(default = "default_vault_file")]
    pub vault_file: String,

    /// File name of the symmetric key inside `data_dir`.
    #[serde(default = "default_key_file")]
    pub key_file: String,

    /// File name of the contact-email file inside `data_dir`.
    #[serde(default = "default_email_file")]
    pub email_file: String,

    /// Length of generated passwords when none is requested.
    #[serde(default = "default_password_length")]
    pub default_password_length: usize,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_data_dir() -> String {
    ".credvault".to_string()
}

fn default_vault_file() -> String {
    "vault.json".to_string()
}

fn default_key_file() -> String {
    "vault.key".to_string()
}

fn default_email_file() -> String {
    "contact.json".to_string()
}

fn default_password_length() -> usize {
    crate::crypto::DEFAULT_PASSWORD_LENGTH
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            vault_file: default_vault_file(),
            key_file: default_key_file(),
            email_file: default_email_file(),
            default_password_length: default_password_length(),
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the project root.
    const FILE_NAME: &'static str = ".credvault.toml";

    /// Load settings from `<project_dir>/.credvault.toml`.
    ///
    /// If the file does not exist, sensible defaults are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let config_path = project_dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            CredVaultError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        Ok(settings)
    }

    /// Full path to the vault file, e.g. `project_dir/.credvault/vault.json`.
    pub fn vault_path(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.data_dir).join(&self.vault_file)
    }

    /// Full path to the key file, e.g. `project_dir/.credvault/vault.key`.
    pub fn key_path(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.data_dir).join(&self.key_file)
    }

    /// Full path to the contact-email file.
    pub fn email_path(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.data_dir).join(&self.email_file)
    }
}

// ── Tests ────────────────────────────────────────────────────────────
