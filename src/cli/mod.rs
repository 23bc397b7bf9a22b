//! CLI module — Clap argument parser, output helpers, and command
//! implementations.

pub mod commands;
pub mod output;

use std::path::{Path, PathBuf};

use clap::Parser;
use dialoguer::Password;

use crate::config::Settings;
use crate::crypto::VaultKey;
use crate::errors::{CredVaultError, Result};
use crate::vault::VaultStore;

/// CredVault CLI: encrypted credential vault for service passwords.
#[derive(Parser)]
#[command(
    name = "credvault",
    about = "Encrypted credential vault for service passwords",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Project directory holding the vault (default: current directory)
    #[arg(short, long, default_value = ".", global = true)]
    pub dir: PathBuf,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Initialize the vault: generate the key and an empty store
    Init,

    /// Generate a random password
    Generate {
        /// Password length (default: from config, normally 25)
        #[arg(short, long)]
        length: Option<usize>,
    },

    /// Save a credential for a service
    Save {
        /// Service URL or hostname (e.g. https://mail.example.com/login)
        service: String,
        /// Password (omit for interactive prompt)
        password: Option<String>,
        /// Account email for this service
        #[arg(short, long)]
        email: Option<String>,
    },

    /// Get a credential, password decrypted
    Get {
        /// Service URL or hostname
        service: String,
    },

    /// List all stored credentials
    List {
        /// Show decrypted passwords in the table
        #[arg(long)]
        show_passwords: bool,
    },

    /// Change the password of an existing credential
    Modify {
        /// Service URL or hostname
        service: String,
        /// New password (omit for interactive prompt)
        password: Option<String>,
    },

    /// Check whether a service is already registered
    Registered {
        /// Service URL or hostname
        service: String,
    },

    /// Show or change the contact email
    Email {
        #[command(subcommand)]
        action: EmailAction,
    },
}

#[derive(clap::Subcommand)]
pub enum EmailAction {
    /// Print the stored contact email
    Get,
    /// Replace the stored contact email
    Set {
        /// The new contact address
        address: String,
    },
}

/// Load settings for the project directory the CLI points at.
pub fn load_settings(cli: &Cli) -> Result<Settings> {
    Settings::load(&cli.dir)
}

/// Load the key and open the vault store. Fails with `KeyUnavailable`
/// until `credvault init` has run.
pub fn open_store(cli: &Cli, settings: &Settings) -> Result<VaultStore> {
    let key = VaultKey::load(&settings.key_path(&cli.dir))?;
    Ok(VaultStore::open(settings.vault_path(&cli.dir), key))
}

/// Prompt for a password interactively (with confirmation), used when a
/// command is invoked without one on the command line.
pub fn prompt_password(prompt: &str) -> Result<String> {
    let password = Password::new()
        .with_prompt(prompt)
        .with_confirmation("Confirm password", "Passwords do not match")
        .interact()
        .map_err(|_| CredVaultError::UserCancelled)?;

    if password.is_empty() {
        return Err(CredVaultError::InvalidInput(
            "password cannot be empty".into(),
        ));
    }

    Ok(password)
}

/// Resolve a password argument: use the provided value or prompt.
pub fn resolve_password(provided: Option<&str>, prompt: &str) -> Result<String> {
    match provided {
        Some(p) => Ok(p.to_string()),
        None => prompt_password(prompt),
    }
}

/// The path helpers most commands need together.
pub fn data_paths(cli: &Cli, settings: &Settings) -> (PathBuf, PathBuf, PathBuf) {
    let dir: &Path = &cli.dir;
    (
        settings.key_path(dir),
        settings.vault_path(dir),
        settings.email_path(dir),
    )
}
