//! `credvault init` — generate the vault key and an empty store.

use crate::cli::{data_paths, load_settings, open_store, output, Cli};
use crate::crypto::generate_key_if_absent;
use crate::errors::Result;

/// Execute the `init` command. Safe to run repeatedly — an existing key
/// and vault are left untouched.
pub fn execute(cli: &Cli) -> Result<()> {
    let settings = load_settings(cli)?;
    let (key_path, vault_path, _) = data_paths(cli, &settings);

    if generate_key_if_absent(&key_path)? {
        output::success(&format!("Generated vault key at {}", key_path.display()));
        output::warning("Back up the key file — losing it makes every stored password unreadable.");
    } else {
        output::info("Existing vault key found, keeping it.");
    }

    let store = open_store(cli, &settings)?;
    store.ensure_initialized()?;
    output::success(&format!("Vault ready at {}", vault_path.display()));

    Ok(())
}
