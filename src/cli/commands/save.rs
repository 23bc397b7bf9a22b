//! `credvault save` — store a credential for a service.

use dialoguer::Confirm;

use crate::cli::{load_settings, open_store, output, resolve_password, Cli};
use crate::errors::{CredVaultError, Result};
use crate::identity::ServiceIdentity;

/// Execute the `save` command.
pub fn execute(cli: &Cli, service: &str, password: Option<&str>, email: Option<&str>) -> Result<()> {
    let settings = load_settings(cli)?;
    let store = open_store(cli, &settings)?;

    // Warn-and-confirm before overwriting an existing credential, but
    // only when we are interactive anyway (no password on the command
    // line). Scripted callers overwrite without a prompt.
    let identity = ServiceIdentity::parse(service)?;
    if password.is_none() && store.contains(identity.service_key())? {
        output::warning(&format!(
            "A credential for '{}' already exists and will be replaced.",
            identity.display_name
        ));
        let proceed = Confirm::new()
            .with_prompt("Replace it?")
            .default(false)
            .interact()
            .map_err(|_| CredVaultError::UserCancelled)?;
        if !proceed {
            return Err(CredVaultError::UserCancelled);
        }
    }

    let password = resolve_password(password, &format!("Password for {}", identity.display_name))?;
    let saved = store.save_credential(service, &password, email)?;

    output::success(&format!("Credential saved for '{}'.", saved.display_name));
    output::tip(&format!("Stored under {}", saved.canonical_url));

    Ok(())
}
