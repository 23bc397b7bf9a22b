//! `credvault modify` — change the password of an existing credential.

use crate::cli::{load_settings, open_store, output, resolve_password, Cli};
use crate::errors::Result;
use crate::identity::ServiceIdentity;

/// Execute the `modify` command. Only the password changes; display
/// name, canonical URL, and email stay as they are.
pub fn execute(cli: &Cli, service: &str, password: Option<&str>) -> Result<()> {
    let settings = load_settings(cli)?;
    let store = open_store(cli, &settings)?;

    let identity = ServiceIdentity::parse(service)?;
    let password = resolve_password(
        password,
        &format!("New password for {}", identity.display_name),
    )?;

    store.update_password(service, &password)?;
    output::success(&format!(
        "Password updated for '{}'.",
        identity.display_name
    ));

    Ok(())
}
