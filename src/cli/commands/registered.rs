//! `credvault registered` — check whether a service is already stored.

use crate::cli::{load_settings, open_store, output, Cli};
use crate::errors::Result;

/// Execute the `registered` command.
///
/// Matching goes through the canonical URL, so a full login-page URL
/// finds the credential saved from a bare hostname. Exit code is 0
/// either way — "not registered" is an answer, not an error.
pub fn execute(cli: &Cli, service: &str) -> Result<()> {
    let settings = load_settings(cli)?;
    let store = open_store(cli, &settings)?;

    match store.is_registered(service)? {
        Some(credential) => {
            output::success(&format!(
                "'{}' is registered as {}",
                credential.display_name, credential.canonical_url
            ));
            if let Some(email) = &credential.email {
                output::info(&format!("email: {email}"));
            }
        }
        None => {
            output::info("Not registered.");
        }
    }

    Ok(())
}
