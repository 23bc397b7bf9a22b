//! `credvault get` — retrieve and print a single credential.

use crate::cli::{load_settings, open_store, output, Cli};
use crate::errors::Result;

/// Execute the `get` command. The decrypted password goes to stdout
/// bare so it can be piped; everything else goes through the styled
/// helpers on stderr-adjacent lines.
pub fn execute(cli: &Cli, service: &str) -> Result<()> {
    let settings = load_settings(cli)?;
    let store = open_store(cli, &settings)?;

    let credential = store.get_credential(service)?;

    output::info(&format!(
        "{} ({})",
        credential.display_name, credential.canonical_url
    ));
    if let Some(email) = &credential.email {
        output::info(&format!("email: {email}"));
    }
    println!("{}", credential.password);

    Ok(())
}
