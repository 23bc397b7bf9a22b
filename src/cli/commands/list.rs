//! `credvault list` — print a table of all stored credentials.

use crate::cli::{load_settings, open_store, output, Cli};
use crate::errors::Result;

/// Execute the `list` command.
pub fn execute(cli: &Cli, show_passwords: bool) -> Result<()> {
    let settings = load_settings(cli)?;
    let store = open_store(cli, &settings)?;

    let credentials = store.list_credentials()?;

    let failed = credentials.iter().filter(|c| c.password.is_none()).count();
    if failed > 0 {
        output::warning(&format!(
            "{failed} credential(s) could not be decrypted — was the key file replaced?"
        ));
    }

    output::print_credentials_table(&credentials, show_passwords);

    Ok(())
}
