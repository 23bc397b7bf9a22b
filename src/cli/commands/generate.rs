//! `credvault generate` — print a random password.

use crate::cli::{load_settings, Cli};
use crate::crypto::generate_password;
use crate::errors::Result;

/// Execute the `generate` command. The password goes to stdout bare so
/// it can be piped or captured.
pub fn execute(cli: &Cli, length: Option<usize>) -> Result<()> {
    let settings = load_settings(cli)?;
    let length = length.unwrap_or(settings.default_password_length);

    let password = generate_password(length)?;
    println!("{password}");

    Ok(())
}
