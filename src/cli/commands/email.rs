//! `credvault email` — show or change the stored contact email.

use crate::cli::{data_paths, load_settings, output, Cli};
use crate::errors::Result;
use crate::vault::contact::{load_contact_email, store_contact_email};

/// Execute `email get`.
pub fn execute_get(cli: &Cli) -> Result<()> {
    let settings = load_settings(cli)?;
    let (_, _, email_path) = data_paths(cli, &settings);

    match load_contact_email(&email_path)? {
        Some(email) => println!("{email}"),
        None => output::info("No contact email stored yet."),
    }

    Ok(())
}

/// Execute `email set`.
pub fn execute_set(cli: &Cli, address: &str) -> Result<()> {
    let settings = load_settings(cli)?;
    let (_, _, email_path) = data_paths(cli, &settings);

    store_contact_email(&email_path, address)?;
    output::success("Contact email updated.");

    Ok(())
}
