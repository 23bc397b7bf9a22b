//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so we get
//! consistent styling across every command.

use comfy_table::{ContentArrangement, Table};
use console::style;

use crate::vault::CredentialListing;

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    println!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a blue info message: "info_sign {msg}"
pub fn info(msg: &str) {
    println!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Print a dim tip/hint: "arrow {msg}"
pub fn tip(msg: &str) {
    println!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// Print a table of stored credentials.
///
/// Passwords are masked unless `show_passwords` is set; an entry whose
/// token failed to decrypt shows an error marker either way.
pub fn print_credentials_table(credentials: &[CredentialListing], show_passwords: bool) {
    if credentials.is_empty() {
        info("No credentials in this vault yet.");
        tip("Run `credvault save <service>` to add your first credential.");
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Service", "URL", "Email", "Password", "Updated"]);

    for c in credentials {
        let password = match (&c.password, show_passwords) {
            (None, _) => style("<decryption failed>").red().to_string(),
            (Some(p), true) => p.clone(),
            (Some(_), false) => "********".to_string(),
        };

        table.add_row(vec![
            c.display_name.clone(),
            c.canonical_url.clone(),
            c.email.clone().unwrap_or_default(),
            password,
            c.updated_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        ]);
    }

    println!("{table}");
}
