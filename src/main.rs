use clap::Parser;
use credvault::cli::{Cli, Commands, EmailAction};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init => credvault::cli::commands::init::execute(&cli),
        Commands::Generate { length } => credvault::cli::commands::generate::execute(&cli, length),
        Commands::Save {
            ref service,
            ref password,
            ref email,
        } => credvault::cli::commands::save::execute(
            &cli,
            service,
            password.as_deref(),
            email.as_deref(),
        ),
        Commands::Get { ref service } => credvault::cli::commands::get::execute(&cli, service),
        Commands::List { show_passwords } => {
            credvault::cli::commands::list::execute(&cli, show_passwords)
        }
        Commands::Modify {
            ref service,
            ref password,
        } => credvault::cli::commands::modify::execute(&cli, service, password.as_deref()),
        Commands::Registered { ref service } => {
            credvault::cli::commands::registered::execute(&cli, service)
        }
        Commands::Email { ref action } => match action {
            EmailAction::Get => credvault::cli::commands::email::execute_get(&cli),
            EmailAction::Set { ref address } => {
                credvault::cli::commands::email::execute_set(&cli, address)
            }
        },
    };

    if let Err(e) = result {
        credvault::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
