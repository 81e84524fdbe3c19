// SPDX-FileCopyrightText: 2026 NOVA Systems Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! NOVA - sales assistant bot for Telegram.
//!
//! This is the binary entry point.

mod check;
mod serve;
mod status;

use clap::{Parser, Subcommand};

/// NOVA - sales assistant bot for Telegram.
#[derive(Parser, Debug)]
#[command(name = "nova", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the bot (default).
    Serve,
    /// Show pending messages and orders from the data files.
    Status {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
        /// Disable colors.
        #[arg(long)]
        plain: bool,
    },
    /// Validate the configuration and print a summary.
    CheckConfig,
}

#[tokio::main]
async fn main() {
    // Deployments keep TOKEN, ADMIN_ID etc. in a .env next to the binary.
    if let Err(e) = dotenvy::dotenv()
        && !e.not_found()
    {
        eprintln!("nova: failed to read .env: {e}");
    }

    let cli = Cli::parse();

    let config = match nova_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            nova_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    let result = match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve::run_serve(config).await,
        Commands::Status { json, plain } => status::run_status(&config, json, plain),
        Commands::CheckConfig => {
            check::print_summary(&config);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_serve() {
        let cli = Cli::try_parse_from(["nova"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn status_flags_parse() {
        let cli = Cli::try_parse_from(["nova", "status", "--json"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Status {
                json: true,
                plain: false
            })
        ));
        let cli = Cli::try_parse_from(["nova", "check-config"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::CheckConfig)));
    }
}
