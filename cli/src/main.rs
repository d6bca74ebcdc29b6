#![allow(clippy::exit)]

mod cli;
mod commands;
mod output;
mod timing;
mod token_file;

use anyhow::Result;
use authwindow_business::BusinessConfig;
use clap::Parser as _;
use tracing::debug;

use crate::cli::{Cli, Commands};

/// `--api-url` (or `AUTHWINDOW_API_URL`, read by clap) wins over the
/// config environment.
fn business_config(api_url: Option<String>) -> BusinessConfig {
    match api_url {
        Some(url) if !url.trim().is_empty() => BusinessConfig::new(url),
        _ => BusinessConfig::from_env(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    timing::init_tracing(cli.verbose, cli.timing);

    let config = business_config(cli.api_url);
    debug!(api_base_url = %config.api_base_url, "Resolved configuration");

    match cli.command {
        Commands::Login { email } => commands::run_login(config, email).await,
        Commands::Register {
            username,
            email,
            no_confirm_field,
        } => commands::run_register(config, username, email, no_confirm_field).await,
        Commands::Logout => commands::run_logout(),
        Commands::Completions { shell } => {
            commands::generate_completions(shell);
            Ok(())
        }
    }
}
