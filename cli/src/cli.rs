use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "authwindow")]
#[command(about = "Sign in or register against the auth service", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Base URL of the auth service
    #[arg(long, global = true, env = "AUTHWINDOW_API_URL")]
    pub api_url: Option<String>,

    /// Show timing/latency information
    #[arg(long, global = true)]
    pub timing: bool,

    /// Enable verbose debug output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sign in with email and password
    Login {
        /// Email address (prompted if omitted)
        #[arg(long, short = 'e')]
        email: Option<String>,
    },
    /// Create a new account
    Register {
        /// Display name (prompted if omitted)
        #[arg(long, short = 'u')]
        username: Option<String>,

        /// Email address (prompted if omitted)
        #[arg(long, short = 'e')]
        email: Option<String>,

        /// Leave the confirmation password out of the request
        #[arg(long)]
        no_confirm_field: bool,
    },
    /// Remove the saved token
    Logout,
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
