//! Subcommand implementations.

mod completions;
mod login;
mod logout;
mod register;

pub use completions::generate_completions;
pub use login::run_login;
pub use logout::run_logout;
pub use register::run_register;

use anyhow::{Context as _, Result};
use authwindow_business::{Notification, SubmitError, SubmitSuccess};
use inquire::{Password, PasswordDisplayMode, Text};
use tracing::{error, info};

use crate::output::Output;
use crate::token_file::TokenFile;

/// Uses `preset` when given, otherwise asks.
fn text_or_prompt(preset: Option<String>, label: &str, help: &str) -> Result<String> {
    match preset {
        Some(value) => Ok(value),
        None => Text::new(label)
            .with_help_message(help)
            .prompt()
            .with_context(|| format!("Failed to read {}", label.trim_end_matches(':'))),
    }
}

fn prompt_password(label: &str) -> Result<String> {
    Password::new(label)
        .without_confirmation()
        .with_display_mode(PasswordDisplayMode::Masked)
        .prompt()
        .with_context(|| format!("Failed to read {}", label.trim_end_matches(':')))
}

/// Prints the outcome of a submit and exits non-zero on failure.
fn report(out: &Output, result: &Result<SubmitSuccess, SubmitError>, token_file: &TokenFile) {
    out.newline();
    if let Some(notification) = Notification::from_result(result) {
        out.notification(&notification);
    }

    match result {
        Ok(success) => {
            info!(mode = %success.mode, "Submit succeeded");
            if success.token_stored {
                out.dim(format!("Token saved to {}", token_file.path().display()));
            } else {
                out.warning("The server did not return a token");
            }
        }
        Err(err) => {
            if let SubmitError::Unclassified { detail, .. } = err {
                error!("Submit failed: {detail}");
            } else {
                error!("Submit failed: {err}");
            }
            std::process::exit(1);
        }
    }
}
