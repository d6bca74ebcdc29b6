//! `authwindow login`.

use std::sync::Arc;

use anyhow::Result;
use authwindow_business::{BusinessConfig, Field, FormController};
use tracing::{debug, instrument};

use super::{prompt_password, report, text_or_prompt};
use crate::output::Output;
use crate::token_file::TokenFile;

#[instrument(skip_all, name = "login")]
pub async fn run_login(config: BusinessConfig, email: Option<String>) -> Result<()> {
    let out = Output::new();
    out.header("Sign in");
    out.newline();

    let email = text_or_prompt(email, "Email:", "The address you registered with")?;
    let password = prompt_password("Password:")?;

    let token_file = Arc::new(TokenFile::default_path()?);
    if token_file.load().ok().flatten().is_some() {
        out.info("Replacing the saved token");
    }
    let controller = FormController::new(config, token_file.clone());
    controller.set_field(Field::Email, email)?;
    controller.set_field(Field::Password, password)?;

    debug!("Submitting login form");
    let result = controller.submit().await;
    report(&out, &result, &token_file);
    Ok(())
}
