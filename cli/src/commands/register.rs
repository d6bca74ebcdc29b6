//! `authwindow register`.

use std::sync::Arc;

use anyhow::Result;
use authwindow_business::{
    BusinessConfig, Field, FormConfig, FormController, Mode, PayloadKeys,
};
use tracing::{debug, instrument};

use super::{prompt_password, report, text_or_prompt};
use crate::output::Output;
use crate::token_file::TokenFile;

#[instrument(skip_all, name = "register")]
pub async fn run_register(
    config: BusinessConfig,
    username: Option<String>,
    email: Option<String>,
    no_confirm_field: bool,
) -> Result<()> {
    let out = Output::new();
    out.header("Create an account");
    out.newline();

    let token_file = Arc::new(TokenFile::default_path()?);
    let mut form = FormConfig::default();
    if no_confirm_field {
        form.payload_keys = PayloadKeys::without_confirmation();
    }
    let controller = FormController::new(config, token_file.clone()).with_form_config(form);
    controller.set_mode(Mode::Register);

    let username = text_or_prompt(username, "Username:", "Shown to other users")?;
    controller.set_field(Field::Username, username)?;
    let email = text_or_prompt(email, "Email:", "Used to sign in")?;
    controller.set_field(Field::Email, email)?;
    controller.set_field(Field::Password, prompt_password("Password:")?)?;
    controller.set_field(Field::ConfirmPassword, prompt_password("Confirm password:")?)?;

    if let Some(indicator) = controller.match_indicator() {
        out.match_indicator(indicator);
    }

    debug!(no_confirm_field, "Submitting registration form");
    let result = controller.submit().await;
    report(&out, &result, &token_file);
    Ok(())
}
