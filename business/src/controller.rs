//! The credential form controller.
//!
//! Owns the form input, validates it on [`FormController::submit`], sends one
//! request to the auth service and reduces the reply to a
//! [`SubmitSuccess`] or [`SubmitError`].
//!
//! ## Flow
//!
//! 1. Rejects the call with [`SubmitError::Busy`] if a request is in flight
//! 2. Validates the active field set; the first failing rule aborts
//! 3. Marks the controller in flight and POSTs to `/login` or `/register`
//! 4. On 2xx, hands the token to the [`CredentialSink`], clears the
//!    submitted fields and, after a registration, switches back to login
//! 5. Otherwise classifies the error body into a user-facing message
//!
//! The in-flight flag is released when the request settles, including when
//! the submit future is dropped early.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::{debug, error, info, warn};
use serde_json::Value;

use crate::config::BusinessConfig;
use crate::error_body;
use crate::form_config::FormConfig;
use crate::form_state::{Field, FieldError, FormInput, MatchIndicator, Mode};
use crate::http::{Client, Response};
use crate::outcome::{SubmitError, SubmitSuccess};
use crate::payload::{AuthResponse, login_body, register_body};
use crate::sink::CredentialSink;
use crate::validation::{ValidationError, validate_login, validate_register};

/// Holds the in-flight flag for the lifetime of one request.
struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

#[derive(Debug)]
pub struct FormController {
    config: BusinessConfig,
    form: FormConfig,
    client: Client,
    sink: Arc<dyn CredentialSink>,
    input: Mutex<FormInput>,
    in_flight: AtomicBool,
}

impl FormController {
    pub fn new(config: BusinessConfig, sink: Arc<dyn CredentialSink>) -> Self {
        Self {
            config,
            form: FormConfig::default(),
            client: Client::new(),
            sink,
            input: Mutex::new(FormInput::default()),
            in_flight: AtomicBool::new(false),
        }
    }

    /// Replaces the default rules, payload keys and error handling.
    pub fn with_form_config(mut self, form: FormConfig) -> Self {
        self.form = form;
        self
    }

    fn lock_input(&self) -> MutexGuard<'_, FormInput> {
        self.input.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn mode(&self) -> Mode {
        self.lock_input().mode
    }

    /// Switches the active field set. The other set keeps its values.
    pub fn set_mode(&self, mode: Mode) {
        debug!("FormController: switching to {mode} mode");
        self.lock_input().mode = mode;
    }

    pub fn set_field(&self, field: Field, value: impl Into<String>) -> Result<(), FieldError> {
        self.lock_input().set_field(field, value)
    }

    /// Snapshot of both field sets and the mode.
    pub fn input(&self) -> FormInput {
        self.lock_input().clone()
    }

    /// Password/confirmation indicator; `None` in login mode.
    pub fn match_indicator(&self) -> Option<MatchIndicator> {
        self.lock_input().match_indicator()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Validates the active fields and, if they pass, sends one request.
    pub async fn submit(&self) -> Result<SubmitSuccess, SubmitError> {
        if self.is_in_flight() {
            warn!("FormController: submit ignored, a request is already in flight");
            return Err(SubmitError::Busy);
        }

        let (mode, body) = self.validated_body().inspect_err(|e| {
            info!("FormController: validation failed: {e}");
        })?;

        let Some(_in_flight) = InFlight::acquire(&self.in_flight) else {
            warn!("FormController: submit ignored, a request is already in flight");
            return Err(SubmitError::Busy);
        };

        let url = self.config.api_url(mode.endpoint());
        info!("FormController: sending {mode} request to {url}");

        let response = self
            .client
            .post(&url)
            .header("accept", "application/json")
            .json(&body)
            .map_err(|e| self.unclassified(e.to_string()))?
            .send()
            .await
            .map_err(|e| {
                error!("FormController: {mode} request failed: {e}");
                self.unclassified(e.to_string())
            })?;

        debug!(
            "FormController: {mode} response status {} content-type {:?}",
            response.status,
            response.header("content-type")
        );

        if response.is_success() {
            self.on_success(mode, &response)
        } else {
            Err(self.on_failure(mode, &response))
        }
    }

    fn validated_body(&self) -> Result<(Mode, Value), ValidationError> {
        let input = self.lock_input();
        let keys = &self.form.payload_keys;
        let body = match input.mode {
            Mode::Login => {
                let creds = validate_login(&input.login, &self.form.login_rules)?;
                login_body(&creds, keys)
            }
            Mode::Register => {
                let registration = validate_register(&input.register, &self.form.register_rules)?;
                register_body(&registration, keys)
            }
        };
        Ok((input.mode, body))
    }

    fn on_success(&self, mode: Mode, response: &Response) -> Result<SubmitSuccess, SubmitError> {
        let reply = AuthResponse::parse(&response.body).unwrap_or_else(|| {
            warn!("FormController: {mode} succeeded with an unrecognised body");
            AuthResponse::default()
        });

        let token_stored = match reply.token.as_deref() {
            Some(token) => {
                self.sink.store_token(token).map_err(|e| {
                    error!("FormController: {e}");
                    self.unclassified(e.to_string())
                })?;
                true
            }
            None => {
                warn!("FormController: {mode} response carried no token");
                false
            }
        };

        {
            let mut input = self.lock_input();
            input.clear(mode);
            if mode == Mode::Register {
                input.mode = Mode::Login;
            }
        }

        let message = reply
            .message
            .unwrap_or_else(|| default_success_message(mode).to_owned());
        info!("FormController: {mode} succeeded");

        Ok(SubmitSuccess {
            mode,
            message,
            token_stored,
        })
    }

    fn on_failure(&self, mode: Mode, response: &Response) -> SubmitError {
        match error_body::classify(&response.body, &self.form.error_shapes) {
            Some(message) => {
                info!(
                    "FormController: {mode} rejected with status {}: {message}",
                    response.status
                );
                SubmitError::Request {
                    status: response.status,
                    message,
                }
            }
            None => {
                warn!(
                    "FormController: {mode} failed with status {} and an unrecognised body",
                    response.status
                );
                self.unclassified(format!(
                    "unrecognised error body (status {})",
                    response.status
                ))
            }
        }
    }

    fn unclassified(&self, detail: String) -> SubmitError {
        SubmitError::Unclassified {
            message: self.form.fallback_message.clone(),
            detail,
        }
    }
}

fn default_success_message(mode: Mode) -> &'static str {
    match mode {
        Mode::Login => "Logged in.",
        Mode::Register => "Registered.",
    }
}
