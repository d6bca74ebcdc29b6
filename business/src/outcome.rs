//! What a submission reduces to, and how it is announced.

use thiserror::Error;

use crate::form_state::Mode;
use crate::validation::ValidationError;

/// A request the auth service accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitSuccess {
    /// Mode the request was submitted in.
    pub mode: Mode,
    pub message: String,
    /// Whether a token came back and was written to the sink.
    pub token_stored: bool,
}

/// Why a submission did not succeed. None of these are retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// Caught locally; no request was made.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The service answered with an error it explained.
    #[error("{message}")]
    Request { status: u16, message: String },
    /// No usable explanation: unknown body shape, transport failure, or the
    /// token could not be stored. `message` is the generic fallback.
    #[error("{message}")]
    Unclassified { message: String, detail: String },
    /// Another submission is still waiting for its response.
    #[error("a request is already in flight")]
    Busy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Error,
}

/// A transient message for the notification area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: Level,
    pub text: String,
}

impl Notification {
    /// `None` for a submit ignored while busy; nothing is shown for those.
    pub fn from_result(result: &Result<SubmitSuccess, SubmitError>) -> Option<Self> {
        match result {
            Ok(success) => Some(Self {
                level: Level::Success,
                text: success.message.clone(),
            }),
            Err(SubmitError::Busy) => None,
            Err(err) => Some(Self {
                level: Level::Error,
                text: err.to_string(),
            }),
        }
    }
}
