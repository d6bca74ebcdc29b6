//! Credential form logic for the auth window: field state, validation,
//! submission to the auth service and hand-off of the issued token.

mod config;
mod controller;
mod error_body;
mod form_config;
mod form_state;
pub mod http;
mod outcome;
mod payload;
mod sink;
mod validation;

pub use config::{BusinessConfig, DEFAULT_API_BASE_URL};
pub use controller::FormController;
pub use error_body::classify as classify_error_body;
pub use form_config::{EmailRule, ErrorShape, FormConfig, PayloadKeys, ValidationRules};
pub use form_state::{
    Field, FieldError, FormInput, LoginFields, MatchIndicator, Mode, RegisterFields,
};
pub use outcome::{Level, Notification, SubmitError, SubmitSuccess};
pub use payload::AuthResponse;
pub use sink::{CredentialSink, MemorySink, SinkError, TOKEN_KEY};
pub use validation::{
    LoginCredentials, Registration, ValidationError, is_valid_email, validate_login,
    validate_register,
};
