//! Request and response bodies exchanged with the auth service.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::form_config::PayloadKeys;
use crate::validation::{LoginCredentials, Registration};

pub fn login_body(creds: &LoginCredentials, keys: &PayloadKeys) -> Value {
    let mut body = Map::new();
    body.insert(keys.email.clone(), Value::from(creds.email.as_str()));
    body.insert(keys.password.clone(), Value::from(creds.password.as_str()));
    Value::Object(body)
}

pub fn register_body(registration: &Registration, keys: &PayloadKeys) -> Value {
    let mut body = Map::new();
    body.insert(
        keys.username.clone(),
        Value::from(registration.username.as_str()),
    );
    body.insert(keys.email.clone(), Value::from(registration.email.as_str()));
    body.insert(
        keys.password.clone(),
        Value::from(registration.password.as_str()),
    );
    if let Some(confirm_key) = &keys.confirm_password {
        body.insert(
            confirm_key.clone(),
            Value::from(registration.confirm_password.as_str()),
        );
    }
    Value::Object(body)
}

/// Body of a 2xx response.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
}

impl AuthResponse {
    /// Reads a success body. Besides `{message, token}`, a bare JSON string
    /// or plain text is taken as the message alone.
    pub fn parse(body: &[u8]) -> Option<Self> {
        match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(_)) => serde_json::from_slice(body).ok(),
            Ok(Value::String(message)) => Some(Self {
                message: Some(message),
                token: None,
            }),
            Ok(_) => None,
            Err(_) => {
                let text = std::str::from_utf8(body).ok()?.trim();
                (!text.is_empty()).then(|| Self {
                    message: Some(text.to_owned()),
                    token: None,
                })
            }
        }
    }
}
