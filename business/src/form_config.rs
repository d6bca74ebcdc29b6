//! Knobs that used to drift between copies of the form.
//!
//! A single [`FormConfig`] describes which validation rules apply per mode,
//! which JSON keys the request payload uses, and the order in which an error
//! response body is inspected.

/// How strictly an email address is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmailRule {
    /// `local@domain.tld`: no whitespace, exactly one `@`, a dot after it.
    #[default]
    Shape,
    /// Only requires an `@` somewhere in the value.
    ContainsAt,
}

/// Rule set applied by the validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationRules {
    /// Minimum length of the trimmed username (register only).
    pub min_username_chars: usize,
    /// Minimum password length, both modes.
    pub min_password_chars: usize,
    pub email: EmailRule,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            min_username_chars: 3,
            min_password_chars: 6,
            email: EmailRule::Shape,
        }
    }
}

/// JSON key names of the request payloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayloadKeys {
    pub username: String,
    pub email: String,
    pub password: String,
    /// Key for the confirmation password on register. `None` leaves it out.
    pub confirm_password: Option<String>,
}

impl PayloadKeys {
    /// Register payload without the confirmation field.
    pub fn without_confirmation() -> Self {
        Self {
            confirm_password: None,
            ..Self::default()
        }
    }
}

impl Default for PayloadKeys {
    fn default() -> Self {
        Self {
            username: "username".to_owned(),
            email: "email".to_owned(),
            password: "password".to_owned(),
            confirm_password: Some("confirm_password".to_owned()),
        }
    }
}

/// A recognised error response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorShape {
    /// `{"errors": {"field": detail, ...}}`
    FieldErrors,
    /// `{"error": "message"}`
    ErrorString,
    /// A non-empty body that is plain text or a bare JSON string.
    PlainText,
}

/// Everything that varies between form variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormConfig {
    pub login_rules: ValidationRules,
    pub register_rules: ValidationRules,
    pub payload_keys: PayloadKeys,
    /// Shapes tried in order; the first match supplies the message.
    pub error_shapes: Vec<ErrorShape>,
    /// Shown when no shape matches or the request never got a response.
    pub fallback_message: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            login_rules: ValidationRules::default(),
            register_rules: ValidationRules::default(),
            payload_keys: PayloadKeys::default(),
            error_shapes: vec![
                ErrorShape::FieldErrors,
                ErrorShape::ErrorString,
                ErrorShape::PlainText,
            ],
            fallback_message: "Something went wrong.".to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rules_match_form_minimums() {
        let rules = ValidationRules::default();
        assert_eq!(rules.min_username_chars, 3);
        assert_eq!(rules.min_password_chars, 6);
        assert_eq!(rules.email, EmailRule::Shape);
    }

    #[test]
    fn default_payload_sends_confirmation() {
        let keys = PayloadKeys::default();
        assert_eq!(keys.confirm_password.as_deref(), Some("confirm_password"));
    }

    #[test]
    fn legacy_payload_drops_confirmation_only() {
        let keys = PayloadKeys::without_confirmation();
        assert!(keys.confirm_password.is_none());
        assert_eq!(keys.username, "username");
        assert_eq!(keys.email, "email");
        assert_eq!(keys.password, "password");
    }

    #[test]
    fn field_errors_are_checked_first() {
        let config = FormConfig::default();
        assert_eq!(config.error_shapes.first(), Some(&ErrorShape::FieldErrors));
        assert_eq!(config.fallback_message, "Something went wrong.");
    }
}
