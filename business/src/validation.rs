//! Synchronous field validation run before any request is made.
//!
//! Rules short-circuit in a fixed order and the first failure is reported.
//! Username and email are trimmed; passwords are taken verbatim.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::form_config::{EmailRule, ValidationRules};
use crate::form_state::{LoginFields, RegisterFields};

static EMAIL_SHAPE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

/// A locally detected problem with the form input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name must be at least {min} characters.")]
    UsernameTooShort { min: usize },
    #[error("Incorrect email.")]
    InvalidEmail,
    #[error("Password must be at least {min} characters.")]
    PasswordTooShort { min: usize },
    #[error("Passwords do not match.")]
    PasswordMismatch,
}

/// Login input that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

/// Register input that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

pub fn is_valid_email(email: &str, rule: EmailRule) -> bool {
    match rule {
        EmailRule::Shape => EMAIL_SHAPE.as_ref().is_some_and(|re| re.is_match(email)),
        EmailRule::ContainsAt => email.contains('@'),
    }
}

fn check_password(password: &str, rules: &ValidationRules) -> Result<(), ValidationError> {
    if password.chars().count() < rules.min_password_chars {
        return Err(ValidationError::PasswordTooShort {
            min: rules.min_password_chars,
        });
    }
    Ok(())
}

pub fn validate_login(
    fields: &LoginFields,
    rules: &ValidationRules,
) -> Result<LoginCredentials, ValidationError> {
    let email = fields.email.trim();
    if !is_valid_email(email, rules.email) {
        return Err(ValidationError::InvalidEmail);
    }
    check_password(&fields.password, rules)?;

    Ok(LoginCredentials {
        email: email.to_owned(),
        password: fields.password.clone(),
    })
}

pub fn validate_register(
    fields: &RegisterFields,
    rules: &ValidationRules,
) -> Result<Registration, ValidationError> {
    let username = fields.username.trim();
    if username.chars().count() < rules.min_username_chars {
        return Err(ValidationError::UsernameTooShort {
            min: rules.min_username_chars,
        });
    }

    let email = fields.email.trim();
    if !is_valid_email(email, rules.email) {
        return Err(ValidationError::InvalidEmail);
    }

    check_password(&fields.password, rules)?;

    if fields.password != fields.confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }

    Ok(Registration {
        username: username.to_owned(),
        email: email.to_owned(),
        password: fields.password.clone(),
        confirm_password: fields.confirm_password.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn login(email: &str, password: &str) -> LoginFields {
        LoginFields {
            email: email.to_owned(),
            password: password.to_owned(),
        }
    }

    fn register(username: &str, email: &str, password: &str, confirm: &str) -> RegisterFields {
        RegisterFields {
            username: username.to_owned(),
            email: email.to_owned(),
            password: password.to_owned(),
            confirm_password: confirm.to_owned(),
        }
    }

    #[test]
    fn email_shape_accepts_basic_addresses() {
        for email in ["a@b.co", "user@domain.co.uk", "first.last@sub.example.org"] {
            assert!(is_valid_email(email, EmailRule::Shape), "{email} should pass");
        }
    }

    #[test]
    fn email_shape_rejects_malformed_addresses() {
        for email in [
            "",
            "plain",
            "@b.co",
            "a@",
            "a@b",
            "a@b.",
            "a@.co",
            "a@@b.co",
            "a@b@c.co",
            "a b@c.co",
            "a@b .co",
        ] {
            assert!(!is_valid_email(email, EmailRule::Shape), "{email} should fail");
        }
    }

    #[test]
    fn contains_at_rule_is_looser() {
        assert!(is_valid_email("a@b", EmailRule::ContainsAt));
        assert!(!is_valid_email("ab.co", EmailRule::ContainsAt));
    }

    #[test]
    fn login_trims_email_but_not_password() {
        let creds = validate_login(&login("  a@b.co \t", " secret1 "), &ValidationRules::default())
            .expect("valid login");
        assert_eq!(creds.email, "a@b.co");
        assert_eq!(creds.password, " secret1 ");
    }

    #[test]
    fn login_checks_email_before_password() {
        let err = validate_login(&login("nope", "x"), &ValidationRules::default())
            .expect_err("both fields invalid");
        assert_eq!(err, ValidationError::InvalidEmail);
    }

    #[test]
    fn password_length_boundary() {
        let rules = ValidationRules::default();
        assert_eq!(
            validate_login(&login("a@b.co", "12345"), &rules),
            Err(ValidationError::PasswordTooShort { min: 6 })
        );
        assert!(validate_login(&login("a@b.co", "123456"), &rules).is_ok());
    }

    #[test]
    fn password_length_counts_characters() {
        let rules = ValidationRules::default();
        // Six characters, more than six bytes.
        assert!(validate_login(&login("a@b.co", "пароль"), &rules).is_ok());
        assert!(validate_login(&login("a@b.co", "ключ"), &rules).is_err());
    }

    #[test]
    fn register_rejects_short_username_first() {
        let err = validate_register(&register("ab", "bad", "1", "2"), &ValidationRules::default())
            .expect_err("username too short");
        assert_eq!(err, ValidationError::UsernameTooShort { min: 3 });
        assert_eq!(err.to_string(), "Name must be at least 3 characters.");
    }

    #[test]
    fn register_username_length_is_measured_after_trim() {
        let err = validate_register(
            &register("  ab  ", "a@b.co", "abcdef", "abcdef"),
            &ValidationRules::default(),
        )
        .expect_err("trimmed username too short");
        assert_eq!(err, ValidationError::UsernameTooShort { min: 3 });
    }

    #[test]
    fn register_rule_order() {
        let rules = ValidationRules::default();
        assert_eq!(
            validate_register(&register("alice", "bad", "1", "2"), &rules),
            Err(ValidationError::InvalidEmail)
        );
        assert_eq!(
            validate_register(&register("alice", "a@b.co", "1", "2"), &rules),
            Err(ValidationError::PasswordTooShort { min: 6 })
        );
        assert_eq!(
            validate_register(&register("alice", "a@b.co", "abcdef", "abcdeg"), &rules),
            Err(ValidationError::PasswordMismatch)
        );
    }

    #[test]
    fn register_mismatch_is_case_sensitive() {
        let err = validate_register(
            &register("alice", "a@b.co", "Abcdef", "abcdef"),
            &ValidationRules::default(),
        )
        .expect_err("case differs");
        assert_eq!(err, ValidationError::PasswordMismatch);
        assert_eq!(err.to_string(), "Passwords do not match.");
    }

    #[test]
    fn register_success_trims_username_and_email() {
        let registration = validate_register(
            &register(" alice ", " a@b.co ", "abcdef", "abcdef"),
            &ValidationRules::default(),
        )
        .expect("valid registration");
        assert_eq!(
            registration,
            Registration {
                username: "alice".to_owned(),
                email: "a@b.co".to_owned(),
                password: "abcdef".to_owned(),
                confirm_password: "abcdef".to_owned(),
            }
        );
    }

    #[test]
    fn custom_minimums_show_in_messages() {
        let rules = ValidationRules {
            min_username_chars: 5,
            min_password_chars: 10,
            email: EmailRule::ContainsAt,
        };
        let err = validate_register(&register("alice", "a@b", "short", "short"), &rules)
            .expect_err("password shorter than 10");
        assert_eq!(err.to_string(), "Password must be at least 10 characters.");
    }
}
