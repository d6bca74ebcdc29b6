//! Field state of the credential form.
//!
//! The form holds two field sets, one per [`Mode`]. Only the set selected by
//! the current mode is edited, validated and submitted; switching modes
//! leaves the other set untouched.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Which half of the form is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Login,
    Register,
}

impl Mode {
    /// Endpoint path the mode submits to.
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Register => "/register",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Login => write!(f, "login"),
            Self::Register => write!(f, "register"),
        }
    }
}

/// Name of an editable input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Username,
    Email,
    Password,
    ConfirmPassword,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Email => "email",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "username" => Ok(Self::Username),
            "email" => Ok(Self::Email),
            "password" => Ok(Self::Password),
            "confirmPassword" | "confirm_password" => Ok(Self::ConfirmPassword),
            other => Err(FieldError::Unknown(other.to_owned())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("unknown field: {0}")]
    Unknown(String),
    #[error("field {field} is not part of the {mode} form")]
    NotInMode { field: Field, mode: Mode },
}

/// Inputs of the login form.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct LoginFields {
    pub email: String,
    pub password: String,
}

impl LoginFields {
    fn slot_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::Email => Some(&mut self.email),
            Field::Password => Some(&mut self.password),
            Field::Username | Field::ConfirmPassword => None,
        }
    }
}

/// Inputs of the registration form.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct RegisterFields {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterFields {
    fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Username => &mut self.username,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::ConfirmPassword => &mut self.confirm_password,
        }
    }

    /// Live indicator shown under the confirmation input.
    pub fn match_indicator(&self) -> MatchIndicator {
        if self.confirm_password.is_empty() {
            MatchIndicator::Hidden
        } else if self.password == self.confirm_password {
            MatchIndicator::Match
        } else {
            MatchIndicator::Mismatch
        }
    }
}

/// Cosmetic password/confirmation comparison, recomputed on every edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchIndicator {
    /// Nothing typed into the confirmation input yet.
    Hidden,
    Match,
    Mismatch,
}

impl MatchIndicator {
    /// Text rendered next to the confirmation input, if any.
    pub fn label(self) -> Option<&'static str> {
        match self {
            Self::Hidden => None,
            Self::Match => Some("Passwords match ✅"),
            Self::Mismatch => Some("Passwords do not match ❌"),
        }
    }
}

/// Both field sets plus the active mode.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct FormInput {
    pub mode: Mode,
    pub login: LoginFields,
    pub register: RegisterFields,
}

impl FormInput {
    /// Writes `value` into the active set.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> Result<(), FieldError> {
        let slot = match self.mode {
            Mode::Login => self.login.slot_mut(field).ok_or(FieldError::NotInMode {
                field,
                mode: Mode::Login,
            })?,
            Mode::Register => self.register.slot_mut(field),
        };
        *slot = value.into();
        Ok(())
    }

    /// Empties the field set belonging to `mode`.
    pub fn clear(&mut self, mode: Mode) {
        match mode {
            Mode::Login => self.login = LoginFields::default(),
            Mode::Register => self.register = RegisterFields::default(),
        }
    }

    /// `None` outside register mode.
    pub fn match_indicator(&self) -> Option<MatchIndicator> {
        match self.mode {
            Mode::Login => None,
            Mode::Register => Some(self.register.match_indicator()),
        }
    }
}
