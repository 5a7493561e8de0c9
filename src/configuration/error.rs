use std::fmt::{self, Display, Formatter};
use std::sync::Arc;

use miette::Diagnostic;
use thiserror::Error;


/// A reserved picker option was given an explicit value.
///
/// Reserved options are owned by the widget and can never be set
/// from configuration, not even to the value the widget would pick itself.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
#[error("Option {field} is reserved and {reason}")]
#[diagnostic(
    code(flatpickr_settings::reserved_option),
    help("Remove `{field}` from the options table.")
)]
pub struct ReservedFieldError {
    pub field: String,
    pub reason: &'static str,
}


/// The constraint a value failed to satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// The value was not of the expected type.
    Type { expected: &'static str },

    /// The value was an integer outside the inclusive range `min..=max`.
    Range { min: i64, max: i64 },
}

impl Display for Constraint {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::Type { expected } => write!(f, "expected {expected}"),
            Constraint::Range { min, max } => {
                write!(f, "expected an integer between {min} and {max} (inclusive)")
            }
        }
    }
}


/// A setting or an open picker option failed its type or range check.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
#[error("Invalid value for {field}: {constraint}, got {received}.")]
#[diagnostic(code(flatpickr_settings::constraint_violation))]
pub struct ConstraintViolationError {
    pub field: String,

    /// The received value, rendered as TOML.
    pub received: String,

    pub constraint: Constraint,
}

impl ConstraintViolationError {
    pub(crate) fn wrong_type<F, R>(field: F, received: R, expected: &'static str) -> Self
    where
        F: Into<String>,
        R: Display,
    {
        Self {
            field: field.into(),
            received: received.to_string(),
            constraint: Constraint::Type { expected },
        }
    }

    pub(crate) fn out_of_range<F>(field: F, received: i64, min: i64, max: i64) -> Self
    where
        F: Into<String>,
    {
        Self {
            field: field.into(),
            received: received.to_string(),
            constraint: Constraint::Range { min, max },
        }
    }

    pub fn is_out_of_range(&self) -> bool {
        matches!(self.constraint, Constraint::Range { .. })
    }
}


/// Everything that can go wrong while building [`FlatpickrSettings`][crate::configuration::FlatpickrSettings]
/// or the configuration handed to the picker.
#[derive(Error, Diagnostic, Debug, Clone)]
pub enum SettingsError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    ReservedField(#[from] ReservedFieldError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    ConstraintViolation(#[from] ConstraintViolationError),

    #[error("Failed to serialize picker configuration.")]
    Serialization(#[source] Arc<serde_json::Error>),
}

impl From<serde_json::Error> for SettingsError {
    fn from(error: serde_json::Error) -> Self {
        SettingsError::Serialization(Arc::new(error))
    }
}

impl SettingsError {
    /// Name of the setting or option this error is about, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            SettingsError::ReservedField(error) => Some(&error.field),
            SettingsError::ConstraintViolation(error) => Some(&error.field),
            SettingsError::Serialization(_) => None,
        }
    }
}
