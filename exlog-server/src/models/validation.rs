//! Validation error types

use std::fmt;

/// Validation error for request input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required field was not supplied
    Missing { field: &'static str },

    /// Field is empty (or only whitespace) when it shouldn't be
    Empty { field: &'static str },

    /// Field exceeds maximum length
    TooLong { field: &'static str, max: usize },

    /// Value doesn't match the required format
    InvalidFormat { field: &'static str, reason: &'static str },

    /// Value could not be parsed as a calendar date
    InvalidDate { field: &'static str, value: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "{} is required", field),
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::TooLong { field, max } => {
                write!(f, "{} exceeds maximum length of {} characters", field, max)
            }
            Self::InvalidFormat { field, reason } => {
                write!(f, "{}: {}", field, reason)
            }
            Self::InvalidDate { field, value } => {
                write!(f, "invalid {} value: '{}' is not a recognised date", field, value)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Check a required free-text field: present, not blank, and within `max` characters.
pub(crate) fn required_text(
    field: &'static str,
    value: Option<&str>,
    max: usize,
) -> Result<String, ValidationError> {
    let value = value.ok_or(ValidationError::Missing { field })?;

    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }

    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }

    Ok(value.to_owned())
}
