//! Validation error types

use std::fmt;

/// Validation error for word payloads
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is missing or blank after trimming
    Empty { field: &'static str },

    /// Field exceeds maximum length
    TooLong { field: &'static str, max: usize },

    /// Value doesn't have the required shape (e.g., an id)
    InvalidFormat {
        field: &'static str,
        reason: &'static str,
    },
}

impl ValidationError {
    /// Name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Empty { field } | Self::TooLong { field, .. } | Self::InvalidFormat { field, .. } => {
                field
            }
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} is required", field),
            Self::TooLong { field, max } => {
                write!(f, "{} exceeds maximum length of {} characters", field, max)
            }
            Self::InvalidFormat { field, reason } => write!(f, "{}: {}", field, reason),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::TooLong {
            field: "word",
            max: 128,
        };
        assert_eq!(err.to_string(), "word exceeds maximum length of 128 characters");

        let err = ValidationError::Empty { field: "definition" };
        assert_eq!(err.to_string(), "definition is required");
    }

    #[test]
    fn reports_field() {
        let err = ValidationError::InvalidFormat {
            field: "id",
            reason: "invalid UUID format",
        };
        assert_eq!(err.field(), "id");
    }
}
