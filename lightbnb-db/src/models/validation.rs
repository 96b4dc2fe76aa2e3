//! Validation error types

use std::fmt;

/// Validation error for inputs, raised before any SQL is sent
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Field exceeds maximum length
    TooLong { field: &'static str, max: usize },

    /// String doesn't match required format (e.g., email)
    InvalidFormat { field: &'static str, reason: &'static str },

    /// Numeric value outside its accepted range
    OutOfRange { field: &'static str, reason: String },

    /// Lower bound greater than upper bound
    InvalidRange { lower: &'static str, upper: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::TooLong { field, max } => {
                write!(f, "{} exceeds maximum length of {} characters", field, max)
            }
            Self::InvalidFormat { field, reason } => {
                write!(f, "{}: {}", field, reason)
            }
            Self::OutOfRange { field, reason } => {
                write!(f, "{} out of range: {}", field, reason)
            }
            Self::InvalidRange { lower, upper } => {
                write!(f, "{} must not be greater than {}", lower, upper)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Reject empty (after trim) and over-long text fields.
pub(crate) fn require_text(
    field: &'static str,
    value: &str,
    max: usize,
) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }
    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(())
}

/// Reject negative integer fields.
pub(crate) fn require_non_negative(field: &'static str, value: i32) -> Result<(), ValidationError> {
    if value < 0 {
        return Err(ValidationError::OutOfRange {
            field,
            reason: format!("{} is negative", value),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::TooLong {
            field: "title",
            max: 255,
        };
        assert_eq!(
            err.to_string(),
            "title exceeds maximum length of 255 characters"
        );

        let err = ValidationError::InvalidRange {
            lower: "minimum_price_per_night",
            upper: "maximum_price_per_night",
        };
        assert_eq!(
            err.to_string(),
            "minimum_price_per_night must not be greater than maximum_price_per_night"
        );
    }

    #[test]
    fn require_text_rules() {
        assert!(require_text("name", "Ada", 10).is_ok());
        assert_eq!(
            require_text("name", "   ", 10),
            Err(ValidationError::Empty { field: "name" })
        );
        assert_eq!(
            require_text("name", "abcdefghijk", 10),
            Err(ValidationError::TooLong { field: "name", max: 10 })
        );
    }

    #[test]
    fn require_non_negative_rules() {
        assert!(require_non_negative("parking_spaces", 0).is_ok());
        assert!(matches!(
            require_non_negative("parking_spaces", -1),
            Err(ValidationError::OutOfRange { field: "parking_spaces", .. })
        ));
    }
}
