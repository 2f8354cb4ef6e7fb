//! Error types for the Ladder core library.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised by the core types.
#[derive(Error, Debug, Clone)]
pub enum CoreError {
    /// A date string or component set could not be interpreted.
    #[error("Invalid date: {value}")]
    InvalidDate {
        /// The offending input.
        value: String,
    },

    /// A numeric field could not be parsed.
    #[error("Invalid number in field '{field}': {value}")]
    InvalidNumber {
        /// The field being parsed.
        field: String,
        /// The offending input.
        value: String,
    },
}

impl CoreError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(value: impl Into<String>) -> Self {
        Self::InvalidDate {
            value: value.into(),
        }
    }

    /// Creates an invalid number error.
    #[must_use]
    pub fn invalid_number(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidNumber {
            field: field.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::invalid_date("13/45/20xx");
        assert!(err.to_string().contains("13/45/20xx"));

        let err = CoreError::invalid_number("coupon", "abc");
        assert!(err.to_string().contains("coupon"));
        assert!(err.to_string().contains("abc"));
    }
}
