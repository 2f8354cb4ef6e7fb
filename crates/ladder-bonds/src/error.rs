//! Error types for bond parsing and schedule construction.

use thiserror::Error;

/// A specialized Result type for bond operations.
pub type BondResult<T> = Result<T, BondError>;

/// Errors that can occur while parsing market records or building schedules.
#[derive(Error, Debug, Clone)]
pub enum BondError {
    /// The raw record had no fields at all.
    #[error("Record is empty")]
    EmptyRecord,

    /// A required field was absent from the record.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The missing field name.
        field: String,
    },

    /// A field was present but could not be parsed.
    #[error("Invalid field '{field}': {value}")]
    InvalidField {
        /// The field being parsed.
        field: String,
        /// The offending input.
        value: String,
    },

    /// The maturity year falls outside the schedule horizon.
    #[error("Maturity year {year} outside horizon {base_year}..={base_year}+{horizon_years}")]
    MaturityOutOfRange {
        /// The maturity year.
        year: i32,
        /// First year of the horizon.
        base_year: i32,
        /// Number of years the horizon covers.
        horizon_years: usize,
    },

    /// Core library error.
    #[error("Core error: {0}")]
    Core(#[from] ladder_core::CoreError),
}

impl BondError {
    /// Creates a missing field error.
    #[must_use]
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Creates an invalid field error.
    #[must_use]
    pub fn invalid_field(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.into(),
            value: value.into(),
        }
    }
}
