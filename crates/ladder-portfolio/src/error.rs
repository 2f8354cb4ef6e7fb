//! Error types for portfolio operations.

use thiserror::Error;

/// A specialized Result type for portfolio operations.
pub type PortfolioResult<T> = Result<T, PortfolioError>;

/// Errors that can occur while mutating a portfolio.
///
/// All of these are reported-and-ignored by callers: the offending
/// operation is a no-op and the portfolio stays consistent.
#[derive(Error, Debug, Clone)]
pub enum PortfolioError {
    /// No item with the given cusip is held.
    #[error("No portfolio item with cusip {cusip}")]
    ItemNotFound {
        /// The cusip that was looked up.
        cusip: String,
    },

    /// A decrease would take the quantity below zero.
    #[error("Cannot decrease {cusip} by {requested}: only {quantity} held")]
    QuantityUnderflow {
        /// The item's cusip.
        cusip: String,
        /// The quantity currently held.
        quantity: u32,
        /// The decrease requested.
        requested: u32,
    },

    /// Bond parsing or schedule construction failed.
    #[error("Bond error: {0}")]
    Bond(#[from] ladder_bonds::BondError),
}

impl PortfolioError {
    /// Creates an item-not-found error.
    #[must_use]
    pub fn item_not_found(cusip: impl Into<String>) -> Self {
        Self::ItemNotFound {
            cusip: cusip.into(),
        }
    }
}
