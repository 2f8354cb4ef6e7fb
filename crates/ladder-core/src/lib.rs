//! # Ladder Core
//!
//! Core types and configuration for the Ladder bond portfolio library.
//!
//! This crate provides the foundational building blocks used throughout Ladder:
//!
//! - **Types**: `Date` (brokerage `MM/DD/YYYY` format) and the credit `RatingScale`
//! - **Configuration**: `ScheduleHorizon` and `TaxPolicy`, threaded explicitly
//!   into every calculation so nothing reads ambient global state
//! - **Errors**: structured `CoreError` with context
//!
//! ## Example
//!
//! ```rust
//! use ladder_core::config::{ScheduleHorizon, TaxPolicy};
//! use ladder_core::types::Date;
//!
//! let horizon = ScheduleHorizon::default();
//! let maturity = Date::parse_mdy("06/15/2030").unwrap();
//! assert_eq!(horizon.offset_of(maturity.year()), Some(8));
//!
//! let tax = TaxPolicy::default();
//! assert!(tax.taxable);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod types;

pub use config::{ScheduleHorizon, TaxPolicy};
pub use error::{CoreError, CoreResult};
pub use types::{Date, RatingScale};
