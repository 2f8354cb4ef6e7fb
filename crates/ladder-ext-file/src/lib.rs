//! # Ladder Ext File
//!
//! File-based record sources for the Ladder portfolio library.
//!
//! Two readers cover the inputs the core consumes:
//!
//! - [`read_market_snapshot`]: the 16-field bond screening export — one raw
//!   field list per bond, header stripped, trailing footer junk silently
//!   truncated
//! - [`read_holdings_export`]: the brokerage holdings export — 7-field
//!   portfolio definition records plus the held quantity and purchase date
//!
//! Both return plain records; parsing them into `Bond` or `PortfolioItem`
//! belongs to the core crates, where per-record failures are skip-and-log.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

mod error;
mod holdings;
mod market_data;

pub use error::{FileError, FileResult};
pub use holdings::{read_holdings_export, HoldingsRecord};
pub use market_data::read_market_snapshot;
