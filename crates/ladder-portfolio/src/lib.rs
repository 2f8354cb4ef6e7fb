//! # Ladder Portfolio
//!
//! Held-position modeling for the Ladder bond portfolio library.
//!
//! This crate provides:
//!
//! - [`PortfolioItem`]: a bond held at a quantity, with the per-unit payment
//!   schedule scaled to an absolute-dollar coupon matrix
//! - [`Portfolio`]: an ordered collection of items with the aggregate
//!   metrics report renderers consume (total invested, profit, yearly
//!   income, combined income matrix, loss of principal)
//! - [`selection`]: ranked-list recommendation and budget-constrained
//!   greedy portfolio fill
//!
//! ## Example
//!
//! ```rust,ignore
//! use ladder_core::TaxPolicy;
//! use ladder_portfolio::Portfolio;
//!
//! let mut portfolio = Portfolio::new();
//! portfolio.set_title("joint account");
//! portfolio.add_bond(&bond, 50, &TaxPolicy::default());
//! println!("invested {}", portfolio.total_invested());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod item;
pub mod portfolio;
pub mod selection;

pub use error::{PortfolioError, PortfolioResult};
pub use item::PortfolioItem;
pub use portfolio::Portfolio;
pub use selection::{fill_to_budget, recommend, BudgetFill, BudgetPolicy, FillStatus, OrderLine};
