//! # Ladder Bonds
//!
//! Bond cash-flow projection and ranking for the Ladder portfolio library.
//!
//! This crate provides:
//!
//! - **Payment matrices**: semi-annual coupon schedules laid out per
//!   year-offset and month over a configurable horizon
//! - **Profit projections**: after-tax total return per 1000 face value
//! - **Market quotes**: [`Bond`] parsed from 16-field brokerage snapshot
//!   records, with scrubbing for the quirks those exports carry
//! - **Screening**: [`BondGroup`] batch loading with exclusion, maturity,
//!   and call-protection filters
//! - **Ranking**: the [`ScoreList`] dense ranker and the income / profit /
//!   composite orderings built from it
//!
//! ## Example
//!
//! ```rust,ignore
//! use ladder_bonds::{Bond, BondGroup, LoadPolicy, RankBasis};
//! use ladder_core::{ScheduleHorizon, TaxPolicy};
//!
//! let horizon = ScheduleHorizon::default();
//! let tax = TaxPolicy::default();
//!
//! let mut group = BondGroup::new();
//! let summary = group.load(records, &LoadPolicy::default(), &horizon, &tax);
//! group.make_ranking_lists();
//!
//! for bond in group.ranked(RankBasis::Composite).iter().take(10) {
//!     println!("{} {}", bond.cusip(), bond.composite_rank());
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod bond;
pub mod error;
pub mod group;
pub mod market;
pub mod profit;
pub mod ranking;
pub mod schedule;
pub mod traits;

pub use bond::Bond;
pub use error::{BondError, BondResult};
pub use group::{BondGroup, ExclusionHit, LoadPolicy, LoadSummary, RankBasis};
pub use profit::ProfitProjection;
pub use ranking::ScoreList;
pub use schedule::{coupon_months, PaymentMatrix};
pub use traits::PaymentSource;
