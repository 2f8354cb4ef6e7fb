//! Configuration for schedule and profit calculations.
//!
//! These structs replace ambient constants: every calculation that needs a
//! horizon or tax treatment takes one by reference, so results are
//! deterministic and testable in isolation.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// The reporting horizon for payment matrices.
///
/// Year-offset 0 in a payment matrix corresponds to `base_year`; the matrix
/// spans `years + 1` rows so a bond maturing exactly `years` after the base
/// year still fits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleHorizon {
    /// Number of years covered past the base year.
    pub years: usize,

    /// Calendar year of row 0.
    pub base_year: i32,
}

impl Default for ScheduleHorizon {
    fn default() -> Self {
        Self {
            years: 30,
            base_year: 2022,
        }
    }
}

impl ScheduleHorizon {
    /// Creates a horizon with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of years covered.
    #[must_use]
    pub fn with_years(mut self, years: usize) -> Self {
        self.years = years;
        self
    }

    /// Sets the base year.
    #[must_use]
    pub fn with_base_year(mut self, base_year: i32) -> Self {
        self.base_year = base_year;
        self
    }

    /// Returns the last calendar year inside the horizon.
    #[must_use]
    pub fn last_year(&self) -> i32 {
        self.base_year + self.years as i32
    }

    /// Returns the row offset for a calendar year, or `None` if the year
    /// falls outside the horizon.
    #[must_use]
    pub fn offset_of(&self, year: i32) -> Option<usize> {
        if year < self.base_year || year > self.last_year() {
            return None;
        }
        Some((year - self.base_year) as usize)
    }

    /// Returns the calendar year for a row offset.
    #[must_use]
    pub fn year_at(&self, offset: usize) -> i32 {
        self.base_year + offset as i32
    }
}

/// Tax treatment applied to profit projections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxPolicy {
    /// Whether coupon income is taxed.
    pub taxable: bool,

    /// Flat cumulative tax rate applied to coupon income and to the
    /// amortized premium benefit.
    pub rate: Decimal,
}

impl Default for TaxPolicy {
    fn default() -> Self {
        Self {
            taxable: true,
            rate: dec!(0.40),
        }
    }
}

impl TaxPolicy {
    /// Creates a taxable policy with the default rate.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a tax-exempt policy (IRA and similar accounts).
    #[must_use]
    pub fn exempt() -> Self {
        Self {
            taxable: false,
            ..Self::default()
        }
    }

    /// Sets the tax rate.
    #[must_use]
    pub fn with_rate(mut self, rate: Decimal) -> Self {
        self.rate = rate;
        self
    }
}
