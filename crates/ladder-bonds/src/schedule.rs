//! Semi-annual payment matrix construction.
//!
//! A [`PaymentMatrix`] is a `(years + 1) × 13` grid of coupon amounts laid
//! out as `[year-offset][month]`, month column 0 unused so months index
//! naturally 1-12. Row 0 corresponds to the horizon's base year. Cells hold
//! `coupon / 2` percent of face for a per-unit schedule, or dollar amounts
//! once scaled to a position size.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use ladder_core::config::ScheduleHorizon;
use ladder_core::types::Date;

use crate::error::{BondError, BondResult};

/// Number of month columns (base-1 indexing, column 0 unused).
pub const MONTH_COLUMNS: usize = 13;

/// Returns the two months a bond pays coupons in, lowest first.
///
/// Coupons land six months apart, anchored on the maturity month: a bond
/// maturing in month `m >= 7` pays in `(m - 6, m)`, otherwise in `(m, m + 6)`.
#[must_use]
pub fn coupon_months(maturity_month: u32) -> (u32, u32) {
    if maturity_month >= 7 {
        (maturity_month - 6, maturity_month)
    } else {
        (maturity_month, maturity_month + 6)
    }
}

/// A per-year, per-month grid of coupon payments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMatrix {
    rows: Vec<[Decimal; MONTH_COLUMNS]>,
}

impl PaymentMatrix {
    /// Creates an all-zero matrix spanning `years + 1` rows.
    #[must_use]
    pub fn zeros(years: usize) -> Self {
        Self {
            rows: vec![[Decimal::ZERO; MONTH_COLUMNS]; years + 1],
        }
    }

    /// Builds the semi-annual coupon schedule for a bond.
    ///
    /// Each cell the bond pays in holds `coupon / 2`. The first year drops
    /// the first coupon when it was already paid before the purchase date
    /// (first coupon month earlier than the purchase month, or the same
    /// month with the maturity day-of-month before the purchase day). The
    /// last year drops the second coupon when the bond matures in the first
    /// half of the calendar year. When the first and last year coincide,
    /// only the first-year rule is applied.
    ///
    /// # Errors
    ///
    /// Returns `BondError::MaturityOutOfRange` when the maturity year falls
    /// outside the horizon; loaders are expected to filter such bonds out
    /// before construction.
    pub fn semi_annual(
        coupon: Decimal,
        maturity: Date,
        purchase: Date,
        horizon: &ScheduleHorizon,
    ) -> BondResult<Self> {
        let ending_offset =
            horizon
                .offset_of(maturity.year())
                .ok_or(BondError::MaturityOutOfRange {
                    year: maturity.year(),
                    base_year: horizon.base_year,
                    horizon_years: horizon.years,
                })?;

        let half_coupon = coupon / dec!(2);
        let (first_month, second_month) = coupon_months(maturity.month());
        let first = first_month as usize;
        let second = second_month as usize;

        let first_coupon_already_paid = first_month < purchase.month()
            || (first_month == purchase.month() && maturity.day() < purchase.day());
        let matures_in_first_half = maturity.month() < 7;

        let mut matrix = Self::zeros(horizon.years);
        for offset in 0..=ending_offset {
            let row = &mut matrix.rows[offset];
            if offset == 0 {
                if first_coupon_already_paid {
                    row[second] = half_coupon;
                } else {
                    row[first] = half_coupon;
                    row[second] = half_coupon;
                }
            } else if offset == ending_offset && matures_in_first_half {
                row[first] = half_coupon;
            } else {
                row[first] = half_coupon;
                row[second] = half_coupon;
            }
        }

        Ok(matrix)
    }

    /// Returns the number of years past the base year this matrix spans.
    #[must_use]
    pub fn years(&self) -> usize {
        self.rows.len().saturating_sub(1)
    }

    /// Returns the payment in a given year-offset and month, zero when the
    /// cell is outside the matrix.
    #[must_use]
    pub fn amount(&self, offset: usize, month: usize) -> Decimal {
        self.rows
            .get(offset)
            .and_then(|row| row.get(month))
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    /// Returns the sum of every cell.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.rows
            .iter()
            .map(|row| row.iter().copied().sum::<Decimal>())
            .sum()
    }

    /// Returns the sum of one year's row.
    #[must_use]
    pub fn year_total(&self, offset: usize) -> Decimal {
        self.rows
            .get(offset)
            .map(|row| row.iter().copied().sum())
            .unwrap_or(Decimal::ZERO)
    }

    /// Returns true if any month in the year's row is non-zero.
    #[must_use]
    pub fn has_income(&self, offset: usize) -> bool {
        !self.year_total(offset).is_zero()
    }

    /// Returns a copy with every cell multiplied by `factor`.
    #[must_use]
    pub fn scaled(&self, factor: Decimal) -> Self {
        Self {
            rows: self
                .rows
                .iter()
                .map(|row| {
                    let mut scaled = *row;
                    for cell in &mut scaled {
                        *cell *= factor;
                    }
                    scaled
                })
                .collect(),
        }
    }

    /// Adds another matrix into this one cell-by-cell, growing the row count
    /// if the other matrix spans more years.
    pub fn accumulate(&mut self, other: &Self) {
        if other.rows.len() > self.rows.len() {
            self.rows
                .resize(other.rows.len(), [Decimal::ZERO; MONTH_COLUMNS]);
        }
        for (row, other_row) in self.rows.iter_mut().zip(other.rows.iter()) {
            for (cell, other_cell) in row.iter_mut().zip(other_row.iter()) {
                *cell += *other_cell;
            }
        }
    }

    /// Iterates rows as `(year_offset, row)` pairs.
    pub fn iter_years(&self) -> impl Iterator<Item = (usize, &[Decimal; MONTH_COLUMNS])> {
        self.rows.iter().enumerate()
    }
}
