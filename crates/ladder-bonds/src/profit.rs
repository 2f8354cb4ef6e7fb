//! After-tax profit projection.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use ladder_core::config::TaxPolicy;

use crate::schedule::PaymentMatrix;

/// Total-return projection per 1000 face value.
///
/// A pure function of the ask price, the per-unit payment schedule, and the
/// tax policy; position-level figures are obtained by multiplying by the
/// quantity held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfitProjection {
    /// Principal plus all coupon income (plus the premium tax benefit when
    /// taxable), before tax.
    pub total_return_pretax: Decimal,

    /// Total return after applying the flat tax rate to coupon income.
    pub total_return_posttax: Decimal,

    /// Post-tax return less the purchase cost (`ask × 10`).
    pub profit: Decimal,
}

impl ProfitProjection {
    /// Computes the projection for one 1000-face unit.
    ///
    /// A bond bought above par carries a premium (`ask × 10 − 1000`) that is
    /// written off against taxes at the flat rate — a flat benefit, not a
    /// time-weighted amortization schedule.
    #[must_use]
    pub fn calculate(ask: Decimal, schedule: &PaymentMatrix, tax: &TaxPolicy) -> Self {
        let interest = schedule.total() / dec!(100) * dec!(1000);
        let cost = ask * dec!(10);

        if tax.taxable {
            let premium = cost - dec!(1000);
            let tax_savings = if premium > Decimal::ZERO {
                premium * tax.rate
            } else {
                Decimal::ZERO
            };
            let pretax = dec!(1000) + interest + tax_savings;
            let posttax = dec!(1000) + interest * (Decimal::ONE - tax.rate) + tax_savings;
            Self {
                total_return_pretax: pretax,
                total_return_posttax: posttax,
                profit: posttax - cost,
            }
        } else {
            let total = dec!(1000) + interest;
            Self {
                total_return_pretax: total,
                total_return_posttax: total,
                profit: total - cost,
            }
        }
    }
}
