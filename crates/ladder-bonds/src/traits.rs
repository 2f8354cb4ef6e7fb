//! The shared payment-source contract.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use ladder_core::types::{Date, RatingScale};

use crate::profit::ProfitProjection;
use crate::schedule::{self, PaymentMatrix};

/// Behavior shared by anything with a maturity date, a coupon, an ask price,
/// and a payment schedule — market quotes and held positions alike.
///
/// Implementors supply the accessors; the income and return calculations are
/// provided on top of them, so both kinds of source compute identically.
pub trait PaymentSource {
    /// Security identifier.
    fn cusip(&self) -> &str;

    /// Issuer description line from the source record.
    fn description(&self) -> &str;

    /// Annual coupon rate in percent of face.
    fn coupon(&self) -> Decimal;

    /// Maturity date.
    fn maturity(&self) -> Date;

    /// Purchase date (actual or assumed).
    fn purchase(&self) -> Date;

    /// Ask price per 100 face value.
    fn ask(&self) -> Decimal;

    /// Credit rating label.
    fn rating(&self) -> &str;

    /// Per-unit semi-annual payment schedule (percent of face).
    fn payment_schedule(&self) -> &PaymentMatrix;

    /// Total-return projection per 1000 face.
    fn projection(&self) -> &ProfitProjection;

    /// Annual coupon income per 1000 face value.
    fn yearly_income(&self) -> Decimal {
        self.coupon() / dec!(100) * dec!(1000)
    }

    /// Total coupon income over the bond's life for `face_units` of
    /// 1000-face bonds.
    fn total_interest(&self, face_units: Decimal) -> Decimal {
        self.payment_schedule().total() / dec!(100) * face_units
    }

    /// Ordinal credit score from the process-wide rating scale.
    fn rating_score(&self) -> u32 {
        RatingScale::score(self.rating())
    }

    /// The two months coupons are paid in, lowest first.
    fn coupon_months(&self) -> (u32, u32) {
        schedule::coupon_months(self.maturity().month())
    }

    /// Post-tax profit per 1000 face.
    fn profit(&self) -> Decimal {
        self.projection().profit
    }

    /// Pre-tax total return per 1000 face.
    fn total_return_pretax(&self) -> Decimal {
        self.projection().total_return_pretax
    }

    /// Post-tax total return per 1000 face.
    fn total_return_posttax(&self) -> Decimal {
        self.projection().total_return_posttax
    }

    /// Purchase cost of `quantity` 1000-face units at the ask.
    fn total_cost(&self, quantity: u32) -> Decimal {
        self.ask() / dec!(100) * Decimal::from(quantity) * dec!(1000)
    }
}
