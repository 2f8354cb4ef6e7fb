//! A held bond position.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use ladder_bonds::market;
use ladder_bonds::{Bond, BondError, PaymentMatrix, PaymentSource, ProfitProjection};
use ladder_core::config::{ScheduleHorizon, TaxPolicy};
use ladder_core::types::Date;

use crate::error::{PortfolioError, PortfolioResult};

/// Field order in a 7-field portfolio definition record.
const ITEM_FIELDS: [&str; 7] = [
    "cusip",
    "description",
    "maturity_date",
    "coupon",
    "ask",
    "rating",
    "available",
];

/// A bond held (or being considered) at a given quantity.
///
/// Identity fields are fixed at construction. Quantity is the only mutable
/// field; changing it rebuilds the dollar coupon matrix and the profit
/// projection together, so callers never observe one without the other.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioItem {
    cusip: String,
    description: String,
    maturity: Date,
    purchase: Date,
    coupon: Decimal,
    ask: Decimal,
    rating: String,
    available: u32,
    quantity: u32,
    tax: TaxPolicy,
    payment_schedule: PaymentMatrix,
    coupon_matrix: PaymentMatrix,
    projection: ProfitProjection,
}

impl PortfolioItem {
    /// Creates an item from a 7-field portfolio definition record
    /// (cusip, description, maturity date, coupon, ask, rating, available).
    ///
    /// The purchase date defaults to today when not supplied.
    ///
    /// # Errors
    ///
    /// Returns a `PortfolioError::Bond` for missing fields, unparseable
    /// values, or a maturity outside the horizon.
    pub fn from_record(
        fields: &[String],
        quantity: u32,
        purchase: Option<Date>,
        horizon: &ScheduleHorizon,
        tax: &TaxPolicy,
    ) -> PortfolioResult<Self> {
        let raw = |index: usize| -> Result<&str, BondError> {
            fields
                .get(index)
                .map(String::as_str)
                .ok_or_else(|| BondError::missing_field(ITEM_FIELDS[index]))
        };

        let cusip = market::normalize_cusip(raw(0)?).to_string();
        let description = raw(1)?.trim().to_string();
        let maturity = Date::parse_mdy(raw(2)?).map_err(BondError::from)?;
        let coupon = market::clean_decimal(ITEM_FIELDS[3], raw(3)?)?;
        let ask = market::clean_decimal(ITEM_FIELDS[4], raw(4)?)?;
        let rating = raw(5)?.trim().to_string();
        let available = market::clean_count(ITEM_FIELDS[6], raw(6)?)?;

        let purchase = purchase.unwrap_or_else(Date::today);
        let payment_schedule = PaymentMatrix::semi_annual(coupon, maturity, purchase, horizon)
            .map_err(PortfolioError::from)?;
        let coupon_matrix = payment_schedule.scaled(dollar_factor(quantity));
        let projection = ProfitProjection::calculate(ask, &payment_schedule, tax);

        Ok(Self {
            cusip,
            description,
            maturity,
            purchase,
            coupon,
            ask,
            rating,
            available,
            quantity,
            tax: *tax,
            payment_schedule,
            coupon_matrix,
            projection,
        })
    }

    /// Creates an item from a market quote, carrying the quote's ask
    /// quantity over as the availability.
    #[must_use]
    pub fn from_bond(bond: &Bond, quantity: u32, tax: &TaxPolicy) -> Self {
        let payment_schedule = bond.payment_schedule().clone();
        let coupon_matrix = payment_schedule.scaled(dollar_factor(quantity));
        let projection = ProfitProjection::calculate(bond.ask(), &payment_schedule, tax);

        Self {
            cusip: bond.cusip().to_string(),
            description: bond.description().to_string(),
            maturity: bond.maturity(),
            purchase: bond.purchase(),
            coupon: bond.coupon(),
            ask: bond.ask(),
            rating: bond.rating().to_string(),
            available: bond.ask_quantity(),
            quantity,
            tax: *tax,
            payment_schedule,
            coupon_matrix,
            projection,
        }
    }

    /// Units of 1000 face held.
    #[must_use]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Units the market had on offer when the item was built.
    #[must_use]
    pub fn available(&self) -> u32 {
        self.available
    }

    /// The dollar coupon matrix for the whole position.
    #[must_use]
    pub fn coupon_matrix(&self) -> &PaymentMatrix {
        &self.coupon_matrix
    }

    /// Sets the quantity, rebuilding the coupon matrix and projection.
    pub fn set_quantity(&mut self, quantity: u32) {
        let coupon_matrix = self.payment_schedule.scaled(dollar_factor(quantity));
        let projection = ProfitProjection::calculate(self.ask, &self.payment_schedule, &self.tax);
        self.quantity = quantity;
        self.coupon_matrix = coupon_matrix;
        self.projection = projection;
    }

    /// Adds `delta` units to the position.
    pub fn increase(&mut self, delta: u32) {
        self.set_quantity(self.quantity + delta);
    }

    /// Removes `delta` units from the position.
    ///
    /// # Errors
    ///
    /// Returns `QuantityUnderflow` and leaves the item untouched when more
    /// units are requested than held.
    pub fn decrease(&mut self, delta: u32) -> PortfolioResult<()> {
        if delta > self.quantity {
            return Err(PortfolioError::QuantityUnderflow {
                cusip: self.cusip.clone(),
                quantity: self.quantity,
                requested: delta,
            });
        }
        self.set_quantity(self.quantity - delta);
        Ok(())
    }

    /// Purchase cost of the position at the ask.
    #[must_use]
    pub fn position_cost(&self) -> Decimal {
        self.total_cost(self.quantity)
    }

    /// Loss of principal: amount paid above the face value returned at
    /// maturity. Negative for discount purchases.
    #[must_use]
    pub fn lop(&self) -> Decimal {
        self.position_cost() - Decimal::from(self.quantity) * dec!(1000)
    }

    /// Post-tax profit for the whole position.
    #[must_use]
    pub fn position_profit(&self) -> Decimal {
        self.profit() * Decimal::from(self.quantity)
    }

    /// Annual coupon income for the whole position.
    #[must_use]
    pub fn position_yearly_income(&self) -> Decimal {
        self.yearly_income() * Decimal::from(self.quantity)
    }
}

/// Percent-of-face to position dollars: `quantity × 1000 / 100`.
fn dollar_factor(quantity: u32) -> Decimal {
    Decimal::from(quantity) * dec!(1000) / dec!(100)
}

impl PaymentSource for PortfolioItem {
    fn cusip(&self) -> &str {
        &self.cusip
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn coupon(&self) -> Decimal {
        self.coupon
    }

    fn maturity(&self) -> Date {
        self.maturity
    }

    fn purchase(&self) -> Date {
        self.purchase
    }

    fn ask(&self) -> Decimal {
        self.ask
    }

    fn rating(&self) -> &str {
        &self.rating
    }

    fn payment_schedule(&self) -> &PaymentMatrix {
        &self.payment_schedule
    }

    fn projection(&self) -> &ProfitProjection {
        &self.projection
    }
}
