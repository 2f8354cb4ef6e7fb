//! Bond market quote.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use ladder_core::config::{ScheduleHorizon, TaxPolicy};
use ladder_core::types::{Date, RatingScale};

use crate::error::{BondError, BondResult};
use crate::market::{self, MarketField};
use crate::profit::ProfitProjection;
use crate::schedule::PaymentMatrix;
use crate::traits::PaymentSource;

/// A tradable bond parsed from a market snapshot record.
///
/// Identity and quote fields are fixed at construction, as are the payment
/// schedule and profit projection. The three rank fields are the only
/// mutable state; they default to zero until a `BondGroup` ranks the batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bond {
    cusip: String,
    description: String,
    coupon: Decimal,
    maturity: Date,
    next_call: Option<Date>,
    callable: bool,
    purchase: Date,
    sp_rating: String,
    sp_rating_score: u32,
    bid: Decimal,
    ask: Decimal,
    yield_bid: Decimal,
    ask_yield_worst: Decimal,
    ask_yield_maturity: Decimal,
    bid_quantity: u32,
    min_quantity_bid: u32,
    ask_quantity: u32,
    min_quantity_ask: u32,
    attributes: String,
    income_rank: u32,
    profit_rank: u32,
    composite_rank: u32,
    payment_schedule: PaymentMatrix,
    projection: ProfitProjection,
}

impl Bond {
    /// Parses a bond from a 16-field market snapshot record.
    ///
    /// The purchase date defaults to today when not supplied. A bond is
    /// considered callable only when a next-call date is present and falls
    /// more than a year before maturity; calls inside the final year are
    /// treated as maturity.
    ///
    /// # Errors
    ///
    /// Returns a `BondError` for missing fields, unparseable values, or a
    /// maturity outside the schedule horizon.
    pub fn from_record(
        fields: &[String],
        purchase: Option<Date>,
        horizon: &ScheduleHorizon,
        tax: &TaxPolicy,
    ) -> BondResult<Self> {
        if fields.is_empty() {
            return Err(BondError::EmptyRecord);
        }

        let raw = |field: MarketField| -> BondResult<&str> {
            fields
                .get(field.index())
                .map(String::as_str)
                .ok_or_else(|| BondError::missing_field(field.name()))
        };

        let cusip = market::normalize_cusip(raw(MarketField::Cusip)?).to_string();
        let description = raw(MarketField::Description)?.trim().to_string();
        let coupon = market::clean_decimal(MarketField::Coupon.name(), raw(MarketField::Coupon)?)?;
        let maturity = Date::parse_mdy(raw(MarketField::MaturityDate)?)?;

        let call_raw = raw(MarketField::NextCallDate)?;
        let (next_call, callable) = if call_raw.contains("N/A") || call_raw.contains("--") {
            (None, false)
        } else {
            let call_date = Date::parse_mdy(call_raw)?;
            (Some(call_date), call_date.days_until(maturity) > 365)
        };

        let purchase = purchase.unwrap_or_else(Date::today);

        let sp_rating = raw(MarketField::SpRating)?.trim().to_string();
        let sp_rating_score = RatingScale::score(&sp_rating);

        let bid = market::clean_decimal(MarketField::Bid.name(), raw(MarketField::Bid)?)?;
        let ask = market::clean_decimal(MarketField::Ask.name(), raw(MarketField::Ask)?)?;
        let yield_bid =
            market::clean_decimal(MarketField::YieldBid.name(), raw(MarketField::YieldBid)?)?;
        let ask_yield_worst = market::clean_decimal(
            MarketField::AskYieldWorst.name(),
            raw(MarketField::AskYieldWorst)?,
        )?;
        let ask_yield_maturity = market::clean_decimal(
            MarketField::AskYieldMaturity.name(),
            raw(MarketField::AskYieldMaturity)?,
        )?;

        let (bid_quantity, min_quantity_bid) = market::split_quantity(
            MarketField::QuantityBid.name(),
            raw(MarketField::QuantityBid)?,
        )?;
        let (ask_quantity, min_quantity_ask) = market::split_quantity(
            MarketField::QuantityAsk.name(),
            raw(MarketField::QuantityAsk)?,
        )?;

        let attributes = raw(MarketField::Attributes)?.trim().to_string();

        let payment_schedule = PaymentMatrix::semi_annual(coupon, maturity, purchase, horizon)?;
        let projection = ProfitProjection::calculate(ask, &payment_schedule, tax);

        Ok(Self {
            cusip,
            description,
            coupon,
            maturity,
            next_call,
            callable,
            purchase,
            sp_rating,
            sp_rating_score,
            bid,
            ask,
            yield_bid,
            ask_yield_worst,
            ask_yield_maturity,
            bid_quantity,
            min_quantity_bid,
            ask_quantity,
            min_quantity_ask,
            attributes,
            income_rank: 0,
            profit_rank: 0,
            composite_rank: 0,
            payment_schedule,
            projection,
        })
    }

    /// Returns true when the issuer can redeem the bond more than a year
    /// before maturity.
    #[must_use]
    pub fn is_callable(&self) -> bool {
        self.callable
    }

    /// Next call date, when the quote carried one.
    #[must_use]
    pub fn next_call(&self) -> Option<Date> {
        self.next_call
    }

    /// Ordinal credit score resolved at construction.
    #[must_use]
    pub fn sp_rating_score(&self) -> u32 {
        self.sp_rating_score
    }

    /// Bid price per 100 face.
    #[must_use]
    pub fn bid(&self) -> Decimal {
        self.bid
    }

    /// Yield at the bid.
    #[must_use]
    pub fn yield_bid(&self) -> Decimal {
        self.yield_bid
    }

    /// Ask yield to worst.
    #[must_use]
    pub fn ask_yield_worst(&self) -> Decimal {
        self.ask_yield_worst
    }

    /// Ask yield to maturity.
    #[must_use]
    pub fn ask_yield_maturity(&self) -> Decimal {
        self.ask_yield_maturity
    }

    /// Units offered at the bid.
    #[must_use]
    pub fn bid_quantity(&self) -> u32 {
        self.bid_quantity
    }

    /// Minimum lot at the bid.
    #[must_use]
    pub fn min_quantity_bid(&self) -> u32 {
        self.min_quantity_bid
    }

    /// Units offered at the ask.
    #[must_use]
    pub fn ask_quantity(&self) -> u32 {
        self.ask_quantity
    }

    /// Minimum lot at the ask.
    #[must_use]
    pub fn min_quantity_ask(&self) -> u32 {
        self.min_quantity_ask
    }

    /// Units available to purchase.
    #[must_use]
    pub fn available(&self) -> u32 {
        self.ask_quantity
    }

    /// Free-form attribute flags from the snapshot.
    #[must_use]
    pub fn attributes(&self) -> &str {
        &self.attributes
    }

    /// Rank by yearly income (1 is best, 0 means unranked).
    #[must_use]
    pub fn income_rank(&self) -> u32 {
        self.income_rank
    }

    /// Sets the income rank.
    pub fn set_income_rank(&mut self, rank: u32) {
        self.income_rank = rank;
    }

    /// Rank by projected profit (1 is best, 0 means unranked).
    #[must_use]
    pub fn profit_rank(&self) -> u32 {
        self.profit_rank
    }

    /// Sets the profit rank.
    pub fn set_profit_rank(&mut self, rank: u32) {
        self.profit_rank = rank;
    }

    /// Sum of income and profit ranks; lower is better.
    #[must_use]
    pub fn composite_rank(&self) -> u32 {
        self.composite_rank
    }

    /// Sets the composite rank.
    pub fn set_composite_rank(&mut self, rank: u32) {
        self.composite_rank = rank;
    }
}

impl PaymentSource for Bond {
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
        &self.sp_rating
    }

    fn payment_schedule(&self) -> &PaymentMatrix {
        &self.payment_schedule
    }

    fn projection(&self) -> &ProfitProjection {
        &self.projection
    }
}
