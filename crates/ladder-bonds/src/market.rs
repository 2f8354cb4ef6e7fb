//! Market snapshot record layout and field scrubbing.
//!
//! Brokerage snapshot exports are positional 16-field CSV rows with a few
//! quirks: CUSIPs sometimes wrapped as `="XXXXXXXXX"`, numeric fields that
//! read `N/A` or `--`, thousands separators in counts, and quantity fields
//! combining the lot and its minimum as `N(min)`.

use rust_decimal::Decimal;

use crate::error::{BondError, BondResult};

/// Column positions in a market snapshot record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarketField {
    /// Security identifier.
    Cusip = 0,
    /// Issuer state.
    State = 1,
    /// Issuer description.
    Description = 2,
    /// Annual coupon rate.
    Coupon = 3,
    /// Maturity date, `MM/DD/YYYY`.
    MaturityDate = 4,
    /// Next call date, `MM/DD/YYYY` or `N/A`/`--`.
    NextCallDate = 5,
    /// Moody's rating label.
    MoodyRating = 6,
    /// S&P rating label.
    SpRating = 7,
    /// Bid price per 100 face.
    Bid = 8,
    /// Ask price per 100 face.
    Ask = 9,
    /// Yield at the bid.
    YieldBid = 10,
    /// Ask yield to worst.
    AskYieldWorst = 11,
    /// Ask yield to maturity.
    AskYieldMaturity = 12,
    /// Bid quantity as `N(min)`.
    QuantityBid = 13,
    /// Ask quantity as `N(min)`.
    QuantityAsk = 14,
    /// Free-form attribute flags.
    Attributes = 15,
}

/// Number of columns in a market snapshot record.
pub const FIELD_COUNT: usize = 16;

impl MarketField {
    /// Returns the column index.
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the field name used in error messages.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Cusip => "cusip",
            Self::State => "state",
            Self::Description => "description",
            Self::Coupon => "coupon",
            Self::MaturityDate => "maturity_date",
            Self::NextCallDate => "next_call_date",
            Self::MoodyRating => "moody_rating",
            Self::SpRating => "sp_rating",
            Self::Bid => "bid",
            Self::Ask => "ask",
            Self::YieldBid => "yield_bid",
            Self::AskYieldWorst => "ask_yield_worst",
            Self::AskYieldMaturity => "ask_yield_maturity",
            Self::QuantityBid => "quantity_bid",
            Self::QuantityAsk => "quantity_ask",
            Self::Attributes => "attributes",
        }
    }
}

/// Unwraps the `="XXXXXXXXX"` spreadsheet escape some exports put around
/// CUSIPs; other values pass through untouched.
#[must_use]
pub fn normalize_cusip(raw: &str) -> &str {
    let trimmed = raw.trim();
    if let Some(stripped) = trimmed.strip_prefix("=\"") {
        stripped.strip_suffix('"').unwrap_or(stripped)
    } else {
        trimmed
    }
}

/// Parses a price/rate field, mapping the `N/A` and `--` placeholders to zero
/// and tolerating thousands separators.
pub fn clean_decimal(field: &str, value: &str) -> BondResult<Decimal> {
    let trimmed = value.trim();
    if trimmed.contains("N/A") || trimmed.contains("--") {
        return Ok(Decimal::ZERO);
    }
    trimmed
        .replace(',', "")
        .parse::<Decimal>()
        .map_err(|_| BondError::invalid_field(field, value))
}

/// Parses an integer count, stripping thousands separators.
pub fn clean_count(field: &str, value: &str) -> BondResult<u32> {
    value
        .trim()
        .replace(',', "")
        .parse::<u32>()
        .map_err(|_| BondError::invalid_field(field, value))
}

/// Splits a combined `N(min)` quantity field into `(quantity, minimum_lot)`.
///
/// The placeholder forms `N/A(N/A)` and ` 0(N/A)` both mean nothing offered.
pub fn split_quantity(field: &str, value: &str) -> BondResult<(u32, u32)> {
    if value == "N/A(N/A)" || value == " 0(N/A)" {
        return Ok((0, 0));
    }
    let (quantity, rest) = value
        .split_once('(')
        .ok_or_else(|| BondError::invalid_field(field, value))?;
    let minimum = rest
        .strip_suffix(')')
        .ok_or_else(|| BondError::invalid_field(field, value))?;
    Ok((
        clean_count(field, quantity)?,
        clean_count(field, minimum)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_field_indices() {
        assert_eq!(MarketField::Cusip.index(), 0);
        assert_eq!(MarketField::MaturityDate.index(), 4);
        assert_eq!(MarketField::Attributes.index(), 15);
    }

    #[test]
    fn test_normalize_cusip() {
        assert_eq!(normalize_cusip("=\"912828XY2\""), "912828XY2");
        assert_eq!(normalize_cusip("912828XY2"), "912828XY2");
        assert_eq!(normalize_cusip(" 912828XY2 "), "912828XY2");
    }

    #[test]
    fn test_clean_decimal() {
        assert_eq!(clean_decimal("ask", "98.5").unwrap(), dec!(98.5));
        assert_eq!(clean_decimal("ask", "N/A").unwrap(), Decimal::ZERO);
        assert_eq!(clean_decimal("ask", "--").unwrap(), Decimal::ZERO);
        assert_eq!(clean_decimal("ask", "1,013.50").unwrap(), dec!(1013.50));
        assert!(clean_decimal("ask", "abc").is_err());
    }

    #[test]
    fn test_clean_count() {
        assert_eq!(clean_count("quantity_ask", "1,250").unwrap(), 1250);
        assert!(clean_count("quantity_ask", "x").is_err());
    }

    #[test]
    fn test_split_quantity() {
        assert_eq!(split_quantity("quantity_ask", "250(10)").unwrap(), (250, 10));
        assert_eq!(
            split_quantity("quantity_ask", "1,000(25)").unwrap(),
            (1000, 25)
        );
        assert_eq!(split_quantity("quantity_ask", "N/A(N/A)").unwrap(), (0, 0));
        assert_eq!(split_quantity("quantity_bid", " 0(N/A)").unwrap(), (0, 0));
        assert!(split_quantity("quantity_ask", "250").is_err());
    }
}
