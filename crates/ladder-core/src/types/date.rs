//! Date type for bond calculations.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, CoreResult};

/// A calendar date.
///
/// This is a newtype wrapper around `chrono::NaiveDate`. Brokerage exports
/// quote every date as `MM/DD/YYYY`, so that format is the parsing and
/// display convention here.
///
/// # Example
///
/// ```rust
/// use ladder_core::types::Date;
///
/// let date = Date::parse_mdy("06/15/2030").unwrap();
/// assert_eq!(date.year(), 2030);
/// assert_eq!(date.month(), 6);
/// assert_eq!(date.day(), 15);
/// assert_eq!(date.to_string(), "06/15/2030");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the components do not form a
    /// real calendar date.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> CoreResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| CoreError::invalid_date(format!("{month:02}/{day:02}/{year}")))
    }

    /// Parses a date from the brokerage `MM/DD/YYYY` format.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the string is not a valid date.
    pub fn parse_mdy(s: &str) -> CoreResult<Self> {
        NaiveDate::parse_from_str(s.trim(), "%m/%d/%Y")
            .map(Date)
            .map_err(|_| CoreError::invalid_date(s))
    }

    /// Returns today's date.
    #[must_use]
    pub fn today() -> Self {
        Date(chrono::Local::now().date_naive())
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the number of whole days from this date to `other`.
    ///
    /// Positive when `other` is later than this date.
    #[must_use]
    pub fn days_until(&self, other: Date) -> i64 {
        (other.0 - self.0).num_days()
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%m/%d/%Y"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mdy() {
        let date = Date::parse_mdy("01/05/2024").unwrap();
        assert_eq!(date.year(), 2024);
        assert_eq!(date.month(), 1);
        assert_eq!(date.day(), 5);
    }

    #[test]
    fn test_parse_mdy_trims_whitespace() {
        let date = Date::parse_mdy(" 12/31/2030 ").unwrap();
        assert_eq!(date.month(), 12);
        assert_eq!(date.day(), 31);
    }

    #[test]
    fn test_parse_mdy_rejects_garbage() {
        assert!(Date::parse_mdy("N/A").is_err());
        assert!(Date::parse_mdy("2024-06-15").is_err());
        assert!(Date::parse_mdy("13/01/2024").is_err());
    }

    #[test]
    fn test_from_ymd_rejects_invalid() {
        assert!(Date::from_ymd(2024, 2, 30).is_err());
        assert!(Date::from_ymd(2024, 2, 29).is_ok());
    }

    #[test]
    fn test_display_round_trip() {
        let date = Date::from_ymd(2030, 6, 15).unwrap();
        assert_eq!(date.to_string(), "06/15/2030");
        assert_eq!(Date::parse_mdy(&date.to_string()).unwrap(), date);
    }

    #[test]
    fn test_days_until() {
        let a = Date::from_ymd(2030, 6, 15).unwrap();
        let b = Date::from_ymd(2031, 6, 15).unwrap();
        assert_eq!(a.days_until(b), 365);
        assert_eq!(b.days_until(a), -365);
    }

    #[test]
    fn test_ordering() {
        let earlier = Date::from_ymd(2024, 1, 1).unwrap();
        let later = Date::from_ymd(2024, 1, 2).unwrap();
        assert!(earlier < later);
    }

    #[test]
    fn test_serde_transparent() {
        let date = Date::from_ymd(2030, 6, 15).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2030-06-15\"");
        let parsed: Date = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, date);
    }
}
