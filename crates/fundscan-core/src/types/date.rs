//! Date type for statement and cash-flow calculations.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, CoreResult};

/// Date formats seen in parsed CAS statements, tried in order.
const CAS_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d-%b-%Y", "%d/%m/%Y", "%d-%m-%Y"];

/// A calendar date attached to a statement transaction or cash flow.
///
/// Newtype wrapper around `chrono::NaiveDate`. Statement parsers emit dates
/// in a handful of formats depending on the registrar; [`Date::parse`]
/// accepts all of them.
///
/// # Example
///
/// ```rust
/// use fundscan_core::types::Date;
///
/// let iso = Date::parse("2024-03-31").unwrap();
/// let cas = Date::parse("31-Mar-2024").unwrap();
/// assert_eq!(iso, cas);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the date is invalid.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> CoreResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| CoreError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Parses a date string in any of the supported CAS formats.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if no format matches.
    pub fn parse(s: &str) -> CoreResult<Self> {
        let trimmed = s.trim();
        for format in CAS_DATE_FORMATS {
            if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
                return Ok(Date(date));
            }
        }
        Err(CoreError::invalid_date(format!("Cannot parse: {s}")))
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

    /// Adds a number of days to the date.
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        Date(self.0 + chrono::Duration::days(days))
    }

    /// Calculates the number of calendar days from `self` to `other`.
    #[must_use]
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Year fraction from `self` to `other` on an Act/365 basis.
    ///
    /// This is the discounting convention used for money-weighted returns.
    #[must_use]
    pub fn year_fraction(&self, other: &Date) -> f64 {
        self.days_between(other) as f64 / 365.0
    }

    /// Returns the underlying `NaiveDate`.
    #[must_use]
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ymd() {
        let date = Date::from_ymd(2024, 3, 31).unwrap();
        assert_eq!(date.year(), 2024);
        assert_eq!(date.month(), 3);
        assert_eq!(date.day(), 31);
    }

    #[test]
    fn test_from_ymd_invalid() {
        assert!(Date::from_ymd(2023, 2, 29).is_err());
        assert!(Date::from_ymd(2024, 13, 1).is_err());
    }

    #[test]
    fn test_parse_formats() {
        let expected = Date::from_ymd(2024, 3, 31).unwrap();
        assert_eq!(Date::parse("2024-03-31").unwrap(), expected);
        assert_eq!(Date::parse("31-Mar-2024").unwrap(), expected);
        assert_eq!(Date::parse("31/03/2024").unwrap(), expected);
        assert_eq!(Date::parse("31-03-2024").unwrap(), expected);
        assert_eq!(Date::parse("  2024-03-31  ").unwrap(), expected);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Date::parse("not a date").is_err());
        assert!(Date::parse("").is_err());
        assert!(Date::parse("2024-15-99").is_err());
    }

    #[test]
    fn test_days_between() {
        let start = Date::from_ymd(2023, 1, 1).unwrap();
        let end = Date::from_ymd(2024, 1, 1).unwrap();
        assert_eq!(start.days_between(&end), 365);
        assert_eq!(end.days_between(&start), -365);
    }

    #[test]
    fn test_year_fraction() {
        let start = Date::from_ymd(2023, 1, 1).unwrap();
        let one_year = start.add_days(365);
        assert!((start.year_fraction(&one_year) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_serde_roundtrip() {
        let date = Date::from_ymd(2024, 6, 15).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2024-06-15\"");
        let back: Date = serde_json::from_str(&json).unwrap();
        assert_eq!(back, date);
    }
}
