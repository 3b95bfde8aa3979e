//! Birthday value object.

use super::errors::ValidationError;
use super::{string_field_impls, FieldKind, ValidatedField};
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

/// Strict `YYYY-MM-DD`; chrono alone would accept single-digit months.
static DATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid date regex"));

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A birthday stored as a `YYYY-MM-DD` string.
///
/// The string must also be a real calendar date, so `2023-02-30` is
/// rejected.
///
/// # Example
///
/// ```
/// use contact_book::domain::{Birthday, ValidatedField};
///
/// let birthday = Birthday::new("1990-07-15").unwrap();
/// assert_eq!(birthday.as_str(), "1990-07-15");
/// assert!(Birthday::new("2023-02-30").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Birthday(String);

impl Birthday {
    /// Create a new Birthday, validating format and calendar date.
    pub fn new(date: impl Into<String>) -> Result<Self, ValidationError> {
        Self::validate(date).map(Self)
    }

    /// Replace the stored date, leaving it untouched on failure.
    pub fn set(&mut self, date: impl Into<String>) -> Result<(), ValidationError> {
        self.0 = Self::validate(date)?;
        Ok(())
    }

    /// The stored date.
    pub fn date(&self) -> NaiveDate {
        // Validated on construction.
        Self::parse(&self.0).unwrap_or_default()
    }

    /// Days from `today` until the next occurrence of this month and day.
    ///
    /// Returns 0 when `today` is the birthday. A Feb 29 birthday falls on
    /// Feb 28 in years without a Feb 29.
    pub fn days_until_next(&self, today: NaiveDate) -> i64 {
        let date = self.date();
        let this_year = Self::occurrence_in(today.year(), date.month(), date.day());

        let next = if today > this_year {
            Self::occurrence_in(today.year() + 1, date.month(), date.day())
        } else {
            this_year
        };

        (next - today).num_days()
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    fn parse(date: &str) -> Option<NaiveDate> {
        if !DATE_PATTERN.is_match(date) {
            return None;
        }
        NaiveDate::parse_from_str(date, DATE_FORMAT)
            .ok()
            .filter(|d| d.year() >= 1)
    }

    fn occurrence_in(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day)
            .or_else(|| NaiveDate::from_ymd_opt(year, month, day - 1))
            .unwrap_or_default()
    }
}

impl ValidatedField for Birthday {
    const KIND: FieldKind = FieldKind::Birthday;

    fn is_valid(candidate: &str) -> bool {
        Self::parse(candidate).is_some()
    }

    fn as_str(&self) -> &str {
        &self.0
    }
}

string_field_impls!(Birthday);
