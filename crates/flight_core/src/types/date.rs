//! Calendar dates for flights and schedule weeks.
//!
//! This module provides:
//! - `Date`: Type-safe date wrapper around chrono::NaiveDate
//! - Day and week arithmetic used when consolidating weekly schedules
//! - Parsing of both ISO 8601 (`2025-04-28`) and US order-sheet (`04/28/2025`) forms
//!
//! # Examples
//!
//! ```
//! use flight_core::types::date::Date;
//!
//! let week = Date::from_ymd(2025, 4, 28).unwrap();
//! let last_day = week.add_days(6);
//!
//! assert_eq!(last_day - week, 6);
//! assert_eq!(last_day.to_us_string(), "05/04/2025");
//! ```

use chrono::{Datelike, Days, NaiveDate, Weekday};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::DateError;

/// Type-safe date wrapper around chrono::NaiveDate.
///
/// Provides ISO 8601 display and the day arithmetic needed to lay out
/// weekly schedule grids. Order sheets commonly print dates as
/// `MM/DD/YYYY`; [`Date::parse`] accepts that form as well.
///
/// # Examples
///
/// ```
/// use flight_core::types::date::Date;
///
/// // Create from year, month, day
/// let date = Date::from_ymd(2025, 6, 15).unwrap();
/// assert_eq!(date.year(), 2025);
/// assert_eq!(date.month(), 6);
/// assert_eq!(date.day(), 15);
///
/// // Parse from either supported form
/// let iso: Date = "2025-06-15".parse().unwrap();
/// let us: Date = "06/15/2025".parse().unwrap();
/// assert_eq!(iso, us);
///
/// // Calculate days between dates
/// let start = Date::from_ymd(2025, 1, 1).unwrap();
/// let end = Date::from_ymd(2025, 1, 11).unwrap();
/// assert_eq!(end - start, 10);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a Date from year, month, and day components.
    ///
    /// # Returns
    /// `Ok(Date)` if the date is valid, `Err(DateError::InvalidDate)` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use flight_core::types::date::Date;
    ///
    /// assert!(Date::from_ymd(2024, 2, 29).is_ok());
    /// assert!(Date::from_ymd(2025, 2, 29).is_err());
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Wraps an existing chrono date.
    #[inline]
    pub fn from_naive(date: NaiveDate) -> Self {
        Date(date)
    }

    /// Parses a date from `YYYY-MM-DD` or `MM/DD/YYYY`.
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use flight_core::types::date::Date;
    ///
    /// let date = Date::parse("12/29/2025").unwrap();
    /// assert_eq!(date.to_string(), "2025-12-29");
    ///
    /// assert!(Date::parse("not-a-date").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, DateError> {
        let s = s.trim();
        let format = if s.contains('/') { "%m/%d/%Y" } else { "%Y-%m-%d" };
        NaiveDate::parse_from_str(s, format)
            .map(Date)
            .map_err(|e| DateError::ParseError(format!("'{}': {}", s, e)))
    }

    /// Returns the underlying NaiveDate.
    #[inline]
    pub fn into_inner(self) -> NaiveDate {
        self.0
    }

    /// Returns the year component.
    #[inline]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[inline]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[inline]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the day of the week.
    ///
    /// # Examples
    ///
    /// ```
    /// use flight_core::types::date::Date;
    /// use chrono::Weekday;
    ///
    /// assert_eq!(Date::from_ymd(2025, 4, 28).unwrap().weekday(), Weekday::Mon);
    /// ```
    #[inline]
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Returns the date `days` days later (earlier when negative).
    ///
    /// Saturates at the bounds of the representable calendar instead of
    /// panicking.
    ///
    /// # Examples
    ///
    /// ```
    /// use flight_core::types::date::Date;
    ///
    /// let date = Date::from_ymd(2025, 12, 29).unwrap();
    /// assert_eq!(date.add_days(7), Date::from_ymd(2026, 1, 5).unwrap());
    /// assert_eq!(date.add_days(-1), Date::from_ymd(2025, 12, 28).unwrap());
    /// ```
    pub fn add_days(self, days: i64) -> Self {
        let shifted = if days >= 0 {
            self.0.checked_add_days(Days::new(days.unsigned_abs()))
        } else {
            self.0.checked_sub_days(Days::new(days.unsigned_abs()))
        };
        match shifted {
            Some(date) => Date(date),
            None if days >= 0 => Date(NaiveDate::MAX),
            None => Date(NaiveDate::MIN),
        }
    }

    /// Returns the date `weeks` whole weeks later.
    #[inline]
    pub fn add_weeks(self, weeks: i64) -> Self {
        self.add_days(weeks.saturating_mul(7))
    }

    /// Returns the Monday of the calendar week containing this date.
    ///
    /// # Examples
    ///
    /// ```
    /// use flight_core::types::date::Date;
    ///
    /// let wednesday = Date::from_ymd(2025, 4, 30).unwrap();
    /// assert_eq!(wednesday.week_start(), Date::from_ymd(2025, 4, 28).unwrap());
    /// ```
    pub fn week_start(self) -> Self {
        self.add_days(-i64::from(self.weekday().num_days_from_monday()))
    }

    /// Formats the date as `MM/DD/YYYY`, the form traffic systems expect.
    pub fn to_us_string(&self) -> String {
        self.0.format("%m/%d/%Y").to_string()
    }
}

impl Sub for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    ///
    /// The result is positive if `self` is after `other`, negative otherwise.
    fn sub(self, other: Self) -> i64 {
        (self.0 - other.0).num_days()
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl FromStr for Date {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, DateError> {
        Date::parse(s)
    }
}

impl fmt::Display for Date {
    /// Formats the date as ISO 8601 (YYYY-MM-DD).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::Date;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for Date {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.collect_str(self)
        }
    }

    impl<'de> Deserialize<'de> for Date {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            Date::parse(&s).map_err(de::Error::custom)
        }
    }
}
