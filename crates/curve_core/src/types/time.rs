//! Time types and Day Count Conventions for curve calculations.
//!
//! This module provides:
//! - `Date`: Type-safe date wrapper around chrono::NaiveDate with a serial-number view
//! - `DayCountConvention`: Industry-standard day count conventions
//! - Year fraction calculations between curve dates
//!
//! # Examples
//!
//! ```
//! use curve_core::types::time::{Date, DayCountConvention};
//!
//! let start = Date::from_ymd(2025, 1, 3).unwrap();
//! let end = Date::from_ymd(2025, 4, 3).unwrap();
//!
//! // 90 days under ACT/360
//! let yf = DayCountConvention::Actual360.year_fraction(start, end);
//! assert!((yf - 0.25).abs() < 1e-12);
//! ```

use chrono::{Datelike, NaiveDate, Weekday};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::DateError;

/// `num_days_from_ce` of 1899-12-30, the day before serial number 1 in the
/// spreadsheet convention (so 1901-01-01 has serial 367).
const SERIAL_EPOCH_DAYS_FROM_CE: i64 = 693_594;

/// Type-safe date wrapper around chrono::NaiveDate.
///
/// Provides ISO 8601 formatting and parsing, day arithmetic and a bijective
/// mapping to an integer serial number.
///
/// # Examples
///
/// ```
/// use curve_core::types::time::Date;
///
/// // Create from year, month, day
/// let date = Date::from_ymd(2025, 1, 3).unwrap();
/// assert_eq!(date.year(), 2025);
/// assert_eq!(date.month(), 1);
/// assert_eq!(date.day(), 3);
///
/// // Parse from ISO 8601 string
/// let parsed: Date = "2025-01-03".parse().unwrap();
/// assert_eq!(date, parsed);
///
/// // Serial numbers are days since 1899-12-30
/// assert_eq!(date.serial_number(), 45660);
///
/// // Calculate days between dates
/// let end = Date::from_ymd(2025, 4, 3).unwrap();
/// assert_eq!(end - date, 90);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a Date from year, month, and day components.
    ///
    /// # Arguments
    /// * `year` - Year (e.g., 2025)
    /// * `month` - Month (1-12)
    /// * `day` - Day (1-31, depending on month)
    ///
    /// # Returns
    /// `Ok(Date)` if the date is valid, `Err(DateError::InvalidDate)` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use curve_core::types::time::Date;
    ///
    /// let leap = Date::from_ymd(2024, 2, 29).unwrap();
    /// assert_eq!(leap.day(), 29);
    ///
    /// assert!(Date::from_ymd(2024, 2, 30).is_err());
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Creates a Date from its serial number (days since 1899-12-30).
    ///
    /// # Examples
    ///
    /// ```
    /// use curve_core::types::time::Date;
    ///
    /// let date = Date::from_serial_number(367).unwrap();
    /// assert_eq!(date.to_string(), "1901-01-01");
    /// ```
    pub fn from_serial_number(serial: i64) -> Result<Self, DateError> {
        serial
            .checked_add(SERIAL_EPOCH_DAYS_FROM_CE)
            .and_then(|days| i32::try_from(days).ok())
            .and_then(NaiveDate::from_num_days_from_ce_opt)
            .map(Date)
            .ok_or(DateError::SerialOutOfRange(serial))
    }

    /// Parses a date from ISO 8601 format string (YYYY-MM-DD).
    ///
    /// # Examples
    ///
    /// ```
    /// use curve_core::types::time::Date;
    ///
    /// let date = Date::parse("2025-04-03").unwrap();
    /// assert_eq!(date.month(), 4);
    ///
    /// assert!(Date::parse("not-a-date").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, DateError> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Date)
            .map_err(|e| DateError::ParseError(format!("{}: '{}'", e, s)))
    }

    /// Returns the underlying NaiveDate.
    pub fn into_inner(self) -> NaiveDate {
        self.0
    }

    /// Returns the date `days` days later (earlier when negative).
    ///
    /// # Examples
    ///
    /// ```
    /// use curve_core::types::time::Date;
    ///
    /// let date = Date::from_ymd(2024, 2, 28).unwrap();
    /// assert_eq!(date.add_days(1).unwrap().to_string(), "2024-02-29");
    /// assert_eq!(date.add_days(-59).unwrap().to_string(), "2023-12-31");
    /// ```
    pub fn add_days(&self, days: i64) -> Result<Self, DateError> {
        let serial = self.serial_number();
        serial
            .checked_add(days)
            .ok_or(DateError::SerialOutOfRange(serial))
            .and_then(Date::from_serial_number)
    }

    /// Returns the serial number: days elapsed since 1899-12-30.
    ///
    /// Serial numbers are strictly increasing with the date, so their
    /// difference is the actual number of days between two dates.
    pub fn serial_number(&self) -> i64 {
        i64::from(self.0.num_days_from_ce()) - SERIAL_EPOCH_DAYS_FROM_CE
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day-of-month component (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the day of the week.
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
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

impl FromStr for Date {
    type Err = DateError;

    /// Parses a date from ISO 8601 format string (YYYY-MM-DD).
    fn from_str(s: &str) -> Result<Self, DateError> {
        Date::parse(s)
    }
}

impl fmt::Display for Date {
    /// Formats the date as ISO 8601 (YYYY-MM-DD), zero-padding month and day.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Day Count Convention (year fraction convention).
///
/// # Variants
/// - `Actual360`: Actual days / 360 (money market, SOFR curves)
/// - `Actual365Fixed`: Actual days / 365
/// - `Thirty360`: Each month treated as 30 days, year as 360 days (US bond basis)
///
/// # Usage
///
/// ```
/// use curve_core::types::time::{Date, DayCountConvention};
///
/// let start = Date::from_ymd(2024, 1, 1).unwrap();
/// let end = Date::from_ymd(2024, 7, 1).unwrap();
///
/// let yf = DayCountConvention::Actual365Fixed.year_fraction(start, end);
/// assert!((yf - 182.0 / 365.0).abs() < 1e-12);
/// ```
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DayCountConvention {
    /// Actual/360: actual_days / 360.0
    #[default]
    Actual360,

    /// Actual/365 Fixed: actual_days / 365.0
    Actual365Fixed,

    /// 30/360 US Bond Basis
    ///
    /// Each month is treated as having 30 days, and the year as 360 days.
    Thirty360,
}

impl DayCountConvention {
    /// Returns the standard convention name.
    ///
    /// # Examples
    ///
    /// ```
    /// use curve_core::types::time::DayCountConvention;
    ///
    /// assert_eq!(DayCountConvention::Actual360.name(), "ACT/360");
    /// assert_eq!(DayCountConvention::Actual365Fixed.name(), "ACT/365F");
    /// assert_eq!(DayCountConvention::Thirty360.name(), "30/360");
    /// ```
    pub fn name(&self) -> &'static str {
        match self {
            DayCountConvention::Actual360 => "ACT/360",
            DayCountConvention::Actual365Fixed => "ACT/365F",
            DayCountConvention::Thirty360 => "30/360",
        }
    }

    /// Returns the day count between two dates under this convention.
    ///
    /// Negative when `end` precedes `start`.
    pub fn day_count(&self, start: Date, end: Date) -> i64 {
        match self {
            DayCountConvention::Actual360 | DayCountConvention::Actual365Fixed => end - start,
            DayCountConvention::Thirty360 => {
                let (first, last, sign) = if start <= end {
                    (start, end, 1)
                } else {
                    (end, start, -1)
                };

                let d1 = if first.day() == 31 { 30 } else { first.day() };
                let d2 = if last.day() == 31 && d1 == 30 {
                    30
                } else {
                    last.day()
                };

                let days = 360 * i64::from(last.year() - first.year())
                    + 30 * (i64::from(last.month()) - i64::from(first.month()))
                    + (i64::from(d2) - i64::from(d1));
                sign * days
            }
        }
    }

    /// Calculates the year fraction between two dates.
    ///
    /// Returns a negative value when `start > end` instead of panicking, so
    /// callers can use the sign to detect reversed periods.
    ///
    /// # Examples
    ///
    /// ```
    /// use curve_core::types::time::{Date, DayCountConvention};
    ///
    /// let start = Date::from_ymd(2025, 1, 3).unwrap();
    /// let end = Date::from_ymd(2025, 4, 3).unwrap();
    ///
    /// let yf = DayCountConvention::Actual360.year_fraction(start, end);
    /// assert!((yf - 0.25).abs() < 1e-12);
    ///
    /// let yf_neg = DayCountConvention::Actual360.year_fraction(end, start);
    /// assert!((yf_neg + 0.25).abs() < 1e-12);
    /// ```
    pub fn year_fraction(&self, start: Date, end: Date) -> f64 {
        let days = self.day_count(start, end) as f64;
        match self {
            DayCountConvention::Actual360 | DayCountConvention::Thirty360 => days / 360.0,
            DayCountConvention::Actual365Fixed => days / 365.0,
        }
    }
}

impl FromStr for DayCountConvention {
    type Err = String;

    /// Parses day count convention from string (case-insensitive).
    ///
    /// Supports multiple aliases for each convention:
    /// - ACT/360: "ACT/360", "Actual/360", "Act360", "A360"
    /// - ACT/365F: "ACT/365F", "ACT/365", "Actual/365 Fixed", "A365"
    /// - 30/360: "30/360", "Thirty360", "30360"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().replace(['/', ' '], "").as_str() {
            "ACT360" | "ACTUAL360" | "A360" => Ok(DayCountConvention::Actual360),
            "ACT365" | "ACT365F" | "ACTUAL365" | "ACTUAL365FIXED" | "A365" | "A365F" => {
                Ok(DayCountConvention::Actual365Fixed)
            }
            "30360" | "THIRTY360" => Ok(DayCountConvention::Thirty360),
            _ => Err(format!("Unknown day count convention: {}", s)),
        }
    }
}

impl fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::DayCountConvention;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;

    impl Serialize for DayCountConvention {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> Deserialize<'de> for DayCountConvention {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            DayCountConvention::from_str(&s).map_err(de::Error::custom)
        }
    }
}
