//! # calendar_date
//!
//! An immutable `(year, month, day)` value in the proleptic Gregorian calendar.
//!
//! Construction is permissive: [`CalendarDate::new`] stores whatever it is
//! given and [`CalendarDate::parse`] never fails. Out-of-range or unparsable
//! fields are carried through arithmetic and only surface when the caller asks
//! through [`CalendarDate::is_valid`] or [`CalendarDate::validate`]. Callers that
//! want the check up front can use [`CalendarDate::try_new`].
//!
//! ```
//! use calendar_date::CalendarDate;
//!
//! let end_of_january = CalendarDate::new(2015, 1, 31);
//! assert_eq!(end_of_january.add_months(1).to_string(), "2015-02-28");
//!
//! let nonsense = CalendarDate::parse("2015-xx-03");
//! assert!(!nonsense.is_valid());
//! ```

mod arithmetic;
mod calendar;
mod consts;
mod host;
mod julian;
mod prelude;

pub use calendar::{days_in_month, days_in_year, is_leap_year};
pub use consts::*;
pub use julian::JulianDay;

use crate::prelude::*;
use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt::{self, Write};
use std::str::FromStr;
use tracing::trace;

/// A calendar date that may or may not be valid.
///
/// Each field is `None` when it came from text that was not a number, or when
/// arithmetic on it overflowed. Such a date is never valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarDate {
    year: Option<i32>,
    month: Option<i32>,
    day: Option<i32>,
}

/// Names one of the three fields of a date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Component {
    #[display(fmt = "year")]
    Year,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "day")]
    Day,
}

/// Reasons a date fails validation or conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// A field could not be parsed as a number.
    #[error("Invalid date: {0} is not a number")]
    NotANumber(Component),

    /// Year zero does not exist.
    #[error("Invalid year: {0} (year zero does not exist)")]
    InvalidYear(i32),

    /// Month outside `1..=12`.
    #[error("Invalid month: {0} (must be 1-12)")]
    InvalidMonth(i32),

    /// Day outside the length of its month.
    #[error("Invalid day {day} for month {year}-{month:02} (must be 1-{max})")]
    InvalidDay { year: i32, month: i32, day: i32, max: u8 },

    /// The date is valid but cannot be expressed as a `chrono` date.
    #[error("Date {0} is outside the range supported by chrono")]
    Unrepresentable(CalendarDate),
}

impl CalendarDate {
    /// Creates a date from its three fields. No validation or normalization is performed.
    pub const fn new(year: i32, month: i32, day: i32) -> Self {
        Self::from_parts(Some(year), Some(month), Some(day))
    }

    /// Creates a date and checks it is valid.
    ///
    /// # Errors
    /// Returns the first [`DateError`] that [`validate`](Self::validate) finds.
    pub fn try_new(year: i32, month: i32, day: i32) -> Result<Self, DateError> {
        let date = Self::new(year, month, day);
        date.validate()?;
        Ok(date)
    }

    pub(crate) const fn from_parts(year: Option<i32>, month: Option<i32>, day: Option<i32>) -> Self {
        Self { year, month, day }
    }

    /// Parses hyphen-delimited `year-month-day` text.
    ///
    /// Each field is read the way `parseInt` reads it: leading whitespace and a
    /// `+` sign are skipped, digits are taken up to the first non-digit, and a
    /// field without digits becomes not-a-number. A leading `-` is the sign of
    /// the year. Fields after the third are ignored.
    ///
    /// This never fails; bad input yields a date for which `is_valid()` is false.
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        let (negative, body) = match trimmed.strip_prefix(DATE_SEPARATOR) {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let mut fields = body.split(DATE_SEPARATOR);
        let mut next = |component: Component| {
            let value = fields.next().and_then(Self::parse_field);
            if value.is_none() {
                trace!(input = text, %component, "date field is not a number");
            }
            value
        };

        let year = next(Component::Year);
        let month = next(Component::Month);
        let day = next(Component::Day);

        let year = if negative {
            year.and_then(i32::checked_neg)
        } else {
            year
        };

        Self::from_parts(year, month, day)
    }

    fn parse_field(field: &str) -> Option<i32> {
        let field = field.trim_start();
        let unsigned = field.strip_prefix('+').unwrap_or(field);
        let end = unsigned
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(unsigned.len());
        unsigned[..end].parse().ok()
    }

    /// Returns the year, or `None` if it is not a number
    pub const fn year(&self) -> Option<i32> {
        self.year
    }

    /// Returns the month, or `None` if it is not a number
    pub const fn month(&self) -> Option<i32> {
        self.month
    }

    /// Returns the day of the month, or `None` if it is not a number
    pub const fn day(&self) -> Option<i32> {
        self.day
    }

    /// Returns a copy with the year replaced
    pub const fn with_year(self, year: i32) -> Self {
        Self::from_parts(Some(year), self.month, self.day)
    }

    /// Returns a copy with the month replaced. The day is not adjusted.
    pub const fn with_month(self, month: i32) -> Self {
        Self::from_parts(self.year, Some(month), self.day)
    }

    /// Returns a copy with the day replaced
    pub const fn with_day(self, day: i32) -> Self {
        Self::from_parts(self.year, self.month, Some(day))
    }

    /// Compares by year, then month, then day. Text is parsed first.
    pub fn compare_to(&self, other: impl Into<Self>) -> Ordering {
        self.cmp(&other.into())
    }

    /// True if both dates have the same fields. Text is parsed first.
    pub fn equals(&self, other: impl Into<Self>) -> bool {
        self.compare_to(other).is_eq()
    }

    /// True if this date sorts before `other`
    pub fn is_before(&self, other: impl Into<Self>) -> bool {
        self.compare_to(other).is_lt()
    }

    /// True if this date sorts after `other`
    pub fn is_after(&self, other: impl Into<Self>) -> bool {
        self.compare_to(other).is_gt()
    }

    /// True if the year is non-zero, the month is 1-12 and the day fits the month.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Checks the date and reports the first rule it breaks.
    ///
    /// # Errors
    /// Returns a [`DateError`] describing the offending field.
    pub fn validate(&self) -> Result<(), DateError> {
        self.checked_parts().map(|_| ())
    }

    pub(crate) fn checked_parts(&self) -> Result<(i32, i32, i32), DateError> {
        let year = self.year.ok_or(DateError::NotANumber(Component::Year))?;
        let month = self.month.ok_or(DateError::NotANumber(Component::Month))?;
        let day = self.day.ok_or(DateError::NotANumber(Component::Day))?;

        if year == 0 {
            return Err(DateError::InvalidYear(year));
        }

        let max = calendar::days_in_month(year, month).ok_or(DateError::InvalidMonth(month))?;
        if day < MIN_DAY || day > i32::from(max) {
            return Err(DateError::InvalidDay { year, month, day, max });
        }

        Ok((year, month, day))
    }

    /// True if this date's year is a leap year. An unparsable year is not.
    pub fn is_leap_year(&self) -> bool {
        self.year.is_some_and(calendar::is_leap_year)
    }

    /// Length of this date's month, or `None` when the month is not 1-12
    pub fn days_in_month(&self) -> Option<u8> {
        calendar::month_length(self.year, self.month?)
    }

    /// Length of this date's year
    pub fn days_in_year(&self) -> i32 {
        self.year.map_or(DAYS_IN_COMMON_YEAR, calendar::days_in_year)
    }

    /// Ordinal day within the year, 1 for January 1st.
    ///
    /// Computed from the fields as they are, so an invalid day gives an
    /// out-of-range ordinal rather than `None`. Overflow gives `None`.
    pub fn day_of_year(&self) -> Option<i32> {
        let month = self.month?;
        let leap_day = i32::from(month > FEBRUARY && self.is_leap_year());
        calendar::days_before_month(month)
            .checked_add(self.day?)?
            .checked_add(leap_day)
    }

    /// Converts to a Julian Day Number. Unparsable dates give `NaN`.
    pub fn to_julian_day(&self) -> JulianDay {
        match (self.year, self.month, self.day) {
            (Some(year), Some(month), Some(day)) => julian::from_civil(year, month, day),
            _ => JulianDay::new(f64::NAN),
        }
    }

    /// Creates a date from a Julian Day Number, flooring any fraction.
    ///
    /// Day numbers before the Gregorian reform are read as Julian calendar dates.
    pub fn from_julian_day(jd: impl Into<JulianDay>) -> Self {
        match julian::to_civil(jd.into()) {
            Some((year, month, day)) => Self::new(year, month, day),
            None => Self::from_parts(None, None, None),
        }
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.year {
            Some(year) => write!(f, "{year}")?,
            None => f.write_str(NOT_A_NUMBER)?,
        }

        for field in [self.month, self.day] {
            f.write_char(DATE_SEPARATOR)?;
            match field {
                Some(value) => write!(f, "{value:02}")?,
                None => f.write_str(NOT_A_NUMBER)?,
            }
        }

        Ok(())
    }
}

impl FromStr for CalendarDate {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for CalendarDate {
    fn from(text: &str) -> Self {
        Self::parse(text)
    }
}

impl From<String> for CalendarDate {
    fn from(text: String) -> Self {
        Self::parse(&text)
    }
}

impl From<&String> for CalendarDate {
    fn from(text: &String) -> Self {
        Self::parse(text)
    }
}

impl PartialOrd for CalendarDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CalendarDate {
    fn cmp(&self, other: &Self) -> Ordering {
        // Year is most significant; an unparsable field sorts first.
        self.year
            .cmp(&other.year)
            .then_with(|| self.month.cmp(&other.month))
            .then_with(|| self.day.cmp(&other.day))
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::parse(&s))
    }
}
