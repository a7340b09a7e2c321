//! Gregorian calendar rules shared by every date operation.
//!
//! These take the year and month explicitly, so callers can ask about a month
//! other than the one a [`CalendarDate`](crate::CalendarDate) holds.

use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_COMMON_YEAR, DAYS_IN_MONTH, DECEMBER, FEBRUARY, FEBRUARY_DAYS_LEAP,
    GREGORIAN_CYCLE, JANUARY, LEAP_YEAR_CYCLE,
};

const COMMON_YEAR: i32 = 1;

/// Returns true if `year` is a leap year in the proleptic Gregorian calendar.
///
/// Divisible by 4, and either not divisible by 100 or divisible by 400.
pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Returns the length of `month` in `year`, or `None` when `month` is not in `1..=12`.
#[allow(clippy::cast_sign_loss)]
pub const fn days_in_month(year: i32, month: i32) -> Option<u8> {
    if month < JANUARY || month > DECEMBER {
        return None;
    }

    if month == FEBRUARY && is_leap_year(year) {
        Some(FEBRUARY_DAYS_LEAP)
    } else {
        Some(DAYS_IN_MONTH[month as usize])
    }
}

/// Returns 366 for leap years and 365 otherwise.
pub const fn days_in_year(year: i32) -> i32 {
    if is_leap_year(year) {
        DAYS_IN_COMMON_YEAR + 1
    } else {
        DAYS_IN_COMMON_YEAR
    }
}

/// Month length where the year may be unparsable; an unknown year counts as
/// a common year.
pub(crate) const fn month_length(year: Option<i32>, month: i32) -> Option<u8> {
    match year {
        Some(year) => days_in_month(year, month),
        None => days_in_month(COMMON_YEAR, month),
    }
}

/// Sum of the (common year) lengths of every month before `month`.
#[allow(clippy::cast_sign_loss)]
pub(crate) fn days_before_month(month: i32) -> i32 {
    let end = month.clamp(JANUARY, DECEMBER + 1) as usize;
    DAYS_IN_MONTH[1..end].iter().map(|&d| i32::from(d)).sum()
}
