use serde::{Deserialize, Serialize};

use crate::consts::{
    FEBRUARY, GREGORIAN_REFORM_JDN, JULIAN_CENTURY_ANCHOR, JULIAN_CENTURY_LENGTH,
    JULIAN_DAY_OFFSET, JULIAN_MONTH_LENGTH, JULIAN_YEAR_ANCHOR, JULIAN_YEAR_LENGTH,
    JULIAN_YEAR_OFFSET, MONTHS_PER_YEAR,
};
use crate::prelude::*;

/// A Julian Day Number: a continuous day count anchored to the Julian epoch.
///
/// Values produced by [`CalendarDate::to_julian_day`](crate::CalendarDate::to_julian_day)
/// are always whole numbers; fractional values are accepted on the way in and
/// floored to a calendar day.
#[derive(
    Debug, Clone, Copy, PartialEq, PartialOrd, Display, Deref, From, FromStr, Into, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct JulianDay(f64);

impl JulianDay {
    /// Wraps a raw day count
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Returns the raw day count
    #[inline]
    pub const fn get(self) -> f64 {
        self.0
    }

    /// True for days before the Gregorian reform, where the inverse conversion
    /// switches to the Julian calendar
    pub fn is_before_reform(self) -> bool {
        self.0 < GREGORIAN_REFORM_JDN
    }
}

/// Forward conversion of a (year, month, day) triple.
///
/// January and February count as months 13 and 14 of the previous year.
pub(crate) fn from_civil(year: i32, month: i32, day: i32) -> JulianDay {
    let (year, month) = if month <= FEBRUARY {
        (f64::from(year) - 1.0, f64::from(month + MONTHS_PER_YEAR))
    } else {
        (f64::from(year), f64::from(month))
    };

    let century = (year / 100.0).floor();
    let correction = 2.0 - century + (century / 4.0).floor();

    JulianDay(
        (JULIAN_YEAR_LENGTH * (year + JULIAN_YEAR_OFFSET)).floor()
            + (JULIAN_MONTH_LENGTH * (month + 1.0)).floor()
            + f64::from(day)
            + correction
            - JULIAN_DAY_OFFSET,
    )
}

/// Inverse conversion. Returns `None` when the day count is not finite or the
/// resulting year does not fit in an `i32`.
pub(crate) fn to_civil(jd: JulianDay) -> Option<(i32, i32, i32)> {
    let d = jd.0;
    if !d.is_finite() {
        return None;
    }

    let alpha = ((d - JULIAN_CENTURY_ANCHOR) / JULIAN_CENTURY_LENGTH).floor();
    let a = if jd.is_before_reform() {
        d
    } else {
        d + 1.0 + alpha - (alpha / 4.0).floor()
    };

    let b = a + JULIAN_DAY_OFFSET;
    let c = ((b - JULIAN_YEAR_ANCHOR) / JULIAN_YEAR_LENGTH).floor();
    let days = (JULIAN_YEAR_LENGTH * c).floor();
    let e = ((b - days) / JULIAN_MONTH_LENGTH).floor();

    let day = (b - days - (JULIAN_MONTH_LENGTH * e).floor()).floor();
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > f64::from(FEBRUARY) {
        c - JULIAN_YEAR_OFFSET
    } else {
        c - (JULIAN_YEAR_OFFSET - 1.0)
    };

    Some((to_i32(year)?, to_i32(month)?, to_i32(day)?))
}

#[allow(clippy::cast_possible_truncation)]
fn to_i32(value: f64) -> Option<i32> {
    (value >= f64::from(i32::MIN) && value <= f64::from(i32::MAX)).then_some(value as i32)
}
