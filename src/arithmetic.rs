//! Year, month and day arithmetic.
//!
//! Every operation returns a new [`CalendarDate`]. Month and day operations
//! use the magnitude of their argument only; the direction comes from the
//! method name. Fields that are not numbers stay that way.

use crate::calendar::month_length;
use crate::consts::{DECEMBER, JANUARY, MIN_DAY, MONTHS_PER_YEAR};
use crate::CalendarDate;

impl CalendarDate {
    /// Shifts the year by `years`. Month and day are kept, so Feb 29 can land
    /// on a common year and become invalid.
    pub fn add_years(self, years: i32) -> Self {
        Self::from_parts(self.year.and_then(|y| y.checked_add(years)), self.month, self.day)
    }

    /// Shifts the year back by `years`. See [`add_years`](Self::add_years).
    pub fn subtract_years(self, years: i32) -> Self {
        Self::from_parts(self.year.and_then(|y| y.checked_sub(years)), self.month, self.day)
    }

    /// Moves forward `|months|` months, carrying into the year, then clamps the
    /// day to the length of the target month.
    ///
    /// ```
    /// use calendar_date::CalendarDate;
    ///
    /// assert_eq!(CalendarDate::new(2015, 1, 31).add_months(1), CalendarDate::new(2015, 2, 28));
    /// ```
    pub fn add_months(self, months: i32) -> Self {
        let Some(start) = self.month else {
            return self;
        };

        let per_year = i64::from(MONTHS_PER_YEAR);
        let mut month = i64::from(start) + i64::from(months.unsigned_abs());
        let mut year = self.year;

        if month > i64::from(DECEMBER) {
            let carry = (month - 1) / per_year;
            month -= carry * per_year;
            year = year.and_then(|y| y.checked_add(i32::try_from(carry).ok()?));
        }

        self.clamp_into(year, month)
    }

    /// Moves back `|months|` months, borrowing from the year, then clamps the
    /// day to the length of the target month.
    pub fn subtract_months(self, months: i32) -> Self {
        let Some(start) = self.month else {
            return self;
        };

        let per_year = i64::from(MONTHS_PER_YEAR);
        let mut month = i64::from(start) - i64::from(months.unsigned_abs());
        let mut year = self.year;

        if month < i64::from(JANUARY) {
            let borrow = (per_year - month) / per_year;
            month += borrow * per_year;
            year = year.and_then(|y| y.checked_sub(i32::try_from(borrow).ok()?));
        }

        self.clamp_into(year, month)
    }

    fn clamp_into(self, year: Option<i32>, month: i64) -> Self {
        let month = i32::try_from(month).ok();
        let day = match (self.day, month.and_then(|m| month_length(year, m))) {
            (Some(day), Some(length)) => Some(day.min(i32::from(length))),
            (day, _) => day,
        };

        Self::from_parts(year, month, day)
    }

    /// Moves forward `|days|` days, one month at a time.
    ///
    /// The walk is linear in the number of months crossed.
    pub fn add_days(self, days: i32) -> Self {
        let (Some(start), Some(mut month)) = (self.day, self.month) else {
            return self;
        };

        let mut year = self.year;
        let mut day = i64::from(start) + i64::from(days.unsigned_abs());

        while let Some(length) = month_length(year, month) {
            let length = i64::from(length);
            if day <= length {
                break;
            }

            day -= length;
            month += 1;

            if month > DECEMBER {
                month = JANUARY;
                year = year.and_then(|y| y.checked_add(1));
            }
        }

        Self::from_parts(year, Some(month), i32::try_from(day).ok())
    }

    /// Moves back `|days|` days, borrowing the length of each previous month.
    pub fn subtract_days(self, days: i32) -> Self {
        let (Some(start), Some(mut month)) = (self.day, self.month) else {
            return self;
        };

        let mut year = self.year;
        let mut day = i64::from(start) - i64::from(days.unsigned_abs());

        while day < i64::from(MIN_DAY) {
            if month <= JANUARY {
                month = DECEMBER + 1;
                year = year.and_then(|y| y.checked_sub(1));
            }

            let Some(length) = month_length(year, month - 1) else {
                break;
            };

            day += i64::from(length);
            month -= 1;
        }

        Self::from_parts(year, Some(month), i32::try_from(day).ok())
    }
}
