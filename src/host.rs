//! Conversions to and from `chrono`, which stands in for the host calendar.

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, Weekday};
use tracing::{debug, trace};

use crate::{CalendarDate, DateError};

impl CalendarDate {
    /// Today's date in the local time zone
    pub fn today() -> Self {
        let now = Local::now();
        trace!(%now, "reading today's date from the wall clock");
        Self::from_timestamp(&now)
    }

    /// Takes the year, month and day of any `chrono` date or date-time.
    pub fn from_timestamp<T: Datelike>(instant: &T) -> Self {
        Self::from_parts(
            Some(instant.year()),
            i32::try_from(instant.month()).ok(),
            i32::try_from(instant.day()).ok(),
        )
    }

    /// Converts to a `chrono` date.
    ///
    /// # Errors
    /// Returns the validation error for invalid dates, or
    /// [`DateError::Unrepresentable`] when the year is outside chrono's range.
    pub fn to_naive_date(&self) -> Result<NaiveDate, DateError> {
        let (year, month, day) = self.checked_parts()?;
        NaiveDate::from_ymd_opt(year, month.unsigned_abs(), day.unsigned_abs()).ok_or_else(|| {
            debug!(date = %self, "date is outside chrono's supported range");
            DateError::Unrepresentable(*self)
        })
    }

    /// Midnight at the start of this date.
    ///
    /// # Errors
    /// Same as [`to_naive_date`](Self::to_naive_date).
    pub fn to_timestamp(&self) -> Result<NaiveDateTime, DateError> {
        self.to_naive_date()?
            .and_hms_opt(0, 0, 0)
            .ok_or(DateError::Unrepresentable(*self))
    }

    /// Day of the week, or `None` if the date cannot be converted.
    pub fn day_of_week(&self) -> Option<Weekday> {
        self.to_naive_date().ok().map(|date| date.weekday())
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self::from_timestamp(&date)
    }
}

impl TryFrom<CalendarDate> for NaiveDate {
    type Error = DateError;

    fn try_from(date: CalendarDate) -> Result<Self, Self::Error> {
        date.to_naive_date()
    }
}
