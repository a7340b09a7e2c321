/// Number of months in a year
pub const MONTHS_PER_YEAR: i32 = 12;

/// First day of month
pub const MIN_DAY: i32 = 1;

/// Month number for January
pub const JANUARY: i32 = 1;
/// Month number for February
pub const FEBRUARY: i32 = 2;
/// Month number for December
pub const DECEMBER: i32 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Days in a common year
pub const DAYS_IN_COMMON_YEAR: i32 = 365;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';

/// Rendering of a field that could not be parsed
pub const NOT_A_NUMBER: &str = "NaN";

/// First Julian Day Number of the Gregorian calendar (1582-10-15)
pub const GREGORIAN_REFORM_JDN: f64 = 2_299_161.0;

// Coefficients of the Julian Day Number polynomial.
pub(crate) const JULIAN_YEAR_OFFSET: f64 = 4716.0;
pub(crate) const JULIAN_DAY_OFFSET: f64 = 1524.0;
pub(crate) const JULIAN_YEAR_LENGTH: f64 = 365.25;
pub(crate) const JULIAN_MONTH_LENGTH: f64 = 30.6001;
pub(crate) const JULIAN_CENTURY_ANCHOR: f64 = 1_867_216.25;
pub(crate) const JULIAN_CENTURY_LENGTH: f64 = 36_524.25;
pub(crate) const JULIAN_YEAR_ANCHOR: f64 = 122.1;
