/// Minimum year a valid `Date` can hold (inclusive)
pub const MIN_YEAR: i32 = 1000;
/// Maximum year a valid `Date` can hold (inclusive)
pub const MAX_YEAR: i32 = 9999;

/// Default lower bound of the window in which a `Period` is considered valid
pub const DEFAULT_MIN_PERIOD_YEAR: i32 = 1900;
/// Default upper bound of the window in which a `Period` is considered valid
pub const DEFAULT_MAX_PERIOD_YEAR: i32 = 2200;

/// Maximum valid month (December)
pub const MAX_MONTH: u32 = 12;
/// Month number for January
pub const JANUARY: u32 = 1;
/// Month number for February
pub const FEBRUARY: u32 = 2;
/// Months in a year, used for carrying in month arithmetic
pub const MONTHS_PER_YEAR: i64 = 12;
/// Days in a week, used for weekly series
pub const DAYS_PER_WEEK: i64 = 7;

/// First day of month
pub const MIN_DAY: u32 = 1;
/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u32 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u32; 13] = [
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

/// Multipliers packing a date into its `YYYYMMDD` integer form
pub(crate) const YEAR_FACTOR: i32 = 10_000;
pub(crate) const MONTH_FACTOR: i32 = 100;

/// Default text layout for dates: `DD/MM/YYYY`
pub const DEFAULT_LAYOUT: &str = "%d/%m/%Y";
/// Canonical JSON layout for dates: `YYYY-MM-DD`
pub const JSON_LAYOUT: &str = "%Y-%m-%d";

/// Component separator of the canonical JSON forms
pub const JSON_SEPARATOR: char = '-';
/// Default separator between month and year when displaying a `Period`
pub const PERIOD_SEPARATOR: char = '/';

/// Length of a JavaScript `Date.toJSON()` string, e.g. `2020-02-04T03:00:00.000Z`
pub const JS_TIMESTAMP_LEN: usize = 24;
/// Length of the `YYYY-MM-DD` prefix of such a timestamp
pub(crate) const JSON_DATE_LEN: usize = 10;
/// Length of the `YYYY-MM` prefix of such a timestamp
pub(crate) const JSON_PERIOD_LEN: usize = 7;

/// Rendering of a non-zero value that does not hold a calendar day
pub const INVALID_DISPLAY: &str = "N/A";
