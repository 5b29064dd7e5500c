use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_MONTH, MONTHS_PER_YEAR,
};
use crate::prelude::*;

/// Day of the week, Sunday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

impl Weekday {
    /// Number of days since Sunday (`0..=6`)
    #[inline]
    pub const fn number_from_sunday(self) -> u32 {
        self as u32
    }

    /// Days to go back from this weekday to reach the previous (or same) Monday
    #[inline]
    pub const fn days_since_monday(self) -> u32 {
        (self as u32 + 6) % 7
    }

    /// English name from the fixed name table
    pub const fn name(self) -> &'static str {
        WEEKDAY_NAMES[self as usize]
    }

    /// Saturday or Sunday
    pub const fn is_weekend(self) -> bool {
        matches!(self, Self::Saturday | Self::Sunday)
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Sun => Self::Sunday,
            chrono::Weekday::Mon => Self::Monday,
            chrono::Weekday::Tue => Self::Tuesday,
            chrono::Weekday::Wed => Self::Wednesday,
            chrono::Weekday::Thu => Self::Thursday,
            chrono::Weekday::Fri => Self::Friday,
            chrono::Weekday::Sat => Self::Saturday,
        }
    }
}

pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Length of `month` in `year`; 0 when the month is outside `1..=12`.
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    if month == 0 || month > MAX_MONTH {
        return 0;
    }
    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Moves `(year, month)` by `months`, carrying whole years in either direction.
/// Months outside `1..=12` are normalized as part of the carry.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) const fn shift_month(year: i64, month: u32, months: i64) -> (i64, u32) {
    let total = year * MONTHS_PER_YEAR + (month as i64 - 1) + months;
    (
        total.div_euclid(MONTHS_PER_YEAR),
        (total.rem_euclid(MONTHS_PER_YEAR) + 1) as u32,
    )
}
