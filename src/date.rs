use std::fmt::{self, Write as _};
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, TimeDelta, TimeZone};

use crate::calendar::{Weekday, days_in_month, shift_month};
use crate::consts::{
    DEFAULT_LAYOUT, INVALID_DISPLAY, JS_TIMESTAMP_LEN, JSON_DATE_LEN, JSON_LAYOUT, MAX_MONTH,
    MAX_YEAR, MIN_YEAR, MONTH_FACTOR, YEAR_FACTOR,
};
use crate::prelude::*;
use crate::{Error, ParseError, Period, RangeError};

/// A calendar day without time-of-day, stored as the integer `YYYYMMDD`.
///
/// `0` is the zero value and stands for an absent date. Any other integer is
/// representable; [`Date::is_valid`] tells whether it holds a real Gregorian
/// day in `MIN_YEAR..=MAX_YEAR`. Ordering is the ordering of the integer,
/// which is chronological for valid dates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Into)]
pub struct Date(i32);

/// Packs components into `YYYYMMDD`, saturating values that overflow `i32`.
/// A saturated value never decodes to a calendar day.
pub(crate) fn pack(year: i32, month: u32, day: u32) -> i32 {
    let packed = i64::from(year) * i64::from(YEAR_FACTOR)
        + i64::from(month) * i64::from(MONTH_FACTOR)
        + i64::from(day);
    i32::try_from(packed).unwrap_or(if packed < 0 { i32::MIN } else { i32::MAX })
}

fn checked_year(year: i64) -> Result<i32, RangeError> {
    i32::try_from(year)
        .ok()
        .filter(|y| (MIN_YEAR..=MAX_YEAR).contains(y))
        .ok_or(RangeError::Year { year })
}

impl Date {
    /// The absent date.
    pub const ZERO: Self = Self(0);

    /// Wraps a raw `YYYYMMDD` integer without validation.
    pub const fn from_raw(raw: i32) -> Self {
        Self(raw)
    }

    /// The stored `YYYYMMDD` integer.
    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Builds a date from its components.
    ///
    /// # Errors
    /// Returns `RangeError::Year` for years outside `MIN_YEAR..=MAX_YEAR`,
    /// `RangeError::Month` for months outside `1..=12` and `RangeError::Day`
    /// when the triple is not a calendar day (e.g. February 30).
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, RangeError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(RangeError::Year {
                year: year.into(),
            });
        }
        if month == 0 || month > MAX_MONTH {
            return Err(RangeError::Month(month));
        }
        NaiveDate::from_ymd_opt(year, month, day).ok_or(RangeError::Day { year, month, day })?;
        Ok(Self(pack(year, month, day)))
    }

    /// Truncates an instant to its UTC calendar day.
    ///
    /// Instants outside `MIN_YEAR..=MAX_YEAR` give a date that is not valid.
    pub fn from_timestamp<Tz: TimeZone>(instant: &DateTime<Tz>) -> Self {
        Self::from(instant.naive_utc().date())
    }

    /// Parses `text` with the default `DD/MM/YYYY` layout.
    ///
    /// # Errors
    /// See [`Date::parse_with_layout`].
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        Self::parse_with_layout(text, DEFAULT_LAYOUT)
    }

    /// Parses `text` with a chrono `strftime` layout; an empty layout means
    /// the default `DD/MM/YYYY`.
    ///
    /// # Errors
    /// Returns `ParseError::EmptyInput` for blank text and `ParseError::Layout`
    /// when the text does not match the layout or its year falls outside
    /// `MIN_YEAR..=MAX_YEAR`.
    pub fn parse_with_layout(text: &str, layout: &str) -> Result<Self, ParseError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        let layout = if layout.is_empty() { DEFAULT_LAYOUT } else { layout };
        let mismatch = || ParseError::Layout {
            input: text.to_owned(),
            layout: layout.to_owned(),
        };

        let naive = NaiveDate::parse_from_str(trimmed, layout).map_err(|_| mismatch())?;
        if !(MIN_YEAR..=MAX_YEAR).contains(&naive.year()) {
            return Err(mismatch());
        }
        Ok(Self::from(naive))
    }

    /// Parses the canonical JSON form (`YYYY-MM-DD`).
    ///
    /// An empty string is the zero date, and a 24-character JavaScript
    /// timestamp (`2020-02-04T03:00:00.000Z`) is reduced to its date prefix.
    ///
    /// # Errors
    /// Returns `ParseError::Layout` naming the input when it is malformed.
    pub fn parse_json(text: &str) -> Result<Self, ParseError> {
        if text.is_empty() {
            return Ok(Self::ZERO);
        }
        let date_part = if text.len() == JS_TIMESTAMP_LEN {
            text.get(..JSON_DATE_LEN).unwrap_or(text)
        } else {
            text
        };
        Self::parse_with_layout(date_part, JSON_LAYOUT).map_err(|_| ParseError::Layout {
            input: text.to_owned(),
            layout: JSON_LAYOUT.to_owned(),
        })
    }

    /// True when this is the absent date.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// True iff the stored integer decodes to a Gregorian day in
    /// `MIN_YEAR..=MAX_YEAR`. The zero date is not valid.
    pub fn is_valid(self) -> bool {
        self.to_naive().is_some()
    }

    /// Year digits of the stored integer.
    #[inline]
    pub const fn year(self) -> i32 {
        self.0 / YEAR_FACTOR
    }

    /// Month digits of the stored integer.
    #[inline]
    pub const fn month(self) -> u32 {
        ((self.0 / MONTH_FACTOR) % MONTH_FACTOR).unsigned_abs()
    }

    /// Day digits of the stored integer.
    #[inline]
    pub const fn day(self) -> u32 {
        (self.0 % MONTH_FACTOR).unsigned_abs()
    }

    /// The chrono equivalent, or `None` when the date is zero or not valid.
    pub fn to_naive(self) -> Option<NaiveDate> {
        if self.0 <= 0 || !(MIN_YEAR..=MAX_YEAR).contains(&self.year()) {
            return None;
        }
        NaiveDate::from_ymd_opt(self.year(), self.month(), self.day())
    }

    pub(crate) fn naive(self) -> Result<NaiveDate, RangeError> {
        self.to_naive().ok_or(RangeError::NotADate(self.0))
    }

    fn within_range(naive: NaiveDate) -> Result<Self, RangeError> {
        checked_year(naive.year().into())?;
        Ok(Self::from(naive))
    }

    /// Shifts the date by `days` (negative values go back).
    ///
    /// # Errors
    /// Returns `RangeError::NotADate` on a zero or invalid receiver and
    /// `RangeError::Year` when the result leaves `MIN_YEAR..=MAX_YEAR`.
    pub fn add_days(self, days: i64) -> Result<Self, RangeError> {
        let naive = self.naive()?;
        let shifted = TimeDelta::try_days(days)
            .and_then(|delta| naive.checked_add_signed(delta))
            .ok_or(RangeError::DayOffset(days))?;
        Self::within_range(shifted)
    }

    /// Shifts the date by whole months, keeping the day of month unless the
    /// destination month is shorter, in which case the day is clamped to its
    /// last day (January 31 plus one month is February 28 or 29).
    ///
    /// # Errors
    /// Returns `RangeError::NotADate` on a zero or invalid receiver and
    /// `RangeError::Year` when the result leaves `MIN_YEAR..=MAX_YEAR`.
    pub fn add_months(self, months: i32) -> Result<Self, RangeError> {
        let naive = self.naive()?;
        let (year, month) = shift_month(naive.year().into(), naive.month(), months.into());
        let year = checked_year(year)?;
        let day = naive.day().min(days_in_month(year, month));
        Ok(Self(pack(year, month, day)))
    }

    /// Shifts the year, keeping month and day. February 29 becomes
    /// February 28 when the target year is not a leap year.
    ///
    /// # Errors
    /// Returns `RangeError::NotADate` on a zero or invalid receiver and
    /// `RangeError::Year` when the result leaves `MIN_YEAR..=MAX_YEAR`.
    pub fn add_years(self, years: i32) -> Result<Self, RangeError> {
        let naive = self.naive()?;
        let year = checked_year(i64::from(naive.year()) + i64::from(years))?;
        let day = naive.day().min(days_in_month(year, naive.month()));
        Ok(Self(pack(year, naive.month(), day)))
    }

    /// Whole days from `earlier` to `self`; negative when `earlier` is
    /// actually later.
    ///
    /// # Errors
    /// Returns `RangeError::NotADate` when either date is zero or invalid.
    pub fn days_between(self, earlier: Self) -> Result<i64, RangeError> {
        Ok(self
            .naive()?
            .signed_duration_since(earlier.naive()?)
            .num_days())
    }

    pub fn weekday(self) -> Option<Weekday> {
        self.to_naive().map(|naive| naive.weekday().into())
    }

    pub fn weekday_name(self) -> Option<&'static str> {
        self.weekday().map(Weekday::name)
    }

    /// Monday to Friday. Zero and invalid dates are never business days.
    pub fn is_business_day(self) -> bool {
        self.weekday().is_some_and(|day| !day.is_weekend())
    }

    /// The first business day on or after this date.
    ///
    /// # Errors
    /// Returns `RangeError::NotADate` on a zero or invalid receiver and
    /// `RangeError::Year` when the search runs past `MAX_YEAR`.
    pub fn next_business_day(self) -> Result<Self, RangeError> {
        let mut current = self;
        while !current.is_business_day() {
            current = current.add_days(1)?;
        }
        Ok(current)
    }

    /// Moves to the next business day on or after this date, then steps
    /// forward `count` business days, skipping weekends. Holidays are not
    /// considered.
    ///
    /// # Errors
    /// Same as [`Date::next_business_day`].
    pub fn add_business_days(self, count: u32) -> Result<Self, RangeError> {
        let mut current = self.next_business_day()?;
        for _ in 0..count {
            current = current.add_days(1)?.next_business_day()?;
        }
        Ok(current)
    }

    /// The month this date belongs to; the zero date maps to the zero period.
    pub const fn to_period(self) -> Period {
        if self.is_zero() {
            Period::ZERO
        } else {
            Period::from_parts_unchecked(self.year(), self.month())
        }
    }

    /// Renders the date with a chrono `strftime` layout.
    ///
    /// # Errors
    /// Returns `RangeError::NotADate` on a zero or invalid receiver and
    /// `ParseError::BadLayout` when the layout cannot be rendered.
    pub fn format_with(self, layout: &str) -> Result<String, Error> {
        let naive = self.naive()?;
        let mut out = String::new();
        write!(out, "{}", naive.format(layout))
            .map_err(|_| ParseError::BadLayout(layout.to_owned()))?;
        Ok(out)
    }

    /// Canonical JSON form `YYYY-MM-DD`, without quotes.
    ///
    /// The stored digits are rendered as they are: the zero date gives
    /// `0000-00-00` and an invalid date its raw components. Serialization
    /// checks [`Date::is_valid`] first and writes `null` for zero.
    pub fn to_json_string(self) -> String {
        format!("{:04}-{:02}-{:02}", self.year(), self.month(), self.day())
    }
}

/// Whole days from `from` to `to`, the reverse of [`Date::days_between`].
///
/// # Errors
/// Returns `RangeError::NotADate` when either date is zero or invalid.
pub fn days_from(from: Date, to: Date) -> Result<i64, RangeError> {
    to.days_between(from)
}

impl From<NaiveDate> for Date {
    fn from(naive: NaiveDate) -> Self {
        Self(pack(naive.year(), naive.month(), naive.day()))
    }
}

impl FromStr for Date {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// `DD/MM/YYYY`; the zero date renders empty and invalid dates as `N/A`.
impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return Ok(());
        }
        if !self.is_valid() {
            return f.write_str(INVALID_DISPLAY);
        }
        write!(f, "{:02}/{:02}/{:04}", self.day(), self.month(), self.year())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    fn ymd(year: i32, month: u32, day: u32) -> Date {
        Date::from_ymd(year, month, day).unwrap()
    }

    #[test]
    fn test_from_ymd_round_trip() {
        for (y, m, d) in [(1000, 1, 1), (2016, 2, 29), (2020, 8, 15), (9999, 12, 31)] {
            let date = ymd(y, m, d);
            assert_eq!((date.year(), date.month(), date.day()), (y, m, d));
            assert!(date.is_valid());
        }
        assert_eq!(ymd(2020, 8, 15).raw(), 20_200_815);
    }

    #[test]
    fn test_from_ymd_rejects_out_of_range() {
        assert_eq!(Date::from_ymd(999, 1, 1), Err(RangeError::Year { year: 999 }));
        assert_eq!(
            Date::from_ymd(10_000, 1, 1),
            Err(RangeError::Year { year: 10_000 })
        );
        assert_eq!(Date::from_ymd(2020, 13, 1), Err(RangeError::Month(13)));
        assert_eq!(Date::from_ymd(2020, 0, 1), Err(RangeError::Month(0)));
        assert!(matches!(
            Date::from_ymd(2017, 2, 30),
            Err(RangeError::Day { day: 30, .. })
        ));
        assert!(Date::from_ymd(2017, 2, 29).is_err());
        assert!(Date::from_ymd(2016, 2, 29).is_ok());
    }

    #[test]
    fn test_parse_default_layout() {
        let date = Date::parse("19/02/2016").unwrap();
        assert_eq!(date, ymd(2016, 2, 19));
        assert_eq!(" 19/02/2016 ".parse::<Date>().unwrap(), date);
    }

    #[test]
    fn test_parse_with_layout() {
        let date = Date::parse_with_layout("2016-02-19", "%Y-%m-%d").unwrap();
        assert_eq!(date, ymd(2016, 2, 19));

        // empty layout falls back to the default
        let date = Date::parse_with_layout("19/02/2016", "").unwrap();
        assert_eq!(date, ymd(2016, 2, 19));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Date::parse(""), Err(ParseError::EmptyInput));
        assert!(matches!(
            Date::parse("2016-02-19"),
            Err(ParseError::Layout { .. })
        ));
        assert!(matches!(Date::parse("30/02/2016"), Err(ParseError::Layout { .. })));
        assert!(matches!(Date::parse("01/01/0999"), Err(ParseError::Layout { .. })));
    }

    #[test]
    fn test_display_round_trip() {
        for date in [ymd(2016, 2, 19), ymd(1999, 12, 31), ymd(2024, 1, 1)] {
            assert_eq!(date.to_string().parse::<Date>().unwrap(), date);
        }
        assert_eq!(ymd(2016, 2, 9).to_string(), "09/02/2016");
    }

    #[test]
    fn test_display_zero_and_invalid() {
        assert_eq!(Date::ZERO.to_string(), "");
        assert_eq!(Date::from_raw(20_170_230).to_string(), "N/A");
    }

    #[test]
    fn test_zero_and_validity() {
        assert!(Date::ZERO.is_zero());
        assert!(!Date::ZERO.is_valid());
        assert_eq!(Date::default(), Date::ZERO);

        let invalid = Date::from_raw(20_171_301);
        assert!(!invalid.is_zero());
        assert!(!invalid.is_valid());
        assert!(!Date::from_raw(9_991_231).is_valid());
        assert!(!Date::from_raw(-20_200_101).is_valid());
        assert!(Date::from_raw(20_200_101).is_valid());
    }

    #[test]
    fn test_from_timestamp_uses_utc_day() {
        let instant = Utc.with_ymd_and_hms(2020, 2, 4, 23, 59, 59).unwrap();
        assert_eq!(Date::from_timestamp(&instant), ymd(2020, 2, 4));

        let offset = FixedOffset::west_opt(3 * 3600).unwrap();
        let instant = offset.with_ymd_and_hms(2020, 2, 4, 22, 0, 0).unwrap();
        assert_eq!(Date::from_timestamp(&instant), ymd(2020, 2, 5));
    }

    #[test]
    fn test_from_naive_out_of_range_is_invalid() {
        let naive = NaiveDate::from_ymd_opt(500, 1, 1).unwrap();
        assert!(!Date::from(naive).is_valid());
        let naive = NaiveDate::from_ymd_opt(200_000, 1, 1).unwrap();
        assert!(!Date::from(naive).is_valid());
    }

    #[test]
    fn test_add_days() {
        assert_eq!(ymd(2023, 12, 31).add_days(1).unwrap(), ymd(2024, 1, 1));
        assert_eq!(ymd(2024, 3, 1).add_days(-1).unwrap(), ymd(2024, 2, 29));
        assert_eq!(ymd(2024, 3, 1).add_days(0).unwrap(), ymd(2024, 3, 1));
        assert_eq!(ymd(2024, 1, 1).add_days(366).unwrap(), ymd(2025, 1, 1));
        assert!(matches!(
            ymd(9999, 12, 31).add_days(1),
            Err(RangeError::Year { year: 10_000 })
        ));
        assert_eq!(Date::ZERO.add_days(1), Err(RangeError::NotADate(0)));
    }

    #[test]
    fn test_add_months_clamps_day() {
        assert_eq!(ymd(2017, 1, 31).add_months(1).unwrap(), ymd(2017, 2, 28));
        assert_eq!(ymd(2016, 1, 31).add_months(1).unwrap(), ymd(2016, 2, 29));
        assert_eq!(ymd(2024, 3, 31).add_months(-1).unwrap(), ymd(2024, 2, 29));
        assert_eq!(ymd(2024, 5, 31).add_months(1).unwrap(), ymd(2024, 6, 30));
    }

    #[test]
    fn test_add_months_carries_years() {
        assert_eq!(ymd(2016, 12, 19).add_months(13).unwrap(), ymd(2018, 1, 19));
        assert_eq!(ymd(2016, 12, 19).add_months(1).unwrap(), ymd(2017, 1, 19));
        assert_eq!(ymd(2016, 1, 19).add_months(-1).unwrap(), ymd(2015, 12, 19));
        assert_eq!(ymd(2016, 1, 19).add_months(-25).unwrap(), ymd(2013, 12, 19));
        assert_eq!(ymd(2016, 6, 19).add_months(120).unwrap(), ymd(2026, 6, 19));
    }

    #[test]
    fn test_add_months_is_invertible_without_clamping() {
        let start = ymd(2020, 8, 15);
        for n in [-30, -13, -1, 0, 1, 5, 12, 27] {
            let there = start.add_months(n).unwrap();
            assert_eq!(there.add_months(-n).unwrap(), start, "n = {n}");
        }
    }

    #[test]
    fn test_add_months_past_max_year() {
        assert_eq!(
            ymd(9999, 12, 1).add_months(1),
            Err(RangeError::Year { year: 10_000 })
        );
        assert_eq!(
            ymd(1000, 1, 1).add_months(-1),
            Err(RangeError::Year { year: 999 })
        );
    }

    #[test]
    fn test_add_years() {
        assert_eq!(ymd(2020, 8, 15).add_years(3).unwrap(), ymd(2023, 8, 15));
        assert_eq!(ymd(2020, 8, 15).add_years(-20).unwrap(), ymd(2000, 8, 15));
        assert_eq!(ymd(2024, 2, 29).add_years(1).unwrap(), ymd(2025, 2, 28));
        assert_eq!(
            ymd(9999, 1, 1).add_years(1),
            Err(RangeError::Year { year: 10_000 })
        );
    }

    #[test]
    fn test_days_between() {
        let later = ymd(2024, 3, 1);
        let earlier = ymd(2024, 2, 1);
        assert_eq!(later.days_between(earlier).unwrap(), 29);
        assert_eq!(earlier.days_between(later).unwrap(), -29);
        assert_eq!(days_from(earlier, later).unwrap(), 29);
        assert_eq!(days_from(later, earlier).unwrap(), -29);
        assert_eq!(later.days_between(later).unwrap(), 0);
        assert!(later.days_between(Date::ZERO).is_err());
    }

    #[test]
    fn test_weekday() {
        // 2024-01-01 is a Monday
        assert_eq!(ymd(2024, 1, 1).weekday(), Some(Weekday::Monday));
        assert_eq!(ymd(2024, 1, 7).weekday_name(), Some("Sunday"));
        assert_eq!(Date::ZERO.weekday(), None);
    }

    #[test]
    fn test_is_business_day_over_a_week() {
        let expected = [true, true, true, true, true, false, false];
        let monday = ymd(2024, 1, 1);
        for (offset, business) in expected.iter().enumerate() {
            let day = monday.add_days(offset as i64).unwrap();
            assert_eq!(day.is_business_day(), *business, "{day}");
        }
        assert!(!Date::ZERO.is_business_day());
    }

    #[test]
    fn test_next_business_day() {
        // Saturday and Sunday move to Monday
        assert_eq!(ymd(2024, 1, 6).next_business_day().unwrap(), ymd(2024, 1, 8));
        assert_eq!(ymd(2024, 1, 7).next_business_day().unwrap(), ymd(2024, 1, 8));
        // idempotent on a business day
        assert_eq!(ymd(2024, 1, 5).next_business_day().unwrap(), ymd(2024, 1, 5));
        assert!(Date::ZERO.next_business_day().is_err());
    }

    #[test]
    fn test_add_business_days() {
        let friday = ymd(2024, 1, 5);
        assert_eq!(friday.add_business_days(0).unwrap(), friday);
        assert_eq!(friday.add_business_days(1).unwrap(), ymd(2024, 1, 8));
        assert_eq!(friday.add_business_days(6).unwrap(), ymd(2024, 1, 15));

        let saturday = ymd(2024, 1, 6);
        assert_eq!(saturday.add_business_days(0).unwrap(), ymd(2024, 1, 8));
        assert_eq!(saturday.add_business_days(1).unwrap(), ymd(2024, 1, 9));

        let monday = ymd(2024, 1, 8);
        assert_eq!(monday.add_business_days(5).unwrap(), ymd(2024, 1, 15));
    }

    #[test]
    fn test_to_period() {
        let period = ymd(2020, 8, 15).to_period();
        assert_eq!((period.year(), period.month()), (2020, 8));
        assert!(Date::ZERO.to_period().is_zero());
    }

    #[test]
    fn test_format_with() {
        let date = ymd(2020, 8, 5);
        assert_eq!(date.format_with("%Y/%m/%d").unwrap(), "2020/08/05");
        assert_eq!(date.format_with("%d.%m.%y").unwrap(), "05.08.20");
        assert!(matches!(
            Date::ZERO.format_with("%Y"),
            Err(Error::Range(RangeError::NotADate(0)))
        ));
    }

    #[test]
    fn test_format_with_unrenderable_layout() {
        let result = ymd(2020, 8, 5).format_with("%Q");
        assert_eq!(
            result,
            Err(Error::Parse(ParseError::BadLayout("%Q".to_owned())))
        );
    }

    #[test]
    fn test_parse_json() {
        assert_eq!(Date::parse_json("2016-02-19").unwrap(), ymd(2016, 2, 19));
        assert_eq!(Date::parse_json("").unwrap(), Date::ZERO);
        assert_eq!(
            Date::parse_json("2020-02-04T03:00:00.000Z").unwrap(),
            ymd(2020, 2, 4)
        );
        assert!(matches!(
            Date::parse_json("19/02/2016"),
            Err(ParseError::Layout { .. })
        ));
        assert!(Date::parse_json("2016-13-01").is_err());
    }

    #[test]
    fn test_json_string_round_trip() {
        let date = ymd(2016, 2, 19);
        assert_eq!(date.to_json_string(), "2016-02-19");
        assert_eq!(Date::ZERO.to_json_string(), "0000-00-00");
        assert_eq!(Date::from_raw(20_161_340).to_json_string(), "2016-13-40");
        assert_eq!(Date::parse_json(&date.to_json_string()).unwrap(), date);
    }

    #[test]
    fn test_ordering_follows_calendar() {
        assert!(ymd(2019, 12, 31) < ymd(2020, 1, 1));
        assert!(ymd(2020, 1, 31) < ymd(2020, 2, 1));
        assert!(Date::ZERO < ymd(1000, 1, 1));
    }
}
