use std::fmt;
use std::str::FromStr;

use crate::calendar::{days_in_month, shift_month};
use crate::consts::{
    DEFAULT_MAX_PERIOD_YEAR, DEFAULT_MIN_PERIOD_YEAR, INVALID_DISPLAY, JS_TIMESTAMP_LEN,
    JSON_PERIOD_LEN, JSON_SEPARATOR, MAX_MONTH, MIN_DAY, PERIOD_SEPARATOR,
};
use crate::date::pack;
use crate::{Date, ParseError, ValidationError};

/// Closed range of years in which a [`Period`] counts as valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearWindow {
    min: i32,
    max: i32,
}

impl YearWindow {
    /// `1900..=2200`
    pub const DEFAULT: Self = Self {
        min: DEFAULT_MIN_PERIOD_YEAR,
        max: DEFAULT_MAX_PERIOD_YEAR,
    };

    /// # Errors
    /// Returns `ValidationError::EmptyWindow` if `min > max`.
    pub const fn new(min: i32, max: i32) -> Result<Self, ValidationError> {
        if min > max {
            return Err(ValidationError::EmptyWindow { min, max });
        }
        Ok(Self { min, max })
    }

    pub const fn min(self) -> i32 {
        self.min
    }

    pub const fn max(self) -> i32 {
        self.max
    }

    pub const fn contains(self, year: i32) -> bool {
        self.min <= year && year <= self.max
    }
}

impl Default for YearWindow {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// How a [`Period`] is rendered for display: `03/2020` or `2020/03`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PeriodFormat {
    pub separator: char,
    pub month_first: bool,
}

impl Default for PeriodFormat {
    fn default() -> Self {
        Self {
            separator: PERIOD_SEPARATOR,
            month_first: true,
        }
    }
}

/// A calendar month of a particular year.
///
/// `(0, 0)` is the zero value and stands for an absent period. Other values
/// outside `1..=12` or outside the year window are representable but not
/// valid, so callers can decide when to check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Period {
    year: i32,
    month: u32,
}

impl Period {
    /// The absent period.
    pub const ZERO: Self = Self { year: 0, month: 0 };

    /// Builds a period valid within the default year window.
    ///
    /// # Errors
    /// Returns `ValidationError::Month` for months outside `1..=12` and
    /// `ValidationError::Year` for years outside `1900..=2200`.
    pub const fn new(year: i32, month: u32) -> Result<Self, ValidationError> {
        Self::new_in(year, month, YearWindow::DEFAULT)
    }

    /// Builds a period valid within `window`.
    ///
    /// # Errors
    /// Returns `ValidationError::Month` for months outside `1..=12` and
    /// `ValidationError::Year` for years outside `window`.
    pub const fn new_in(year: i32, month: u32, window: YearWindow) -> Result<Self, ValidationError> {
        if month == 0 || month > MAX_MONTH {
            return Err(ValidationError::Month(month));
        }
        if !window.contains(year) {
            return Err(ValidationError::Year {
                year,
                min: window.min,
                max: window.max,
            });
        }
        Ok(Self { year, month })
    }

    /// Builds a period that is known to be valid.
    ///
    /// # Panics
    /// Panics when [`Period::new`] would return an error. Use it where an
    /// invalid period is a programming error, not a runtime condition.
    pub fn must(year: i32, month: u32) -> Self {
        match Self::new(year, month) {
            Ok(period) => period,
            Err(err) => panic!("{err}"),
        }
    }

    /// Wraps the components without validation.
    pub const fn from_parts_unchecked(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    #[inline]
    pub const fn year(self) -> i32 {
        self.year
    }

    #[inline]
    pub const fn month(self) -> u32 {
        self.month
    }

    pub const fn is_zero(self) -> bool {
        self.year == 0 && self.month == 0
    }

    /// Valid within the default year window.
    pub const fn is_valid(self) -> bool {
        self.is_valid_in(YearWindow::DEFAULT)
    }

    pub const fn is_valid_in(self, window: YearWindow) -> bool {
        self.month >= 1 && self.month <= MAX_MONTH && window.contains(self.year)
    }

    /// Adds `months` (negative values go back), carrying into the year as
    /// often as needed. The zero period stays zero.
    pub fn add_months(self, months: i32) -> Self {
        if self.is_zero() {
            return self;
        }
        let (year, month) = shift_month(self.year.into(), self.month, months.into());
        let year = i32::try_from(year).unwrap_or(if year < 0 { i32::MIN } else { i32::MAX });
        Self { year, month }
    }

    pub fn is_before(self, other: Self) -> bool {
        self < other
    }

    pub fn is_before_or_equal(self, other: Self) -> bool {
        self <= other
    }

    pub fn is_after(self, other: Self) -> bool {
        self > other
    }

    pub fn is_after_or_equal(self, other: Self) -> bool {
        self >= other
    }

    /// First day of the month. The zero period gives the zero date; a period
    /// with a month outside `1..=12` gives a date that is not valid.
    pub fn first_day(self) -> Date {
        if self.is_zero() {
            return Date::ZERO;
        }
        Date::from_raw(pack(self.year, self.month, MIN_DAY))
    }

    /// Last day of the month, honouring leap years.
    pub fn last_day(self) -> Date {
        if self.is_zero() {
            return Date::ZERO;
        }
        Date::from_raw(pack(
            self.year,
            self.month,
            days_in_month(self.year, self.month),
        ))
    }

    /// Every period from `self` through `end`, inclusive.
    pub fn months_through(self, end: Self) -> Months {
        let pending = (!self.is_zero() && !end.is_zero() && self <= end).then_some((self, end));
        Months { pending }
    }

    /// Renders the period with a configurable separator and component order.
    /// The zero period renders empty and invalid periods as `N/A`.
    pub fn format_with(self, format: &PeriodFormat) -> String {
        if self.is_zero() {
            return String::new();
        }
        if !self.is_valid() {
            return INVALID_DISPLAY.to_owned();
        }
        if format.month_first {
            format!("{:02}{}{:04}", self.month, format.separator, self.year)
        } else {
            format!("{:04}{}{:02}", self.year, format.separator, self.month)
        }
    }

    /// Parses a rendering produced by [`Period::format_with`].
    ///
    /// # Errors
    /// Returns `ParseError::InvalidFormat` when the text does not have two
    /// numeric components and `ParseError::InvalidMonth` when the month is
    /// outside `1..=12`.
    pub fn parse_with(text: &str, format: &PeriodFormat) -> Result<Self, ParseError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        let (first, second) = split_pair(trimmed, format.separator)?;
        let (month, year) = if format.month_first {
            (first, second)
        } else {
            (second, first)
        };
        Self::from_text_parts(trimmed, year, month)
    }

    /// Canonical JSON form `YYYY-MM`, without quotes.
    ///
    /// The components are rendered as they are: the zero period gives
    /// `0000-00` and an invalid period its raw year and month. Serialization
    /// checks [`Period::is_valid`] first and writes `null` for zero.
    pub fn to_json_string(self) -> String {
        format!("{:04}{JSON_SEPARATOR}{:02}", self.year, self.month)
    }

    /// Parses the canonical JSON form (`YYYY-MM`).
    ///
    /// An empty string is the zero period, and a 24-character JavaScript
    /// timestamp (`2020-02-04T03:00:00.000Z`) is reduced to its month prefix.
    /// The year window is not enforced here; check [`Period::is_valid`].
    ///
    /// # Errors
    /// Returns `ParseError::InvalidFormat` naming the input when it is
    /// malformed and `ParseError::InvalidMonth` when the month is outside
    /// `1..=12`.
    pub fn parse_json(text: &str) -> Result<Self, ParseError> {
        if text.is_empty() {
            return Ok(Self::ZERO);
        }
        let period_part = if text.len() == JS_TIMESTAMP_LEN {
            text.get(..JSON_PERIOD_LEN).unwrap_or(text)
        } else {
            text
        };
        let (year, month) = split_pair(period_part, JSON_SEPARATOR)
            .map_err(|_| ParseError::InvalidFormat(text.to_owned()))?;
        Self::from_text_parts(text, year, month)
    }

    fn from_text_parts(input: &str, year: &str, month: &str) -> Result<Self, ParseError> {
        let invalid = || ParseError::InvalidFormat(input.to_owned());
        let year = year.parse::<i32>().map_err(|_| invalid())?;
        let month = month.parse::<i64>().map_err(|_| invalid())?;
        match u32::try_from(month) {
            Ok(month) if (1..=MAX_MONTH).contains(&month) => Ok(Self { year, month }),
            _ => Err(ParseError::InvalidMonth {
                input: input.to_owned(),
                month,
            }),
        }
    }
}

fn split_pair(text: &str, separator: char) -> Result<(&str, &str), ParseError> {
    let mut parts = text.split(separator).map(str::trim);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(first), Some(second), None) => Ok((first, second)),
        _ => Err(ParseError::InvalidFormat(text.to_owned())),
    }
}

impl FromStr for Period {
    type Err = ParseError;

    /// Parses the canonical `YYYY-MM` form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        Self::parse_json(trimmed)
    }
}

/// `MM/YYYY`; the zero period renders empty and invalid periods as `N/A`.
impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with(&PeriodFormat::default()))
    }
}

/// Iterator returned by [`Period::months_through`].
#[derive(Debug, Clone)]
pub struct Months {
    pending: Option<(Period, Period)>,
}

impl Iterator for Months {
    type Item = Period;

    fn next(&mut self) -> Option<Period> {
        let (current, end) = self.pending?;
        let following = current.add_months(1);
        self.pending = (following > current && following <= end).then_some((following, end));
        Some(current)
    }
}
