use crate::consts::{MAX_MONTH, MAX_YEAR, MIN_YEAR};
use crate::prelude::*;

/// Text or bytes that do not match the expected layout.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Empty date string")]
    EmptyInput,
    #[display(fmt = "Invalid date format: {_0:?}")]
    InvalidFormat(String),
    #[display(fmt = "Cannot parse {input:?} with layout {layout:?}")]
    Layout { input: String, layout: String },
    #[display(fmt = "Unusable layout {_0:?}")]
    BadLayout(String),
    #[display(fmt = "Invalid month in {input:?}: {month} (must be 1-{})", MAX_MONTH)]
    InvalidMonth { input: String, month: i64 },
    #[display(fmt = "{_0} is not a YYYYMMDD calendar day")]
    NotADate(i32),
    #[display(fmt = "Expected {expected} bytes, found {found}")]
    InvalidLength { expected: usize, found: usize },
    #[display(fmt = "Date bytes are not UTF-8: {_0:?}")]
    Utf8(String),
}

impl std::error::Error for ParseError {}

/// A component or an arithmetic result outside the representable calendar.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    #[error("year {year} outside the supported range {min}-{max}", min = MIN_YEAR, max = MAX_YEAR)]
    Year { year: i64 },

    #[error("month {0} outside 1-{max}", max = MAX_MONTH)]
    Month(u32),

    #[error("{year:04}-{month:02}-{day:02} is not a calendar day")]
    Day { year: i32, month: u32, day: u32 },

    /// The receiver is the zero value or holds no calendar day.
    #[error("{0} does not hold a calendar day")]
    NotADate(i32),

    #[error("period {year:04}-{month:02} is not valid")]
    InvalidPeriod { year: i32, month: u32 },

    #[error("infinite dates cannot be represented")]
    Infinity,

    #[error("day offset {0} is outside the representable calendar")]
    DayOffset(i64),
}

/// Well-formed input rejected by domain rules.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("month {0} is not between 1 and {max}", max = MAX_MONTH)]
    Month(u32),

    #[error("year {year} outside the valid window {min}-{max}")]
    Year { year: i32, min: i32, max: i32 },

    #[error("empty year window: {min} > {max}")]
    EmptyWindow { min: i32, max: i32 },
}

/// Any error produced by this crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Range(#[from] RangeError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
