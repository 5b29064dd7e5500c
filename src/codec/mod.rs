//! Conversions between the value types and external representations.
//!
//! Every codec maps through the same three states: zero (absent, `None`),
//! valid (`Some(day)`) and invalid non-zero (an error on encode).

pub mod document;
mod json;
pub mod sql;
pub mod wire;

use chrono::{Datelike, NaiveDate};

use crate::{Date, Period, RangeError};

/// Bridge between a value type and a plain calendar day.
pub trait CivilValue: Sized {
    /// `Ok(None)` for the zero value, `Ok(Some(day))` for a valid value.
    ///
    /// # Errors
    /// Returns a `RangeError` for a non-zero value that is not valid.
    fn to_civil(&self) -> Result<Option<NaiveDate>, RangeError>;

    /// Builds a value from a day, or the zero value from `None`.
    fn from_civil(day: Option<NaiveDate>) -> Self;
}

impl CivilValue for Date {
    fn to_civil(&self) -> Result<Option<NaiveDate>, RangeError> {
        if self.is_zero() {
            return Ok(None);
        }
        self.naive().map(Some)
    }

    fn from_civil(day: Option<NaiveDate>) -> Self {
        day.map_or(Self::ZERO, Self::from)
    }
}

/// A period travels as the first day of its month.
impl CivilValue for Period {
    fn to_civil(&self) -> Result<Option<NaiveDate>, RangeError> {
        if self.is_zero() {
            return Ok(None);
        }
        if !self.is_valid() {
            return Err(RangeError::InvalidPeriod {
                year: self.year(),
                month: self.month(),
            });
        }
        self.first_day().naive().map(Some)
    }

    /// The year window is not enforced; check [`Period::is_valid`].
    fn from_civil(day: Option<NaiveDate>) -> Self {
        day.map_or(Self::ZERO, |day| {
            Self::from_parts_unchecked(day.year(), day.month())
        })
    }
}
