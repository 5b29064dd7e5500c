//! SQL driver values: zero is `NULL`, valid values are native dates, and
//! invalid values are refused instead of being persisted.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};

use crate::codec::CivilValue;
use crate::{Date, Period, RangeError};

/// A value as exchanged with a SQL driver for a `DATE` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SqlValue {
    Null,
    Date(NaiveDate),
    Timestamp(NaiveDateTime),
}

/// Anything a calendar day can be extracted from.
///
/// `None` means the source holds no date (SQL `NULL`).
pub trait DateSource {
    fn civil_date(&self) -> Option<NaiveDate>;
}

impl DateSource for NaiveDate {
    fn civil_date(&self) -> Option<NaiveDate> {
        Some(*self)
    }
}

impl DateSource for NaiveDateTime {
    fn civil_date(&self) -> Option<NaiveDate> {
        Some(self.date())
    }
}

/// The UTC day of the instant.
impl<Tz: TimeZone> DateSource for DateTime<Tz> {
    fn civil_date(&self) -> Option<NaiveDate> {
        Some(self.naive_utc().date())
    }
}

impl DateSource for SqlValue {
    fn civil_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Null => None,
            Self::Date(day) => Some(*day),
            Self::Timestamp(stamp) => Some(stamp.date()),
        }
    }
}

impl<T: DateSource> DateSource for Option<T> {
    fn civil_date(&self) -> Option<NaiveDate> {
        self.as_ref().and_then(DateSource::civil_date)
    }
}

impl DateSource for Date {
    fn civil_date(&self) -> Option<NaiveDate> {
        self.to_naive()
    }
}

impl DateSource for Period {
    fn civil_date(&self) -> Option<NaiveDate> {
        self.first_day().to_naive()
    }
}

/// Encoding to and decoding from [`SqlValue`].
pub trait SqlDate: CivilValue {
    /// # Errors
    /// Returns a `RangeError` for a non-zero value that is not valid.
    fn value(&self) -> Result<SqlValue, RangeError> {
        match self.to_civil() {
            Ok(Some(day)) => Ok(SqlValue::Date(day)),
            Ok(None) => Ok(SqlValue::Null),
            Err(err) => {
                debug_log!("refusing to persist: {err}");
                Err(err)
            }
        }
    }

    /// Reads a value from any date source; a source without a date gives
    /// the zero value. Out-of-range days are kept and reported by
    /// `is_valid`.
    fn scan<S: DateSource + ?Sized>(source: &S) -> Self {
        Self::from_civil(source.civil_date())
    }
}

impl SqlDate for Date {}

impl SqlDate for Period {}
