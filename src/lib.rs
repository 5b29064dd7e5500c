//! Calendar dates and calendar months without time-of-day.
//!
//! [`Date`] is a day stored as the integer `YYYYMMDD`; [`Period`] is a
//! year/month pair. Both have a zero value standing for "absent", which
//! every codec maps to `null`/`NULL`, and both can hold invalid non-zero
//! values that are reported by `is_valid` and refused on encode.
//!
//! ```
//! use civil_date::{Date, Period};
//!
//! let date: Date = "15/08/2020".parse().unwrap();
//! assert_eq!(date.add_months(6).unwrap().to_string(), "15/02/2021");
//! assert_eq!(date.to_period(), Period::must(2020, 8));
//! assert_eq!(Period::must(2020, 2).last_day().day(), 29);
//! ```
//!
//! With the default `log` feature, rejected values are reported through
//! the `log` crate at debug level.

#[allow(unused_macros)]
macro_rules! debug_log {
    ($($args:tt)+) => {
        #[cfg(feature = "log")]
        log::debug!($($args)+);
        #[cfg(not(feature = "log"))]
        let _ = format_args!($($args)+);
    };
}

mod calendar;
mod codec;
mod consts;
mod date;
mod error;
mod period;
mod prelude;
mod series;

pub use calendar::{Weekday, days_in_month, is_leap_year};
pub use codec::sql::{DateSource, SqlDate, SqlValue};
pub use codec::wire::{IsNull, WireDate};
pub use codec::{CivilValue, document};
pub use consts::*;
pub use date::{Date, days_from};
pub use error::{Error, ParseError, RangeError, ValidationError};
pub use period::{Months, Period, PeriodFormat, YearWindow};
pub use series::{Grouping, time_series};
