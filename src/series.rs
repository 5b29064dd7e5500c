//! Evenly spaced dates between two endpoints.

use std::str::FromStr;

use crate::calendar::Weekday;
use crate::consts::DAYS_PER_WEEK;
use crate::prelude::*;
use crate::{Date, ParseError, RangeError};

/// Spacing of a [`time_series`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Grouping {
    /// The first day of each month.
    #[display(fmt = "monthly")]
    Monthly,
    /// Each Monday.
    #[display(fmt = "weekly")]
    Weekly,
}

impl FromStr for Grouping {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monthly" => Ok(Self::Monthly),
            "weekly" => Ok(Self::Weekly),
            _ => Err(ParseError::InvalidFormat(s.to_owned())),
        }
    }
}

/// The dates between `from` and `to` at the given spacing.
///
/// Monthly series start at the first day of `from`'s month and end at the
/// first day of `to`'s month. Weekly series start at the Monday on or before
/// `from` and end at the last Monday on or before `to`. A `to` earlier than
/// `from` gives an empty series.
///
/// # Errors
/// Returns `RangeError::NotADate` when either endpoint is zero or invalid,
/// and `RangeError::Year` when the Monday before `from` precedes `MIN_YEAR`.
pub fn time_series(from: Date, to: Date, grouping: Grouping) -> Result<Vec<Date>, RangeError> {
    from.naive()?;
    to.naive()?;
    if to < from {
        return Ok(Vec::new());
    }

    match grouping {
        Grouping::Monthly => Ok(from
            .to_period()
            .months_through(to.to_period())
            .map(|period| period.first_day())
            .collect()),
        Grouping::Weekly => weekly(from, to),
    }
}

fn weekly(from: Date, to: Date) -> Result<Vec<Date>, RangeError> {
    let back = from.weekday().map_or(0, Weekday::days_since_monday);
    let mut current = from.add_days(-i64::from(back))?;
    let mut dates = Vec::new();
    while current <= to {
        dates.push(current);
        // stepping past MAX_YEAR means the series is complete
        let Ok(next) = current.add_days(DAYS_PER_WEEK) else {
            break;
        };
        current = next;
    }
    Ok(dates)
}
