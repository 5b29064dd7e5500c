//! PostgreSQL `date` wire format.
//!
//! Binary: a big-endian `i32` counting days from 2000-01-01, where
//! `i32::MAX` and `i32::MIN` stand for `infinity` and `-infinity`.
//! Text: `YYYY-MM-DD`. A missing payload is SQL `NULL`.

use chrono::{Datelike, NaiveDate};

use crate::codec::CivilValue;
use crate::consts::JSON_LAYOUT;
use crate::{Date, Error, ParseError, Period, RangeError};

/// `NaiveDate::num_days_from_ce` of 2000-01-01, the wire epoch.
const WIRE_EPOCH_CE_DAYS: i32 = 730_120;
/// Width of a binary `date`.
const BINARY_LEN: usize = 4;

const POSITIVE_INFINITY: i32 = i32::MAX;
const NEGATIVE_INFINITY: i32 = i32::MIN;
const TEXT_INFINITY: &str = "infinity";
const TEXT_NEGATIVE_INFINITY: &str = "-infinity";

/// Whether an encoded value is SQL `NULL`; nothing is written to the buffer
/// in that case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IsNull {
    Yes,
    No,
}

fn infinity<T>() -> Result<T, Error> {
    debug_log!("rejecting infinite wire date");
    Err(RangeError::Infinity.into())
}

fn encodable<T: CivilValue>(value: &T) -> Result<Option<NaiveDate>, RangeError> {
    value.to_civil().inspect_err(|err| {
        debug_log!("refusing to encode: {err}");
    })
}

/// Transcoding to and from the `date` wire type.
pub trait WireDate: CivilValue {
    /// Name of the PostgreSQL type these values travel as.
    const TYPE_NAME: &'static str = "date";

    /// # Errors
    /// Returns `ParseError::InvalidLength` for a payload that is not four
    /// bytes, `RangeError::Infinity` for `±infinity` and
    /// `RangeError::DayOffset` for days chrono cannot represent.
    fn decode_binary(src: Option<&[u8]>) -> Result<Self, Error> {
        let Some(bytes) = src else {
            return Ok(Self::from_civil(None));
        };
        let raw: [u8; BINARY_LEN] = bytes.try_into().map_err(|_| ParseError::InvalidLength {
            expected: BINARY_LEN,
            found: bytes.len(),
        })?;
        let days = i32::from_be_bytes(raw);
        if days == POSITIVE_INFINITY || days == NEGATIVE_INFINITY {
            return infinity();
        }
        let day = days
            .checked_add(WIRE_EPOCH_CE_DAYS)
            .and_then(NaiveDate::from_num_days_from_ce_opt)
            .ok_or(RangeError::DayOffset(days.into()))?;
        Ok(Self::from_civil(Some(day)))
    }

    /// Appends the binary form to `buf`.
    ///
    /// # Errors
    /// Returns a `RangeError` for a non-zero value that is not valid.
    fn encode_binary(&self, buf: &mut Vec<u8>) -> Result<IsNull, RangeError> {
        let Some(day) = encodable(self)? else {
            return Ok(IsNull::Yes);
        };
        let days = day.num_days_from_ce() - WIRE_EPOCH_CE_DAYS;
        buf.extend_from_slice(&days.to_be_bytes());
        Ok(IsNull::No)
    }

    /// # Errors
    /// Returns `ParseError::Utf8` or `ParseError::Layout` for malformed text
    /// and `RangeError::Infinity` for `±infinity`.
    fn decode_text(src: Option<&[u8]>) -> Result<Self, Error> {
        let Some(bytes) = src else {
            return Ok(Self::from_civil(None));
        };
        let text = std::str::from_utf8(bytes)
            .map_err(|_| ParseError::Utf8(String::from_utf8_lossy(bytes).into_owned()))?
            .trim();
        if text == TEXT_INFINITY || text == TEXT_NEGATIVE_INFINITY {
            return infinity();
        }
        let day = NaiveDate::parse_from_str(text, JSON_LAYOUT).map_err(|_| ParseError::Layout {
            input: text.to_owned(),
            layout: JSON_LAYOUT.to_owned(),
        })?;
        Ok(Self::from_civil(Some(day)))
    }

    /// Appends the text form to `buf`.
    ///
    /// # Errors
    /// Returns a `RangeError` for a non-zero value that is not valid.
    fn encode_text(&self, buf: &mut Vec<u8>) -> Result<IsNull, RangeError> {
        let Some(day) = encodable(self)? else {
            return Ok(IsNull::Yes);
        };
        let text = format!("{:04}-{:02}-{:02}", day.year(), day.month(), day.day());
        buf.extend_from_slice(text.as_bytes());
        Ok(IsNull::No)
    }
}

impl WireDate for Date {}

impl WireDate for Period {}
