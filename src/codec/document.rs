//! Document-store form: a [`Date`] is stored as its raw `YYYYMMDD` integer.
//!
//! Use with `#[serde(with = "civil_date::document")]` on a `Date` field to
//! store the integer instead of the JSON string form.

use serde::{Deserialize, Deserializer, Serializer};

use crate::{Date, ParseError};

/// Accepts `0` (the zero date) and any integer holding a calendar day.
impl TryFrom<i32> for Date {
    type Error = ParseError;

    fn try_from(raw: i32) -> Result<Self, Self::Error> {
        let date = Self::from_raw(raw);
        if date.is_zero() || date.is_valid() {
            Ok(date)
        } else {
            Err(ParseError::NotADate(raw))
        }
    }
}

/// Writes the raw integer; the zero date is stored as `0`.
///
/// # Errors
/// Only those of the serializer.
pub fn serialize<S>(date: &Date, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_i32(date.raw())
}

/// Reads an `i32` and checks that it is zero or a calendar day.
///
/// # Errors
/// Fails on non-integer input and on integers that do not decode to a day.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Date, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = i32::deserialize(deserializer)?;
    Date::try_from(raw).map_err(|err| {
        debug_log!("rejecting stored date {raw}: {err}");
        serde::de::Error::custom(err)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Record {
        #[serde(with = "crate::document")]
        born: Date,
        #[serde(with = "crate::document")]
        died: Date,
    }

    #[test]
    fn test_into_raw_integer() {
        let raw: i32 = Date::from_ymd(2020, 8, 15).unwrap().into();
        assert_eq!(raw, 20_200_815);
        assert_eq!(i32::from(Date::ZERO), 0);
    }

    #[test]
    fn test_try_from_raw_integer() {
        assert_eq!(
            Date::try_from(20_200_815),
            Ok(Date::from_ymd(2020, 8, 15).unwrap())
        );
        assert_eq!(Date::try_from(0), Ok(Date::ZERO));
        assert_eq!(
            Date::try_from(20_200_230),
            Err(ParseError::NotADate(20_200_230))
        );
        assert_eq!(Date::try_from(-1), Err(ParseError::NotADate(-1)));
    }

    #[test]
    fn test_with_module_in_struct() {
        let record = Record {
            born: Date::from_ymd(1990, 5, 17).unwrap(),
            died: Date::ZERO,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"born":19900517,"died":0}"#);
        let back: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_with_module_rejects_bad_integers() {
        let result: Result<Record, _> = serde_json::from_str(r#"{"born":19901317,"died":0}"#);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("19901317"), "{err}");

        let result: Result<Record, _> = serde_json::from_str(r#"{"born":"1990-05-17","died":0}"#);
        assert!(result.is_err());
    }
}
