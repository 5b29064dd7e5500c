//! serde support: `null` for the zero value, `"YYYY-MM-DD"` / `"YYYY-MM"`
//! otherwise.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, Visitor};
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::codec::CivilValue;
use crate::{Date, ParseError, Period};

trait JsonForm: CivilValue {
    const ZERO: Self;
    const EXPECTING: &'static str;

    fn parse_text(text: &str) -> Result<Self, ParseError>;
    fn render(&self) -> String;
}

impl JsonForm for Date {
    const ZERO: Self = Self::ZERO;
    const EXPECTING: &'static str = "null or a YYYY-MM-DD date string";

    fn parse_text(text: &str) -> Result<Self, ParseError> {
        Self::parse_json(text)
    }

    fn render(&self) -> String {
        self.to_json_string()
    }
}

impl JsonForm for Period {
    const ZERO: Self = Self::ZERO;
    const EXPECTING: &'static str = "null or a YYYY-MM month string";

    fn parse_text(text: &str) -> Result<Self, ParseError> {
        Self::parse_json(text)
    }

    fn render(&self) -> String {
        self.to_json_string()
    }
}

fn serialize_json<T: JsonForm, S: Serializer>(value: &T, serializer: S) -> Result<S::Ok, S::Error> {
    match value.to_civil() {
        Ok(None) => serializer.serialize_none(),
        Ok(Some(_)) => serializer.serialize_some(&value.render()),
        Err(err) => {
            debug_log!("refusing to serialize: {err}");
            Err(S::Error::custom(err))
        }
    }
}

struct JsonVisitor<T>(PhantomData<T>);

impl<'de, T: JsonForm> Visitor<'de> for JsonVisitor<T> {
    type Value = T;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(T::EXPECTING)
    }

    fn visit_none<E: de::Error>(self) -> Result<T, E> {
        Ok(T::ZERO)
    }

    fn visit_unit<E: de::Error>(self) -> Result<T, E> {
        Ok(T::ZERO)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<T, D::Error> {
        deserializer.deserialize_str(self)
    }

    fn visit_str<E: de::Error>(self, text: &str) -> Result<T, E> {
        T::parse_text(text).map_err(|err| {
            debug_log!("rejecting JSON value {text:?}: {err}");
            E::custom(err)
        })
    }
}

impl Serialize for Date {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_json(self, serializer)
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_option(JsonVisitor(PhantomData))
    }
}

impl Serialize for Period {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_json(self, serializer)
    }
}

impl<'de> Deserialize<'de> for Period {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_option(JsonVisitor(PhantomData))
    }
}
