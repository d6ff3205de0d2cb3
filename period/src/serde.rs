//! Serde integration.
//!
//! A period serializes as its round-trippable debug string, e.g. `P1Y+9M9H[Z]-42`, and
//! deserializes from anything [`Period::parse`] accepts.

use core::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Period;

impl Serialize for Period {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&format_args!("{self:?}"))
    }
}

impl<'de> Deserialize<'de> for Period {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(PeriodVisitor)
    }
}

/// A visitor parsing any accepted period grammar.
struct PeriodVisitor;

impl Visitor<'_> for PeriodVisitor {
    type Value = Period;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a period string")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Period, E> {
        Period::parse(value).map_err(E::custom)
    }
}
