//! `serde` support: `MpInt` travels as a decimal string.
//!
//! Strings keep large values lossless in every format. Deserialization goes
//! through `FromStr`, so values that fit in `i64` come back small.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::MpInt;

impl Serialize for MpInt {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct MpIntVisitor;

impl Visitor<'_> for MpIntVisitor {
    type Value = MpInt;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a decimal integer string")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<MpInt, E> {
        v.parse().map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for MpInt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(MpIntVisitor)
    }
}
