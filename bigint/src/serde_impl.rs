//! `serde` support, gated behind the `serde_support` feature.
//!
//! The wire representation is a decimal string, not the internal digit
//! layout: `Serialize` goes through [`Display`](core::fmt::Display) and
//! `Deserialize` goes through [`FromStr`]. This is hand-rolled rather than
//! derived because the internal `width`/`digits` fields are not meant to be
//! a stable, portable encoding — a future change to the digit base must not
//! be a breaking change for anyone persisting a `BigInt`.

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::repr::BigInt;

impl Serialize for BigInt {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

struct BigIntVisitor;

impl<'de> Visitor<'de> for BigIntVisitor {
    type Value = BigInt;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a decimal (or 0x/0o/0b-prefixed) string representation of a BigInt")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        BigInt::from_str(v).map_err(|e| E::custom(e))
    }

    fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        self.visit_str(&v)
    }
}

impl<'de> Deserialize<'de> for BigInt {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(BigIntVisitor)
    }
}
