//! Lenient integer decoding
//!
//! Web clients post ids both as `1` and as `"1"`. Both decode to the same
//! `i32`; anything else is a decoding error.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

use crate::error::{CoreError, Result};

/// Raw JSON shape of an integer-ish field
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum IntOrString {
    Int(i64),
    Str(String),
}

impl IntOrString {
    /// Resolve to an `i32`. Errors carry the offending value.
    pub fn to_i32(&self) -> Result<i32> {
        let value = match self {
            Self::Int(n) => *n,
            Self::Str(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| CoreError::invalid_integer(s.as_str()))?,
        };

        i32::try_from(value).map_err(|_| CoreError::OutOfRange(value))
    }
}

/// `deserialize_with` target for required integer-ish fields.
pub fn i32_or_string<'de, D>(deserializer: D) -> std::result::Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    IntOrString::deserialize(deserializer)?
        .to_i32()
        .map_err(D::Error::custom)
}

/// `deserialize_with` target for optional integer-ish fields.
///
/// Pair with `#[serde(default)]` so an absent key becomes `None`.
pub fn opt_i32_or_string<'de, D>(deserializer: D) -> std::result::Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<IntOrString>::deserialize(deserializer)?
        .map(|raw| raw.to_i32())
        .transpose()
        .map_err(D::Error::custom)
}
