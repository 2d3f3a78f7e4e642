//! # Lenient Numeric Decoding
//!
//! The backend serializes decimal columns inconsistently: newer endpoints emit
//! JSON numbers, legacy ones emit numeric strings such as `"125.50"`. These
//! helpers accept both so DTOs can use plain `f64`/`u64` fields.

use serde::de::{self, Deserializer, Unexpected, Visitor};
use std::fmt;

struct FlexibleF64;

impl<'de> Visitor<'de> for FlexibleF64 {
    type Value = f64;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a number or a numeric string")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<f64, E> {
        Ok(v)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<f64, E> {
        Ok(v as f64)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<f64, E> {
        Ok(v as f64)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<f64, E> {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            return Ok(0.0);
        }
        trimmed
            .parse::<f64>()
            .map_err(|_| E::invalid_value(Unexpected::Str(v), &self))
    }

    fn visit_unit<E: de::Error>(self) -> Result<f64, E> {
        Ok(0.0)
    }

    fn visit_none<E: de::Error>(self) -> Result<f64, E> {
        Ok(0.0)
    }

    fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<f64, D::Error> {
        d.deserialize_any(FlexibleF64)
    }
}

/// Decode an `f64` from a number, a numeric string, or `null` (as `0.0`).
pub fn f64_lenient<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(FlexibleF64)
}

/// Decode a non-negative count from a number or numeric string.
///
/// Fractional values are truncated; negative values are rejected.
pub fn u64_lenient<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = deserializer.deserialize_any(FlexibleF64)?;
    if value < 0.0 || !value.is_finite() {
        return Err(de::Error::invalid_value(
            Unexpected::Float(value),
            &"a non-negative count",
        ));
    }
    Ok(value as u64)
}
