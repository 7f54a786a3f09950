//! Loosely-typed numeric fields and best-effort coercion.
//!
//! Host sheets store whatever the user typed: `12`, `"12"`, `"12 tons"` or
//! `"lots"`. Coercion follows the host's own rules. Integer reads take the
//! leading integer prefix and truncate; float reads take the leading decimal
//! prefix. A field with no numeric prefix coerces to "not a number" (`None`
//! for integers, `NaN` for floats) and that result flows into derived values
//! unchanged. Nothing here reports an error.

use core::fmt;

/// A numeric document field that may have been stored as text.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Numeric {
    Number(f64),
    Text(String),
}

impl Numeric {
    pub const ZERO: Self = Self::Number(0.0);

    /// Integer coercion: truncates numbers, reads the leading integer of text.
    pub fn parse_int(&self) -> Option<i64> {
        match self {
            Self::Number(value) if value.is_finite() => Some(value.trunc() as i64),
            Self::Number(_) => None,
            Self::Text(text) => int_prefix(text),
        }
    }

    /// Float coercion: numbers pass through, text yields its leading decimal or `NaN`.
    pub fn parse_float(&self) -> f64 {
        match self {
            Self::Number(value) => *value,
            Self::Text(text) => float_prefix(text),
        }
    }

    /// Integer coercion widened to `f64` so a failed read can propagate as `NaN`.
    pub fn parse_int_or_nan(&self) -> f64 {
        self.parse_int().map_or(f64::NAN, |value| value as f64)
    }
}

impl Default for Numeric {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<f64> for Numeric {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for Numeric {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<i32> for Numeric {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for Numeric {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// Equality where `NaN` matches `NaN`.
///
/// Used when deciding whether a derived value needs to be written back; a
/// coercion failure must compare equal to itself or every sheet build would
/// issue another write.
pub fn same_value(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

/// `deserialize_with` helpers for integer fields a host may store as text.
///
/// Values go through [`Numeric::parse_int`] and are clamped to the `i32`
/// range. An optional field with no integer reading loads as `None`; a
/// required one loads as zero, the same as when it is absent.
#[cfg(feature = "serde")]
pub(crate) mod coerce {
    use serde::{Deserialize, Deserializer};

    use super::Numeric;

    fn clamp(value: i64) -> i32 {
        value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
    }

    pub fn int<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
        Ok(Numeric::deserialize(deserializer)?
            .parse_int()
            .map_or(0, clamp))
    }

    pub fn opt_int<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i32>, D::Error> {
        Ok(Option::<Numeric>::deserialize(deserializer)?
            .and_then(|value| value.parse_int())
            .map(clamp))
    }
}

fn int_prefix(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return None;
    }

    text[..end].parse::<i64>().ok()
}

fn float_prefix(text: &str) -> f64 {
    let text = text.trim_start();
    let bytes = text.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    if text[end..].starts_with("Infinity") {
        return if bytes[0] == b'-' {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut cursor = frac_start;
        while cursor < bytes.len() && bytes[cursor].is_ascii_digit() {
            cursor += 1;
        }
        digits += cursor - frac_start;
        end = cursor;
    }
    if digits == 0 {
        return f64::NAN;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut cursor = end + 1;
        if cursor < bytes.len() && matches!(bytes[cursor], b'+' | b'-') {
            cursor += 1;
        }
        let exp_start = cursor;
        while cursor < bytes.len() && bytes[cursor].is_ascii_digit() {
            cursor += 1;
        }
        if cursor > exp_start {
            end = cursor;
        }
    }

    text[..end].parse::<f64>().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_coercion_truncates_numbers() {
        assert_eq!(Numeric::from(8.9).parse_int(), Some(8));
        assert_eq!(Numeric::from(-2.5).parse_int(), Some(-2));
        assert_eq!(Numeric::Number(f64::NAN).parse_int(), None);
    }

    #[test]
    fn int_coercion_reads_leading_digits() {
        assert_eq!(Numeric::from("12").parse_int(), Some(12));
        assert_eq!(Numeric::from("  -4 dt").parse_int(), Some(-4));
        assert_eq!(Numeric::from("7.9").parse_int(), Some(7));
        assert_eq!(Numeric::from("lots").parse_int(), None);
        assert_eq!(Numeric::from("").parse_int(), None);
        assert_eq!(Numeric::from("-").parse_int(), None);
    }

    #[test]
    fn float_coercion_reads_leading_decimal() {
        assert_eq!(Numeric::from("0.1").parse_float(), 0.1);
        assert_eq!(Numeric::from("2.5e2 tons").parse_float(), 250.0);
        assert_eq!(Numeric::from(".5").parse_float(), 0.5);
        assert_eq!(Numeric::from("3e").parse_float(), 3.0);
        assert_eq!(Numeric::from("-Infinity").parse_float(), f64::NEG_INFINITY);
        assert!(Numeric::from("n/a").parse_float().is_nan());
        assert!(Numeric::from(".").parse_float().is_nan());
    }

    #[test]
    fn nan_is_the_same_value_as_nan() {
        assert!(same_value(f64::NAN, f64::NAN));
        assert!(same_value(8.0, 8.0));
        assert!(!same_value(8.0, f64::NAN));
        assert!(!same_value(8.0, 8.5));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_numbers_and_text() {
        let number: Numeric = serde_json::from_str("40").unwrap();
        let text: Numeric = serde_json::from_str("\"40\"").unwrap();

        assert_eq!(number, Numeric::Number(40.0));
        assert_eq!(text, Numeric::Text("40".to_owned()));
        assert_eq!(number.parse_int(), text.parse_int());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn integer_fields_coerce_text() {
        #[derive(serde::Deserialize)]
        struct Row {
            #[serde(deserialize_with = "coerce::int")]
            value: i32,
            #[serde(default, deserialize_with = "coerce::opt_int")]
            bonus: Option<i32>,
        }

        let row: Row = serde_json::from_str(r#"{"value": "12 dt", "bonus": "lots"}"#).unwrap();
        assert_eq!((row.value, row.bonus), (12, None));

        let row: Row = serde_json::from_str(r#"{"value": 7.9, "bonus": "-2"}"#).unwrap();
        assert_eq!((row.value, row.bonus), (7, Some(-2)));

        let row: Row = serde_json::from_str(r#"{"value": "99999999999", "bonus": null}"#).unwrap();
        assert_eq!((row.value, row.bonus), (i32::MAX, None));

        let row: Row = serde_json::from_str(r#"{"value": "n/a"}"#).unwrap();
        assert_eq!((row.value, row.bonus), (0, None));
    }
}
