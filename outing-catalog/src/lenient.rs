//! Tolerant field readers for hand-maintained JSON content.
//!
//! The catalog files are edited by humans, so a minutes or euro field may
//! arrive as a number, a numeric string, `null`, or something else entirely.
//! These helpers coerce anything unusable to `None` instead of failing the
//! whole file; the record layer then substitutes the documented default.
//! This is the single place where such coercion happens — downstream types
//! are strict.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Read an optional non-negative integer, coercing junk to `None`.
pub(crate) fn lenient_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_u32(&value))
}

/// Read an optional string, coercing non-strings to `None`.
pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// Read an optional boolean, coercing non-booleans to `None`.
pub(crate) fn lenient_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Bool(b) => Some(b),
        _ => None,
    })
}

/// Read an optional list of strings; scalar entries are stringified, a
/// non-list value collapses to `None`.
pub(crate) fn lenient_strings<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Array(entries) = value else {
        return Ok(None);
    };
    let strings = entries
        .into_iter()
        .filter_map(|entry| match entry {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        })
        .collect();
    Ok(Some(strings))
}

fn coerce_u32(value: &Value) -> Option<u32> {
    match value {
        Value::Number(number) => number
            .as_u64()
            .and_then(|v| u32::try_from(v).ok())
            .or_else(|| number.as_f64().and_then(float_to_u32)),
        Value::String(raw) => raw.trim().parse::<u32>().ok(),
        _ => None,
    }
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "range is checked before the cast truncates the fraction"
)]
fn float_to_u32(value: f64) -> Option<u32> {
    if value.is_finite() && (0.0..=f64::from(u32::MAX)).contains(&value) {
        Some(value as u32)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!(45), Some(45))]
    #[case(json!("45"), Some(45))]
    #[case(json!(" 45 "), Some(45))]
    #[case(json!(30.5), Some(30))]
    #[case(json!(-3), None)]
    #[case(json!("soon"), None)]
    #[case(json!(null), None)]
    #[case(json!(["45"]), None)]
    fn u32_coercion(#[case] value: Value, #[case] expected: Option<u32>) {
        assert_eq!(coerce_u32(&value), expected);
    }

    #[rstest]
    fn list_coercion_stringifies_scalars() {
        #[derive(Deserialize)]
        struct Wrapper {
            #[serde(default, deserialize_with = "lenient_strings")]
            modes: Option<Vec<String>>,
        }
        let wrapper: Wrapper =
            serde_json::from_value(json!({ "modes": ["walk", 5, true, {}] }))
                .expect("lenient list should never fail");
        assert_eq!(
            wrapper.modes,
            Some(vec!["walk".to_owned(), "5".to_owned(), "true".to_owned()])
        );

        let scalar: Wrapper = serde_json::from_value(json!({ "modes": "walk" }))
            .expect("non-list should collapse to None");
        assert_eq!(scalar.modes, None);
    }
}
