//! Type coercion rules.
//!
//! All conversion from raw JSON values to normalized [`FieldValue`]s lives
//! here, in one place. A field marked `strict` skips coercion entirely and
//! accepts only values already of the native kind. Dates, emails and urls
//! only have string raw forms, so strictness adds nothing for them beyond
//! the always-on parse or shape check.
//!
//! Coercions (non-strict):
//! - int from a well-formed integer string or an integral float
//! - float from any number or a numeric string
//! - bool from the tokens true/false/t/f/yes/no/on/off/1/0, case-insensitive
//! - date from an ISO-8601 calendar date string (YYYY-MM-DD)
//!
//! The token and numeric-string sets above are the contract; nothing more
//! lenient is accepted.

use chrono::NaiveDate;
use serde_json::Value;

use crate::schema::FieldKind;

use super::outcome::FieldValue;

/// Returns the JSON type name for error messages.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                "int"
            } else {
                "float"
            }
        }
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Converts a raw scalar to the declared kind.
///
/// Returns `None` on any mismatch; the caller owns the error message.
/// Object and list kinds are resolved by the engine, not here.
pub(crate) fn coerce_scalar(kind: &FieldKind, raw: &Value, strict: bool) -> Option<FieldValue> {
    match kind {
        FieldKind::Str | FieldKind::Email | FieldKind::Url | FieldKind::Enum(_) => {
            raw.as_str().map(|s| FieldValue::Str(s.to_string()))
        }
        FieldKind::Int => coerce_int(raw, strict),
        FieldKind::Float => coerce_float(raw, strict),
        FieldKind::Bool => coerce_bool(raw, strict),
        FieldKind::Date => coerce_date(raw),
        FieldKind::StringList | FieldKind::Object(_) => None,
    }
}

fn coerce_int(raw: &Value, strict: bool) -> Option<FieldValue> {
    if let Some(n) = raw.as_i64() {
        return Some(FieldValue::Int(n));
    }
    if strict {
        return None;
    }
    if let Some(f) = raw.as_f64() {
        // integral floats narrow; 1.5 does not become 1
        if f.fract() == 0.0 && f.abs() <= i64::MAX as f64 {
            return Some(FieldValue::Int(f as i64));
        }
        return None;
    }
    raw.as_str()
        .and_then(|s| s.trim().parse::<i64>().ok())
        .map(FieldValue::Int)
}

fn coerce_float(raw: &Value, strict: bool) -> Option<FieldValue> {
    if strict {
        // a JSON integer is not a native float under strict typing
        return match raw {
            Value::Number(n) if !n.is_i64() && !n.is_u64() => n.as_f64().map(FieldValue::Float),
            _ => None,
        };
    }
    if let Some(f) = raw.as_f64() {
        return Some(FieldValue::Float(f));
    }
    raw.as_str()
        .and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|f| f.is_finite())
        .map(FieldValue::Float)
}

fn coerce_bool(raw: &Value, strict: bool) -> Option<FieldValue> {
    if let Some(b) = raw.as_bool() {
        return Some(FieldValue::Bool(b));
    }
    if strict {
        return None;
    }
    let token = raw.as_str()?.trim().to_ascii_lowercase();
    match token.as_str() {
        "true" | "t" | "yes" | "on" | "1" => Some(FieldValue::Bool(true)),
        "false" | "f" | "no" | "off" | "0" => Some(FieldValue::Bool(false)),
        _ => None,
    }
}

fn coerce_date(raw: &Value) -> Option<FieldValue> {
    let s = raw.as_str()?;
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .ok()
        .map(FieldValue::Date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_int_from_native() {
        assert_eq!(
            coerce_scalar(&FieldKind::Int, &json!(101), false),
            Some(FieldValue::Int(101))
        );
        assert_eq!(
            coerce_scalar(&FieldKind::Int, &json!(101), true),
            Some(FieldValue::Int(101))
        );
    }

    #[test]
    fn test_int_from_string_only_when_lenient() {
        assert_eq!(
            coerce_scalar(&FieldKind::Int, &json!("101"), false),
            Some(FieldValue::Int(101))
        );
        assert_eq!(coerce_scalar(&FieldKind::Int, &json!("101"), true), None);
        assert_eq!(coerce_scalar(&FieldKind::Int, &json!("10x"), false), None);
    }

    #[test]
    fn test_int_from_integral_float() {
        assert_eq!(
            coerce_scalar(&FieldKind::Int, &json!(5.0), false),
            Some(FieldValue::Int(5))
        );
        assert_eq!(coerce_scalar(&FieldKind::Int, &json!(5.5), false), None);
        assert_eq!(coerce_scalar(&FieldKind::Int, &json!(5.0), true), None);
    }

    #[test]
    fn test_float_widens_ints_when_lenient() {
        assert_eq!(
            coerce_scalar(&FieldKind::Float, &json!(100), false),
            Some(FieldValue::Float(100.0))
        );
        assert_eq!(coerce_scalar(&FieldKind::Float, &json!(100), true), None);
        assert_eq!(
            coerce_scalar(&FieldKind::Float, &json!(99.5), true),
            Some(FieldValue::Float(99.5))
        );
    }

    #[test]
    fn test_float_from_string() {
        assert_eq!(
            coerce_scalar(&FieldKind::Float, &json!("19.99"), false),
            Some(FieldValue::Float(19.99))
        );
        assert_eq!(
            coerce_scalar(&FieldKind::Float, &json!(" 19.99 "), false),
            Some(FieldValue::Float(19.99))
        );
        assert_eq!(coerce_scalar(&FieldKind::Float, &json!("abc"), false), None);
    }

    #[test]
    fn test_bool_token_set() {
        for token in ["true", "T", "yes", "ON", "1"] {
            assert_eq!(
                coerce_scalar(&FieldKind::Bool, &json!(token), false),
                Some(FieldValue::Bool(true)),
                "token {token}"
            );
        }
        for token in ["false", "f", "NO", "off", "0"] {
            assert_eq!(
                coerce_scalar(&FieldKind::Bool, &json!(token), false),
                Some(FieldValue::Bool(false)),
                "token {token}"
            );
        }
        assert_eq!(coerce_scalar(&FieldKind::Bool, &json!("maybe"), false), None);
        assert_eq!(coerce_scalar(&FieldKind::Bool, &json!("true"), true), None);
    }

    #[test]
    fn test_string_never_coerces_numbers() {
        assert_eq!(coerce_scalar(&FieldKind::Str, &json!(123), false), None);
        assert_eq!(
            coerce_scalar(&FieldKind::Str, &json!("123"), false),
            Some(FieldValue::Str("123".into()))
        );
    }

    #[test]
    fn test_date_from_iso_string() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(
            coerce_scalar(&FieldKind::Date, &json!("2024-03-09"), false),
            Some(FieldValue::Date(expected))
        );
        assert_eq!(
            coerce_scalar(&FieldKind::Date, &json!("03/09/2024"), false),
            None
        );
        assert_eq!(
            coerce_scalar(&FieldKind::Date, &json!("2024-13-01"), false),
            None
        );
    }

    #[test]
    fn test_json_type_names() {
        assert_eq!(json_type_name(&json!(null)), "null");
        assert_eq!(json_type_name(&json!(1)), "int");
        assert_eq!(json_type_name(&json!(1.5)), "float");
        assert_eq!(json_type_name(&json!("x")), "string");
        assert_eq!(json_type_name(&json!([])), "array");
        assert_eq!(json_type_name(&json!({})), "object");
    }
}
