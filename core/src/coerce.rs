//! String to typed-value coercion.
//!
//! Coercion is a pure function of the declared [`ValueType`] and the raw
//! token: no global state, no I/O, and the same input always yields the same
//! value. List options apply the element coercion once per occurrence.

use std::path::PathBuf;

use crate::{OptionValue, ParseError, ValueType};

/// Coerces a raw token to the declared value type.
///
/// # Examples
///
/// ```
/// use optbind_core::{coerce, OptionValue, ValueType};
///
/// assert_eq!(coerce(&ValueType::Integer, "1234"), Ok(OptionValue::Int(1234)));
/// assert_eq!(coerce(&ValueType::Integer, "0x1abc"), Ok(OptionValue::Int(0x1abc)));
/// assert!(coerce(&ValueType::Integer, "12xyz").is_err());
/// ```
pub fn coerce(value_type: &ValueType, raw: &str) -> Result<OptionValue, ParseError> {
    match value_type {
        ValueType::String => Ok(OptionValue::Str(raw.to_string())),
        ValueType::Integer => parse_integer(raw)
            .map(OptionValue::Int)
            .ok_or_else(|| invalid(value_type, raw)),
        ValueType::Boolean => match raw {
            "true" => Ok(OptionValue::Bool(true)),
            "false" => Ok(OptionValue::Bool(false)),
            _ => Err(invalid(value_type, raw)),
        },
        ValueType::FilePath => Ok(OptionValue::Path(PathBuf::from(raw))),
        ValueType::Enum(spec) => {
            if spec.has_member(raw) {
                Ok(OptionValue::Member(raw.to_string()))
            } else {
                Err(invalid(value_type, raw))
            }
        }
    }
}

fn invalid(value_type: &ValueType, raw: &str) -> ParseError {
    ParseError::InvalidValue {
        expected: value_type.name().to_string(),
        raw: raw.to_string(),
    }
}

/// Signed integer with an optional `0x`/`0X` prefix after the sign.
fn parse_integer(raw: &str) -> Option<i64> {
    let (negative, rest) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw),
    };
    // Reject a second sign or an empty remainder before radix dispatch.
    if !rest.chars().next()?.is_ascii_digit() {
        return None;
    }
    let magnitude = match rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X")) {
        Some(hex) => i64::from_str_radix(hex, 16).ok()?,
        None => i64::from_str_radix(rest, 10).ok()?,
    };
    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use crate::EnumSpec;

    use super::*;

    #[test]
    fn test_integer_accepts_decimal_hex_and_sign() {
        assert_eq!(parse_integer("1234"), Some(1234));
        assert_eq!(parse_integer("-7"), Some(-7));
        assert_eq!(parse_integer("0x1abc"), Some(0x1abc));
        assert_eq!(parse_integer("0X10"), Some(16));
        assert_eq!(parse_integer("-0x10"), Some(-16));
    }

    #[test]
    fn test_integer_rejects_garbage() {
        assert_eq!(parse_integer("12xyz"), None);
        assert_eq!(parse_integer(""), None);
        assert_eq!(parse_integer("-"), None);
        assert_eq!(parse_integer("--5"), None);
        assert_eq!(parse_integer("0xZZ"), None);
    }

    #[test]
    fn test_format_error_names_target_type() {
        let err = coerce(&ValueType::Integer, "12xyz").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidValue {
                expected: "integer".to_string(),
                raw: "12xyz".to_string(),
            }
        );
    }

    #[test]
    fn test_enum_match_is_case_sensitive() {
        let vt = ValueType::Enum(EnumSpec::new("SomeEnum", ["one", "two", "three"]));
        assert_eq!(
            coerce(&vt, "three"),
            Ok(OptionValue::Member("three".to_string()))
        );
        let err = coerce(&vt, "THREE").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidValue {
                expected: "SomeEnum".to_string(),
                raw: "THREE".to_string(),
            }
        );
    }

    #[test]
    fn test_path_wraps_without_touching_filesystem() {
        let v = coerce(&ValueType::FilePath, "/no/such/file").unwrap();
        assert_eq!(v.as_path().unwrap().to_str(), Some("/no/such/file"));
    }

    #[test]
    fn test_coercion_is_idempotent() {
        let a = coerce(&ValueType::Integer, "0x1abc").unwrap();
        let b = coerce(&ValueType::Integer, "0x1abc").unwrap();
        assert_eq!(a, b);
    }
}
