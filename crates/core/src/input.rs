//! Lenient parsing of client-supplied values.
//!
//! The web client sends numbers either as JSON numbers or as form strings,
//! and dates either as `YYYY-MM-DD` or as full RFC 3339 timestamps.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::Value;

/// Parses a decimal amount from a JSON number or numeric string.
///
/// Returns `None` for anything else, including empty strings.
#[must_use]
pub fn parse_decimal(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => Decimal::from_str(&n.to_string())
            .or_else(|_| Decimal::from_scientific(&n.to_string()))
            .ok(),
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                None
            } else {
                Decimal::from_str(s).ok()
            }
        }
        _ => None,
    }
}

/// Largest amount a NUMERIC(12, 2) column can hold.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(3_567_587_327, 232, 0, false, 2);

/// Parses a strictly positive money amount, rounded to cents.
///
/// Returns `None` when the value is not numeric, rounds to zero or below,
/// or exceeds [`MAX_AMOUNT`].
#[must_use]
pub fn parse_positive_amount(value: &Value) -> Option<Decimal> {
    parse_decimal(value)
        .map(|d| d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
        .filter(|d| *d > Decimal::ZERO && *d <= MAX_AMOUNT)
}

/// Whether a JSON value counts as "not provided": absent, null or blank.
#[must_use]
pub fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(_) => false,
    }
}

/// Parses an integer from a JSON number or numeric string.
#[must_use]
pub fn parse_int(value: &Value) -> Option<i32> {
    match value {
        Value::Number(n) => n.as_i64().and_then(|v| i32::try_from(v).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Parses a calendar date from `YYYY-MM-DD` or an RFC 3339 timestamp.
///
/// Timestamps keep the calendar date as written, without time zone
/// conversion.
#[must_use]
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

/// Returns the string if it is present and non-empty.
#[must_use]
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[rstest]
    #[case(json!(120), Some(dec!(120)))]
    #[case(json!(19.99), Some(dec!(19.99)))]
    #[case(json!("450.50"), Some(dec!(450.50)))]
    #[case(json!(" 7 "), Some(dec!(7)))]
    #[case(json!(""), None)]
    #[case(json!("abc"), None)]
    #[case(json!(null), None)]
    #[case(json!(true), None)]
    fn test_parse_decimal(#[case] value: Value, #[case] expected: Option<Decimal>) {
        assert_eq!(parse_decimal(&value), expected);
    }

    #[rstest]
    #[case(json!(3), Some(3))]
    #[case(json!("2024"), Some(2024))]
    #[case(json!("march"), None)]
    #[case(json!(1.5), None)]
    fn test_parse_int(#[case] value: Value, #[case] expected: Option<i32>) {
        assert_eq!(parse_int(&value), expected);
    }

    #[test]
    fn test_parse_date() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 5);
        assert_eq!(parse_date("2024-03-05"), expected);
        assert_eq!(parse_date("2024-03-05T10:30:00Z"), expected);
        assert_eq!(parse_date("2024-03-05T23:30:00-05:00"), expected);
        assert_eq!(parse_date("05/03/2024"), None);
        assert_eq!(parse_date("2023-02-29"), None);
    }

    #[rstest]
    #[case(json!(25), Some(dec!(25)))]
    #[case(json!("10.005"), Some(dec!(10.01)))]
    #[case(json!(0), None)]
    #[case(json!("0.004"), None)]
    #[case(json!(-5), None)]
    #[case(json!("9999999999.99"), Some(dec!(9999999999.99)))]
    #[case(json!("10000000000"), None)]
    fn test_parse_positive_amount(#[case] value: Value, #[case] expected: Option<Decimal>) {
        assert_eq!(parse_positive_amount(&value), expected);
    }

    #[test]
    fn test_max_amount() {
        assert_eq!(MAX_AMOUNT, dec!(9999999999.99));
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(None));
        assert!(is_blank(Some(&json!(null))));
        assert!(is_blank(Some(&json!("  "))));
        assert!(!is_blank(Some(&json!(0))));
        assert!(!is_blank(Some(&json!("x"))));
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(Some("Food")), Some("Food"));
        assert_eq!(non_empty(Some("")), None);
        assert_eq!(non_empty(None), None);
    }
}
