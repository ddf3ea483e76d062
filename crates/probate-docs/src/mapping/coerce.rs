//! Boundary coercions for loosely typed record values.

use crate::estate::Money;
use chrono::{DateTime, NaiveDate};
use serde_json::Value;

pub(crate) fn clean(value: Option<&String>) -> String {
    value.map(|raw| raw.trim().to_string()).unwrap_or_default()
}

pub(crate) fn non_empty(value: Option<&String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|raw| !raw.is_empty())
}

/// Accepts `YYYY-MM-DD` and RFC 3339 timestamps; anything else is absent.
pub(crate) fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }

    DateTime::parse_from_rfc3339(trimmed)
        .ok()
        .map(|dt| dt.naive_utc().date())
}

pub(crate) fn parse_optional_date(value: Option<&String>) -> Option<NaiveDate> {
    value.and_then(|raw| parse_date(raw))
}

/// Numbers and numeric strings become money; negative or malformed values are absent.
pub(crate) fn money_from_value(value: &Value) -> Option<Money> {
    match value {
        Value::Number(number) => {
            if let Some(whole) = number.as_u64() {
                i64::try_from(whole)
                    .ok()
                    .and_then(|whole| whole.checked_mul(100))
                    .map(Money::from_cents)
            } else {
                number.as_f64().and_then(Money::from_f64)
            }
        }
        Value::String(raw) => Money::parse(raw),
        _ => None,
    }
}

pub(crate) fn flag_from_value(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(flag) => Some(*flag),
        Value::String(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "y" | "1" => Some(true),
            "false" | "no" | "n" | "0" => Some(false),
            _ => None,
        },
        Value::Number(number) => match number.as_u64() {
            Some(1) => Some(true),
            Some(0) => Some(false),
            _ => None,
        },
        _ => None,
    }
}

pub(crate) fn text_from_value(value: &Value) -> Option<String> {
    match value {
        Value::String(raw) => Some(raw.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}
