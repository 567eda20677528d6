use chrono::{DateTime, Utc};
use complaintdesk_core::{AppError, AppResult};
use serde_json::{Map, Value};

/// Loosely-typed wire record with case-insensitive, aliased field lookup.
pub(crate) struct WireRecord<'a> {
    fields: &'a Map<String, Value>,
}

impl<'a> WireRecord<'a> {
    pub(crate) fn from_value(value: &'a Value, what: &str) -> AppResult<Self> {
        value
            .as_object()
            .map(|fields| Self { fields })
            .ok_or_else(|| AppError::Validation(format!("{what} payload must be an object")))
    }

    pub(crate) fn field(&self, keys: &[&str]) -> Option<&'a Value> {
        keys.iter().find_map(|key| {
            self.fields
                .iter()
                .find(|(name, value)| name.eq_ignore_ascii_case(key) && !value.is_null())
                .map(|(_, value)| value)
        })
    }

    pub(crate) fn text(&self, keys: &[&str]) -> Option<String> {
        keys.iter().find_map(|key| self.field(&[key]).and_then(value_text))
    }

    pub(crate) fn required_text(&self, keys: &[&str], what: &str) -> AppResult<String> {
        self.text(keys).ok_or_else(|| {
            AppError::Validation(format!("{what} payload is missing '{}'", keys.join("' / '")))
        })
    }

    pub(crate) fn flag(&self, keys: &[&str], default: bool) -> bool {
        match self.field(keys) {
            Some(Value::Bool(value)) => *value,
            Some(Value::Number(value)) => value.as_i64().is_some_and(|value| value != 0),
            Some(Value::String(value)) => match value.trim().to_ascii_lowercase().as_str() {
                "true" | "1" => true,
                "false" | "0" => false,
                _ => default,
            },
            _ => default,
        }
    }

    pub(crate) fn integer(&self, keys: &[&str]) -> Option<i64> {
        match self.field(keys)? {
            Value::Number(value) => value.as_i64(),
            Value::String(value) => value.trim().parse().ok(),
            _ => None,
        }
    }

    pub(crate) fn timestamp(&self, keys: &[&str]) -> Option<DateTime<Utc>> {
        self.text(keys)
            .and_then(|value| DateTime::parse_from_rfc3339(value.as_str()).ok())
            .map(|value| value.with_timezone(&Utc))
    }

    pub(crate) fn list(&self, keys: &[&str]) -> Option<&'a Vec<Value>> {
        self.field(keys).and_then(Value::as_array)
    }
}

/// Renders a scalar identifier or label as text; blank strings are absent.
pub(crate) fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => {
            let trimmed = text.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_owned())
        }
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

/// Parses a list of wire records, skipping items that do not convert.
pub(crate) fn parse_items<T>(
    items: Vec<Value>,
    what: &str,
    convert: impl Fn(&Value) -> AppResult<T>,
) -> Vec<T> {
    items
        .iter()
        .filter_map(|item| match convert(item) {
            Ok(record) => Some(record),
            Err(error) => {
                tracing::warn!(kind = what, error = %error, "skipping malformed record");
                None
            }
        })
        .collect()
}
