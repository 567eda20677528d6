//! Canonical response envelope and adapters for the known wire shapes.

use complaintdesk_core::{AppError, AppResult};
use serde_json::Value;

/// Wire shape an envelope was recognised as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeShape {
    /// `{ success, message, data }`
    SuccessFlag,
    /// `{ status, message, data }` where `0` or `2xx` means success.
    StatusCode,
    /// A bare JSON array.
    BareArray,
}

/// Canonical `{ success, message, data }` envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    /// Recognised wire shape.
    pub shape: EnvelopeShape,
    /// Business outcome reported by the backend.
    pub success: bool,
    /// Backend message.
    pub message: Option<String>,
    /// Payload, `Null` when absent.
    pub data: Value,
}

impl Envelope {
    /// Adapts a response body into the canonical envelope.
    ///
    /// Unrecognised shapes are rejected instead of defaulted.
    pub fn adapt(value: Value) -> AppResult<Self> {
        match value {
            Value::Array(items) => Ok(Self {
                shape: EnvelopeShape::BareArray,
                success: true,
                message: None,
                data: Value::Array(items),
            }),
            Value::Object(mut fields) => {
                let message = fields
                    .get("message")
                    .or_else(|| fields.get("error"))
                    .and_then(Value::as_str)
                    .map(str::to_owned);
                let data = fields.remove("data").unwrap_or(Value::Null);

                if let Some(success) = fields.get("success").and_then(Value::as_bool) {
                    return Ok(Self {
                        shape: EnvelopeShape::SuccessFlag,
                        success,
                        message,
                        data,
                    });
                }

                if let Some(status) = fields.get("status").and_then(Value::as_i64) {
                    return Ok(Self {
                        shape: EnvelopeShape::StatusCode,
                        success: status == 0 || (200..300).contains(&status),
                        message,
                        data,
                    });
                }

                Err(AppError::Validation(
                    "unrecognized response envelope: expected 'success' or 'status'".to_owned(),
                ))
            }
            other => Err(AppError::Validation(format!(
                "unrecognized response envelope of type {}",
                json_type_name(&other)
            ))),
        }
    }

    /// Returns the payload, or `AppError::Rejected` when the backend reported failure.
    pub fn into_data(self) -> AppResult<Value> {
        if !self.success {
            return Err(AppError::Rejected(
                self.message
                    .unwrap_or_else(|| "request was rejected".to_owned()),
            ));
        }

        Ok(self.data)
    }

    /// Returns the payload as a list, unwrapping `{ data: {...} }` items.
    pub fn into_items(self) -> AppResult<Vec<Value>> {
        list_items(self.into_data()?)
    }
}

/// Interprets an already-unwrapped payload as a list; `null` is empty.
pub fn list_items(data: Value) -> AppResult<Vec<Value>> {
    match data {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => Ok(items.into_iter().map(unwrap_item).collect()),
        other => Err(AppError::Validation(format!(
            "expected a list payload, got {}",
            json_type_name(&other)
        ))),
    }
}

/// Adapts an optional response body; an empty body counts as a bare success.
pub fn adapt_optional(value: Option<Value>) -> AppResult<Envelope> {
    match value {
        Some(value) => Envelope::adapt(value),
        None => Ok(Envelope {
            shape: EnvelopeShape::SuccessFlag,
            success: true,
            message: None,
            data: Value::Null,
        }),
    }
}

fn unwrap_item(item: Value) -> Value {
    match item {
        Value::Object(mut fields) if fields.len() == 1 && fields.contains_key("data") => {
            fields.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
