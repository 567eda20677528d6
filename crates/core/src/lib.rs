//! Shared primitives for all Rust crates in Complaint Desk.

#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type used across Complaint Desk crates.
pub type AppResult<T> = Result<T, AppError>;

/// A validated non-empty UTF-8 string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NonEmptyString(String);

impl NonEmptyString {
    /// Creates a validated non-empty string. Surrounding whitespace is trimmed.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(AppError::Validation(
                "value must not be empty or whitespace".to_owned(),
            ));
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the underlying string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<NonEmptyString> for String {
    fn from(value: NonEmptyString) -> Self {
        value.0
    }
}

/// Common application error categories.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// Invalid input or violated invariant.
    #[error("validation error: {0}")]
    Validation(String),

    /// Requested resource does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Write operation conflicts with existing state.
    #[error("conflict: {0}")]
    Conflict(String),

    /// User is not authenticated.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// User is authenticated but the screen or action is not in their allowed routes.
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// Transport failure talking to a remote service (timeout, DNS, refused connection).
    #[error("network error: {0}")]
    Network(String),

    /// Remote service answered with a non-success HTTP status.
    #[error("{message}")]
    Upstream {
        /// HTTP status code returned by the remote service.
        status: u16,
        /// Backend message, or `HTTP <status>` when none was provided.
        message: String,
    },

    /// Remote service answered successfully but reported a business failure.
    #[error("{0}")]
    Rejected(String),

    /// Operation is not offered by the backend.
    #[error("unsupported operation: {0}")]
    Unsupported(String),

    /// Internal unexpected error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the human-readable message without the category prefix.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::Validation(message)
            | Self::NotFound(message)
            | Self::Conflict(message)
            | Self::Unauthorized(message)
            | Self::Forbidden(message)
            | Self::Network(message)
            | Self::Rejected(message)
            | Self::Unsupported(message)
            | Self::Internal(message) => message.as_str(),
            Self::Upstream { message, .. } => message.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AppError, NonEmptyString};

    #[test]
    fn non_empty_string_rejects_whitespace() {
        let result = NonEmptyString::new("   ");
        assert!(result.is_err());
    }

    #[test]
    fn non_empty_string_trims_value() {
        let value = NonEmptyString::new("  Acme Corp ");
        assert_eq!(
            value.map(String::from).unwrap_or_default(),
            "Acme Corp".to_owned()
        );
    }

    #[test]
    fn upstream_error_displays_backend_message() {
        let error = AppError::Upstream {
            status: 401,
            message: "Invalid credentials".to_owned(),
        };
        assert_eq!(error.to_string(), "Invalid credentials");
        assert_eq!(error.user_message(), "Invalid credentials");
    }

    #[test]
    fn user_message_strips_category_prefix() {
        let error = AppError::Network("request timed out".to_owned());
        assert_eq!(error.to_string(), "network error: request timed out");
        assert_eq!(error.user_message(), "request timed out");
    }
}
