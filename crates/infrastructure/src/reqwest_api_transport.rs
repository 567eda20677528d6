use std::time::Duration;

use async_trait::async_trait;
use complaintdesk_application::{ApiRequest, ApiTransport, HttpMethod};
use complaintdesk_core::{AppError, AppResult};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde_json::Value;
use tracing::debug;

use crate::base_url::normalize_base_url;

/// HTTP implementation of the client-side API wrapper.
#[derive(Clone)]
pub struct ReqwestApiTransport {
    http_client: reqwest::Client,
    base_url: String,
}

impl ReqwestApiTransport {
    /// Creates a transport rooted at `base_url`; every request is bounded by `timeout`.
    pub fn new(base_url: &str, timeout: Duration) -> AppResult<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|error| AppError::Internal(format!("failed to build HTTP client: {error}")))?;

        Ok(Self {
            http_client,
            base_url: normalize_base_url(base_url)?,
        })
    }

    /// Base URL without trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl ApiTransport for ReqwestApiTransport {
    async fn send(&self, request: ApiRequest) -> AppResult<Option<Value>> {
        let url = format!("{}{}", self.base_url, request.path);
        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
        };

        let mut builder = self
            .http_client
            .request(method, url.as_str())
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json");
        if let Some(token) = request.bearer.as_deref() {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = request.body.as_ref() {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(transport_error)?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(transport_error)?;
        debug!(method = request.method.as_str(), url = %url, status = status.as_u16(), "api response");

        if !status.is_success() {
            return Err(AppError::Upstream {
                status: status.as_u16(),
                message: error_message(status.as_u16(), &bytes),
            });
        }

        Ok(success_body(status.as_u16(), &bytes))
    }
}

fn transport_error(error: reqwest::Error) -> AppError {
    if error.is_timeout() {
        AppError::Network("request timed out".to_owned())
    } else {
        debug!(error = %error, "api transport failure");
        AppError::Network("Network error".to_owned())
    }
}

/// Message carried by a failed response: its `message` or `error` field, else `HTTP <status>`.
fn error_message(status: u16, body: &[u8]) -> String {
    serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|value| {
            ["message", "error"].iter().find_map(|key| {
                value
                    .get(*key)
                    .and_then(Value::as_str)
                    .filter(|message| !message.trim().is_empty())
                    .map(str::to_owned)
            })
        })
        .unwrap_or_else(|| format!("HTTP {status}"))
}

fn success_body(status: u16, body: &[u8]) -> Option<Value> {
    if status == 204 || body.is_empty() {
        return None;
    }
    serde_json::from_slice(body).ok()
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use complaintdesk_core::AppError;
    use serde_json::json;

    use super::{ReqwestApiTransport, error_message, success_body};

    #[test]
    fn error_message_prefers_backend_fields() {
        assert_eq!(error_message(400, br#"{"message":"Invalid mobile"}"#), "Invalid mobile");
        assert_eq!(error_message(401, br#"{"error":"expired"}"#), "expired");
        assert_eq!(error_message(502, b"<html>bad gateway</html>"), "HTTP 502");
        assert_eq!(error_message(500, br#"{"message":"  "}"#), "HTTP 500");
    }

    #[test]
    fn no_content_and_garbage_bodies_are_empty() {
        assert_eq!(success_body(204, b""), None);
        assert_eq!(success_body(200, b"not json"), None);
        assert_eq!(success_body(200, br#"{"success":true}"#), Some(json!({ "success": true })));
    }

    #[test]
    fn base_url_is_validated_and_trimmed() {
        let Ok(transport) = ReqwestApiTransport::new("http://127.0.0.1:3000//", Duration::from_secs(1))
        else {
            panic!("valid base url must be accepted");
        };
        assert_eq!(transport.base_url(), "http://127.0.0.1:3000");

        let invalid = ReqwestApiTransport::new("not a url", Duration::from_secs(1));
        assert!(matches!(invalid, Err(AppError::Validation(_))));
    }
}
