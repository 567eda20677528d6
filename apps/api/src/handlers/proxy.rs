use axum::Json;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::{HeaderName, HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use complaintdesk_application::{HttpMethod, InboundRequest, ProxyOutcome};
use complaintdesk_core::AppError;
use serde_json::Value;

use crate::error::ApiError;

/// Response header marking a degraded answer; its value is the fallback reason label.
pub const FALLBACK_HEADER: HeaderName = HeaderName::from_static("x-complaintdesk-fallback");

/// Inbound proxy request extracted from an axum request.
#[derive(Debug)]
pub struct Inbound(pub InboundRequest);

impl<S> FromRequest<S> for Inbound
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let method = if request.method() == Method::POST {
            HttpMethod::Post
        } else {
            HttpMethod::Get
        };
        let query = request.uri().query().map(str::to_owned);
        let headers = request
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.as_str().to_owned(), value.to_owned()))
            })
            .collect();

        let bytes = Bytes::from_request(request, state).await.map_err(|error| {
            ApiError(AppError::Validation(format!("unreadable request body: {error}")))
        })?;
        let body = if bytes.is_empty() {
            None
        } else {
            serde_json::from_slice::<Value>(&bytes).ok()
        };

        Ok(Self(InboundRequest {
            method,
            query,
            headers,
            body,
        }))
    }
}

/// Proxy answer rendered as JSON.
#[derive(Debug)]
pub struct ProxyResponse(pub ProxyOutcome);

impl From<ProxyOutcome> for ProxyResponse {
    fn from(value: ProxyOutcome) -> Self {
        Self(value)
    }
}

impl IntoResponse for ProxyResponse {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status()).unwrap_or(StatusCode::BAD_GATEWAY);

        match self.0 {
            ProxyOutcome::Live { body, .. } => (status, Json(body)).into_response(),
            ProxyOutcome::Fallback { reason, body } => {
                let mut response = (status, Json(body)).into_response();
                if let Ok(label) = HeaderValue::from_str(reason.label().as_str()) {
                    response.headers_mut().insert(FALLBACK_HEADER, label);
                }
                response
            }
        }
    }
}
