//! Ports implemented by infrastructure adapters.

use async_trait::async_trait;
use complaintdesk_core::AppResult;
use serde_json::Value;

/// HTTP verbs used by the client and the proxy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// `GET`
    #[default]
    Get,
    /// `POST`
    Post,
}

impl HttpMethod {
    /// Returns the wire method name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// One JSON request issued by the client-side HTTP wrapper.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// Verb.
    pub method: HttpMethod,
    /// Path relative to the configured base URL.
    pub path: String,
    /// JSON body.
    pub body: Option<Value>,
    /// Bearer token sent as `Authorization`.
    pub bearer: Option<String>,
}

/// Client-side HTTP wrapper port.
///
/// Implementations attach JSON headers, perform no retries and return the
/// parsed body (`None` for 204 or an unparseable success body).
/// Non-success statuses map to `AppError::Upstream` carrying the backend
/// `message`/`error` field or `HTTP <status>`; transport failures map to
/// `AppError::Network`.
#[async_trait]
pub trait ApiTransport: Send + Sync {
    /// Sends one request.
    async fn send(&self, request: ApiRequest) -> AppResult<Option<Value>>;
}

/// Request forwarded by the proxy to the upstream API.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamRequest {
    /// Verb mirrored from the inbound request.
    pub method: HttpMethod,
    /// Upstream path.
    pub path: String,
    /// Raw query string without `?`.
    pub query: Option<String>,
    /// Forwardable inbound headers (lower-case names).
    pub headers: Vec<(String, String)>,
    /// JSON body.
    pub body: Option<Value>,
}

/// Raw upstream answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamReply {
    /// HTTP status code.
    pub status: u16,
    /// Raw body bytes.
    pub body: Vec<u8>,
}

/// Server-side forwarding port.
#[async_trait]
pub trait UpstreamGateway: Send + Sync {
    /// Forwards one request; transport failures are `AppError::Network`.
    async fn forward(&self, request: UpstreamRequest) -> AppResult<UpstreamReply>;
}

/// Client-side storage holding the serialized session under a single key.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Reads the raw stored text, if any.
    async fn read(&self) -> AppResult<Option<String>>;

    /// Replaces the stored text.
    async fn write(&self, raw: &str) -> AppResult<()>;

    /// Removes the stored entry.
    async fn remove(&self) -> AppResult<()>;
}
