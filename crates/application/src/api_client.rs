use std::sync::Arc;

use complaintdesk_core::AppResult;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::envelope::{Envelope, adapt_optional};
use crate::ports::{ApiRequest, ApiTransport, HttpMethod};

/// Shared client over the proxy surface.
///
/// Holds the current bearer token so every repository call carries the same
/// `Authorization` header after login.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn ApiTransport>,
    bearer: Arc<RwLock<Option<String>>>,
}

impl ApiClient {
    /// Creates a client without a bearer token.
    #[must_use]
    pub fn new(transport: Arc<dyn ApiTransport>) -> Self {
        Self {
            transport,
            bearer: Arc::new(RwLock::new(None)),
        }
    }

    /// Replaces the bearer token used for subsequent calls.
    pub async fn set_bearer(&self, token: Option<String>) {
        *self.bearer.write().await = token;
    }

    /// Returns the current bearer token.
    pub async fn bearer(&self) -> Option<String> {
        self.bearer.read().await.clone()
    }

    /// Issues a `GET` and adapts the body into an envelope.
    pub async fn get_envelope(&self, path: &str) -> AppResult<Envelope> {
        self.envelope(HttpMethod::Get, path, None).await
    }

    /// Issues a `POST` with a JSON body and adapts the response into an envelope.
    pub async fn post_envelope(&self, path: &str, body: Value) -> AppResult<Envelope> {
        self.envelope(HttpMethod::Post, path, Some(body)).await
    }

    async fn envelope(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<Value>,
    ) -> AppResult<Envelope> {
        let request = ApiRequest {
            method,
            path: path.to_owned(),
            body,
            bearer: self.bearer().await,
        };

        let response = self.transport.send(request).await?;
        adapt_optional(response)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use crate::ports::HttpMethod;
    use crate::test_support::FakeTransport;

    use super::ApiClient;

    #[tokio::test]
    async fn bearer_token_is_attached_after_it_is_set() {
        let transport = Arc::new(FakeTransport::default());
        transport
            .respond("/api/masters/roles", json!({ "success": true, "data": [] }))
            .await;
        let client = ApiClient::new(transport.clone());

        let _ = client.get_envelope("/api/masters/roles").await;
        client.set_bearer(Some("demo-token".to_owned())).await;
        let _ = client.get_envelope("/api/masters/roles").await;

        let requests = transport.requests().await;
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].method, HttpMethod::Get);
        assert_eq!(requests[0].bearer, None);
        assert_eq!(requests[1].bearer.as_deref(), Some("demo-token"));
    }
}
