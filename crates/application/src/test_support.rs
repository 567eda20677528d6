use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Mutex;

use complaintdesk_core::{AppError, AppResult};

use crate::ApiClient;
use crate::ports::{ApiRequest, ApiTransport, SessionStore};

/// Scripted transport keyed by request path. Unknown paths answer 404.
#[derive(Default)]
pub(crate) struct FakeTransport {
    responses: Mutex<HashMap<String, AppResult<Option<Value>>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl FakeTransport {
    pub(crate) async fn respond(&self, path: &str, body: Value) {
        self.responses
            .lock()
            .await
            .insert(path.to_owned(), Ok(Some(body)));
    }

    pub(crate) async fn fail(&self, path: &str, error: AppError) {
        self.responses
            .lock()
            .await
            .insert(path.to_owned(), Err(error));
    }

    pub(crate) async fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().await.clone()
    }

    pub(crate) async fn requests_to(&self, path: &str) -> Vec<ApiRequest> {
        self.requests
            .lock()
            .await
            .iter()
            .filter(|request| request.path == path)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl ApiTransport for FakeTransport {
    async fn send(&self, request: ApiRequest) -> AppResult<Option<Value>> {
        let path = request.path.clone();
        self.requests.lock().await.push(request);

        self.responses
            .lock()
            .await
            .get(&path)
            .cloned()
            .unwrap_or_else(|| {
                Err(AppError::Upstream {
                    status: 404,
                    message: "HTTP 404".to_owned(),
                })
            })
    }
}

pub(crate) fn client_with(transport: &Arc<FakeTransport>) -> ApiClient {
    ApiClient::new(transport.clone())
}

/// Session store backed by a single in-memory slot.
#[derive(Default)]
pub(crate) struct FakeSessionStore {
    pub(crate) raw: Mutex<Option<String>>,
}

#[async_trait]
impl SessionStore for FakeSessionStore {
    async fn read(&self) -> AppResult<Option<String>> {
        Ok(self.raw.lock().await.clone())
    }

    async fn write(&self, raw: &str) -> AppResult<()> {
        *self.raw.lock().await = Some(raw.to_owned());
        Ok(())
    }

    async fn remove(&self) -> AppResult<()> {
        *self.raw.lock().await = None;
        Ok(())
    }
}
