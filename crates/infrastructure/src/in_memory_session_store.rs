use async_trait::async_trait;
use complaintdesk_application::SessionStore;
use complaintdesk_core::AppResult;
use tokio::sync::RwLock;

/// Process-local session store.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    raw: RwLock<Option<String>>,
}

impl InMemorySessionStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn read(&self) -> AppResult<Option<String>> {
        Ok(self.raw.read().await.clone())
    }

    async fn write(&self, raw: &str) -> AppResult<()> {
        *self.raw.write().await = Some(raw.to_owned());
        Ok(())
    }

    async fn remove(&self) -> AppResult<()> {
        self.raw.write().await.take();
        Ok(())
    }
}
