use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use complaintdesk_application::SessionStore;
use complaintdesk_core::{AppError, AppResult};

/// Session store keeping the serialized session in a single file.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Creates a store backed by `path`. The file is created on first write.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, action: &str, error: &std::io::Error) -> AppError {
        AppError::Internal(format!(
            "failed to {action} session file '{}': {error}",
            self.path.display()
        ))
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn read(&self) -> AppResult<Option<String>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => Ok(Some(raw)),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(error) => Err(self.io_error("read", &error)),
        }
    }

    async fn write(&self, raw: &str) -> AppResult<()> {
        if let Some(parent) = self.path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|error| self.io_error("create directory for", &error))?;
        }

        tokio::fs::write(&self.path, raw)
            .await
            .map_err(|error| self.io_error("write", &error))
    }

    async fn remove(&self) -> AppResult<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(()),
            Err(error) => Err(self.io_error("remove", &error)),
        }
    }
}

#[cfg(test)]
mod tests {
    use complaintdesk_application::SessionStore;

    use super::FileSessionStore;

    #[tokio::test]
    async fn write_read_and_remove_round_trip() {
        let Ok(directory) = tempfile::tempdir() else {
            panic!("temp dir must be created");
        };
        let store = FileSessionStore::new(directory.path().join("nested/session.json"));

        assert!(matches!(store.read().await, Ok(None)));

        assert!(store.write(r#"{"id":"1"}"#).await.is_ok());
        assert!(store.write(r#"{"id":"2"}"#).await.is_ok());
        assert_eq!(
            store.read().await.unwrap_or_default().as_deref(),
            Some(r#"{"id":"2"}"#)
        );

        assert!(store.remove().await.is_ok());
        assert!(matches!(store.read().await, Ok(None)));
    }

    #[tokio::test]
    async fn removing_missing_file_is_not_an_error() {
        let Ok(directory) = tempfile::tempdir() else {
            panic!("temp dir must be created");
        };
        let store = FileSessionStore::new(directory.path().join("session.json"));

        assert!(store.remove().await.is_ok());
    }
}
