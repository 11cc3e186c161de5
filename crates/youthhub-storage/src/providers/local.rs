//! Uploads stored as plain files under one root directory.

use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::StreamExt;
use tokio::fs;
use tokio_util::io::ReaderStream;
use tracing::debug;

use youthhub_core::error::{AppError, ErrorKind};
use youthhub_core::result::AppResult;
use youthhub_core::traits::storage::{ByteStream, StorageProvider};

/// Stores each key as a file below `root`.
#[derive(Debug, Clone)]
pub struct LocalStorageProvider {
    /// Root directory for all stored objects.
    root: PathBuf,
}

impl LocalStorageProvider {
    /// Opens the provider, creating `root` if it does not exist.
    pub async fn new(root_path: impl AsRef<Path>) -> AppResult<Self> {
        let root = root_path.as_ref().to_path_buf();
        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create storage root: {}", root.display()),
                e,
            )
        })?;
        Ok(Self { root })
    }

    /// Resolve a key to a path inside the root.
    ///
    /// Only plain path segments are accepted; `..`, absolute paths and
    /// empty keys are refused.
    fn resolve(&self, key: &str) -> AppResult<PathBuf> {
        let relative = Path::new(key);
        let mut segments = 0usize;
        for component in relative.components() {
            match component {
                Component::Normal(_) => segments += 1,
                Component::CurDir => {}
                _ => return Err(AppError::validation(format!("Invalid storage key: {key}"))),
            }
        }
        if segments == 0 {
            return Err(AppError::validation("Storage key is empty"));
        }
        Ok(self.root.join(relative))
    }

    /// Creates the directories above a resolved key.
    async fn ensure_parent(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to create parent directory: {}", parent.display()),
                    e,
                )
            })?;
        }
        Ok(())
    }
}

fn not_found_or(key: &str, action: &str, e: std::io::Error) -> AppError {
    if e.kind() == std::io::ErrorKind::NotFound {
        AppError::not_found(format!("File not found: {key}"))
    } else {
        AppError::with_source(ErrorKind::Storage, format!("Failed to {action}: {key}"), e)
    }
}

#[async_trait]
impl StorageProvider for LocalStorageProvider {
    fn provider_type(&self) -> &str {
        "local"
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(fs::metadata(&self.root)
            .await
            .map(|m| m.is_dir())
            .unwrap_or(false))
    }

    async fn read(&self, key: &str) -> AppResult<ByteStream> {
        let full_path = self.resolve(key)?;
        let metadata = fs::metadata(&full_path)
            .await
            .map_err(|e| not_found_or(key, "stat file", e))?;
        if !metadata.is_file() {
            return Err(AppError::not_found(format!("File not found: {key}")));
        }

        let file = fs::File::open(&full_path)
            .await
            .map_err(|e| not_found_or(key, "open file", e))?;

        let stream = ReaderStream::new(file);
        Ok(Box::pin(stream.map(|r| r.map(Bytes::from))))
    }

    async fn write(&self, key: &str, data: Bytes) -> AppResult<()> {
        let full_path = self.resolve(key)?;
        self.ensure_parent(&full_path).await?;

        fs::write(&full_path, &data).await.map_err(|e| {
            AppError::with_source(ErrorKind::Storage, format!("Failed to write file: {key}"), e)
        })?;

        debug!(key, bytes = data.len(), "Wrote object");
        Ok(())
    }
}
