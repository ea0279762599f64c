//! File-backed state store — one JSON object per widget installation.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::StoreError;
use crate::store::traits::StateStore;

/// Key/value store persisted as a single JSON file. The whole map is
/// rewritten on every set, which is plenty for a handful of flags.
pub struct FileStore {
    path: PathBuf,
    cache: RwLock<HashMap<String, String>>,
}

impl FileStore {
    /// Open the store at `path`, loading any existing contents. Parent
    /// directories are created; a missing file reads as empty.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        let cache = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(e.into()),
        };
        debug!(path = %path.display(), "opened state store");
        Ok(Self {
            path,
            cache: RwLock::new(cache),
        })
    }

    async fn persist(&self, cache: &HashMap<String, String>) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(cache)?;
        tokio::fs::write(&self.path, raw).await?;
        Ok(())
    }
}

#[async_trait]
impl StateStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.cache.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut cache = self.cache.write().await;
        cache.insert(key.to_string(), value.to_string());
        self.persist(&cache).await
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut cache = self.cache.write().await;
        if cache.remove(key).is_none() {
            return Ok(());
        }
        self.persist(&cache).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::traits::keys;

    #[tokio::test]
    async fn set_then_get_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().join("state.json")).await.unwrap();

        assert_eq!(store.get(keys::DISMISSED).await.unwrap(), None);
        store.set(keys::DISMISSED, "true").await.unwrap();
        assert_eq!(
            store.get(keys::DISMISSED).await.unwrap(),
            Some("true".to_string())
        );
    }

    #[tokio::test]
    async fn values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");

        {
            let store = FileStore::open(&path).await.unwrap();
            store.set(keys::DISMISSED, "true").await.unwrap();
        }

        let reopened = FileStore::open(&path).await.unwrap();
        assert_eq!(
            reopened.get(keys::DISMISSED).await.unwrap(),
            Some("true".to_string())
        );
    }

    #[tokio::test]
    async fn remove_deletes_the_key() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().join("state.json")).await.unwrap();

        store.set(keys::DISMISSED, "true").await.unwrap();
        store.remove(keys::DISMISSED).await.unwrap();
        assert_eq!(store.get(keys::DISMISSED).await.unwrap(), None);

        // Removing again is fine
        store.remove(keys::DISMISSED).await.unwrap();
    }

    #[tokio::test]
    async fn creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/state.json");

        let store = FileStore::open(&path).await.unwrap();
        store.set("k", "v").await.unwrap();
        assert!(path.exists());
    }
}
