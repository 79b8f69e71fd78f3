//! Durable cache store backed by one JSON file per key.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use elspot_core::{CacheEntry, CacheStore, ElspotError};

/// File-backed [`CacheStore`] that persists entries across process restarts.
///
/// Each key maps to `<dir>/<sanitized-key>.json` holding a [`CacheEntry`].
/// Writes go through a temp file and a rename, which gives the atomic
/// single-key set the decorator assumes.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir`. The directory is created lazily on
    /// the first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory the entries live in.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let sanitized: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("{sanitized}.json"))
    }

    async fn read_entry(&self, key: &str) -> Result<Option<CacheEntry>, ElspotError> {
        let path = self.path_for(key);
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl CacheStore for FileStore {
    async fn exists(&self, key: &str) -> Result<bool, ElspotError> {
        Ok(self.read_entry(key).await?.is_some())
    }

    async fn is_expired(&self, key: &str) -> Result<bool, ElspotError> {
        Ok(self
            .read_entry(key)
            .await?
            .is_none_or(|entry| entry.is_expired()))
    }

    async fn get(&self, key: &str) -> Result<Option<serde_json::Value>, ElspotError> {
        Ok(self
            .read_entry(key)
            .await?
            .map(|entry| entry.payload().clone()))
    }

    async fn set(
        &self,
        key: &str,
        payload: serde_json::Value,
        ttl: std::time::Duration,
    ) -> Result<(), ElspotError> {
        let ttl = chrono::Duration::from_std(ttl)
            .map_err(|e| ElspotError::cache(e.to_string()))?;
        let entry = CacheEntry::new(payload, Utc::now() + ttl);
        let bytes = serde_json::to_vec(&entry)?;

        tokio::fs::create_dir_all(&self.dir).await?;
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &bytes).await?;
        tokio::fs::rename(&tmp, &path).await?;
        Ok(())
    }
}
