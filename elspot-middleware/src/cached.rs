//! The generic TTL/offline-fallback decorator.

use std::future::Future;
use std::sync::Arc;

use elspot_core::{CachePolicy, CacheStore, Connectivity, ElspotError};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Cache protection for one remote resource.
///
/// Holds the resource's key prefix and TTL together with the connectivity
/// probe and the store, and runs the per-call state machine:
///
/// - offline, entry present: serve the stored value regardless of expiry;
/// - offline, no entry: serve `T::default()` and log the miss;
/// - online, unexpired entry: serve the stored value without fetching;
/// - online, missing or expired entry: fetch, overwrite the entry with a
///   fresh `now + ttl` expiry, and serve the new value. A fetch failure
///   propagates unmasked; the decorator never falls back to a stale entry
///   while online.
///
/// Concurrent callers racing on an expired key may both fetch and both
/// overwrite the entry. That is accepted: the fetch is idempotent and the
/// last write wins with equivalent-or-newer data.
pub struct CachedResource {
    policy: CachePolicy,
    connectivity: Arc<dyn Connectivity>,
    store: Arc<dyn CacheStore>,
}

impl CachedResource {
    /// Build the decorator for one resource.
    #[must_use]
    pub fn new(
        policy: CachePolicy,
        connectivity: Arc<dyn Connectivity>,
        store: Arc<dyn CacheStore>,
    ) -> Self {
        Self {
            policy,
            connectivity,
            store,
        }
    }

    /// Resolve one cache-backed read. `key_suffix` discriminates values
    /// within the resource's namespace; pass `""` for singleton resources.
    pub async fn get_or_fetch<T, F, Fut>(
        &self,
        key_suffix: &str,
        fetch: F,
    ) -> Result<T, ElspotError>
    where
        T: Serialize + DeserializeOwned + Default,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, ElspotError>> + Send,
    {
        let key = self.policy.key_for(key_suffix);

        if !self.connectivity.is_connected() {
            if self.store.exists(&key).await? {
                tracing::info!(key = %key, "not connected, returning stale from cache");
                let payload = self
                    .store
                    .get(&key)
                    .await?
                    .ok_or_else(|| ElspotError::cache(format!("entry vanished for {key}")))?;
                return Ok(serde_json::from_value(payload)?);
            }
            tracing::error!(key = %key, "no connection and nothing in cache");
            return Ok(T::default());
        }

        if !self.store.is_expired(&key).await?
            && let Some(payload) = self.store.get(&key).await?
        {
            tracing::info!(key = %key, "unexpired entry in cache, sending");
            return Ok(serde_json::from_value(payload)?);
        }

        let value = fetch().await?;
        tracing::info!(key = %key, ttl_secs = self.policy.ttl.as_secs(), "adding new info to cache");
        self.store
            .set(&key, serde_json::to_value(&value)?, self.policy.ttl)
            .await?;
        Ok(value)
    }
}
