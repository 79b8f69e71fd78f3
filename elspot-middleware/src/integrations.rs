//! Cache composition for the integrations API.

use std::sync::Arc;

use async_trait::async_trait;
use elspot_core::{
    CachePolicy, CacheStore, Connectivity, ElspotError, IntegrationApi, IntegrationCallback,
};

use crate::CachedResource;

/// Decorates an [`IntegrationApi`] with the shared cache mechanism.
///
/// Only the list read is cached; registration and removal mutate remote
/// state and pass straight through.
pub struct CachedIntegrationApi<A> {
    inner: A,
    cache: CachedResource,
}

impl<A: IntegrationApi> CachedIntegrationApi<A> {
    /// Wrap `inner` with the default integrations cache policy.
    #[must_use]
    pub fn new(inner: A, connectivity: Arc<dyn Connectivity>, store: Arc<dyn CacheStore>) -> Self {
        Self::with_policy(inner, CachePolicy::integrations(), connectivity, store)
    }

    /// Wrap `inner` with an explicit policy.
    #[must_use]
    pub fn with_policy(
        inner: A,
        policy: CachePolicy,
        connectivity: Arc<dyn Connectivity>,
        store: Arc<dyn CacheStore>,
    ) -> Self {
        Self {
            inner,
            cache: CachedResource::new(policy, connectivity, store),
        }
    }
}

#[async_trait]
impl<A: IntegrationApi> IntegrationApi for CachedIntegrationApi<A> {
    async fn integrations(&self) -> Result<Vec<IntegrationCallback>, ElspotError> {
        self.cache
            .get_or_fetch("", || self.inner.integrations())
            .await
    }

    async fn add_integration(
        &self,
        callback: IntegrationCallback,
    ) -> Result<IntegrationCallback, ElspotError> {
        self.inner.add_integration(callback).await
    }

    async fn remove_integration(&self, callback: &IntegrationCallback) -> Result<(), ElspotError> {
        self.inner.remove_integration(callback).await
    }
}
