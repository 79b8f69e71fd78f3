//! Cache composition for the day-price repository read.

use std::sync::Arc;

use async_trait::async_trait;
use elspot_core::{
    CachePolicy, CacheStore, Connectivity, DateRange, DayPriceRepository, DayPrices, ElspotError,
};

use crate::CachedResource;

/// Decorates a [`DayPriceRepository`] with the shared cache mechanism,
/// keying entries by the requested range.
pub struct CachedDayPriceRepo<R> {
    inner: R,
    cache: CachedResource,
}

impl<R: DayPriceRepository> CachedDayPriceRepo<R> {
    /// Wrap `inner` with the default day-price cache policy.
    #[must_use]
    pub fn new(inner: R, connectivity: Arc<dyn Connectivity>, store: Arc<dyn CacheStore>) -> Self {
        Self::with_policy(inner, CachePolicy::day_prices(), connectivity, store)
    }

    /// Wrap `inner` with an explicit policy.
    #[must_use]
    pub fn with_policy(
        inner: R,
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
impl<R: DayPriceRepository> DayPriceRepository for CachedDayPriceRepo<R> {
    async fn day_prices(&self, range: DateRange) -> Result<Vec<DayPrices>, ElspotError> {
        self.cache
            .get_or_fetch(&range.to_string(), || self.inner.day_prices(range))
            .await
    }
}
