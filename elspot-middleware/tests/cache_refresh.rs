use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use elspot_core::{
    CachePolicy, ElspotError, IntegrationApi, IntegrationCallback, IntegrationReason,
};
use elspot_middleware::CachedIntegrationApi;
use elspot_mock::{MemoryStore, MockConnectivity};

struct FailingIntegrationApi;

#[async_trait::async_trait]
impl IntegrationApi for FailingIntegrationApi {
    async fn integrations(&self) -> Result<Vec<IntegrationCallback>, ElspotError> {
        Err(ElspotError::remote("IntegrationApi", "connection reset"))
    }

    async fn add_integration(
        &self,
        cb: IntegrationCallback,
    ) -> Result<IntegrationCallback, ElspotError> {
        Ok(cb)
    }

    async fn remove_integration(&self, _cb: &IntegrationCallback) -> Result<(), ElspotError> {
        Ok(())
    }
}

#[tokio::test]
async fn online_refresh_failure_propagates_unmasked() {
    let api = CachedIntegrationApi::with_policy(
        FailingIntegrationApi,
        CachePolicy::new("IntegrationApi", Duration::from_secs(300)),
        Arc::new(MockConnectivity::online()),
        Arc::new(MemoryStore::new()),
    );

    let err = api.integrations().await.unwrap_err();
    assert!(matches!(err, ElspotError::Remote { .. }));
}

#[tokio::test]
async fn failed_refresh_leaves_the_stale_entry_untouched() {
    // Online with an expired entry: the decorator must not fall back to the
    // stale value, and it must not clobber the entry either.
    let store = Arc::new(MemoryStore::new());
    let expired_at = Utc::now() - chrono::Duration::minutes(5);
    let cached = vec![IntegrationCallback {
        url: "https://cached.test/hook".to_string(),
        reason: IntegrationReason::PriceRise,
    }];
    store
        .seed(
            "IntegrationApi",
            serde_json::to_value(&cached).unwrap(),
            expired_at,
        )
        .await;

    let api = CachedIntegrationApi::with_policy(
        FailingIntegrationApi,
        CachePolicy::new("IntegrationApi", Duration::from_secs(300)),
        Arc::new(MockConnectivity::online()),
        store.clone(),
    );

    assert!(api.integrations().await.is_err());

    let entry = store.entry("IntegrationApi").await.unwrap();
    assert_eq!(entry.expires_at(), expired_at);
    assert_eq!(
        serde_json::from_value::<Vec<IntegrationCallback>>(entry.payload().clone()).unwrap(),
        cached
    );
}
