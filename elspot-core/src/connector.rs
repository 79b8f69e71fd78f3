//! Collaborator traits the scraper and middleware are written against.
//!
//! Each trait covers one external capability so tests can inject mocks for
//! exactly the seams they exercise.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::{DateRange, DayPrices, ElspotError, IntegrationCallback, PageData};

/// A live page-rendering session over the day-ahead price source.
///
/// The session keeps a hidden "current date" cursor that every
/// [`page_data`](Self::page_data) call repositions before reading, so the
/// handle is exclusive: methods take `&mut self` and the session must never
/// be shared across concurrent fetches.
#[async_trait]
pub trait PageSession: Send {
    /// Render the table for the window ending at or before `reference`.
    ///
    /// Returns up to 7 labeled date columns with `24 * columns` body cells in
    /// row-major (hour, column) order. An empty header is a valid "no data
    /// available" response, not an error.
    async fn page_data(&mut self, reference: NaiveDate) -> Result<PageData, ElspotError>;

    /// Tear the session down, releasing the rendering resources.
    async fn close(&mut self) -> Result<(), ElspotError>;
}

/// Synchronous connectivity probe, queried before each cache-backed read.
pub trait Connectivity: Send + Sync {
    /// Whether the remote side is currently reachable.
    fn is_connected(&self) -> bool;
}

/// Durable single-key cache store with atomic get/set per key.
///
/// Keys live in one process-wide namespace; callers discriminate resources
/// with key prefixes. Entries survive process restarts.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Whether any entry (expired or not) exists for `key`.
    async fn exists(&self, key: &str) -> Result<bool, ElspotError>;

    /// Whether the entry for `key` is missing or past its expiry.
    async fn is_expired(&self, key: &str) -> Result<bool, ElspotError>;

    /// Read the stored payload for `key`, expired or not.
    async fn get(&self, key: &str) -> Result<Option<serde_json::Value>, ElspotError>;

    /// Overwrite the entry for `key` with a fresh expiry of `now + ttl`.
    async fn set(
        &self,
        key: &str,
        payload: serde_json::Value,
        ttl: std::time::Duration,
    ) -> Result<(), ElspotError>;
}

/// Remote integrations API: the first resource protected by the cache.
#[async_trait]
pub trait IntegrationApi: Send + Sync {
    /// List the registered integration callbacks.
    async fn integrations(&self) -> Result<Vec<IntegrationCallback>, ElspotError>;

    /// Register a new integration callback.
    async fn add_integration(
        &self,
        callback: IntegrationCallback,
    ) -> Result<IntegrationCallback, ElspotError>;

    /// Remove a registered integration callback.
    async fn remove_integration(&self, callback: &IntegrationCallback) -> Result<(), ElspotError>;
}

/// Remote day-price repository read: the second resource protected by the
/// cache.
#[async_trait]
pub trait DayPriceRepository: Send + Sync {
    /// Fetch stored day prices covering `range`.
    async fn day_prices(&self, range: DateRange) -> Result<Vec<DayPrices>, ElspotError>;
}
