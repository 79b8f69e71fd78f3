//! elspot-mock
//!
//! Deterministic collaborators for tests and examples: a scripted page
//! session with call recording, a toggleable connectivity probe, and an
//! in-memory cache store.
#![warn(missing_docs)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use elspot_core::{CacheEntry, CacheStore, Connectivity, ElspotError, PageData, PageSession};

pub mod fixtures;

/// Shared view of everything a [`MockPageSession`] has been asked to do.
#[derive(Debug, Clone, Default)]
pub struct CallRecorder {
    calls: Arc<Mutex<Vec<NaiveDate>>>,
    closed: Arc<AtomicBool>,
}

impl CallRecorder {
    /// Reference dates requested so far, in call order.
    #[must_use]
    pub fn calls(&self) -> Vec<NaiveDate> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of page fetches issued so far.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Whether the session has been torn down.
    #[must_use]
    pub fn closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    fn record(&self, reference: NaiveDate) {
        self.calls.lock().unwrap().push(reference);
    }
}

/// Scripted page session.
///
/// Unscripted reference dates either produce a standard seven-day fixture
/// window, an empty page, or an error, depending on the constructor;
/// [`with_page`](Self::with_page) overrides individual reference dates.
pub struct MockPageSession {
    pages: HashMap<NaiveDate, PageData>,
    serve_windows: bool,
    fail: bool,
    recorder: CallRecorder,
}

impl MockPageSession {
    /// A session answering every request with
    /// [`fixtures::window_page`] for the requested reference date.
    #[must_use]
    pub fn serving_windows() -> Self {
        Self {
            pages: HashMap::new(),
            serve_windows: true,
            fail: false,
            recorder: CallRecorder::default(),
        }
    }

    /// A session answering every unscripted request with an empty page, the
    /// source's "no data available" signal.
    #[must_use]
    pub fn serving_nothing() -> Self {
        Self {
            pages: HashMap::new(),
            serve_windows: false,
            fail: false,
            recorder: CallRecorder::default(),
        }
    }

    /// A session whose every fetch fails.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            pages: HashMap::new(),
            serve_windows: false,
            fail: true,
            recorder: CallRecorder::default(),
        }
    }

    /// Script a specific page for one reference date.
    #[must_use]
    pub fn with_page(mut self, reference: NaiveDate, page: PageData) -> Self {
        self.pages.insert(reference, page);
        self
    }

    /// Handle for asserting on recorded calls after the session moved into
    /// the scraper.
    #[must_use]
    pub fn recorder(&self) -> CallRecorder {
        self.recorder.clone()
    }
}

#[async_trait]
impl PageSession for MockPageSession {
    async fn page_data(&mut self, reference: NaiveDate) -> Result<PageData, ElspotError> {
        self.recorder.record(reference);
        if self.fail {
            return Err(ElspotError::source_failed("mock session failure"));
        }
        if let Some(page) = self.pages.get(&reference) {
            return Ok(page.clone());
        }
        if self.serve_windows {
            Ok(fixtures::window_page(reference))
        } else {
            Ok(PageData::empty())
        }
    }

    async fn close(&mut self) -> Result<(), ElspotError> {
        self.recorder.closed.store(true, Ordering::SeqCst);
        Ok(())
    }
}

/// Toggleable connectivity probe.
#[derive(Debug, Clone)]
pub struct MockConnectivity {
    online: Arc<AtomicBool>,
}

impl MockConnectivity {
    /// A probe reporting connectivity.
    #[must_use]
    pub fn online() -> Self {
        Self {
            online: Arc::new(AtomicBool::new(true)),
        }
    }

    /// A probe reporting no connectivity.
    #[must_use]
    pub fn offline() -> Self {
        Self {
            online: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Flip connectivity mid-test.
    pub fn set_online(&self, online: bool) {
        self.online.store(online, Ordering::SeqCst);
    }
}

impl Connectivity for MockConnectivity {
    fn is_connected(&self) -> bool {
        self.online.load(Ordering::SeqCst)
    }
}

/// In-memory cache store with the same entry semantics as the durable one:
/// entries are overwritten on refresh and never dropped on expiry.
#[derive(Default)]
pub struct MemoryStore {
    entries: tokio::sync::Mutex<HashMap<String, CacheEntry>>,
}

impl MemoryStore {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry with an absolute expiry, bypassing the TTL math.
    /// Lets tests seed already-expired entries.
    pub async fn seed(&self, key: &str, payload: serde_json::Value, expires_at: DateTime<Utc>) {
        let mut entries = self.entries.lock().await;
        entries.insert(key.to_string(), CacheEntry::new(payload, expires_at));
    }

    /// Snapshot of the stored entry, for expiry assertions.
    pub async fn entry(&self, key: &str) -> Option<CacheEntry> {
        self.entries.lock().await.get(key).cloned()
    }
}

#[async_trait]
impl CacheStore for MemoryStore {
    async fn exists(&self, key: &str) -> Result<bool, ElspotError> {
        Ok(self.entries.lock().await.contains_key(key))
    }

    async fn is_expired(&self, key: &str) -> Result<bool, ElspotError> {
        Ok(self
            .entries
            .lock()
            .await
            .get(key)
            .is_none_or(CacheEntry::is_expired))
    }

    async fn get(&self, key: &str) -> Result<Option<serde_json::Value>, ElspotError> {
        Ok(self
            .entries
            .lock()
            .await
            .get(key)
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
        self.entries.lock().await.insert(key.to_string(), entry);
        Ok(())
    }
}
