//! Cache policy configuration shared by the middleware compositions.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Key prefix and time-to-live for one cache-protected resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachePolicy {
    /// Namespace prefix prepended to every key of this resource.
    pub key_prefix: String,
    /// Duration after which a stored value becomes eligible for refresh.
    pub ttl: Duration,
}

impl CachePolicy {
    /// Build a policy from its prefix and TTL.
    pub fn new(key_prefix: impl Into<String>, ttl: Duration) -> Self {
        Self {
            key_prefix: key_prefix.into(),
            ttl,
        }
    }

    /// Default policy for the integrations read.
    #[must_use]
    pub fn integrations() -> Self {
        Self::new("IntegrationApi", Duration::from_secs(5 * 60))
    }

    /// Default policy for the day-price repository read.
    #[must_use]
    pub fn day_prices() -> Self {
        Self::new("DayPriceRepo", Duration::from_secs(30 * 60))
    }

    /// Full key for one value of this resource.
    #[must_use]
    pub fn key_for(&self, suffix: &str) -> String {
        if suffix.is_empty() {
            self.key_prefix.clone()
        } else {
            format!("{}-{}", self.key_prefix, suffix)
        }
    }
}
