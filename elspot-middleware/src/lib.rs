#![doc = include_str!("../README.md")]
//! elspot-middleware
//!
//! Re-exports for the cache decorator, the durable store, and the cached
//! resource compositions.

mod cached;
mod day_prices;
mod integrations;
mod store;

pub use crate::cached::CachedResource;
pub use crate::day_prices::CachedDayPriceRepo;
pub use crate::integrations::CachedIntegrationApi;
pub use crate::store::FileStore;
