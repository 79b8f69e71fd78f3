//! elspot-core
//!
//! Core types and traits shared across the elspot ecosystem.
//!
//! - `types`: the day-ahead price data model and cache entry shape.
//! - `connector`: collaborator traits for the page source, connectivity,
//!   cache store, and the remote reads protected by the cache middleware.
//! - `config`: cache policy configuration.
//!
//! Async runtime (Tokio)
//! ---------------------
//! The collaborator traits are `async_trait` traits and the rest of the
//! workspace assumes a Tokio 1.x runtime around them.
#![warn(missing_docs)]

/// Collaborator traits for the page source, cache, and remote reads.
pub mod connector;
mod config;
mod error;
/// Shared data structures for pages, prices, ranges, and cache entries.
pub mod types;

pub use config::CachePolicy;
pub use connector::{CacheStore, Connectivity, DayPriceRepository, IntegrationApi, PageSession};
pub use error::ElspotError;
pub use types::{
    CacheEntry, DateRange, DayPrices, HOURS_PER_DAY, IntegrationCallback, IntegrationReason,
    PageData,
};
