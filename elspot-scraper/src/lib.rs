//! elspot-scraper
//!
//! Acquisition pipeline for day-ahead electricity prices scraped from a
//! page-rendered source. The source renders at most a seven-day window per
//! request, so arbitrary ranges are covered by stepping a reference date
//! backward in fixed chunks, parsing each rendered table, and deduplicating
//! dates across chunk boundaries.
//!
//! The page-rendering collaborator is abstracted behind
//! [`elspot_core::PageSession`]; this crate never navigates an actual page.
#![warn(missing_docs)]

/// Cell, column, and page parsers for the rendered price table.
pub mod parse;
mod scraper;

pub use scraper::{CHUNK_STRIDE_DAYS, PAGE_WINDOW_DAYS, PriceScraper, scrape_range};
