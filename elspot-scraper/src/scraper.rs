//! Chunked backward fetching over an exclusive page session.

use std::collections::HashSet;

use chrono::{Duration, NaiveDate};
use elspot_core::{DateRange, DayPrices, ElspotError, PageSession};

use crate::parse;

/// Days between consecutive chunk reference dates.
///
/// One larger than [`PAGE_WINDOW_DAYS`] so every reference date advances past
/// the previous chunk's oldest day and the backward loop cannot re-cover the
/// same window forever. The flip side is that the day at `reference - 7` of a
/// chunk falls between windows and can be skipped entirely; deduplication
/// does not repair that. See the boundary tests in `tests/chunking.rs`.
pub const CHUNK_STRIDE_DAYS: i64 = 8;

/// Maximum number of labeled days a single rendered page covers.
pub const PAGE_WINDOW_DAYS: i64 = 7;

/// The price-acquisition pipeline, owning one exclusive page session.
///
/// Chunks are fetched strictly sequentially: the session repositions an
/// internal date cursor before every read, so concurrent requests against it
/// would race on that cursor.
pub struct PriceScraper<S: PageSession> {
    session: S,
}

impl<S: PageSession> PriceScraper<S> {
    /// Take ownership of a freshly opened page session.
    #[must_use]
    pub const fn new(session: S) -> Self {
        Self { session }
    }

    /// Fetch prices for `begin..=end`, where `None` means the single day
    /// `begin`.
    ///
    /// An inverted range is normal input and yields an empty result without
    /// touching the session. The returned sequence carries one record per
    /// distinct date but may cover more dates than requested; callers must
    /// not assume exact-length output.
    pub async fn fetch_prices(
        &mut self,
        begin: NaiveDate,
        end: Option<NaiveDate>,
    ) -> Result<Vec<DayPrices>, ElspotError> {
        let range = DateRange::new(begin, end.unwrap_or(begin));
        if range.is_empty() {
            return Ok(Vec::new());
        }

        let chunk_count = (range.day_count() + CHUNK_STRIDE_DAYS - 1) / CHUNK_STRIDE_DAYS;
        let mut accumulated =
            Vec::with_capacity(usize::try_from(range.day_count()).unwrap_or(0));
        for i in 0..chunk_count {
            let reference = range.end() - Duration::days(CHUNK_STRIDE_DAYS * i);
            let mut window = self.fetch_window(reference).await?;
            accumulated.append(&mut window);
        }

        // Keep the first occurrence of each date. Chunks run newest
        // reference first, so the survivor is the read whose reference date
        // sits closest to the day; later chunks must not displace it.
        let mut seen = HashSet::with_capacity(accumulated.len());
        accumulated.retain(|prices| seen.insert(prices.date()));
        Ok(accumulated)
    }

    /// Fetch and parse the single window ending at `reference`.
    ///
    /// An empty or ill-shaped page is a source failure for this window, not
    /// an error: it degrades to an empty result with a diagnostic.
    async fn fetch_window(
        &mut self,
        reference: NaiveDate,
    ) -> Result<Vec<DayPrices>, ElspotError> {
        let data = self.session.page_data(reference).await?;
        if data.columns() == 0 {
            tracing::error!(%reference, "failed to fetch page data");
            return Ok(Vec::new());
        }
        if !data.is_well_formed() {
            tracing::error!(
                %reference,
                columns = data.columns(),
                "page body does not match its header, discarding window"
            );
            return Ok(Vec::new());
        }
        tracing::info!(%reference, entries = data.columns(), "fetched page entries");
        parse::page(&data)
    }

    /// Tear the session down. Must be called on every exit path; prefer
    /// [`scrape_range`] when the scrape is a one-shot.
    pub async fn close(mut self) -> Result<(), ElspotError> {
        self.session.close().await
    }
}

/// Run one whole scrape over `session`, closing it on every exit path,
/// including the empty-range early return and fetch failures.
///
/// A teardown failure only surfaces when the scrape itself succeeded.
pub async fn scrape_range<S: PageSession>(
    session: S,
    begin: NaiveDate,
    end: Option<NaiveDate>,
) -> Result<Vec<DayPrices>, ElspotError> {
    let mut scraper = PriceScraper::new(session);
    let fetched = scraper.fetch_prices(begin, end).await;
    let closed = scraper.close().await;
    match fetched {
        Ok(prices) => closed.map(|()| prices),
        Err(e) => Err(e),
    }
}
