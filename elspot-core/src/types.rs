//! Shared data model for day-ahead price acquisition and caching.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Number of hourly price rows in a day-ahead table column.
pub const HOURS_PER_DAY: usize = 24;

/// One fetched page of the day-ahead price table.
///
/// `head` holds one date label per column; `body` holds the cells in
/// row-major (hour, column) order. A page is well-formed when the body has
/// exactly [`HOURS_PER_DAY`] cells per column; a page with zero columns is
/// the source's way of signalling "no data available" for the window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageData {
    head: Vec<String>,
    body: Vec<String>,
}

impl PageData {
    /// Build a page from its raw header labels and flattened body cells.
    #[must_use]
    pub fn new(head: Vec<String>, body: Vec<String>) -> Self {
        Self { head, body }
    }

    /// An empty page: the upstream signal for a failed fetch.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            head: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Number of date columns in the table.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.head.len()
    }

    /// Date label for the given column.
    #[must_use]
    pub fn label(&self, column: usize) -> &str {
        &self.head[column]
    }

    /// Whether the body shape matches the header: `24 * columns` cells.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.body.len() == HOURS_PER_DAY * self.head.len()
    }

    /// Cell at `(row, column)` using the row-major layout.
    ///
    /// Callers must only index into a well-formed page.
    #[must_use]
    pub fn cell(&self, row: usize, column: usize) -> &str {
        &self.body[row * self.head.len() + column]
    }
}

/// Hourly prices for a single calendar day. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPrices {
    date: NaiveDate,
    hourly: [f64; HOURS_PER_DAY],
}

impl DayPrices {
    /// Build a day record from its date and 24 hourly prices.
    #[must_use]
    pub const fn new(date: NaiveDate, hourly: [f64; HOURS_PER_DAY]) -> Self {
        Self { date, hourly }
    }

    /// Calendar day the prices belong to.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// The 24 hourly prices, indexed by hour of day.
    #[must_use]
    pub const fn hourly(&self) -> &[f64; HOURS_PER_DAY] {
        &self.hourly
    }

    /// Price for the given hour of day (0..24).
    #[must_use]
    pub fn price_at(&self, hour: usize) -> f64 {
        self.hourly[hour]
    }
}

/// A calendar-day range. Empty (and yielding no work) when `end < begin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    begin: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Build a range from its bounds. Both are calendar days already.
    #[must_use]
    pub const fn new(begin: NaiveDate, end: NaiveDate) -> Self {
        Self { begin, end }
    }

    /// A range covering the single day `day`.
    #[must_use]
    pub const fn single(day: NaiveDate) -> Self {
        Self {
            begin: day,
            end: day,
        }
    }

    /// First day of the range.
    #[must_use]
    pub const fn begin(&self) -> NaiveDate {
        self.begin
    }

    /// Last day of the range.
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Whether the range contains no days at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.end < self.begin
    }

    /// Number of days covered, inclusive of both bounds. Zero when empty.
    #[must_use]
    pub fn day_count(&self) -> i64 {
        if self.is_empty() {
            0
        } else {
            self.end.signed_duration_since(self.begin).num_days() + 1
        }
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.begin, self.end)
    }
}

/// Stored representation of one cached value.
///
/// Entries are created or overwritten on a successful remote fetch and never
/// proactively deleted; an expired entry stays readable for offline callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    payload: serde_json::Value,
    expires_at: DateTime<Utc>,
}

impl CacheEntry {
    /// Build an entry from its opaque payload and absolute expiry.
    #[must_use]
    pub const fn new(payload: serde_json::Value, expires_at: DateTime<Utc>) -> Self {
        Self {
            payload,
            expires_at,
        }
    }

    /// The opaque serialized payload.
    #[must_use]
    pub const fn payload(&self) -> &serde_json::Value {
        &self.payload
    }

    /// Absolute expiry timestamp.
    #[must_use]
    pub const fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// Whether the entry has passed its expiry.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }
}

/// Why an integration callback fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntegrationReason {
    /// Day-ahead prices rose above the subscriber's threshold.
    PriceRise,
    /// Day-ahead prices fell below the subscriber's threshold.
    PriceFall,
}

/// A registered integration callback, the payload of the cached
/// integrations read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrationCallback {
    /// Callback URL invoked when the reason triggers.
    pub url: String,
    /// Trigger condition for the callback.
    pub reason: IntegrationReason,
}
