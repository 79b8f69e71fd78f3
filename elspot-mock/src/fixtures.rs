//! Deterministic page fixtures.

use chrono::{Duration, NaiveDate};
use elspot_core::{HOURS_PER_DAY, PageData};

/// Fixture price for `date` at `hour` as read from the window ending at
/// `reference`: the day's distance from the reference, scaled, plus the hour,
/// plus a half. Encoding the distance makes reads of the same date from
/// different windows distinguishable, which the dedup tests rely on.
#[must_use]
pub fn price(reference: NaiveDate, date: NaiveDate, hour: usize) -> f64 {
    let distance = reference.signed_duration_since(date).num_days();
    let whole = distance * 100 + i64::try_from(hour).unwrap_or(0);
    whole as f64 + 0.5
}

/// A well-formed page covering `days` dates ending at `reference`, newest
/// column first, with comma-decimal cells like the real source renders.
#[must_use]
pub fn window_page_days(reference: NaiveDate, days: usize) -> PageData {
    let dates: Vec<NaiveDate> = (0..days)
        .map(|i| reference - Duration::days(i64::try_from(i).unwrap_or(0)))
        .collect();
    let head: Vec<String> = dates.iter().map(|d| d.format("%d-%m-%Y").to_string()).collect();
    let mut body = Vec::with_capacity(HOURS_PER_DAY * days);
    for hour in 0..HOURS_PER_DAY {
        for date in &dates {
            let distance = reference.signed_duration_since(*date).num_days();
            body.push(format!("{},5", distance * 100 + i64::try_from(hour).unwrap_or(0)));
        }
    }
    PageData::new(head, body)
}

/// The standard seven-day window ending at `reference`.
#[must_use]
pub fn window_page(reference: NaiveDate) -> PageData {
    window_page_days(reference, 7)
}
