//! Cell and table parsing for the rendered day-ahead price page.

use chrono::NaiveDate;
use elspot_core::{DayPrices, ElspotError, HOURS_PER_DAY, PageData};

/// Fixed format of the day headers. This is a hard assumption: a source that
/// labels its columns differently breaks the whole page, by design.
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Parse a raw table cell into a number, tolerating a comma decimal
/// separator. Returns `fallback` when the cell does not parse; a single
/// malformed cell must not invalidate an otherwise-valid page.
#[must_use]
pub fn number_or_fallback(cell: &str, fallback: f64) -> f64 {
    cell.replace(',', ".").parse().unwrap_or(fallback)
}

/// Parse one column of the page into a day record.
///
/// The date header parse is the only hard error here; the 24 numeric cells
/// fall back to `0.0` individually.
pub fn day(page: &PageData, column: usize) -> Result<DayPrices, ElspotError> {
    let date = NaiveDate::parse_from_str(page.label(column), DATE_FORMAT)?;
    let mut hourly = [0.0; HOURS_PER_DAY];
    for (hour, price) in hourly.iter_mut().enumerate() {
        *price = number_or_fallback(page.cell(hour, column), 0.0);
    }
    Ok(DayPrices::new(date, hourly))
}

/// Parse every column of a well-formed page. An empty page yields an empty
/// sequence.
pub fn page(data: &PageData) -> Result<Vec<DayPrices>, ElspotError> {
    (0..data.columns()).map(|column| day(data, column)).collect()
}
