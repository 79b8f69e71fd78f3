use chrono::NaiveDate;
use elspot_core::PageData;
use elspot_mock::MockPageSession;
use elspot_scraper::{PriceScraper, scrape_range};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[tokio::test]
async fn scrape_range_closes_the_session_on_success() {
    let session = MockPageSession::serving_windows();
    let recorder = session.recorder();

    let prices = scrape_range(session, d(2024, 3, 10), None).await.unwrap();

    assert_eq!(prices.len(), 7);
    assert!(recorder.closed());
}

#[tokio::test]
async fn scrape_range_closes_the_session_on_an_empty_range() {
    let session = MockPageSession::serving_windows();
    let recorder = session.recorder();

    let prices = scrape_range(session, d(2024, 3, 10), Some(d(2024, 3, 1)))
        .await
        .unwrap();

    assert!(prices.is_empty());
    assert_eq!(recorder.call_count(), 0);
    assert!(recorder.closed());
}

#[tokio::test]
async fn scrape_range_closes_the_session_when_the_fetch_fails() {
    let session = MockPageSession::failing();
    let recorder = session.recorder();

    let result = scrape_range(session, d(2024, 3, 10), None).await;

    assert!(result.is_err());
    assert!(recorder.closed());
}

#[tokio::test]
async fn empty_page_degrades_to_an_empty_result() {
    let session = MockPageSession::serving_nothing();
    let recorder = session.recorder();
    let mut scraper = PriceScraper::new(session);

    let prices = scraper.fetch_prices(d(2024, 3, 10), None).await.unwrap();

    assert!(prices.is_empty());
    assert_eq!(recorder.call_count(), 1, "the source was still consulted");
}

#[tokio::test]
async fn ill_shaped_page_is_discarded_not_raised() {
    // One header column but only 10 body cells: body != 24 * columns.
    let short = PageData::new(vec!["10-03-2024".to_string()], vec!["1".to_string(); 10]);
    let session = MockPageSession::serving_nothing().with_page(d(2024, 3, 10), short);
    let mut scraper = PriceScraper::new(session);

    let prices = scraper.fetch_prices(d(2024, 3, 10), None).await.unwrap();

    assert!(prices.is_empty());
}

#[tokio::test]
async fn session_failure_propagates_to_the_caller() {
    let session = MockPageSession::failing();
    let mut scraper = PriceScraper::new(session);

    let err = scraper.fetch_prices(d(2024, 3, 10), None).await.unwrap_err();
    assert!(matches!(err, elspot_core::ElspotError::Source { .. }));
}
