use chrono::{Duration, NaiveDate};
use elspot_mock::MockPageSession;
use elspot_scraper::{CHUNK_STRIDE_DAYS, PriceScraper};
use proptest::prelude::*;

fn run_scrape(day_count: i64) -> Vec<NaiveDate> {
    let begin = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    let end = begin + Duration::days(day_count - 1);

    let session = MockPageSession::serving_windows();
    let recorder = session.recorder();
    let rt = tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap();
    rt.block_on(async {
        let mut scraper = PriceScraper::new(session);
        scraper.fetch_prices(begin, Some(end)).await.unwrap();
    });
    recorder.calls()
}

proptest! {
    #[test]
    fn fetch_count_is_ceil_of_days_over_stride(day_count in 1i64..400) {
        let calls = run_scrape(day_count);
        prop_assert_eq!(calls.len() as i64, (day_count + CHUNK_STRIDE_DAYS - 1) / CHUNK_STRIDE_DAYS);
    }

    #[test]
    fn references_start_at_end_and_step_back_by_the_stride(day_count in 1i64..400) {
        let begin = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let end = begin + Duration::days(day_count - 1);

        let calls = run_scrape(day_count);
        prop_assert_eq!(calls[0], end);
        for pair in calls.windows(2) {
            prop_assert!(pair[1] < pair[0], "references strictly decrease");
            prop_assert_eq!(pair[0] - pair[1], Duration::days(CHUNK_STRIDE_DAYS));
        }
        // The oldest reference still reaches back far enough to cover begin.
        let oldest = *calls.last().unwrap();
        prop_assert!(oldest - Duration::days(CHUNK_STRIDE_DAYS) < begin);
    }
}
