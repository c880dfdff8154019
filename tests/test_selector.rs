mod common;

use std::sync::Arc;

use common::{record, setup, FakeMarketData, FakeRankedSource, RecordingNotifier};
use tickwatch::config::AppConfig;
use tickwatch::Tickwatch;

fn watchlist_codes(wl: &tickwatch::domain::entities::watchlist::Watchlist) -> Vec<String> {
    wl.iter().map(|s| s.code.clone()).collect()
}

#[tokio::test]
async fn test_price_ceiling_boundaries() {
    // Exactly at the ceiling is accepted; zero and negative are not.
    let ranked = FakeRankedSource::Records(vec![
        record("1101", "at ceiling", Some(20.0)),
        record("1102", "zero", Some(0.0)),
        record("1103", "negative", Some(-1.0)),
        record("1104", "above ceiling", Some(20.01)),
    ]);
    let tw = setup(
        Arc::new(FakeMarketData::new()),
        Arc::new(ranked),
        Arc::new(RecordingNotifier::new()),
    );

    let wl = tw.watchlist().await;
    let codes = watchlist_codes(&wl);
    assert_eq!(codes[0], "1101.TW");
    assert!(!codes.contains(&"1102.TW".to_string()));
    assert!(!codes.contains(&"1103.TW".to_string()));
    assert!(!codes.contains(&"1104.TW".to_string()));
}

#[tokio::test]
async fn test_long_codes_and_sentinel_prices_skipped() {
    let ranked = FakeRankedSource::Records(vec![
        record("00632", "leveraged ETF", Some(5.0)),
        record("71692", "warrant", Some(1.2)),
        record("2409", "友達", None), // "--" no-trade sentinel at the adapter
        record("2014", "中鴻", Some(18.0)),
    ]);
    let tw = setup(
        Arc::new(FakeMarketData::new()),
        Arc::new(ranked),
        Arc::new(RecordingNotifier::new()),
    );

    let wl = tw.watchlist().await;
    let codes = watchlist_codes(&wl);
    assert_eq!(codes[0], "2014.TW");
    assert!(!codes.contains(&"00632.TW".to_string()));
    assert!(!codes.contains(&"71692.TW".to_string()));
}

#[tokio::test]
async fn test_duplicate_source_codes_keep_first_occurrence() {
    let ranked = FakeRankedSource::Records(vec![
        record("2014", "first name", Some(18.0)),
        record("2014", "second name", Some(18.0)),
    ]);
    let tw = setup(
        Arc::new(FakeMarketData::new()),
        Arc::new(ranked),
        Arc::new(RecordingNotifier::new()),
    );

    let wl = tw.watchlist().await;
    let first = wl.iter().find(|s| s.code == "2014.TW").unwrap();
    assert_eq!(first.name, "first name");
    assert_eq!(
        wl.iter().filter(|s| s.code == "2014.TW").count(),
        1,
        "dedup key is the code"
    );
}

#[tokio::test]
async fn test_quota_caps_primary_selection_in_rank_order() {
    let records: Vec<_> = (1..=7)
        .map(|i| record(&format!("110{i}"), &format!("stock {i}"), Some(10.0)))
        .collect();
    let tw = setup(
        Arc::new(FakeMarketData::new()),
        Arc::new(FakeRankedSource::Records(records)),
        Arc::new(RecordingNotifier::new()),
    );

    let wl = tw.watchlist().await;
    assert_eq!(
        watchlist_codes(&wl),
        vec!["1101.TW", "1102.TW", "1103.TW", "1104.TW", "1105.TW"]
    );
}

#[tokio::test]
async fn test_fallback_fills_remaining_slots_in_pool_order() {
    // Two qualifying primary entries, one of which collides with the head
    // of the fallback pool. The pool must fill the rest in declared order,
    // skipping the collision.
    let ranked = FakeRankedSource::Records(vec![
        record("2409", "友達", Some(16.5)),
        record("2014", "中鴻", Some(18.0)),
    ]);
    let tw = setup(
        Arc::new(FakeMarketData::new()),
        Arc::new(ranked),
        Arc::new(RecordingNotifier::new()),
    );

    let wl = tw.watchlist().await;
    assert_eq!(
        watchlist_codes(&wl),
        vec!["2409.TW", "2014.TW", "3494.TW", "8105.TW", "1314.TW"]
    );
}

#[tokio::test]
async fn test_source_failure_degrades_to_pool_only() {
    let tw = setup(
        Arc::new(FakeMarketData::new()),
        Arc::new(FakeRankedSource::Unavailable),
        Arc::new(RecordingNotifier::new()),
    );

    let wl = tw.watchlist().await;
    assert_eq!(
        watchlist_codes(&wl),
        vec!["2409.TW", "3494.TW", "8105.TW", "2014.TW", "1314.TW"]
    );
}

#[tokio::test]
async fn test_undersized_watchlist_is_not_an_error() {
    // Quota larger than primary + pool combined: the smaller list is fine.
    let config = AppConfig {
        webhook_url: "http://localhost/hook".into(),
        quota: 12,
        ..Default::default()
    };
    let tw = Tickwatch::with_ports(
        &config,
        Arc::new(FakeMarketData::new()),
        Arc::new(FakeRankedSource::Records(vec![])),
        Arc::new(RecordingNotifier::new()),
    );

    let wl = tw.watchlist().await;
    assert_eq!(wl.len(), 10, "the whole fallback pool, nothing more");
}

#[tokio::test]
async fn test_blank_name_falls_back_to_quote_then_code() {
    let ranked = FakeRankedSource::Records(vec![
        record("2014", "", Some(18.0)),
        record("1314", "  ", Some(9.8)),
    ]);
    let market = FakeMarketData::new().with_name("2014.TW", "中鴻");
    let tw = setup(
        Arc::new(market),
        Arc::new(ranked),
        Arc::new(RecordingNotifier::new()),
    );

    let wl = tw.watchlist().await;
    let named = wl.iter().find(|s| s.code == "2014.TW").unwrap();
    assert_eq!(named.name, "中鴻");
    // No quote available: the code itself stands in for the name.
    let unnamed = wl.iter().find(|s| s.code == "1314.TW").unwrap();
    assert_eq!(unnamed.name, "1314.TW");
}
