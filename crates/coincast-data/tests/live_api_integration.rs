//! Integration tests against the live CryptoCompare API.
//!
//! These make real HTTP requests and are ignored by default to keep CI
//! offline. Run with: cargo test --test live_api_integration -- --ignored

use coincast_data::{closing_prices, timestamps, CryptoCompare};

#[test]
#[ignore] // Requires network access
fn test_top_symbols_live() {
    let symbols = CryptoCompare::new()
        .top_symbols(50)
        .expect("Failed to fetch top symbols");

    assert_eq!(symbols.len(), 50);
    assert!(symbols.iter().all(|s| !s.is_empty()));
    assert!(
        symbols.contains(&"BTC".to_string()),
        "BTC should rank in the top 50 by market cap"
    );
}

#[test]
#[ignore] // Requires network access
fn test_hourly_history_live() {
    let points = CryptoCompare::new()
        .hourly_history("BTC", 24)
        .expect("Failed to fetch BTC history");

    assert!(!points.is_empty(), "Should return some samples");
    assert_eq!(timestamps(&points).len(), closing_prices(&points).len());

    // Hourly spacing, oldest first.
    for w in points.windows(2) {
        assert!(w[1].time > w[0].time, "timestamps should increase");
        assert_eq!(w[1].time - w[0].time, 3600, "samples should be hourly");
    }

    for p in &points {
        assert!(p.close > 0.0, "BTC close should be positive");
    }
}

#[test]
#[ignore] // Requires network access
fn test_unknown_symbol_live() {
    let result = CryptoCompare::new().hourly_history("NOSUCHCOIN123", 24);
    assert!(result.is_err(), "Nonsense symbol should not yield data");
}
