//! Unit tests for the coincast-data public API.
//!
//! Tests for private parse/URL methods remain in the source module.

use coincast_data::{closing_prices, timestamps, CryptoCompare, MarketError, PricePoint};

// ============================================================================
// Series Extraction Tests
// ============================================================================

#[test]
fn test_closing_prices() {
    let points = vec![
        PricePoint {
            time: 1722470400,
            close: 64800.5,
        },
        PricePoint {
            time: 1722474000,
            close: 65050.0,
        },
    ];

    assert_eq!(closing_prices(&points), vec![64800.5, 65050.0]);
}

#[test]
fn test_timestamps() {
    let points = vec![
        PricePoint {
            time: 1722470400,
            close: 64800.5,
        },
        PricePoint {
            time: 1722474000,
            close: 65050.0,
        },
    ];

    assert_eq!(timestamps(&points), vec![1722470400, 1722474000]);
}

#[test]
fn test_extraction_lengths_match() {
    let points: Vec<PricePoint> = (0..24)
        .map(|i| PricePoint {
            time: 1722470400 + 3600 * i,
            close: 100.0 + i as f64,
        })
        .collect();

    assert_eq!(timestamps(&points).len(), closing_prices(&points).len());
}

#[test]
fn test_empty_series() {
    assert!(closing_prices(&[]).is_empty());
    assert!(timestamps(&[]).is_empty());
}

// ============================================================================
// Failure Modes
// ============================================================================

#[test]
fn test_unreachable_host_is_a_request_error() {
    // Discard port on localhost refuses the connection immediately.
    let client = CryptoCompare::with_base_url("http://127.0.0.1:9");
    match client.top_symbols(50) {
        Err(MarketError::Request(_)) => {}
        other => panic!("expected Request error, got {other:?}"),
    }
}

#[test]
fn test_error_messages_are_presentable() {
    assert_eq!(MarketError::Status(502).to_string(), "HTTP status 502");
    assert_eq!(MarketError::NoData.to_string(), "No data returned");
    assert_eq!(
        MarketError::Api("fsym param is invalid".to_string()).to_string(),
        "API error: fsym param is invalid"
    );
}
