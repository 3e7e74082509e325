//! Market data access for coincast.
//!
//! Wraps the two CryptoCompare endpoints the application needs: the top
//! currencies by market cap, and hourly close-price history.

pub mod cryptocompare;

pub use cryptocompare::{closing_prices, timestamps, CryptoCompare, MarketError, PricePoint};
