//! CryptoCompare REST client.
//!
//! Fetches the top-N cryptocurrency symbols by market cap and hourly
//! close-price history for a single symbol, both quoted in USD.
//!
//! # Example
//!
//! ```rust,no_run
//! use coincast_data::CryptoCompare;
//!
//! let client = CryptoCompare::new();
//! let symbols = client.top_symbols(50).unwrap();
//! let history = client.hourly_history(&symbols[0], 168).unwrap();
//! println!("{} points for {}", history.len(), symbols[0]);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

const USER_AGENT: &str = concat!("coincast/", env!("CARGO_PKG_VERSION"));

/// A single hourly sample of a close price
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Unix timestamp, seconds
    pub time: i64,
    /// Closing price in USD
    pub close: f64,
}

/// Errors from market data operations
#[derive(Debug, Error)]
pub enum MarketError {
    /// The HTTP request could not be completed
    #[error("Request failed: {0}")]
    Request(String),

    /// The server answered with a non-success status
    #[error("HTTP status {0}")]
    Status(u16),

    /// The response body did not match the expected shape
    #[error("Parse error: {0}")]
    Parse(String),

    /// The API reported an application-level error
    #[error("API error: {0}")]
    Api(String),

    /// The response was well-formed but carried no usable data
    #[error("No data returned")]
    NoData,
}

// --- top/mktcapfull response shape ---

#[derive(Debug, Deserialize)]
struct TopListResponse {
    #[serde(rename = "Data")]
    data: Option<Vec<TopListEntry>>,
    #[serde(rename = "Message")]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TopListEntry {
    #[serde(rename = "CoinInfo")]
    coin_info: CoinInfo,
}

#[derive(Debug, Deserialize)]
struct CoinInfo {
    #[serde(rename = "Name")]
    name: String,
}

// --- v2/histohour response shape ---

#[derive(Debug, Deserialize)]
struct HistoryResponse {
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Message")]
    message: Option<String>,
    #[serde(rename = "Data")]
    data: Option<HistoryData>,
}

#[derive(Debug, Deserialize)]
struct HistoryData {
    // Error payloads ship "Data": {} with the array missing entirely.
    #[serde(rename = "Data", default)]
    data: Vec<RawPoint>,
}

#[derive(Debug, Deserialize)]
struct RawPoint {
    time: i64,
    #[serde(default)]
    close: Option<f64>,
}

/// CryptoCompare API client
#[derive(Debug, Clone)]
pub struct CryptoCompare {
    base_url: String,
}

impl Default for CryptoCompare {
    fn default() -> Self {
        Self::new()
    }
}

impl CryptoCompare {
    /// Create a client against the public API
    pub fn new() -> Self {
        Self {
            base_url: "https://min-api.cryptocompare.com".to_string(),
        }
    }

    /// Create a client against a custom base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn top_list_url(&self, limit: u32) -> String {
        format!(
            "{}/data/top/mktcapfull?limit={}&tsym=USD",
            self.base_url, limit
        )
    }

    fn history_url(&self, symbol: &str, hours: u32) -> String {
        format!(
            "{}/data/v2/histohour?fsym={}&tsym=USD&limit={}&aggregate=1",
            self.base_url, symbol, hours
        )
    }

    fn get(&self, url: &str) -> Result<String, MarketError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| MarketError::Request(e.to_string()))?;

        let response = client
            .get(url)
            .send()
            .map_err(|e| MarketError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(MarketError::Status(status.as_u16()));
        }

        response.text().map_err(|e| MarketError::Request(e.to_string()))
    }

    /// Fetch the symbols of the top `limit` currencies by market cap,
    /// in ranking order
    pub fn top_symbols(&self, limit: u32) -> Result<Vec<String>, MarketError> {
        let body = self.get(&self.top_list_url(limit))?;
        Self::parse_top_list(&body)
    }

    /// Fetch the last `hours` hourly close prices for `symbol` in USD,
    /// oldest first
    pub fn hourly_history(&self, symbol: &str, hours: u32) -> Result<Vec<PricePoint>, MarketError> {
        let body = self.get(&self.history_url(symbol, hours))?;
        Self::parse_history(&body)
    }

    fn parse_top_list(json: &str) -> Result<Vec<String>, MarketError> {
        let response: TopListResponse =
            serde_json::from_str(json).map_err(|e| MarketError::Parse(e.to_string()))?;

        let entries = match response.data {
            Some(entries) => entries,
            None => {
                return Err(MarketError::Api(
                    response.message.unwrap_or_else(|| "missing Data".to_string()),
                ))
            }
        };

        if entries.is_empty() {
            return Err(MarketError::NoData);
        }

        Ok(entries.into_iter().map(|e| e.coin_info.name).collect())
    }

    fn parse_history(json: &str) -> Result<Vec<PricePoint>, MarketError> {
        let response: HistoryResponse =
            serde_json::from_str(json).map_err(|e| MarketError::Parse(e.to_string()))?;

        if !response.response.eq_ignore_ascii_case("success") {
            return Err(MarketError::Api(
                response.message.unwrap_or(response.response),
            ));
        }

        let data = response.data.ok_or(MarketError::NoData)?;

        let points: Vec<PricePoint> = data
            .data
            .into_iter()
            .filter_map(|raw| {
                raw.close.map(|close| PricePoint {
                    time: raw.time,
                    close,
                })
            })
            .collect();

        if points.is_empty() {
            return Err(MarketError::NoData);
        }

        Ok(points)
    }
}

/// Extract the closing prices of a series
pub fn closing_prices(points: &[PricePoint]) -> Vec<f64> {
    points.iter().map(|p| p.close).collect()
}

/// Extract the timestamps of a series
pub fn timestamps(points: &[PricePoint]) -> Vec<i64> {
    points.iter().map(|p| p.time).collect()
}
