//! Market data fetch wrappers around the CryptoCompare client.

use coincast_data::{CryptoCompare, MarketError};

use crate::app::{Horizon, PriceSeries};

/// Size of the currency selector, per the market-cap listing endpoint.
const TOP_LIMIT: u32 = 50;

/// Fetch the top currency symbols for the selector.
pub fn top_symbols() -> Result<Vec<String>, MarketError> {
    CryptoCompare::new().top_symbols(TOP_LIMIT)
}

/// Startup variant: a failed listing leaves the selector empty, with no
/// error surfaced anywhere.
pub fn load_top_symbols() -> Vec<String> {
    top_symbols().unwrap_or_default()
}

/// Fetch the hourly close-price history for one selector combination.
pub fn fetch_series(symbol: &str, horizon: Horizon) -> Result<PriceSeries, MarketError> {
    let points = CryptoCompare::new().hourly_history(symbol, horizon.hours())?;
    Ok(PriceSeries::new(symbol, points))
}
