//! Service layer: data fetching and model fitting behind the key handlers.

pub mod forecaster;
pub mod market;

use crate::app::App;

/// The full prediction flow: fetch the selected history, fit the selected
/// model, and swap in the new result set. Any failure leaves the previous
/// table and chart untouched and reports through the status line.
pub fn run_prediction(app: &mut App) {
    let Some(symbol) = app.selected_symbol().map(str::to_string) else {
        app.set_status("No currency list - press [r] to reload");
        return;
    };

    match market::fetch_series(&symbol, app.horizon) {
        Ok(series) => match forecaster::run(&series, app.algorithm) {
            Ok(prediction) => {
                let rows = series.len();
                app.apply_result(series, prediction);
                app.set_status(format!("Predicted {rows} points for {symbol}"));
            }
            Err(err) => app.set_status(format!("Forecast failed: {err}")),
        },
        Err(err) => app.set_status(format!("Fetch failed: {err}")),
    }
}

/// Re-fetch the currency list on demand.
pub fn reload_symbols(app: &mut App) {
    match market::top_symbols() {
        Ok(symbols) => {
            app.symbol_index = 0;
            app.set_status(format!("Loaded {} currencies", symbols.len()));
            app.symbols = symbols;
        }
        Err(err) => app.set_status(format!("Currency list unavailable: {err}")),
    }
}
