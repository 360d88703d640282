use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::market::{CurrencyPair, ExchangeRateSource, FxSeries, FxSummary};

/// Exchange-rate context shown next to a discount decision. Never fails: a
/// broken source leaves `series` empty and sets `warning`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketView {
    pub pair: CurrencyPair,
    pub window_days: usize,
    pub series: Option<FxSeries>,
    pub summary: Option<FxSummary>,
    pub warning: Option<String>,
    pub commentary: Vec<String>,
}

/// Fetch the last `window_days` closes from `source` and attach commentary.
pub fn build_market_view(
    source: &dyn ExchangeRateSource,
    pair: &CurrencyPair,
    window_days: usize,
) -> MarketView {
    let (series, warning) = match source.daily_series(pair) {
        Ok(full) if full.is_empty() => (
            None,
            Some(format!("Exchange-rate source returned no {pair} observations")),
        ),
        Ok(_) if window_days == 0 => (
            None,
            Some("A window of 0 days selects no observations".to_string()),
        ),
        Ok(full) => (Some(full.tail(window_days)), None),
        Err(e) => {
            warn!(%pair, error = %e, "exchange-rate data unavailable");
            (
                None,
                Some(format!(
                    "Could not load {pair} exchange-rate data ({e}). Check the API key or try again later."
                )),
            )
        }
    };

    MarketView {
        pair: pair.clone(),
        window_days,
        summary: series.as_ref().and_then(FxSeries::summary),
        series,
        warning,
        commentary: market_commentary(pair),
    }
}

/// Qualitative notes on how exchange rates and inflation bear on discounting.
pub fn market_commentary(pair: &CurrencyPair) -> Vec<String> {
    vec![
        format!(
            "Strong {} ({pair} high): imported goods cost more, squeezing the margin left for a discount.",
            pair.from
        ),
        format!(
            "Weak {} ({pair} low): imported goods get cheaper, widening the margin available for a discount.",
            pair.from
        ),
        "High inflation: shoppers lose purchasing power, which tends to depress volume.".to_string(),
        "Low inflation: purchasing power holds up, which tends to support volume.".to_string(),
    ]
}
