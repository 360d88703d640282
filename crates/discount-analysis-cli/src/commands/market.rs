use clap::Args;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use discount_analysis_core::market::{
    build_market_view, parse_alpha_vantage_fx_daily, CurrencyPair, ExchangeRateSource, FxSeries,
};
use discount_analysis_core::{DiscountError, DiscountResult};

const DEFAULT_BASE_URL: &str = "https://www.alphavantage.co/query";

/// Arguments for the exchange-rate context
#[derive(Args)]
pub struct MarketArgs {
    /// Base currency
    #[arg(long, default_value = "USD")]
    pub from: String,

    /// Quote currency
    #[arg(long, default_value = "BRL")]
    pub to: String,

    /// Number of most recent daily closes to keep
    #[arg(long, default_value_t = 30)]
    pub days: usize,

    /// Alpha Vantage API key
    #[arg(long, env = "ALPHA_VANTAGE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Query endpoint
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// HTTP timeout in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout_secs: u64,
}

/// `FX_DAILY` over blocking HTTP.
pub struct AlphaVantageSource {
    client: reqwest::blocking::Client,
    base_url: String,
    api_key: String,
}

impl AlphaVantageSource {
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> DiscountResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DiscountError::ExternalData(e.to_string()))?;
        Ok(AlphaVantageSource {
            client,
            base_url: base_url.to_string(),
            api_key: api_key.to_string(),
        })
    }
}

impl ExchangeRateSource for AlphaVantageSource {
    fn daily_series(&self, pair: &CurrencyPair) -> DiscountResult<FxSeries> {
        debug!(%pair, url = %self.base_url, "requesting FX_DAILY");
        let body: Value = self
            .client
            .get(&self.base_url)
            .query(&[
                ("function", "FX_DAILY"),
                ("from_symbol", pair.from.as_str()),
                ("to_symbol", pair.to.as_str()),
                ("apikey", self.api_key.as_str()),
            ])
            .send()
            .and_then(|r| r.error_for_status())
            .and_then(|r| r.json())
            .map_err(|e| DiscountError::ExternalData(e.without_url().to_string()))?;
        parse_alpha_vantage_fx_daily(&body, pair)
    }
}

/// Stands in when no API key is configured, so the view degrades the same way
/// as any other fetch failure.
struct MissingKey;

impl ExchangeRateSource for MissingKey {
    fn daily_series(&self, _pair: &CurrencyPair) -> DiscountResult<FxSeries> {
        Err(DiscountError::ExternalData(
            "no API key; set ALPHA_VANTAGE_API_KEY or pass --api-key".to_string(),
        ))
    }
}

pub fn run_market(args: MarketArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let pair = CurrencyPair::new(&args.from, &args.to)?;
    let view = match args.api_key.as_deref().filter(|k| !k.trim().is_empty()) {
        Some(key) => {
            let source = AlphaVantageSource::new(
                &args.base_url,
                key,
                Duration::from_secs(args.timeout_secs),
            )?;
            build_market_view(&source, &pair, args.days)
        }
        None => build_market_view(&MissingKey, &pair, args.days),
    };

    let warnings: Vec<String> = view.warning.iter().cloned().collect();
    Ok(serde_json::json!({
        "result": view,
        "warnings": warnings,
        "methodology": format!("{} daily closes, last {} observations", pair, args.days),
    }))
}
