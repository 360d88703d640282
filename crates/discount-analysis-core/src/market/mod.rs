pub mod alpha_vantage;
pub mod view;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::DiscountError;
use crate::types::Rate;
use crate::DiscountResult;

pub use alpha_vantage::parse_alpha_vantage_fx_daily;
pub use view::{build_market_view, market_commentary, MarketView};

/// Base/quote pair, e.g. USD/BRL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurrencyPair {
    pub from: String,
    pub to: String,
}

impl CurrencyPair {
    pub fn new(from: &str, to: &str) -> DiscountResult<Self> {
        let from = from.trim().to_uppercase();
        let to = to.trim().to_uppercase();
        for (field, code) in [("from", &from), ("to", &to)] {
            if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(DiscountError::invalid(
                    field,
                    format!("Expected a three-letter currency code (got '{code}')"),
                ));
            }
        }
        Ok(CurrencyPair { from, to })
    }
}

impl Default for CurrencyPair {
    fn default() -> Self {
        CurrencyPair {
            from: "USD".to_string(),
            to: "BRL".to_string(),
        }
    }
}

impl std::fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.from, self.to)
    }
}

/// Daily closing rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FxObservation {
    pub date: NaiveDate,
    pub close: Decimal,
}

/// Daily closes, oldest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FxSeries {
    pub pair: CurrencyPair,
    pub observations: Vec<FxObservation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FxSummary {
    pub first_date: NaiveDate,
    pub last_date: NaiveDate,
    pub first: Decimal,
    pub latest: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    /// latest / first - 1
    pub change_pct: Rate,
}

impl FxSeries {
    /// Sorts observations by date so callers can pass them in any order.
    pub fn new(pair: CurrencyPair, mut observations: Vec<FxObservation>) -> Self {
        observations.sort_by_key(|o| o.date);
        FxSeries { pair, observations }
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// The most recent `n` observations, still oldest first.
    pub fn tail(&self, n: usize) -> FxSeries {
        let skip = self.observations.len().saturating_sub(n);
        FxSeries {
            pair: self.pair.clone(),
            observations: self.observations[skip..].to_vec(),
        }
    }

    pub fn summary(&self) -> Option<FxSummary> {
        let first = self.observations.first()?;
        let last = self.observations.last()?;
        let high = self.observations.iter().map(|o| o.close).max()?;
        let low = self.observations.iter().map(|o| o.close).min()?;
        let change_pct = if first.close.is_zero() {
            Decimal::ZERO
        } else {
            last.close / first.close - Decimal::ONE
        };
        Some(FxSummary {
            first_date: first.date,
            last_date: last.date,
            first: first.close,
            latest: last.close,
            high,
            low,
            change_pct,
        })
    }
}

/// Where exchange-rate history comes from. Implemented over HTTP by the CLI and
/// by fixed fakes in tests.
pub trait ExchangeRateSource {
    fn daily_series(&self, pair: &CurrencyPair) -> DiscountResult<FxSeries>;
}
