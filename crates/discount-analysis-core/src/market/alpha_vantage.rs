use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;

use crate::error::DiscountError;
use crate::market::{CurrencyPair, FxObservation, FxSeries};
use crate::DiscountResult;

const SERIES_KEY: &str = "Time Series FX (Daily)";
const CLOSE_KEY: &str = "4. close";

/// Parse an Alpha Vantage `FX_DAILY` response body.
///
/// The API answers HTTP 200 even for bad keys and throttling, with the reason in
/// an "Error Message", "Note" or "Information" field; those become `ExternalData`.
pub fn parse_alpha_vantage_fx_daily(body: &Value, pair: &CurrencyPair) -> DiscountResult<FxSeries> {
    let Some(days) = body.get(SERIES_KEY).and_then(Value::as_object) else {
        let reason = ["Error Message", "Note", "Information"]
            .iter()
            .find_map(|k| body.get(*k).and_then(Value::as_str))
            .unwrap_or("response has no daily FX series");
        return Err(DiscountError::ExternalData(reason.to_string()));
    };

    let mut observations = Vec::with_capacity(days.len());
    for (day, fields) in days {
        let date = NaiveDate::parse_from_str(day, "%Y-%m-%d")
            .map_err(|e| DiscountError::ExternalData(format!("bad date '{day}': {e}")))?;
        let close = fields
            .get(CLOSE_KEY)
            .and_then(Value::as_str)
            .ok_or_else(|| DiscountError::ExternalData(format!("no close for {day}")))?;
        let close = Decimal::from_str(close.trim())
            .map_err(|e| DiscountError::ExternalData(format!("bad close for {day}: {e}")))?;
        observations.push(FxObservation { date, close });
    }

    Ok(FxSeries::new(pair.clone(), observations))
}
