use napi::Result as NapiResult;
use napi_derive::napi;
use serde::Deserialize;

use discount_analysis_core::market::{
    build_market_view, parse_alpha_vantage_fx_daily, CurrencyPair, ExchangeRateSource, FxSeries,
};
use discount_analysis_core::report::{DiscountReport, MarkdownReportRenderer, ReportRenderer};
use discount_analysis_core::scenarios::ScenarioSet;
use discount_analysis_core::{Currency, DiscountResult};

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Pricing
// ---------------------------------------------------------------------------

#[napi]
pub fn compute_revenue(input_json: String) -> NapiResult<String> {
    let input: discount_analysis_core::pricing::PricingInputs =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        discount_analysis_core::pricing::compute_revenue(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn analyze_discount(input_json: String) -> NapiResult<String> {
    let input: discount_analysis_core::pricing::DiscountAnalysisInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        discount_analysis_core::pricing::analyze_discount(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Tiers
// ---------------------------------------------------------------------------

#[napi]
pub fn default_tiers() -> NapiResult<String> {
    serde_json::to_string(&ScenarioSet::default_tiers()).map_err(to_napi_error)
}

/// `tiers` may be omitted from the input to use the five standard tiers.
#[napi]
pub fn compare_scenarios(input_json: String) -> NapiResult<String> {
    let input: discount_analysis_core::scenarios::ComparisonInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        discount_analysis_core::scenarios::compare_scenarios(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct ReportRequest {
    #[serde(flatten)]
    inputs: discount_analysis_core::pricing::DiscountAnalysisInput,
    #[serde(default)]
    tiers: Option<ScenarioSet>,
    #[serde(default)]
    currency: Currency,
}

/// Returns the Markdown document; the caller handles the download.
#[napi]
pub fn render_report(input_json: String) -> NapiResult<String> {
    let req: ReportRequest = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let report = DiscountReport::from_analysis(&req.inputs, req.tiers.as_ref(), req.currency)
        .map_err(to_napi_error)?;
    MarkdownReportRenderer.render(&report).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Market
// ---------------------------------------------------------------------------

/// A response body the JS side already fetched.
struct FetchedBody(serde_json::Value);

impl ExchangeRateSource for FetchedBody {
    fn daily_series(&self, pair: &CurrencyPair) -> DiscountResult<FxSeries> {
        parse_alpha_vantage_fx_daily(&self.0, pair)
    }
}

/// Builds the market view from a raw Alpha Vantage `FX_DAILY` body. A body of
/// the wrong shape yields a view with a warning, not an exception.
#[napi]
pub fn market_view(body_json: String, from: String, to: String, days: u32) -> NapiResult<String> {
    let pair = CurrencyPair::new(&from, &to).map_err(to_napi_error)?;
    let body: serde_json::Value = serde_json::from_str(&body_json).unwrap_or_default();
    let view = build_market_view(&FetchedBody(body), &pair, days as usize);
    serde_json::to_string(&view).map_err(to_napi_error)
}
