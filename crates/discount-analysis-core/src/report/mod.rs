pub mod format;
pub mod markdown;

use serde::{Deserialize, Serialize};

use crate::pricing::decision::{analyze_discount, DiscountAnalysisInput, DiscountDecision};
use crate::scenarios::comparator::{compare_scenarios, BestStrategy, ComparisonInput};
use crate::scenarios::tiers::ScenarioSet;
use crate::types::{Currency, Money};
use crate::DiscountResult;

pub use markdown::MarkdownReportRenderer;

/// Everything a rendered report shows. Built once, rendered by any `ReportRenderer`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscountReport {
    pub title: String,
    pub currency: Currency,
    pub inputs: DiscountAnalysisInput,
    pub decision: DiscountDecision,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_strategy: Option<BestStrategy>,
    pub warnings: Vec<String>,
}

impl DiscountReport {
    /// Run the discount analysis and, when tiers are given, the tier comparison.
    pub fn from_analysis(
        inputs: &DiscountAnalysisInput,
        tiers: Option<&ScenarioSet>,
        currency: Currency,
    ) -> DiscountResult<Self> {
        let analysis = analyze_discount(inputs)?;
        let mut warnings = analysis.warnings;

        let best_strategy = match tiers {
            Some(set) => {
                let comparison =
                    compare_scenarios(&ComparisonInput::from_analysis(inputs, set.clone()))?;
                warnings.extend(comparison.warnings);
                comparison.result.best_strategy
            }
            None => None,
        };

        Ok(DiscountReport {
            title: "Discount Analysis Report".to_string(),
            currency,
            inputs: inputs.clone(),
            decision: analysis.result,
            best_strategy,
            warnings,
        })
    }

    /// Gain (positive) or loss (negative) from offering the discount.
    pub fn revenue_delta(&self) -> Money {
        self.decision.revenue_delta
    }
}

/// Turns a report model into a document. The CLI decides where the bytes go.
pub trait ReportRenderer {
    /// File extension for documents this renderer produces, without the dot.
    fn extension(&self) -> &'static str;

    fn render(&self, report: &DiscountReport) -> DiscountResult<String>;
}
