pub mod market;
pub mod pricing;
pub mod report;
pub mod scenarios;

use clap::Args;
use rust_decimal::Decimal;

use discount_analysis_core::pricing::DiscountAnalysisInput;
use discount_analysis_core::scenarios::ScenarioSet;

use crate::input;

/// The six dashboard inputs. A JSON file or piped stdin supplies the base
/// values (dashboard defaults otherwise); any flag given explicitly wins.
#[derive(Args, Debug, Clone)]
pub struct AnalysisArgs {
    /// Path to JSON file with all six inputs
    #[arg(long)]
    pub input: Option<String>,

    /// Unit price of the product [default: 37.0]
    #[arg(long)]
    pub unit_price: Option<Decimal>,

    /// Units sold today, without the discount [default: 1000]
    #[arg(long)]
    pub current_quantity: Option<Decimal>,

    /// Profit margin per unit as a fraction, 0.20 = 20% [default: 0.20]
    #[arg(long)]
    pub margin_rate: Option<Decimal>,

    /// Proposed discount as a fraction of price [default: 0.05]
    #[arg(long)]
    pub discount_rate: Option<Decimal>,

    /// Customer-acquisition cost as a fraction of margin [default: 0.01]
    #[arg(long)]
    pub acquisition_cost_rate: Option<Decimal>,

    /// Units expected to sell with the discount [default: 1350]
    #[arg(long)]
    pub estimated_quantity: Option<Decimal>,
}

impl AnalysisArgs {
    pub fn resolve(&self) -> Result<DiscountAnalysisInput, Box<dyn std::error::Error>> {
        let base = match self.input {
            Some(ref path) => input::file::read_json(path)?,
            None => input::stdin::read_stdin()?.unwrap_or_default(),
        };
        Ok(self.apply_flags(base))
    }

    fn apply_flags(&self, base: DiscountAnalysisInput) -> DiscountAnalysisInput {
        DiscountAnalysisInput {
            unit_price: self.unit_price.unwrap_or(base.unit_price),
            current_quantity: self.current_quantity.unwrap_or(base.current_quantity),
            margin_rate: self.margin_rate.unwrap_or(base.margin_rate),
            discount_rate: self.discount_rate.unwrap_or(base.discount_rate),
            acquisition_cost_rate: self
                .acquisition_cost_rate
                .unwrap_or(base.acquisition_cost_rate),
            estimated_quantity: self.estimated_quantity.unwrap_or(base.estimated_quantity),
        }
    }
}

/// Tier set from `--tiers`, or the five standard tiers.
pub fn load_tiers(path: Option<&str>) -> Result<ScenarioSet, Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            let set: ScenarioSet = input::file::read_config(p)?;
            tracing::debug!(path = p, tiers = set.len(), "loaded tier config");
            Ok(set)
        }
        None => Ok(ScenarioSet::default_tiers()),
    }
}
