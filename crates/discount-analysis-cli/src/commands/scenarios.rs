use clap::Args;
use serde_json::Value;

use discount_analysis_core::scenarios::{compare_scenarios, ComparisonInput};

use super::{load_tiers, AnalysisArgs};

/// Arguments for discount tier comparison
#[derive(Args)]
pub struct CompareArgs {
    #[command(flatten)]
    pub analysis: AnalysisArgs,

    /// Tier set as JSON or YAML (defaults to the five standard tiers)
    #[arg(long)]
    pub tiers: Option<String>,
}

pub fn run_compare(args: CompareArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let analysis = args.analysis.resolve()?;
    let tiers = load_tiers(args.tiers.as_deref())?;
    let result = compare_scenarios(&ComparisonInput::from_analysis(&analysis, tiers))?;
    Ok(serde_json::to_value(result)?)
}
