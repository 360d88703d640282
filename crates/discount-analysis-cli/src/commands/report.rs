use clap::Args;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use discount_analysis_core::report::{DiscountReport, MarkdownReportRenderer, ReportRenderer};
use discount_analysis_core::Currency;

use super::{load_tiers, AnalysisArgs};

/// Arguments for report export
#[derive(Args)]
pub struct ReportArgs {
    #[command(flatten)]
    pub analysis: AnalysisArgs,

    /// Tier set as JSON or YAML (defaults to the five standard tiers)
    #[arg(long)]
    pub tiers: Option<String>,

    /// Leave the best-tier section out of the report
    #[arg(long)]
    pub no_tiers: bool,

    /// Destination file; the extension is added when missing
    #[arg(long, default_value = "discount_analysis_report")]
    pub out: String,

    /// Currency code used to label amounts
    #[arg(long, default_value = "BRL")]
    pub currency: String,
}

pub fn run_report(args: ReportArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let analysis = args.analysis.resolve()?;
    let currency: Currency = args.currency.parse()?;
    let tiers = if args.no_tiers {
        None
    } else {
        Some(load_tiers(args.tiers.as_deref())?)
    };

    let report = DiscountReport::from_analysis(&analysis, tiers.as_ref(), currency)?;
    let renderer = MarkdownReportRenderer;
    let path = export(&renderer, &report, Path::new(&args.out))?;

    Ok(serde_json::json!({
        "result": {
            "path": path.display().to_string(),
            "is_advantageous": report.decision.is_advantageous,
            "revenue_delta": report.revenue_delta(),
            "best_strategy": report.best_strategy.as_ref().map(|b| b.name.clone()),
        },
        "warnings": report.warnings,
    }))
}

/// Render through `renderer` and write the document, returning the final path.
fn export(
    renderer: &dyn ReportRenderer,
    report: &DiscountReport,
    out: &Path,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let path = if out.extension().is_some() {
        out.to_path_buf()
    } else {
        out.with_extension(renderer.extension())
    };
    let document = renderer.render(report)?;
    fs::write(&path, document)
        .map_err(|e| format!("Failed to write '{}': {}", path.display(), e))?;
    info!(path = %path.display(), "report written");
    Ok(path)
}
