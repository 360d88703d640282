use std::fmt::Write;

use crate::error::DiscountError;
use crate::report::format::{format_money, format_rate};
use crate::report::{DiscountReport, ReportRenderer};
use crate::DiscountResult;

/// Renders the report as a Markdown document.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownReportRenderer;

impl ReportRenderer for MarkdownReportRenderer {
    fn extension(&self) -> &'static str {
        "md"
    }

    fn render(&self, report: &DiscountReport) -> DiscountResult<String> {
        write_report(report).map_err(|e| DiscountError::Report(e.to_string()))
    }
}

fn write_report(report: &DiscountReport) -> Result<String, std::fmt::Error> {
    let money = |v| format_money(v, &report.currency);
    let inputs = &report.inputs;
    let decision = &report.decision;
    let mut doc = String::new();

    writeln!(doc, "# {}", report.title)?;
    writeln!(doc)?;

    writeln!(doc, "## Product Data")?;
    writeln!(doc)?;
    writeln!(doc, "- Unit price: {}", money(inputs.unit_price))?;
    writeln!(doc, "- Quantity sold today: {} units", inputs.current_quantity)?;
    writeln!(doc, "- Profit margin: {}", format_rate(inputs.margin_rate))?;
    writeln!(doc)?;

    writeln!(doc, "## Discount and Marketing Costs")?;
    writeln!(doc)?;
    writeln!(doc, "- Proposed discount: {}", format_rate(inputs.discount_rate))?;
    writeln!(
        doc,
        "- Customer acquisition cost (CAC): {} of margin",
        format_rate(inputs.acquisition_cost_rate)
    )?;
    writeln!(doc)?;

    writeln!(doc, "## Estimated Sales Volume")?;
    writeln!(doc)?;
    writeln!(
        doc,
        "- Estimated quantity with discount: {} units",
        inputs.estimated_quantity
    )?;
    writeln!(doc)?;

    writeln!(doc, "## Basic Analysis")?;
    writeln!(doc)?;
    writeln!(doc, "| Scenario | Profit per unit | Margin | Total revenue |")?;
    writeln!(doc, "|---|---:|---:|---:|")?;
    writeln!(
        doc,
        "| Today | {} | {} | {} |",
        money(decision.baseline.profit_per_unit),
        format_rate(decision.baseline.adjusted_margin_rate),
        money(decision.baseline.total_revenue)
    )?;
    writeln!(
        doc,
        "| With discount | {} | {} | {} |",
        money(decision.discounted.profit_per_unit),
        format_rate(decision.discounted.adjusted_margin_rate),
        money(decision.discounted.total_revenue)
    )?;
    writeln!(doc)?;

    if let Some(best) = &report.best_strategy {
        writeln!(doc, "## Best Discount Tier")?;
        writeln!(doc)?;
        writeln!(doc, "- Tier: {}", best.name)?;
        writeln!(doc, "- Total revenue: {}", money(best.total_revenue))?;
        writeln!(doc, "- Adjusted margin: {}", format_rate(best.adjusted_margin_rate))?;
        writeln!(doc)?;
    }

    writeln!(doc, "## Conclusion")?;
    writeln!(doc)?;
    if decision.is_advantageous {
        writeln!(doc, "**Offering the discount is advantageous.**")?;
        writeln!(doc)?;
        writeln!(
            doc,
            "Additional profit: **{}**.",
            money(decision.revenue_delta)
        )?;
    } else {
        writeln!(doc, "**Offering the discount is not advantageous.**")?;
        writeln!(doc)?;
        writeln!(doc, "Expected loss: **{}**.", money(-decision.revenue_delta))?;
    }

    if !report.warnings.is_empty() {
        writeln!(doc)?;
        writeln!(doc, "## Warnings")?;
        writeln!(doc)?;
        for w in &report.warnings {
            writeln!(doc, "- {w}")?;
        }
    }

    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::decision::DiscountAnalysisInput;
    use crate::scenarios::tiers::ScenarioSet;
    use crate::types::Currency;
    use rust_decimal_macros::dec;

    fn inputs(estimated_quantity: rust_decimal::Decimal) -> DiscountAnalysisInput {
        DiscountAnalysisInput {
            unit_price: dec!(37.0),
            current_quantity: dec!(1000),
            margin_rate: dec!(0.20),
            discount_rate: dec!(0.05),
            acquisition_cost_rate: dec!(0.01),
            estimated_quantity,
        }
    }

    #[test]
    fn test_markdown_sections_and_loss() {
        let report =
            DiscountReport::from_analysis(&inputs(dec!(1350)), None, Currency::BRL).unwrap();
        let doc = MarkdownReportRenderer.render(&report).unwrap();

        assert!(doc.starts_with("# Discount Analysis Report"));
        for heading in [
            "## Product Data",
            "## Discount and Marketing Costs",
            "## Estimated Sales Volume",
            "## Basic Analysis",
            "## Conclusion",
        ] {
            assert!(doc.contains(heading), "missing {heading}");
        }
        assert!(doc.contains("- Unit price: R$ 37.00"));
        assert!(doc.contains("- Profit margin: 20.00%"));
        assert!(doc.contains("R$ 7,400.00"));
        assert!(doc.contains("R$ 7,392.60"));
        assert!(doc.contains("not advantageous"));
        assert!(doc.contains("Expected loss: **R$ 7.40**"));
        assert!(!doc.contains("## Best Discount Tier"));
    }

    #[test]
    fn test_markdown_gain_with_best_tier() {
        let tiers = ScenarioSet::default_tiers();
        let report =
            DiscountReport::from_analysis(&inputs(dec!(1400)), Some(&tiers), Currency::USD)
                .unwrap();
        let doc = MarkdownReportRenderer.render(&report).unwrap();

        assert!(doc.contains("**Offering the discount is advantageous.**"));
        assert!(doc.contains("Additional profit: **$ 266.40**"));
        assert!(doc.contains("## Best Discount Tier"));
        assert!(doc.contains("- Tier: Small Discount (5%)"));
        assert_eq!(MarkdownReportRenderer.extension(), "md");
    }
}
