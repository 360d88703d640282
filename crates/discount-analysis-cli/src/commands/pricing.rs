use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use discount_analysis_core::pricing::{analyze_discount, compute_revenue, PricingInputs};

use super::AnalysisArgs;
use crate::input;

/// Arguments for a single pricing-formula run
#[derive(Args)]
pub struct RevenueArgs {
    /// Path to JSON input file
    #[arg(long)]
    pub input: Option<String>,

    /// Unit price of the product
    #[arg(long)]
    pub unit_price: Option<Decimal>,

    /// Units sold
    #[arg(long)]
    pub quantity: Option<Decimal>,

    /// Profit margin per unit as a fraction
    #[arg(long)]
    pub margin_rate: Option<Decimal>,

    /// Discount as a fraction of price [default: 0]
    #[arg(long)]
    pub discount_rate: Option<Decimal>,

    /// Customer-acquisition cost as a fraction of margin [default: 0]
    #[arg(long)]
    pub acquisition_cost_rate: Option<Decimal>,
}

impl RevenueArgs {
    /// File or piped JSON first, explicit flags on top. Without a body the
    /// price, quantity and margin flags are all required.
    fn resolve(&self) -> Result<PricingInputs, Box<dyn std::error::Error>> {
        let base: Option<PricingInputs> = match self.input {
            Some(ref path) => Some(input::file::read_json(path)?),
            None if self.has_product_flags() => None,
            None => input::stdin::read_stdin()?,
        };
        self.apply_flags(base)
    }

    fn has_product_flags(&self) -> bool {
        self.unit_price.is_some() && self.quantity.is_some() && self.margin_rate.is_some()
    }

    fn apply_flags(
        &self,
        base: Option<PricingInputs>,
    ) -> Result<PricingInputs, Box<dyn std::error::Error>> {
        let base = match base {
            Some(b) => b,
            None => match (self.unit_price, self.quantity, self.margin_rate) {
                (Some(unit_price), Some(quantity), Some(margin_rate)) => {
                    PricingInputs::undiscounted(unit_price, quantity, margin_rate)
                }
                _ => {
                    return Err("--input <file.json>, stdin, or \
                                --unit-price/--quantity/--margin-rate required"
                        .into())
                }
            },
        };
        Ok(PricingInputs {
            unit_price: self.unit_price.unwrap_or(base.unit_price),
            quantity: self.quantity.unwrap_or(base.quantity),
            margin_rate: self.margin_rate.unwrap_or(base.margin_rate),
            discount_rate: self.discount_rate.unwrap_or(base.discount_rate),
            acquisition_cost_rate: self
                .acquisition_cost_rate
                .unwrap_or(base.acquisition_cost_rate),
        })
    }
}

/// Arguments for the today-vs-discount decision
#[derive(Args)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub analysis: AnalysisArgs,
}

pub fn run_revenue(args: RevenueArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let inputs = args.resolve()?;
    let result = compute_revenue(&inputs)?;
    Ok(serde_json::json!({
        "result": result,
        "assumptions": inputs,
    }))
}

pub fn run_analyze(args: AnalyzeArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let input = args.analysis.resolve()?;
    let result = analyze_discount(&input)?;
    Ok(serde_json::to_value(result)?)
}
