use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::debug;

use crate::pricing::engine::{compute_revenue, revenue_delta, PricingInputs, PricingResult};
use crate::types::{validate_units, with_metadata, ComputationOutput, Money, Rate, Units};
use crate::DiscountResult;

/// The six figures a retailer supplies to evaluate a proposed discount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscountAnalysisInput {
    pub unit_price: Money,
    /// Units sold today, without the discount
    pub current_quantity: Units,
    pub margin_rate: Rate,
    /// Proposed discount as a fraction of price
    pub discount_rate: Rate,
    /// Customer-acquisition cost as a fraction of margin
    pub acquisition_cost_rate: Rate,
    /// Units the retailer expects to sell once the discount is live
    pub estimated_quantity: Units,
}

/// The figures a dashboard opens with: R$37 at 20% margin, 1000 units today,
/// 1350 expected with a 5% discount costing 1% of margin to acquire.
impl Default for DiscountAnalysisInput {
    fn default() -> Self {
        DiscountAnalysisInput {
            unit_price: dec!(37.0),
            current_quantity: dec!(1000),
            margin_rate: dec!(0.20),
            discount_rate: dec!(0.05),
            acquisition_cost_rate: dec!(0.01),
            estimated_quantity: dec!(1350),
        }
    }
}

impl DiscountAnalysisInput {
    /// Today's position: current volume at the plain margin.
    pub fn baseline_inputs(&self) -> PricingInputs {
        PricingInputs::undiscounted(self.unit_price, self.current_quantity, self.margin_rate)
    }

    /// The proposal: estimated volume with the discount and acquisition cost applied.
    pub fn discounted_inputs(&self) -> PricingInputs {
        self.baseline_inputs().with_tier(
            self.discount_rate,
            self.acquisition_cost_rate,
            self.estimated_quantity,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Advantageous,
    NotAdvantageous,
}

impl Verdict {
    pub fn from_revenues(candidate: Money, baseline: Money) -> Self {
        if candidate > baseline {
            Verdict::Advantageous
        } else {
            Verdict::NotAdvantageous
        }
    }

    pub fn is_advantageous(self) -> bool {
        self == Verdict::Advantageous
    }
}

/// Today vs proposed discount.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscountDecision {
    pub baseline: PricingResult,
    pub discounted: PricingResult,
    pub verdict: Verdict,
    pub is_advantageous: bool,
    /// discounted - baseline total revenue; negative means the discount loses money
    pub revenue_delta: Money,
}

/// Decide whether the proposed discount beats the current position.
pub fn analyze_discount(
    input: &DiscountAnalysisInput,
) -> DiscountResult<ComputationOutput<DiscountDecision>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate_units("current_quantity", input.current_quantity)?;
    validate_units("estimated_quantity", input.estimated_quantity)?;

    let baseline = compute_revenue(&input.baseline_inputs())?;
    let discounted = compute_revenue(&input.discounted_inputs())?;

    if discounted.adjusted_margin_rate < Decimal::ZERO {
        warnings.push(format!(
            "Adjusted margin is negative ({}); every discounted unit sold destroys value",
            discounted.adjusted_margin_rate
        ));
    }
    if input.estimated_quantity < input.current_quantity {
        warnings.push(
            "Estimated quantity is below current quantity; the discount is expected to shrink volume"
                .to_string(),
        );
    }

    let verdict = Verdict::from_revenues(discounted.total_revenue, baseline.total_revenue);
    let delta = revenue_delta(discounted.total_revenue, baseline.total_revenue)?;

    debug!(
        baseline = %baseline.total_revenue,
        discounted = %discounted.total_revenue,
        ?verdict,
        "discount analysed"
    );

    let output = DiscountDecision {
        baseline,
        discounted,
        verdict,
        is_advantageous: verdict.is_advantageous(),
        revenue_delta: delta,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Discount profitability: baseline margin vs discounted margin net of acquisition cost",
        input,
        warnings,
        elapsed,
        output,
    ))
}
