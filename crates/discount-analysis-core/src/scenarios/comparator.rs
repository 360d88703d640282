use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, info};

use crate::pricing::decision::DiscountAnalysisInput;
use crate::pricing::engine::{compute_revenue, revenue_delta, PricingInputs, PricingResult};
use crate::scenarios::tiers::{ScenarioDefinition, ScenarioSet};
use crate::types::{validate_units, with_metadata, ComputationOutput, Money, Rate, Units};
use crate::DiscountResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Product data plus the tier set to evaluate.
///
/// Every tier is priced at `estimated_quantity`: one volume estimate is shared
/// across all discount depths.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonInput {
    pub unit_price: Money,
    pub current_quantity: Units,
    pub margin_rate: Rate,
    pub estimated_quantity: Units,
    #[serde(default)]
    pub tiers: ScenarioSet,
}

impl ComparisonInput {
    pub fn from_analysis(input: &DiscountAnalysisInput, tiers: ScenarioSet) -> Self {
        ComparisonInput {
            unit_price: input.unit_price,
            current_quantity: input.current_quantity,
            margin_rate: input.margin_rate,
            estimated_quantity: input.estimated_quantity,
            tiers,
        }
    }

    fn baseline_inputs(&self) -> PricingInputs {
        PricingInputs::undiscounted(self.unit_price, self.current_quantity, self.margin_rate)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioOutcome {
    pub scenario: ScenarioDefinition,
    pub result: PricingResult,
    pub is_advantageous: bool,
    /// Tier revenue minus baseline revenue
    pub revenue_delta: Money,
    /// 1 = highest total revenue; equal revenues rank in input order
    pub revenue_rank: usize,
}

/// The discount-bearing tier with the highest total revenue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestStrategy {
    /// Position of the tier in the input order
    pub index: usize,
    pub name: String,
    pub total_revenue: Money,
    pub adjusted_margin_rate: Rate,
    pub is_advantageous: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioComparison {
    pub baseline: PricingResult,
    /// Same length and order as the input tiers
    pub outcomes: Vec<ScenarioOutcome>,
    /// `None` when no tier carries a discount
    pub best_strategy: Option<BestStrategy>,
}

// ---------------------------------------------------------------------------
// Comparison
// ---------------------------------------------------------------------------

/// Price every tier against the undiscounted baseline.
pub fn compare_scenarios(
    input: &ComparisonInput,
) -> DiscountResult<ComputationOutput<ScenarioComparison>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    input.tiers.validate()?;
    validate_units("estimated_quantity", input.estimated_quantity)?;

    let baseline = compute_revenue(&input.baseline_inputs())?;
    let product = input.baseline_inputs();

    let mut outcomes = Vec::with_capacity(input.tiers.len());
    for scenario in &input.tiers {
        let result = compute_revenue(&product.with_tier(
            scenario.discount_rate,
            scenario.acquisition_cost_rate,
            input.estimated_quantity,
        ))?;
        let is_advantageous = result.total_revenue > baseline.total_revenue;
        let delta = revenue_delta(result.total_revenue, baseline.total_revenue)?;

        debug!(
            tier = %scenario.name,
            total_revenue = %result.total_revenue,
            is_advantageous,
            "tier priced"
        );

        outcomes.push(ScenarioOutcome {
            scenario: scenario.clone(),
            result,
            is_advantageous,
            revenue_delta: delta,
            revenue_rank: 0,
        });
    }

    assign_revenue_ranks(&mut outcomes);

    if input.tiers.is_empty() {
        warnings.push("No tiers supplied; nothing to compare".to_string());
    }
    for o in outcomes.iter().filter(|o| o.result.adjusted_margin_rate < Decimal::ZERO) {
        warnings.push(format!(
            "Tier '{}' has a negative adjusted margin ({})",
            o.scenario.name, o.result.adjusted_margin_rate
        ));
    }

    let best_strategy = select_best_strategy(&outcomes);
    match &best_strategy {
        Some(best) => info!(
            tier = %best.name,
            total_revenue = %best.total_revenue,
            "best discount tier"
        ),
        None => warnings.push("No discount-bearing tier was evaluated".to_string()),
    }

    let output = ScenarioComparison {
        baseline,
        outcomes,
        best_strategy,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Discount tier comparison at a shared estimated volume",
        &serde_json::json!({
            "unit_price": input.unit_price.to_string(),
            "current_quantity": input.current_quantity.to_string(),
            "margin_rate": input.margin_rate.to_string(),
            "estimated_quantity": input.estimated_quantity.to_string(),
            "num_tiers": input.tiers.len(),
        }),
        warnings,
        elapsed,
        output,
    ))
}

/// Highest revenue among tiers with a discount; the first one wins a tie.
pub fn select_best_strategy(outcomes: &[ScenarioOutcome]) -> Option<BestStrategy> {
    let mut best: Option<(usize, &ScenarioOutcome)> = None;
    for (index, outcome) in outcomes.iter().enumerate() {
        if !outcome.scenario.is_discounted() {
            continue;
        }
        match best {
            Some((_, current)) if outcome.result.total_revenue <= current.result.total_revenue => {}
            _ => best = Some((index, outcome)),
        }
    }

    best.map(|(index, o)| BestStrategy {
        index,
        name: o.scenario.name.clone(),
        total_revenue: o.result.total_revenue,
        adjusted_margin_rate: o.result.adjusted_margin_rate,
        is_advantageous: o.is_advantageous,
    })
}

fn assign_revenue_ranks(outcomes: &mut [ScenarioOutcome]) {
    let mut order: Vec<usize> = (0..outcomes.len()).collect();
    // sort_by is stable, so equal revenues keep input order
    order.sort_by(|&a, &b| {
        outcomes[b]
            .result
            .total_revenue
            .cmp(&outcomes[a].result.total_revenue)
    });
    for (rank, idx) in order.into_iter().enumerate() {
        outcomes[idx].revenue_rank = rank + 1;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
