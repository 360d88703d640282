pub mod comparator;
pub mod tiers;

pub use comparator::{
    compare_scenarios, select_best_strategy, BestStrategy, ComparisonInput, ScenarioComparison,
    ScenarioOutcome,
};
pub use tiers::{ScenarioDefinition, ScenarioSet};
