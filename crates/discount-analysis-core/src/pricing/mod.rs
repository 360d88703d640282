pub mod decision;
pub mod engine;

pub use decision::{analyze_discount, DiscountAnalysisInput, DiscountDecision, Verdict};
pub use engine::{compute_revenue, PricingInputs, PricingResult};
