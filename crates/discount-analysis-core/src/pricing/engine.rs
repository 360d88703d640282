use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::DiscountError;
use crate::types::{validate_rate, validate_units, Money, Rate, Units};
use crate::DiscountResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Inputs for a single revenue calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingInputs {
    /// Shelf price per unit before any discount
    pub unit_price: Money,
    /// Units sold in the period being evaluated
    pub quantity: Units,
    /// Fraction of the unit price kept as profit
    pub margin_rate: Rate,
    /// Discount taken off the margin, as a fraction of price
    #[serde(default)]
    pub discount_rate: Rate,
    /// Customer-acquisition spend, as a fraction of the margin
    #[serde(default)]
    pub acquisition_cost_rate: Rate,
}

/// Result of the pricing formula. Adjusted margin and profit may be negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingResult {
    pub total_revenue: Money,
    pub profit_per_unit: Money,
    pub adjusted_margin_rate: Rate,
}

impl PricingInputs {
    /// Plain-margin inputs: no discount and no acquisition cost.
    pub fn undiscounted(unit_price: Money, quantity: Units, margin_rate: Rate) -> Self {
        PricingInputs {
            unit_price,
            quantity,
            margin_rate,
            discount_rate: Decimal::ZERO,
            acquisition_cost_rate: Decimal::ZERO,
        }
    }

    /// Same product and margin, different discount tier and volume.
    pub fn with_tier(
        &self,
        discount_rate: Rate,
        acquisition_cost_rate: Rate,
        quantity: Units,
    ) -> Self {
        PricingInputs {
            unit_price: self.unit_price,
            quantity,
            margin_rate: self.margin_rate,
            discount_rate,
            acquisition_cost_rate,
        }
    }

    pub fn validate(&self) -> DiscountResult<()> {
        if self.unit_price < Decimal::ZERO {
            return Err(DiscountError::invalid("unit_price", "Unit price cannot be negative"));
        }
        validate_units("quantity", self.quantity)?;
        validate_rate("margin_rate", self.margin_rate)?;
        validate_rate("discount_rate", self.discount_rate)?;
        validate_rate("acquisition_cost_rate", self.acquisition_cost_rate)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Formula
// ---------------------------------------------------------------------------

/// Margin left after the discount and the acquisition cost share of the margin.
pub fn adjusted_margin(
    margin_rate: Rate,
    discount_rate: Rate,
    acquisition_cost_rate: Rate,
) -> Rate {
    margin_rate - discount_rate - acquisition_cost_rate * margin_rate
}

/// Apply the discount pricing formula.
///
/// ```text
/// adjusted_margin_rate = margin - discount - cac * margin
/// profit_per_unit      = unit_price * adjusted_margin_rate
/// total_revenue        = quantity * profit_per_unit
/// ```
///
/// Inputs are validated first; a negative adjusted margin is returned as-is.
/// Products beyond the `Decimal` range are rejected as `InvalidInput`.
pub fn compute_revenue(inputs: &PricingInputs) -> DiscountResult<PricingResult> {
    inputs.validate()?;

    let adjusted_margin_rate = adjusted_margin(
        inputs.margin_rate,
        inputs.discount_rate,
        inputs.acquisition_cost_rate,
    );
    let profit_per_unit = inputs
        .unit_price
        .checked_mul(adjusted_margin_rate)
        .ok_or_else(|| out_of_range("unit_price"))?;
    let total_revenue = inputs
        .quantity
        .checked_mul(profit_per_unit)
        .ok_or_else(|| out_of_range("quantity"))?;

    Ok(PricingResult {
        total_revenue,
        profit_per_unit,
        adjusted_margin_rate,
    })
}

/// `candidate - baseline` total revenue, rejected when it leaves the `Decimal` range.
pub fn revenue_delta(candidate: Money, baseline: Money) -> DiscountResult<Money> {
    candidate
        .checked_sub(baseline)
        .ok_or_else(|| out_of_range("revenue_delta"))
}

fn out_of_range(field: &str) -> DiscountError {
    DiscountError::invalid(field, "Result exceeds the decimal range")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
