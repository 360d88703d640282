use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::DiscountError;
use crate::types::{validate_rate, Rate};
use crate::DiscountResult;

/// A named (discount, acquisition cost) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioDefinition {
    pub name: String,
    pub discount_rate: Rate,
    /// Fraction of margin spent on customer acquisition under this tier
    pub acquisition_cost_rate: Rate,
}

impl ScenarioDefinition {
    pub fn new(name: impl Into<String>, discount_rate: Rate, acquisition_cost_rate: Rate) -> Self {
        ScenarioDefinition {
            name: name.into(),
            discount_rate,
            acquisition_cost_rate,
        }
    }

    /// Tiers with no discount never compete for best strategy.
    pub fn is_discounted(&self) -> bool {
        self.discount_rate > Decimal::ZERO
    }
}

/// Ordered set of tiers handed to the comparator. Order is the display order.
///
/// Deserialises from either a bare list or `{ "tiers": [...] }`, so config files
/// can be written in whichever shape is convenient. Names are unique within a
/// set: they are how `best_strategy` and reports refer to a tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "TierFile")]
pub struct ScenarioSet {
    pub tiers: Vec<ScenarioDefinition>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TierFile {
    Wrapped { tiers: Vec<ScenarioDefinition> },
    Bare(Vec<ScenarioDefinition>),
}

impl From<TierFile> for ScenarioSet {
    fn from(file: TierFile) -> Self {
        match file {
            TierFile::Wrapped { tiers } | TierFile::Bare(tiers) => ScenarioSet { tiers },
        }
    }
}

impl Default for ScenarioSet {
    fn default() -> Self {
        Self::default_tiers()
    }
}

impl ScenarioSet {
    pub fn new(tiers: Vec<ScenarioDefinition>) -> Self {
        ScenarioSet { tiers }
    }

    /// The five standard tiers: none, small, medium, large and aggressive.
    /// Acquisition cost grows one point of margin per five points of discount.
    pub fn default_tiers() -> Self {
        ScenarioSet {
            tiers: vec![
                ScenarioDefinition::new("No Discount", dec!(0.00), dec!(0.00)),
                ScenarioDefinition::new("Small Discount (5%)", dec!(0.05), dec!(0.01)),
                ScenarioDefinition::new("Medium Discount (10%)", dec!(0.10), dec!(0.02)),
                ScenarioDefinition::new("Large Discount (15%)", dec!(0.15), dec!(0.03)),
                ScenarioDefinition::new("Aggressive Discount (20%)", dec!(0.20), dec!(0.04)),
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScenarioDefinition> {
        self.tiers.iter()
    }

    /// Names must be non-empty and unique; rates must lie in [0, 1].
    /// An empty set is valid.
    pub fn validate(&self) -> DiscountResult<()> {
        let mut seen = HashSet::new();
        for tier in &self.tiers {
            let name = tier.name.trim();
            if name.is_empty() {
                return Err(DiscountError::invalid("tiers.name", "Tier name cannot be empty"));
            }
            if !seen.insert(name) {
                return Err(DiscountError::invalid(
                    format!("tiers:{name}"),
                    "Duplicate tier name",
                ));
            }
            validate_rate(&format!("tiers:{name} discount_rate"), tier.discount_rate)?;
            validate_rate(
                &format!("tiers:{name} acquisition_cost_rate"),
                tier.acquisition_cost_rate,
            )?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ScenarioSet {
    type Item = &'a ScenarioDefinition;
    type IntoIter = std::slice::Iter<'a, ScenarioDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiers.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_tiers() {
        let set = ScenarioSet::default_tiers();
        assert_eq!(set.len(), 5);
        assert!(!set.tiers[0].is_discounted());
        assert!(set.tiers[1..].iter().all(ScenarioDefinition::is_discounted));
        assert_eq!(set.tiers[4].discount_rate, dec!(0.20));
        assert_eq!(set.tiers[4].acquisition_cost_rate, dec!(0.04));
        assert!(set.validate().is_ok());
    }

    #[test]
    fn test_deserialise_bare_and_wrapped() {
        let bare: ScenarioSet = serde_json::from_str(
            r#"[{"name": "Flash", "discount_rate": "0.08", "acquisition_cost_rate": "0.0"}]"#,
        )
        .unwrap();
        let wrapped: ScenarioSet = serde_json::from_str(
            r#"{"tiers": [{"name": "Flash", "discount_rate": "0.08", "acquisition_cost_rate": "0.0"}]}"#,
        )
        .unwrap();
        assert_eq!(bare, wrapped);
        assert_eq!(bare.tiers[0].name, "Flash");
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let set = ScenarioSet::new(vec![
            ScenarioDefinition::new("A", dec!(0.05), dec!(0.01)),
            ScenarioDefinition::new("A", dec!(0.10), dec!(0.02)),
        ]);
        assert!(set.validate().is_err());
    }

    #[test]
    fn test_out_of_range_rate_rejected() {
        let set = ScenarioSet::new(vec![ScenarioDefinition::new("Silly", dec!(1.5), dec!(0))]);
        match set.validate() {
            Err(DiscountError::InvalidInput { field, .. }) => {
                assert!(field.contains("discount_rate"))
            }
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_set_is_valid() {
        assert!(ScenarioSet::new(Vec::new()).validate().is_ok());
    }
}
