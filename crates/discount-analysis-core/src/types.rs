use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::DiscountError;
use crate::DiscountResult;

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates expressed as decimals (0.05 = 5%). Never as percentages.
pub type Rate = Decimal;

/// Unit counts. Always whole numbers, kept as Decimal so they multiply cleanly with money.
pub type Units = Decimal;

/// Currency code
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    BRL,
    USD,
    EUR,
    GBP,
    Other(String),
}

impl Currency {
    /// Prefix used when printing amounts, e.g. "R$".
    pub fn symbol(&self) -> &str {
        match self {
            Currency::BRL => "R$",
            Currency::USD => "$",
            Currency::EUR => "€",
            Currency::GBP => "£",
            Currency::Other(code) => code.as_str(),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            Currency::BRL => "BRL",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::Other(code) => code.as_str(),
        }
    }
}

impl std::str::FromStr for Currency {
    type Err = DiscountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_uppercase();
        if code.is_empty() {
            return Err(DiscountError::invalid("currency", "Currency code is empty"));
        }
        Ok(match code.as_str() {
            "BRL" => Currency::BRL,
            "USD" => Currency::USD,
            "EUR" => Currency::EUR,
            "GBP" => Currency::GBP,
            _ => Currency::Other(code),
        })
    }
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}

/// Checks that a rate lies in [0, 1].
pub fn validate_rate(field: &str, value: Rate) -> DiscountResult<()> {
    if value < Decimal::ZERO || value > Decimal::ONE {
        return Err(DiscountError::invalid(
            field,
            format!("Rate must be between 0 and 1 (got {value})"),
        ));
    }
    Ok(())
}

/// Checks that a unit count is a non-negative whole number.
pub fn validate_units(field: &str, value: Units) -> DiscountResult<()> {
    if value < Decimal::ZERO {
        return Err(DiscountError::invalid(field, "Quantity cannot be negative"));
    }
    if !value.fract().is_zero() {
        return Err(DiscountError::invalid(
            field,
            format!("Quantity must be a whole number of units (got {value})"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_rate_bounds_are_inclusive() {
        assert!(validate_rate("r", dec!(0)).is_ok());
        assert!(validate_rate("r", dec!(1)).is_ok());
        assert!(validate_rate("r", dec!(-0.01)).is_err());
        assert!(validate_rate("r", dec!(1.01)).is_err());
    }

    #[test]
    fn test_units_reject_fractions() {
        assert!(validate_units("q", dec!(1350)).is_ok());
        assert!(validate_units("q", dec!(1350.0)).is_ok());
        assert!(validate_units("q", dec!(12.5)).is_err());
        assert!(validate_units("q", dec!(-1)).is_err());
    }

    #[test]
    fn test_currency_parse() {
        assert_eq!("brl".parse::<Currency>().unwrap(), Currency::BRL);
        assert_eq!(
            "chf".parse::<Currency>().unwrap(),
            Currency::Other("CHF".into())
        );
        assert!(" ".parse::<Currency>().is_err());
        assert_eq!(Currency::BRL.symbol(), "R$");
    }
}
