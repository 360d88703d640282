use rust_decimal::{Decimal, RoundingStrategy};

use crate::types::{Currency, Money, Rate};

/// Two-decimal amount with thousands separators, e.g. `R$ 7,400.00`.
pub fn format_money(amount: Money, currency: &Currency) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    let text = format!("{:.2}", rounded.abs());
    let (whole, frac) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    format!("{sign}{} {}.{frac}", currency.symbol(), group_thousands(whole))
}

/// Rate as a two-decimal percentage, e.g. `0.148` -> `14.80%`.
pub fn format_rate(rate: Rate) -> String {
    let pct = (rate * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{pct:.2}%")
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(dec!(7400), &Currency::BRL), "R$ 7,400.00");
        assert_eq!(format_money(dec!(7392.6), &Currency::BRL), "R$ 7,392.60");
        assert_eq!(format_money(dec!(1234567.891), &Currency::USD), "$ 1,234,567.89");
        assert_eq!(format_money(dec!(999.995), &Currency::BRL), "R$ 1,000.00");
        assert_eq!(format_money(dec!(0), &Currency::BRL), "R$ 0.00");
    }

    #[test]
    fn test_format_negative_money() {
        assert_eq!(format_money(dec!(-7.4), &Currency::BRL), "-R$ 7.40");
    }

    #[test]
    fn test_format_rate() {
        assert_eq!(format_rate(dec!(0.148)), "14.80%");
        assert_eq!(format_rate(dec!(0.2)), "20.00%");
        assert_eq!(format_rate(dec!(-0.008)), "-0.80%");
    }
}
