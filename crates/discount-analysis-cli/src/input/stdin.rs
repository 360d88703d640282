use serde::de::DeserializeOwned;
use std::io::{self, Read};

/// Deserialise piped JSON from stdin.
/// Returns None when stdin is a terminal or carries only whitespace.
pub fn read_stdin<T: DeserializeOwned>() -> Result<Option<T>, Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    parse_piped(&buffer)
}

fn parse_piped<T: DeserializeOwned>(
    buffer: &str,
) -> Result<Option<T>, Box<dyn std::error::Error>> {
    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let value: T = serde_json::from_str(trimmed)
        .map_err(|e| format!("Failed to parse JSON from stdin: {e}"))?;
    Ok(Some(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use discount_analysis_core::pricing::PricingInputs;

    #[test]
    fn test_blank_input_is_none() {
        assert!(parse_piped::<PricingInputs>("  \n").unwrap().is_none());
    }

    #[test]
    fn test_piped_inputs() {
        let parsed: Option<PricingInputs> =
            parse_piped(r#"{"unit_price": "37.0", "quantity": "1000", "margin_rate": "0.2"}"#)
                .unwrap();
        let inputs = parsed.unwrap();
        assert!(inputs.discount_rate.is_zero());
    }
}
