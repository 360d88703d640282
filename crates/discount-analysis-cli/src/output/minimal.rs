use serde_json::Value;

use super::format_scalar;

/// Print just the key answer value from the output.
///
/// Looks for well-known result fields in priority order, then falls back to
/// the first field in the result object.
pub fn print_minimal(value: &Value) {
    println!("{}", minimal_answer(value));
}

fn minimal_answer(value: &Value) -> String {
    let result = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    // JSON pointers into the result, most decisive first
    let priority = [
        "/verdict",
        "/best_strategy/name",
        "/path",
        "/summary/latest",
        "/warning",
        "/total_revenue",
    ];

    for pointer in priority {
        if let Some(val) = result.pointer(pointer) {
            if !val.is_null() {
                return format_scalar(val);
            }
        }
    }

    if let Some(map) = result.as_object() {
        if let Some((key, val)) = map.iter().next() {
            return format!("{}: {}", key, format_scalar(val));
        }
    }

    format_scalar(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_verdict_wins() {
        let v = json!({"result": {"verdict": "not_advantageous", "revenue_delta": "-7.40"}});
        assert_eq!(minimal_answer(&v), "not_advantageous");
    }

    #[test]
    fn test_best_tier_name() {
        let v = json!({"result": {"best_strategy": {"name": "Small Discount (5%)"}}});
        assert_eq!(minimal_answer(&v), "Small Discount (5%)");
    }

    #[test]
    fn test_null_best_tier_falls_through() {
        let v = json!({"result": {"best_strategy": null}});
        assert_eq!(minimal_answer(&v), "best_strategy: ");
    }
}
