use serde_json::Value;
use std::io;

use super::{flatten_object, format_scalar, primary_rows};

/// Write output as CSV to stdout.
///
/// Tier outcomes and FX observations become one row each; any other result
/// becomes a two-column field/value listing.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());
    if let Err(e) = write_csv(&mut wtr, value).and_then(|_| wtr.flush().map_err(csv::Error::from)) {
        eprintln!("CSV output error: {}", e);
    }
}

fn write_csv<W: io::Write>(wtr: &mut csv::Writer<W>, value: &Value) -> Result<(), csv::Error> {
    let result = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    if let Some((_, rows)) = primary_rows(result) {
        return write_rows(wtr, rows);
    }

    match result {
        Value::Object(map) => {
            wtr.write_record(["field", "value"])?;
            for (key, val) in flatten_object(map) {
                wtr.write_record([key, format_scalar(&val)])?;
            }
        }
        Value::Array(arr) => write_rows(wtr, arr)?,
        _ => wtr.write_record([format_scalar(result)])?,
    }
    Ok(())
}

fn write_rows<W: io::Write>(wtr: &mut csv::Writer<W>, rows: &[Value]) -> Result<(), csv::Error> {
    let flat: Vec<Vec<(String, Value)>> = rows
        .iter()
        .filter_map(Value::as_object)
        .map(flatten_object)
        .collect();
    let Some(first) = flat.first() else {
        return Ok(());
    };

    let headers: Vec<&str> = first.iter().map(|(k, _)| k.as_str()).collect();
    wtr.write_record(&headers)?;
    for row in &flat {
        let cells: Vec<String> = headers
            .iter()
            .map(|h| {
                row.iter()
                    .find(|(k, _)| k == h)
                    .map(|(_, v)| format_scalar(v))
                    .unwrap_or_default()
            })
            .collect();
        wtr.write_record(&cells)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn render(value: &Value) -> String {
        let mut wtr = csv::Writer::from_writer(Vec::new());
        write_csv(&mut wtr, value).unwrap();
        String::from_utf8(wtr.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn test_outcomes_become_rows() {
        let value = json!({
            "result": {
                "baseline": {"total_revenue": "7400"},
                "outcomes": [
                    {"scenario": {"name": "No Discount"}, "is_advantageous": true},
                    {"scenario": {"name": "Small Discount (5%)"}, "is_advantageous": false}
                ]
            }
        });
        let out = render(&value);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("scenario.name") && lines[0].contains("is_advantageous"));
        assert!(lines[1].contains("No Discount") && lines[1].contains("true"));
        assert!(lines[2].contains("Small Discount (5%)") && lines[2].contains("false"));
    }

    #[test]
    fn test_plain_result_is_field_value() {
        let value = json!({
            "result": {"total_revenue": "7392.60", "adjusted_margin_rate": "0.148"}
        });
        let out = render(&value);
        assert!(out.starts_with("field,value\n"));
        assert!(out.contains("total_revenue,7392.60"));
    }
}
