pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use serde_json::{Map, Value};

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// Flatten nested objects into dotted keys: `{"a": {"b": 1}}` -> `a.b = 1`.
/// Arrays are kept whole as leaf values.
pub fn flatten_object(map: &Map<String, Value>) -> Vec<(String, Value)> {
    let mut out = Vec::new();
    flatten_into("", map, &mut out);
    out
}

fn flatten_into(prefix: &str, map: &Map<String, Value>, out: &mut Vec<(String, Value)>) {
    for (key, val) in map {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match val {
            Value::Object(inner) => flatten_into(&path, inner, out),
            _ => out.push((path, val.clone())),
        }
    }
}

/// First array of objects inside the result, e.g. tier outcomes or FX observations.
pub fn primary_rows(result: &Value) -> Option<(&'static str, &[Value])> {
    [
        ("outcomes", "/outcomes"),
        ("observations", "/series/observations"),
    ]
    .into_iter()
    .find_map(|(label, pointer)| {
        result
            .pointer(pointer)
            .and_then(Value::as_array)
            .filter(|rows| rows.first().map(Value::is_object).unwrap_or(false))
            .map(|rows| (label, rows.as_slice()))
    })
}

/// Render a scalar leaf for tables and CSV cells.
pub fn format_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        Value::Array(arr) => arr.iter().map(format_scalar).collect::<Vec<_>>().join(", "),
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}
