use serde_json::{Map, Value};
use tabled::{builder::Builder, Table};

use super::{flatten_object, format_scalar, primary_rows};

/// Format output as tables using the tabled crate.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) => match map.get("result") {
            Some(result) => print_envelope(result, map),
            None => print_fields(map, &[]),
        },
        Value::Array(arr) => print_rows(arr),
        _ => println!("{}", value),
    }
}

fn print_envelope(result: &Value, envelope: &Map<String, Value>) {
    match result {
        Value::Object(res_map) => {
            let rows = primary_rows(result);
            // Row arrays get their own table below the summary
            let skip: &[&str] = match rows {
                Some(("outcomes", _)) => &["outcomes"],
                Some(_) => &["series.observations"],
                None => &[],
            };
            print_fields(res_map, skip);
            if let Some((label, rows)) = rows {
                println!("\n{}:", capitalise(label));
                print_rows(rows);
            }
        }
        other => println!("{}", format_scalar(other)),
    }

    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings.iter().filter_map(Value::as_str) {
                println!("  - {}", w);
            }
        }
    }

    if let Some(Value::String(meth)) = envelope.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

fn print_fields(map: &Map<String, Value>, skip: &[&str]) {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in flatten_object(map) {
        if skip.contains(&key.as_str()) {
            continue;
        }
        builder.push_record([key, format_scalar(&val)]);
    }
    println!("{}", Table::from(builder));
}

fn print_rows(arr: &[Value]) {
    if arr.is_empty() {
        println!("(empty)");
        return;
    }

    let flat: Vec<Vec<(String, Value)>> = arr
        .iter()
        .filter_map(Value::as_object)
        .map(flatten_object)
        .collect();

    let Some(first) = flat.first() else {
        for item in arr {
            println!("{}", format_scalar(item));
        }
        return;
    };

    let headers: Vec<String> = first.iter().map(|(k, _)| k.clone()).collect();
    let mut builder = Builder::default();
    builder.push_record(headers.clone());
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
        builder.push_record(cells);
    }
    println!("{}", Table::from(builder));
}

fn capitalise(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
