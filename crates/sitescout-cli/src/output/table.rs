use serde_json::{Map, Value};
use tabled::{builder::Builder, Table};

use super::{cell, flatten};

/// Format output as tables using the tabled crate.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) => {
            if let Some(result) = map.get("result") {
                print_result_table(result, map);
            } else if let Some(document) = map.get("document") {
                print_analysis(map, document);
            } else if map.contains_key("financial_table") {
                print_document(value);
            } else {
                print_field_table(value);
            }
        }
        _ => println!("{}", cell(value)),
    }
}

fn print_result_table(result: &Value, envelope: &Map<String, Value>) {
    print_field_table(result);

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

fn print_analysis(map: &Map<String, Value>, document: &Value) {
    if let Some(label) = map.get("location_label").and_then(Value::as_str) {
        let display = map
            .get("location")
            .and_then(|l| l.get("display_name"))
            .and_then(Value::as_str)
            .unwrap_or(label);
        println!("Location: {}\n", display);
    }

    if let Some(Value::Array(cards)) = map.get("cards") {
        let mut builder = Builder::default();
        builder.push_record(["KPI", "Value", "Note"]);
        for c in cards {
            builder.push_record([
                cell(&c["label"]),
                cell(&c["value"]),
                cell(&c["caption"]),
            ]);
        }
        println!("{}\n", Table::from(builder));
    }

    if let Some(market) = map.get("market") {
        println!("Market");
        print_field_table(market);
        println!();
    }

    print_document(document);
}

fn print_document(document: &Value) {
    print_rows(&document["financial_table"], "label", "value", ["Metric", "Value"]);
    println!();
    print_rows(&document["kpi_glossary"], "term", "value", ["KPI", "Value"]);

    if let Some(verdict) = document["summary"]["verdict"].as_str() {
        println!("\nVerdict: {}", verdict);
    }
    if let Some(insight) = document["verdict_insight"].as_str() {
        println!("{}", insight);
    }
}

fn print_rows(rows: &Value, key: &str, val: &str, headers: [&str; 2]) {
    let mut builder = Builder::default();
    builder.push_record(headers);
    for row in rows.as_array().into_iter().flatten() {
        builder.push_record([cell(&row[key]), cell(&row[val])]);
    }
    println!("{}", Table::from(builder));
}

fn print_field_table(value: &Value) {
    let mut rows = Vec::new();
    flatten("", value, &mut rows);

    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in rows {
        builder.push_record([key, val]);
    }
    println!("{}", Table::from(builder));
}
