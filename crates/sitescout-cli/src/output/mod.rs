pub mod csv_out;
pub mod json;
pub mod memo;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use serde_json::Value;

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
        OutputFormat::Memo => memo::print_memo(value),
    }
}

/// Render a scalar for a single table or CSV cell.
pub fn cell(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        Value::Array(arr) => arr.iter().map(cell).collect::<Vec<_>>().join(", "),
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}

/// Flatten nested objects into (dotted.key, cell) pairs; arrays stay in one cell.
pub fn flatten(prefix: &str, value: &Value, out: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) => {
            for (key, val) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten(&path, val, out);
            }
        }
        _ => out.push((prefix.to_string(), cell(value))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flatten_nested_breakdown() {
        let value = json!({
            "net_profit": "415875",
            "cost_breakdown": { "Rent": "180000", "COGS": "344250" }
        });
        let mut rows = Vec::new();
        flatten("", &value, &mut rows);
        assert!(rows.contains(&("cost_breakdown.Rent".to_string(), "180000".to_string())));
        assert!(rows.contains(&("net_profit".to_string(), "415875".to_string())));
        assert_eq!(rows.len(), 3);
    }

    #[test]
    fn test_cell_formats() {
        assert_eq!(cell(&json!(null)), "");
        assert_eq!(cell(&json!([1, "a"])), "1, a");
        assert_eq!(cell(&json!(true)), "true");
    }
}
