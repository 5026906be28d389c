use serde_json::Value;
use std::io;

use super::flatten;

/// Write output as CSV to stdout.
///
/// Envelopes become `field,value` rows of their `result`; report documents
/// become `label,value` rows of their financial table.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    let document = value.get("document").unwrap_or(value);
    if let Some(Value::Array(rows)) = document.get("financial_table") {
        let _ = wtr.write_record(["label", "value"]);
        for row in rows {
            let _ = wtr.write_record([
                row["label"].as_str().unwrap_or_default(),
                row["value"].as_str().unwrap_or_default(),
            ]);
        }
    } else {
        let body = value.get("result").unwrap_or(value);
        let mut rows = Vec::new();
        flatten("", body, &mut rows);

        let _ = wtr.write_record(["field", "value"]);
        for (key, val) in rows {
            let _ = wtr.write_record([key, val]);
        }
    }

    let _ = wtr.flush();
}
