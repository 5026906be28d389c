use serde_json::Value;

use super::cell;

/// Where the headline figures live, in priority order.
const CONTAINERS: [&str; 4] = ["/result", "/document/summary", "/summary", ""];

/// Key answer fields in priority order.
const PRIORITY_KEYS: [&str; 6] = [
    "verdict",
    "net_profit",
    "breakeven_months",
    "display_name",
    "competitors",
    "monthly_revenue",
];

/// Print just the key answer value from the output.
pub fn print_minimal(value: &Value) {
    println!("{}", minimal_answer(value));
}

fn minimal_answer(value: &Value) -> String {
    for pointer in CONTAINERS {
        let Some(Value::Object(map)) = value.pointer(pointer) else {
            continue;
        };
        for key in PRIORITY_KEYS {
            if let Some(val) = map.get(key).filter(|v| !v.is_null()) {
                return cell(val);
            }
        }
    }

    // Fall back to the first field of the innermost container
    match value.get("result").unwrap_or(value) {
        Value::Object(map) => map
            .iter()
            .next()
            .map(|(key, val)| format!("{}: {}", key, cell(val)))
            .unwrap_or_default(),
        other => cell(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_model_envelope_prints_net_profit() {
        let v = json!({ "result": { "monthly_revenue": "1147500", "net_profit": "415875" } });
        assert_eq!(minimal_answer(&v), "415875");
    }

    #[test]
    fn test_analysis_prints_verdict() {
        let v = json!({
            "financials": { "result": { "net_profit": "1" } },
            "document": { "summary": { "verdict": "Strong Buy" } }
        });
        assert_eq!(minimal_answer(&v), "Strong Buy");
    }

    #[test]
    fn test_document_prints_verdict() {
        let v = json!({ "title": "x", "summary": { "verdict": "High Risk" } });
        assert_eq!(minimal_answer(&v), "High Risk");
    }

    #[test]
    fn test_fallback_to_first_field() {
        let v = json!({ "result": { "alpha": 1 } });
        assert_eq!(minimal_answer(&v), "alpha: 1");
    }
}
