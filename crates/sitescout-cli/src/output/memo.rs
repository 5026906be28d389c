use serde_json::Value;
use std::fmt::Write;
use std::fs;
use tabled::builder::Builder;
use tabled::Table;

use sitescout_core::report::format::{fixed, format_money};
use sitescout_core::report::ReportDocument;

/// Months shown in the memo's cashflow table.
const PROJECTION_CHECKPOINTS: [u32; 8] = [1, 3, 6, 9, 12, 15, 18, 24];

/// Render the investor memo as plain text: executive summary, financial
/// deep dive, then the KPI glossary.
pub fn render_memo(doc: &ReportDocument) -> String {
    let mut out = String::new();
    let rule = "=".repeat(72);

    let _ = writeln!(out, "{:>72}", doc.header);
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "{}", doc.title);
    let _ = writeln!(out, "{rule}\n");

    // --- Page 1: Executive Summary ---
    let _ = writeln!(out, "EXECUTIVE SUMMARY  [{}]\n", doc.summary.verdict);
    let _ = writeln!(out, "{}\n", doc.summary.narrative);
    let _ = writeln!(out, "{}\n", doc.verdict_insight);

    let mut cashflow = Builder::default();
    cashflow.push_record(["Month", "Cumulative Cashflow"]);
    for point in doc
        .cashflow_projection
        .iter()
        .filter(|p| PROJECTION_CHECKPOINTS.contains(&p.month))
    {
        cashflow.push_record([
            point.month.to_string(),
            format_money(point.cumulative_cashflow, &doc.currency),
        ]);
    }
    let _ = writeln!(out, "24-Month ROI Projection");
    let _ = writeln!(out, "{}\n", Table::from(cashflow));

    // --- Page 2: Financial Deep Dive ---
    let _ = writeln!(out, "FINANCIAL DEEP DIVE\n");
    let mut financials = Builder::default();
    financials.push_record(["Metric", "Value"]);
    for row in &doc.financial_table {
        financials.push_record([row.label.as_str(), row.value.as_str()]);
    }
    let _ = writeln!(out, "{}\n", Table::from(financials));

    let mut costs = Builder::default();
    costs.push_record(["Cost", "Monthly", "Share"]);
    for share in &doc.cost_breakdown {
        costs.push_record([
            share.category.label().to_string(),
            format_money(share.amount, &doc.currency),
            format!("{}%", fixed(share.share_pct, 1)),
        ]);
    }
    let _ = writeln!(out, "Cost Breakdown");
    let _ = writeln!(out, "{}\n", Table::from(costs));

    // --- Page 3: Strategic KPI Glossary ---
    let _ = writeln!(out, "STRATEGIC KPI GLOSSARY\n");
    for kpi in &doc.kpi_glossary {
        let _ = writeln!(out, "{}: {}", kpi.term, kpi.value);
        let _ = writeln!(out, "    {}\n", kpi.definition);
    }

    out
}

/// Write the rendered memo to `path`.
pub fn export_memo(doc: &ReportDocument, path: &str) -> Result<(), Box<dyn std::error::Error>> {
    fs::write(path, render_memo(doc).as_bytes())
        .map_err(|e| format!("Failed to write memo to '{}': {}", path, e))?;
    tracing::info!(path, "memo exported");
    Ok(())
}

/// Print the memo for a report document or a full analysis; anything else
/// falls back to JSON.
pub fn print_memo(value: &Value) {
    let doc_value = value.get("document").unwrap_or(value);
    match serde_json::from_value::<ReportDocument>(doc_value.clone()) {
        Ok(doc) => print!("{}", render_memo(&doc)),
        Err(_) => super::json::print_json(value),
    }
}
