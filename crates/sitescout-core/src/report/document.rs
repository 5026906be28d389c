use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::feasibility::assumptions::BusinessAssumptions;
use crate::feasibility::model::{CostCategory, FinancialReport};
use crate::feasibility::projection::{
    project_cumulative_cashflow, CashflowPoint, DEFAULT_PROJECTION_MONTHS,
};
use crate::feasibility::verdict::{verdict_insight, Verdict};
use crate::math::safe_pct;
use crate::report::format::{format_breakeven, format_money, format_multiple, format_pct};
use crate::types::{Currency, Money, Percent};

pub const REPORT_TITLE: &str = "Site Feasibility & Financial Model";

pub const RENT_COVERAGE_DEFINITION: &str =
    "Monthly revenue divided by monthly rent; the safety margin against lease obligations.";
pub const OPEX_RATIO_DEFINITION: &str =
    "Recurring operating costs (rent, staff and miscellaneous) as a share of monthly revenue.";
pub const BREAKEVEN_DEFINITION: &str =
    "Months required for cumulative net profit to equal the capital invested.";
pub const CASH_ON_CASH_DEFINITION: &str =
    "Annualized net profit as a percentage of the capital invested.";

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Executive summary section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub verdict: Verdict,
    pub location_label: String,
    pub capital_invested: Money,
    /// Raw engine value; 999 means no break-even
    pub breakeven_months: Decimal,
    pub monthly_revenue: Money,
    pub daily_orders: u32,
    /// Prose paragraph for the first page of the memo
    pub narrative: String,
}

/// One (label, formatted value) row of the financial deep-dive table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    pub label: String,
    pub value: String,
}

/// One entry of the strategic KPI glossary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KpiEntry {
    pub term: String,
    pub value: String,
    pub definition: String,
}

/// Cost breakdown chart row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostShare {
    pub category: CostCategory,
    pub amount: Money,
    /// Share of total monthly costs
    pub share_pct: Percent,
}

/// Presentation-neutral investor memo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportDocument {
    pub title: String,
    /// Running header, e.g. "CONFIDENTIAL: INVESTMENT MEMO - Indiranagar"
    pub header: String,
    pub currency: Currency,
    pub summary: Summary,
    pub financial_table: Vec<TableRow>,
    pub kpi_glossary: Vec<KpiEntry>,
    pub verdict_insight: String,
    pub cashflow_projection: Vec<CashflowPoint>,
    pub cost_breakdown: Vec<CostShare>,
}

// ---------------------------------------------------------------------------
// Assembly
// ---------------------------------------------------------------------------

/// Short label for a geocoded place: the text before the first comma.
pub fn location_label(display_name: &str) -> String {
    display_name
        .split(',')
        .next()
        .unwrap_or_default()
        .trim()
        .to_string()
}

/// Shape a financial report into the fixed three-section memo.
pub fn assemble_report(
    report: &FinancialReport,
    input: &BusinessAssumptions,
    location_label: &str,
) -> ReportDocument {
    let currency = &input.currency;

    ReportDocument {
        title: REPORT_TITLE.to_string(),
        header: format!("CONFIDENTIAL: INVESTMENT MEMO - {location_label}"),
        currency: currency.clone(),
        summary: Summary {
            verdict: report.verdict(),
            location_label: location_label.to_string(),
            capital_invested: input.capital_invested,
            breakeven_months: report.breakeven_months,
            monthly_revenue: report.monthly_revenue,
            daily_orders: input.daily_orders,
            narrative: summary_narrative(report, input, location_label),
        },
        financial_table: financial_table(report, currency),
        kpi_glossary: kpi_glossary(report),
        verdict_insight: verdict_insight(report, input),
        cashflow_projection: project_cumulative_cashflow(
            report.net_profit,
            input.capital_invested,
            DEFAULT_PROJECTION_MONTHS,
        ),
        cost_breakdown: cost_shares(report),
    }
}

fn summary_narrative(report: &FinancialReport, input: &BusinessAssumptions, label: &str) -> String {
    let currency = &input.currency;
    let payback = match report.payback_months() {
        Some(_) => format!("The estimated break-even period is {}.", format_breakeven(report)),
        None => "The site does not reach break-even at the projected volume.".to_string(),
    };
    format!(
        "Location Analysis for {label}.\n\nBased on the input capital of {} and projected daily \
         footfall of {} pax, this site is projected to generate {} in monthly revenue. {payback}",
        format_money(input.capital_invested, currency),
        input.daily_orders,
        format_money(report.monthly_revenue, currency),
    )
}

fn financial_table(report: &FinancialReport, currency: &Currency) -> Vec<TableRow> {
    let row = |label: &str, value: String| TableRow {
        label: label.to_string(),
        value,
    };
    vec![
        row("Monthly Revenue", format_money(report.monthly_revenue, currency)),
        row("Monthly Rent", format_money(report.monthly_rent, currency)),
        row(
            "Staff & Misc",
            format_money(report.cost_breakdown.staff.saturating_add(report.misc_cost), currency),
        ),
        row("Net Profit (EBITDA)", format_money(report.net_profit, currency)),
        row("Net Margin", format_pct(report.margin_pct)),
        row("Cash-on-Cash Return", format_pct(report.cash_on_cash_return_pct)),
    ]
}

fn kpi_glossary(report: &FinancialReport) -> Vec<KpiEntry> {
    let entry = |term: &str, value: String, definition: &str| KpiEntry {
        term: term.to_string(),
        value,
        definition: definition.to_string(),
    };
    vec![
        entry(
            "Rent Coverage Ratio",
            format_multiple(report.rent_coverage_ratio),
            RENT_COVERAGE_DEFINITION,
        ),
        entry(
            "OPEX Ratio",
            format_pct(report.opex_ratio_pct),
            OPEX_RATIO_DEFINITION,
        ),
        entry(
            "Break-even Period",
            format_breakeven(report),
            BREAKEVEN_DEFINITION,
        ),
        entry(
            "Cash-on-Cash Return",
            format_pct(report.cash_on_cash_return_pct),
            CASH_ON_CASH_DEFINITION,
        ),
    ]
}

fn cost_shares(report: &FinancialReport) -> Vec<CostShare> {
    let total = report.cost_breakdown.total();
    report
        .cost_breakdown
        .entries()
        .into_iter()
        .map(|(category, amount)| CostShare {
            category,
            amount,
            share_pct: safe_pct(amount, total),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feasibility::model::compute_financial_report;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn cafe_document() -> ReportDocument {
        let input = BusinessAssumptions::default();
        let report = compute_financial_report(&input);
        assemble_report(&report, &input, "Indiranagar")
    }

    #[test]
    fn test_location_label() {
        assert_eq!(
            location_label("Indiranagar, Bengaluru, Bangalore North, Karnataka, India"),
            "Indiranagar"
        );
        assert_eq!(location_label("  Soho  "), "Soho");
        assert_eq!(location_label(""), "");
    }

    #[test]
    fn test_summary_section() {
        let doc = cafe_document();
        assert_eq!(doc.summary.verdict, Verdict::StrongBuy);
        assert_eq!(doc.summary.location_label, "Indiranagar");
        assert_eq!(doc.summary.capital_invested, dec!(2500000));
        assert_eq!(doc.summary.monthly_revenue, dec!(1147500));
        assert_eq!(doc.summary.daily_orders, 85);
        assert_eq!(doc.header, "CONFIDENTIAL: INVESTMENT MEMO - Indiranagar");
    }

    #[test]
    fn test_summary_narrative() {
        let doc = cafe_document();
        assert_eq!(
            doc.summary.narrative,
            "Location Analysis for Indiranagar.\n\nBased on the input capital of INR 2,500,000 \
             and projected daily footfall of 85 pax, this site is projected to generate \
             INR 1,147,500 in monthly revenue. The estimated break-even period is 6.0 months."
        );
    }

    #[test]
    fn test_financial_table_rows() {
        let doc = cafe_document();
        let rows: Vec<(&str, &str)> = doc
            .financial_table
            .iter()
            .map(|r| (r.label.as_str(), r.value.as_str()))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("Monthly Revenue", "INR 1,147,500"),
                ("Monthly Rent", "INR 180,000"),
                ("Staff & Misc", "INR 207,375"),
                ("Net Profit (EBITDA)", "INR 415,875"),
                ("Net Margin", "36.2%"),
                ("Cash-on-Cash Return", "199.6%"),
            ]
        );
    }

    #[test]
    fn test_kpi_glossary_order_and_definitions() {
        let doc = cafe_document();
        let terms: Vec<&str> = doc.kpi_glossary.iter().map(|k| k.term.as_str()).collect();
        assert_eq!(
            terms,
            vec![
                "Rent Coverage Ratio",
                "OPEX Ratio",
                "Break-even Period",
                "Cash-on-Cash Return"
            ]
        );
        assert_eq!(doc.kpi_glossary[0].value, "6.38x");
        assert_eq!(doc.kpi_glossary[1].value, "33.8%");
        assert_eq!(doc.kpi_glossary[2].value, "6.0 months");
        assert_eq!(doc.kpi_glossary[2].definition, BREAKEVEN_DEFINITION);
    }

    #[test]
    fn test_loss_making_site_document() {
        let mut input = BusinessAssumptions::default();
        input.daily_orders = 0;
        let report = compute_financial_report(&input);
        let doc = assemble_report(&report, &input, "Whitefield");

        assert_eq!(doc.summary.verdict, Verdict::HighRisk);
        assert_eq!(doc.summary.breakeven_months, dec!(999));
        assert_eq!(doc.kpi_glossary[2].value, "Never (no break-even)");
        assert!(doc
            .summary
            .narrative
            .ends_with("does not reach break-even at the projected volume."));
        assert!(doc.cashflow_projection.iter().all(|p| !p.recovered));
    }

    #[test]
    fn test_cost_shares_sum_to_hundred() {
        let doc = cafe_document();
        let labels: Vec<&str> = doc.cost_breakdown.iter().map(|c| c.category.label()).collect();
        assert_eq!(labels, vec!["Rent", "COGS", "Staff", "Misc"]);
        let total: Decimal = doc.cost_breakdown.iter().map(|c| c.share_pct).sum();
        assert!((total - dec!(100)).abs() < dec!(0.000001));
    }

    #[test]
    fn test_assembly_is_pure() {
        assert_eq!(cafe_document(), cafe_document());
    }
}
