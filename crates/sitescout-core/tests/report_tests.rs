use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use sitescout_core::feasibility::assumptions::BusinessAssumptions;
use sitescout_core::feasibility::model::compute_financial_report;
use sitescout_core::feasibility::verdict::Verdict;
use sitescout_core::report::document::{
    assemble_report, location_label, ReportDocument, BREAKEVEN_DEFINITION,
    CASH_ON_CASH_DEFINITION, OPEX_RATIO_DEFINITION, RENT_COVERAGE_DEFINITION,
};
use sitescout_core::Currency;

fn memo(input: &BusinessAssumptions, display_name: &str) -> ReportDocument {
    let report = compute_financial_report(input);
    assemble_report(&report, input, &location_label(display_name))
}

// ===========================================================================
// Section shape
// ===========================================================================

#[test]
fn test_three_sections_for_reference_site() {
    let doc = memo(
        &BusinessAssumptions::default(),
        "Indiranagar, Bengaluru, Bangalore North, Karnataka, 560038, India",
    );

    assert_eq!(doc.title, "Site Feasibility & Financial Model");
    assert_eq!(doc.summary.location_label, "Indiranagar");
    assert_eq!(doc.summary.verdict, Verdict::StrongBuy);
    assert_eq!(doc.financial_table.len(), 6);

    let glossary: Vec<(&str, &str, &str)> = doc
        .kpi_glossary
        .iter()
        .map(|k| (k.term.as_str(), k.value.as_str(), k.definition.as_str()))
        .collect();
    assert_eq!(
        glossary,
        vec![
            ("Rent Coverage Ratio", "6.38x", RENT_COVERAGE_DEFINITION),
            ("OPEX Ratio", "33.8%", OPEX_RATIO_DEFINITION),
            ("Break-even Period", "6.0 months", BREAKEVEN_DEFINITION),
            ("Cash-on-Cash Return", "199.6%", CASH_ON_CASH_DEFINITION),
        ]
    );
}

#[test]
fn test_definitions_do_not_depend_on_numbers() {
    let healthy = memo(&BusinessAssumptions::default(), "Indiranagar");
    let mut weak_input = BusinessAssumptions::default();
    weak_input.daily_orders = 10;
    let weak = memo(&weak_input, "Indiranagar");

    for (a, b) in healthy.kpi_glossary.iter().zip(&weak.kpi_glossary) {
        assert_eq!(a.term, b.term);
        assert_eq!(a.definition, b.definition);
    }
    assert_eq!(weak.summary.verdict, Verdict::HighRisk);
}

#[test]
fn test_currency_flows_into_formatting() {
    let mut input = BusinessAssumptions::default();
    input.currency = Currency::USD;
    let doc = memo(&input, "Soho, London");
    assert_eq!(doc.financial_table[0].value, "USD 1,147,500");
    assert!(doc.summary.narrative.contains("USD 2,500,000"));
    assert_eq!(doc.header, "CONFIDENTIAL: INVESTMENT MEMO - Soho");
}

#[test]
fn test_projection_matches_payback() {
    let doc = memo(&BusinessAssumptions::default(), "Indiranagar");
    assert_eq!(doc.cashflow_projection.len(), 24);
    // break-even ~6.01 months: still negative at month 6, recovered at month 7
    assert!(!doc.cashflow_projection[5].recovered);
    assert!(doc.cashflow_projection[6].recovered);
    assert_eq!(doc.summary.breakeven_months.round_dp(2), dec!(6.01));
}

#[test]
fn test_document_serializes_section_names() {
    let doc = memo(&BusinessAssumptions::default(), "Indiranagar");
    let json = serde_json::to_value(&doc).unwrap();
    assert_eq!(json["summary"]["verdict"], "Strong Buy");
    assert_eq!(json["summary"]["monthly_revenue"], "1147500");
    assert_eq!(json["financial_table"][4]["label"], "Net Margin");
    assert_eq!(json["kpi_glossary"][0]["term"], "Rent Coverage Ratio");
    assert_eq!(json["cost_breakdown"][1]["category"], "COGS");
}
