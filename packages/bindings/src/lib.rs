use napi::Result as NapiResult;
use napi_derive::napi;
use serde::Deserialize;

use sitescout_core::feasibility::{self, BusinessAssumptions, FinancialReport};
use sitescout_core::report::{self, DashboardState};

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

#[derive(Deserialize)]
struct ReportRequest {
    assumptions: BusinessAssumptions,
    location_label: String,
}

#[derive(Deserialize)]
struct DashboardRequest {
    #[serde(default)]
    state: DashboardState,
    assumptions: BusinessAssumptions,
    #[serde(default)]
    competitor_count: usize,
}

/// Parse and range-check assumptions before they reach the engine.
fn parse_assumptions(input_json: &str) -> NapiResult<BusinessAssumptions> {
    let input: BusinessAssumptions = serde_json::from_str(input_json).map_err(to_napi_error)?;
    input.validate_ranges().map_err(to_napi_error)?;
    Ok(input)
}

fn report_for(assumptions: &BusinessAssumptions) -> NapiResult<FinancialReport> {
    assumptions.validate_ranges().map_err(to_napi_error)?;
    Ok(feasibility::compute_financial_report(assumptions))
}

// ---------------------------------------------------------------------------
// Financial model
// ---------------------------------------------------------------------------

#[napi]
pub fn compute_financial_report(input_json: String) -> NapiResult<String> {
    let input = parse_assumptions(&input_json)?;
    let output = feasibility::analyze_site_feasibility(&input);
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Report and dashboard
// ---------------------------------------------------------------------------

#[napi]
pub fn assemble_report(input_json: String) -> NapiResult<String> {
    let request: ReportRequest = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let financials = report_for(&request.assumptions)?;
    let document =
        report::assemble_report(&financials, &request.assumptions, &request.location_label);
    serde_json::to_string(&document).map_err(to_napi_error)
}

#[napi]
pub fn build_dashboard(input_json: String) -> NapiResult<String> {
    let request: DashboardRequest = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let financials = report_for(&request.assumptions)?;
    let view = report::dashboard_view(
        request.state,
        &financials,
        &request.assumptions,
        request.competitor_count,
    );
    serde_json::to_string(&view).map_err(to_napi_error)
}

#[napi]
pub fn validate_assumptions(input_json: String) -> NapiResult<bool> {
    parse_assumptions(&input_json)?;
    Ok(true)
}
