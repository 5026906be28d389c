use clap::Args;
use serde_json::Value;

use sitescout_core::feasibility::compute_financial_report;
use sitescout_core::report::assemble_report;

use crate::commands::{resolve_assumptions, AssumptionArgs};
use crate::output::memo;
use crate::settings::Settings;

/// Arguments for investor memo assembly
#[derive(Args)]
pub struct ReportArgs {
    #[command(flatten)]
    pub assumptions: AssumptionArgs,

    /// Location shown in the memo header and summary
    #[arg(long, default_value = "Indiranagar")]
    pub location_label: String,

    /// Write the rendered memo to this file
    #[arg(long)]
    pub export: Option<String>,
}

pub fn run_report(args: ReportArgs, settings: &Settings) -> Result<Value, Box<dyn std::error::Error>> {
    let assumptions = resolve_assumptions(&args.assumptions, settings)?;
    let report = compute_financial_report(&assumptions);
    let document = assemble_report(&report, &assumptions, &args.location_label);

    if let Some(ref path) = args.export {
        memo::export_memo(&document, path)?;
    }

    Ok(serde_json::to_value(document)?)
}
