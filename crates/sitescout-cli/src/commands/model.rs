use clap::Args;
use serde_json::Value;

use sitescout_core::feasibility::analyze_site_feasibility;

use crate::commands::{resolve_assumptions, AssumptionArgs};
use crate::settings::Settings;

/// Arguments for the financial model
#[derive(Args)]
pub struct ModelArgs {
    #[command(flatten)]
    pub assumptions: AssumptionArgs,
}

pub fn run_model(args: ModelArgs, settings: &Settings) -> Result<Value, Box<dyn std::error::Error>> {
    let assumptions = resolve_assumptions(&args.assumptions, settings)?;
    let result = analyze_site_feasibility(&assumptions);
    Ok(serde_json::to_value(result)?)
}
