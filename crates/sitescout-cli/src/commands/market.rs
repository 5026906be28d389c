use clap::Args;
use serde_json::Value;

use sitescout_core::analysis::DEFAULT_MARKET_SEED;
use sitescout_core::market::generate_market_data;
use sitescout_core::Coordinates;

use crate::settings::Settings;

/// Arguments for the synthetic market snapshot
#[derive(Args)]
#[command(allow_negative_numbers = true)]
pub struct MarketArgs {
    /// Latitude of the search centre
    #[arg(long)]
    pub lat: f64,

    /// Longitude of the search centre
    #[arg(long)]
    pub lon: f64,

    /// Seed for the generator (same seed, same snapshot)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Include every generated point, not just the summary
    #[arg(long)]
    pub points: bool,
}

pub fn run_market(args: MarketArgs, settings: &Settings) -> Result<Value, Box<dyn std::error::Error>> {
    let seed = args.seed.or(settings.market.seed).unwrap_or(DEFAULT_MARKET_SEED);
    let snapshot = generate_market_data(Coordinates::new(args.lat, args.lon), seed)?;

    let mut value = serde_json::json!({ "result": snapshot.summary() });
    if args.points {
        value["points"] = serde_json::to_value(&snapshot.points)?;
    }
    Ok(value)
}
