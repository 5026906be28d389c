use clap::Args;
use serde_json::Value;

use sitescout_core::analysis::{SiteAnalyzer, DEFAULT_MARKET_SEED};
use sitescout_core::feasibility::BusinessAssumptions;
use sitescout_core::geocoding::{FixedGeocoder, GeoLocation, Geocoder, NominatimGeocoder};
use sitescout_core::market::MarketDataCache;
use sitescout_core::{Coordinates, SiteScoutError};

use crate::commands::{resolve_assumptions, AssumptionArgs};
use crate::output::memo;
use crate::settings::Settings;

/// Arguments for a full site analysis
#[derive(Args)]
#[command(allow_negative_numbers = true)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub assumptions: AssumptionArgs,

    /// Free-text location to geocode
    #[arg(long, default_value = "Indiranagar, Bangalore")]
    pub location: String,

    /// Skip geocoding and use this latitude (requires --lon)
    #[arg(long, requires = "lon")]
    pub lat: Option<f64>,

    /// Skip geocoding and use this longitude (requires --lat)
    #[arg(long, requires = "lat")]
    pub lon: Option<f64>,

    /// Seed for the synthetic market snapshot
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write the rendered memo to this file
    #[arg(long)]
    pub export: Option<String>,
}

pub fn run_analyze(args: AnalyzeArgs, settings: &Settings) -> Result<Value, Box<dyn std::error::Error>> {
    let assumptions = resolve_assumptions(&args.assumptions, settings)?;

    match (args.lat, args.lon) {
        (Some(lat), Some(lon)) => {
            let geocoder = FixedGeocoder::new(GeoLocation {
                coordinates: Coordinates::new(lat, lon),
                display_name: args.location.clone(),
            });
            analyze_with(geocoder, &args, &assumptions, settings)
        }
        _ => {
            let geocoder = NominatimGeocoder::new(settings.geocoder_config())?;
            analyze_with(geocoder, &args, &assumptions, settings)
        }
    }
}

fn analyze_with<G: Geocoder>(
    geocoder: G,
    args: &AnalyzeArgs,
    assumptions: &BusinessAssumptions,
    settings: &Settings,
) -> Result<Value, Box<dyn std::error::Error>> {
    let seed = args.seed.or(settings.market.seed).unwrap_or(DEFAULT_MARKET_SEED);
    let mut analyzer =
        SiteAnalyzer::with_cache(geocoder, MarketDataCache::new(settings.market_ttl()), seed);

    let analysis = match analyzer.run(&args.location, assumptions) {
        Ok(analysis) => analysis,
        Err(SiteScoutError::LocationNotFound(query)) => {
            return Err(format!("Location not found: '{query}'. Try a major city area.").into())
        }
        Err(e) => return Err(e.into()),
    };

    if let Some(ref path) = args.export {
        memo::export_memo(&analysis.document, path)?;
    }

    Ok(serde_json::to_value(analysis)?)
}
