use clap::Args;
use serde_json::Value;

use sitescout_core::geocoding::{Geocoder, NominatimGeocoder};
use sitescout_core::report::location_label;

use crate::settings::Settings;

/// Arguments for a geocoding lookup
#[derive(Args)]
pub struct GeocodeArgs {
    /// Free-text location, e.g. "Indiranagar, Bangalore"
    pub query: String,
}

pub fn run_geocode(args: GeocodeArgs, settings: &Settings) -> Result<Value, Box<dyn std::error::Error>> {
    let geocoder = NominatimGeocoder::new(settings.geocoder_config())?;
    let location = geocoder.geocode(&args.query).into_result(&args.query)?;

    Ok(serde_json::json!({
        "result": {
            "latitude": location.coordinates.latitude,
            "longitude": location.coordinates.longitude,
            "display_name": location.display_name,
            "label": location_label(&location.display_name),
        }
    }))
}
