pub mod nominatim;

use serde::{Deserialize, Serialize};

use crate::error::SiteScoutError;
use crate::types::Coordinates;
use crate::SiteScoutResult;

pub use nominatim::{GeocoderConfig, NominatimGeocoder};

/// A resolved place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub coordinates: Coordinates,
    pub display_name: String,
}

/// Result of a lookup. Every failure mode (HTTP error, empty result,
/// timeout, network error) is reported as `NotFound`; there is no partial result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GeocodeOutcome {
    Found(GeoLocation),
    NotFound,
}

impl GeocodeOutcome {
    pub fn into_result(self, query: &str) -> SiteScoutResult<GeoLocation> {
        match self {
            GeocodeOutcome::Found(location) => Ok(location),
            GeocodeOutcome::NotFound => Err(SiteScoutError::LocationNotFound(query.to_string())),
        }
    }
}

/// Resolves a free-text location query to coordinates.
pub trait Geocoder {
    fn geocode(&self, query: &str) -> GeocodeOutcome;
}

/// Geocoder that always answers with the same place, for offline runs
/// where the caller already knows the coordinates.
#[derive(Debug, Clone)]
pub struct FixedGeocoder {
    location: Option<GeoLocation>,
}

impl FixedGeocoder {
    pub fn new(location: GeoLocation) -> Self {
        Self {
            location: Some(location),
        }
    }

    pub fn not_found() -> Self {
        Self { location: None }
    }
}

impl Geocoder for FixedGeocoder {
    fn geocode(&self, _query: &str) -> GeocodeOutcome {
        match &self.location {
            Some(location) => GeocodeOutcome::Found(location.clone()),
            None => GeocodeOutcome::NotFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_error() {
        let err = GeocodeOutcome::NotFound.into_result("Atlantis").unwrap_err();
        assert!(matches!(err, SiteScoutError::LocationNotFound(q) if q == "Atlantis"));
    }

    #[test]
    fn test_fixed_geocoder() {
        let place = GeoLocation {
            coordinates: Coordinates::new(51.5, -0.12),
            display_name: "London, Greater London, England".into(),
        };
        let found = FixedGeocoder::new(place.clone()).geocode("anything");
        assert_eq!(found, GeocodeOutcome::Found(place));
        assert_eq!(FixedGeocoder::not_found().geocode("x"), GeocodeOutcome::NotFound);
    }
}
