use std::thread;
use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::error::SiteScoutError;
use crate::geocoding::{GeoLocation, GeocodeOutcome, Geocoder};
use crate::types::Coordinates;
use crate::SiteScoutResult;

pub const DEFAULT_ENDPOINT: &str = "https://nominatim.openstreetmap.org/search";
pub const DEFAULT_USER_AGENT: &str = "SiteScout/1.0";

/// Connection settings for a Nominatim-compatible search endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeocoderConfig {
    pub endpoint: String,
    pub user_agent: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// Extra attempts after a transient failure
    pub max_retries: u32,
    /// Delay before the first retry; doubles on every further retry
    pub backoff: Duration,
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(5),
            max_retries: 0,
            backoff: Duration::from_millis(250),
        }
    }
}

/// One element of the Nominatim JSON array. Coordinates arrive as strings.
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
    display_name: String,
}

enum Attempt {
    Found(GeoLocation),
    /// Definitive answer; retrying will not help
    Missing(String),
    /// Timeout, connection failure or server-side error
    Transient(String),
}

/// Blocking client for the OpenStreetMap Nominatim search API.
pub struct NominatimGeocoder {
    client: Client,
    config: GeocoderConfig,
}

impl NominatimGeocoder {
    pub fn new(config: GeocoderConfig) -> SiteScoutResult<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout)
            .build()
            .map_err(|e| SiteScoutError::Geocoding(e.to_string()))?;
        Ok(Self { client, config })
    }

    fn attempt(&self, query: &str) -> Attempt {
        let response = match self
            .client
            .get(&self.config.endpoint)
            .query(&[("q", query), ("format", "json"), ("limit", "1")])
            .send()
        {
            Ok(response) => response,
            Err(e) => return Attempt::Transient(e.to_string()),
        };

        let status = response.status();
        if status.is_server_error() {
            return Attempt::Transient(format!("HTTP {status}"));
        }
        if status != reqwest::StatusCode::OK {
            return Attempt::Missing(format!("HTTP {status}"));
        }

        let places: Vec<NominatimPlace> = match response.json() {
            Ok(places) => places,
            Err(e) => return Attempt::Missing(format!("unreadable response: {e}")),
        };
        match places.into_iter().next() {
            Some(place) => parse_place(place),
            None => Attempt::Missing("empty result set".to_string()),
        }
    }
}

fn parse_place(place: NominatimPlace) -> Attempt {
    match (place.lat.trim().parse::<f64>(), place.lon.trim().parse::<f64>()) {
        (Ok(latitude), Ok(longitude)) if latitude.is_finite() && longitude.is_finite() => {
            Attempt::Found(GeoLocation {
                coordinates: Coordinates::new(latitude, longitude),
                display_name: place.display_name,
            })
        }
        _ => Attempt::Missing(format!(
            "unparsable coordinates ({}, {})",
            place.lat, place.lon
        )),
    }
}

impl Geocoder for NominatimGeocoder {
    fn geocode(&self, query: &str) -> GeocodeOutcome {
        let query = query.trim();
        if query.is_empty() {
            return GeocodeOutcome::NotFound;
        }

        let mut delay = self.config.backoff;
        for attempt in 0..=self.config.max_retries {
            if attempt > 0 {
                debug!(attempt, delay_ms = delay.as_millis() as u64, "retrying geocode");
                thread::sleep(delay);
                delay = delay.saturating_mul(2);
            }

            match self.attempt(query) {
                Attempt::Found(location) => {
                    info!(query, display_name = %location.display_name, "location resolved");
                    return GeocodeOutcome::Found(location);
                }
                Attempt::Missing(reason) => {
                    warn!(query, %reason, "location not found");
                    return GeocodeOutcome::NotFound;
                }
                Attempt::Transient(reason) => {
                    warn!(query, attempt, %reason, "geocoding request failed");
                }
            }
        }

        GeocodeOutcome::NotFound
    }
}
