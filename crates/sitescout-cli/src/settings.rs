use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use rust_decimal::Decimal;
use serde::Deserialize;

use sitescout_core::geocoding::GeocoderConfig;
use sitescout_core::Currency;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub geocoder: GeocoderSettings,
    pub market: MarketSettings,
    pub model: ModelSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GeocoderSettings {
    pub endpoint: String,
    pub user_agent: String,
    pub timeout_secs: u64,
    pub max_retries: u32,
    pub backoff_ms: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MarketSettings {
    pub cache_ttl_secs: u64,
    pub seed: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ModelSettings {
    pub monthly_staff_cost: Decimal,
    pub cogs_pct: Decimal,
    pub currency: String,
}

impl Settings {
    /// Built-in defaults, then the settings file, then `SITESCOUT__*` variables.
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => File::with_name(path).required(true),
            None => File::with_name("sitescout").required(false),
        };

        Config::builder()
            .set_default("geocoder.endpoint", "https://nominatim.openstreetmap.org/search")?
            .set_default("geocoder.user_agent", "SiteScout/1.0")?
            .set_default("geocoder.timeout_secs", 5)?
            .set_default("geocoder.max_retries", 0)?
            .set_default("geocoder.backoff_ms", 250)?
            .set_default("market.cache_ttl_secs", 3600)?
            .set_default("model.monthly_staff_cost", "150000")?
            .set_default("model.cogs_pct", "30")?
            .set_default("model.currency", "INR")?
            .add_source(file)
            .add_source(Environment::with_prefix("SITESCOUT").separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn geocoder_config(&self) -> GeocoderConfig {
        GeocoderConfig {
            endpoint: self.geocoder.endpoint.clone(),
            user_agent: self.geocoder.user_agent.clone(),
            timeout: Duration::from_secs(self.geocoder.timeout_secs),
            max_retries: self.geocoder.max_retries,
            backoff: Duration::from_millis(self.geocoder.backoff_ms),
        }
    }

    pub fn market_ttl(&self) -> Duration {
        Duration::from_secs(self.market.cache_ttl_secs)
    }

    pub fn currency(&self) -> Currency {
        match self.model.currency.trim().to_uppercase().as_str() {
            "INR" => Currency::INR,
            "USD" => Currency::USD,
            "GBP" => Currency::GBP,
            "EUR" => Currency::EUR,
            other => Currency::Other(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::io::Write;

    #[test]
    fn test_defaults_without_file() {
        let s = Settings::load(None).unwrap();
        assert_eq!(s.geocoder.timeout_secs, 5);
        assert_eq!(s.market.cache_ttl_secs, 3600);
        assert_eq!(s.model.monthly_staff_cost, dec!(150000));
        assert_eq!(s.model.cogs_pct, dec!(30));
        assert_eq!(s.geocoder_config().timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[geocoder]\nmax_retries = 2\n\n[market]\nseed = 7\n\n[model]\ncurrency = \"usd\"\ncogs_pct = 35"
        )
        .unwrap();

        let s = Settings::load(file.path().to_str()).unwrap();
        assert_eq!(s.geocoder.max_retries, 2);
        assert_eq!(s.geocoder.timeout_secs, 5);
        assert_eq!(s.market.seed, Some(7));
        assert_eq!(s.model.cogs_pct, dec!(35));
        assert_eq!(s.currency(), Currency::USD);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        assert!(Settings::load(Some("/nonexistent/sitescout-settings.toml")).is_err());
    }
}
