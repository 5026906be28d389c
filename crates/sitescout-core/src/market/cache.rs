use std::collections::HashMap;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::market::generator::{generate_market_data, MarketSnapshot};
use crate::types::Coordinates;
use crate::SiteScoutResult;

/// Snapshots stay valid for an hour by default.
pub const DEFAULT_MARKET_TTL: Duration = Duration::from_secs(3600);

type CacheKey = (u64, u64, u64);

fn cache_key(center: &Coordinates, seed: u64) -> CacheKey {
    (center.latitude.to_bits(), center.longitude.to_bits(), seed)
}

struct CachedSnapshot {
    stored_at: Instant,
    snapshot: MarketSnapshot,
}

/// Time-bounded cache of market snapshots keyed on (latitude, longitude, seed).
pub struct MarketDataCache {
    ttl: Duration,
    entries: HashMap<CacheKey, CachedSnapshot>,
}

impl Default for MarketDataCache {
    fn default() -> Self {
        Self::new(DEFAULT_MARKET_TTL)
    }
}

impl MarketDataCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get_or_generate(
        &mut self,
        center: Coordinates,
        seed: u64,
    ) -> SiteScoutResult<MarketSnapshot> {
        self.get_or_generate_at(center, seed, Instant::now())
    }

    /// Same as [`get_or_generate`](Self::get_or_generate) with an explicit clock reading.
    pub fn get_or_generate_at(
        &mut self,
        center: Coordinates,
        seed: u64,
        now: Instant,
    ) -> SiteScoutResult<MarketSnapshot> {
        let key = cache_key(&center, seed);

        if let Some(entry) = self.entries.get(&key) {
            if now.saturating_duration_since(entry.stored_at) < self.ttl {
                debug!(
                    latitude = center.latitude,
                    longitude = center.longitude,
                    "market snapshot cache hit"
                );
                return Ok(entry.snapshot.clone());
            }
        }

        debug!(
            latitude = center.latitude,
            longitude = center.longitude,
            seed,
            "generating market snapshot"
        );
        let snapshot = generate_market_data(center, seed)?;
        self.purge_expired(now);
        self.entries.insert(
            key,
            CachedSnapshot {
                stored_at: now,
                snapshot: snapshot.clone(),
            },
        );
        Ok(snapshot)
    }

    /// Drop every entry older than the TTL.
    pub fn purge_expired(&mut self, now: Instant) {
        let ttl = self.ttl;
        self.entries
            .retain(|_, entry| now.saturating_duration_since(entry.stored_at) < ttl);
    }
}
