use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use statrs::distribution::Normal;

use crate::error::SiteScoutError;
use crate::types::Coordinates;
use crate::SiteScoutResult;

const RIVAL_KINDS: [&str; 3] = ["Cafe", "Bistro", "Grill"];

/// Kind of point of interest around a candidate site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarketCategory {
    Competitor,
    Corporate,
    Premium,
}

impl MarketCategory {
    pub const ALL: [MarketCategory; 3] = [
        MarketCategory::Competitor,
        MarketCategory::Corporate,
        MarketCategory::Premium,
    ];

    /// (points generated, spread in degrees)
    fn layout(&self) -> (usize, f64) {
        match self {
            MarketCategory::Competitor => (30, 0.005),
            MarketCategory::Corporate => (40, 0.004),
            MarketCategory::Premium => (15, 0.006),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketPoint {
    pub category: MarketCategory,
    pub name: String,
    pub location: Coordinates,
    /// Distance from the search centre
    pub distance_km: f64,
}

/// Counts and proximity figures for the neighbourhood.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSummary {
    pub competitors: usize,
    pub corporate_offices: usize,
    pub premium_anchors: usize,
    pub nearest_competitor_km: Option<f64>,
}

/// Synthetic points of interest around one centre, reproducible from `seed`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    pub center: Coordinates,
    pub seed: u64,
    pub points: Vec<MarketPoint>,
}

impl MarketSnapshot {
    pub fn count(&self, category: MarketCategory) -> usize {
        self.points.iter().filter(|p| p.category == category).count()
    }

    pub fn competitor_count(&self) -> usize {
        self.count(MarketCategory::Competitor)
    }

    pub fn of(&self, category: MarketCategory) -> impl Iterator<Item = &MarketPoint> {
        self.points.iter().filter(move |p| p.category == category)
    }

    pub fn nearest(&self, category: MarketCategory) -> Option<&MarketPoint> {
        self.of(category)
            .min_by(|a, b| a.distance_km.total_cmp(&b.distance_km))
    }

    pub fn summary(&self) -> MarketSummary {
        MarketSummary {
            competitors: self.competitor_count(),
            corporate_offices: self.count(MarketCategory::Corporate),
            premium_anchors: self.count(MarketCategory::Premium),
            nearest_competitor_km: self
                .nearest(MarketCategory::Competitor)
                .map(|p| p.distance_km),
        }
    }
}

/// Scatter competitors, corporate offices and premium anchors around
/// `center` with Gaussian offsets.
///
/// The same `(center, seed)` always yields the same snapshot.
pub fn generate_market_data(center: Coordinates, seed: u64) -> SiteScoutResult<MarketSnapshot> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut points = Vec::new();

    for category in MarketCategory::ALL {
        let (count, spread) = category.layout();
        let offset = Normal::new(0.0, spread).map_err(|e| SiteScoutError::InvalidInput {
            field: "spread".into(),
            reason: e.to_string(),
        })?;

        for _ in 0..count {
            let location = Coordinates::new(
                center.latitude + rng.sample(offset),
                center.longitude + rng.sample(offset),
            );
            let name = match category {
                MarketCategory::Competitor => format!(
                    "Rival {} {}",
                    RIVAL_KINDS[rng.gen_range(0..RIVAL_KINDS.len())],
                    rng.gen_range(1..=99)
                ),
                MarketCategory::Corporate => "Corporate Office".to_string(),
                MarketCategory::Premium => "Premium Anchor".to_string(),
            };
            points.push(MarketPoint {
                category,
                name,
                distance_km: location.approx_distance_km(&center),
                location,
            });
        }
    }

    Ok(MarketSnapshot {
        center,
        seed,
        points,
    })
}
