use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::feasibility::assumptions::BusinessAssumptions;
use crate::feasibility::model::{analyze_site_feasibility, FinancialReport};
use crate::geocoding::{GeoLocation, Geocoder};
use crate::market::{MarketDataCache, MarketSummary};
use crate::report::dashboard::{build_dashboard, profitability_waterfall, MetricCard, WaterfallBar};
use crate::report::document::{assemble_report, location_label, ReportDocument};
use crate::types::ComputationOutput;
use crate::SiteScoutResult;

/// Seed used for market data when the caller does not pick one.
pub const DEFAULT_MARKET_SEED: u64 = 0x5173_5C07;

/// Everything produced by one analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteAnalysis {
    pub location: GeoLocation,
    pub location_label: String,
    pub market: MarketSummary,
    pub financials: ComputationOutput<FinancialReport>,
    pub document: ReportDocument,
    pub cards: Vec<MetricCard>,
    pub profitability: Vec<WaterfallBar>,
}

/// Runs geocode → market → financial model → report, one request at a time.
pub struct SiteAnalyzer<G: Geocoder> {
    geocoder: G,
    market_cache: MarketDataCache,
    seed: u64,
}

impl<G: Geocoder> SiteAnalyzer<G> {
    pub fn new(geocoder: G) -> Self {
        Self::with_cache(geocoder, MarketDataCache::default(), DEFAULT_MARKET_SEED)
    }

    pub fn with_cache(geocoder: G, market_cache: MarketDataCache, seed: u64) -> Self {
        Self {
            geocoder,
            market_cache,
            seed,
        }
    }

    pub fn market_cache(&self) -> &MarketDataCache {
        &self.market_cache
    }

    /// Analyse one candidate site.
    ///
    /// Fails with `LocationNotFound` before any computation when the query
    /// cannot be geocoded; every other step is infallible for valid input.
    #[instrument(skip(self, input), fields(daily_orders = input.daily_orders))]
    pub fn run(&mut self, query: &str, input: &BusinessAssumptions) -> SiteScoutResult<SiteAnalysis> {
        let location = self.geocoder.geocode(query).into_result(query)?;
        let label = location_label(&location.display_name);

        let snapshot = self
            .market_cache
            .get_or_generate(location.coordinates, self.seed)?;
        let market = snapshot.summary();

        let financials = analyze_site_feasibility(input);
        let report = &financials.result;
        let document = assemble_report(report, input, &label);
        let cards = build_dashboard(report, input, market.competitors);
        let profitability = profitability_waterfall(report);

        info!(
            location = %label,
            verdict = %document.summary.verdict,
            "site analysis complete"
        );

        Ok(SiteAnalysis {
            location,
            location_label: label,
            market,
            financials,
            document,
            cards,
            profitability,
        })
    }
}
