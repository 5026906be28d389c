pub mod cache;
pub mod generator;

pub use cache::MarketDataCache;
pub use generator::{generate_market_data, MarketCategory, MarketPoint, MarketSnapshot, MarketSummary};
