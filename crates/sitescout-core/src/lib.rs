pub mod error;
pub mod math;
pub mod types;

#[cfg(feature = "feasibility")]
pub mod feasibility;

#[cfg(feature = "report")]
pub mod report;

#[cfg(feature = "market")]
pub mod market;

#[cfg(feature = "geocoding")]
pub mod geocoding;

#[cfg(feature = "analysis")]
pub mod analysis;

pub use error::SiteScoutError;
pub use types::*;

/// Standard result type for all sitescout operations
pub type SiteScoutResult<T> = Result<T, SiteScoutError>;
