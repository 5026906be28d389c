use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteScoutError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Location not found: {0}")]
    LocationNotFound(String),

    #[error("Geocoding failure: {0}")]
    Geocoding(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for SiteScoutError {
    fn from(e: serde_json::Error) -> Self {
        SiteScoutError::SerializationError(e.to_string())
    }
}
