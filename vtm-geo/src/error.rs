/// Error types for loading the map datasets
use thiserror::Error;

/// Main error type for dataset operations
#[derive(Error, Debug)]
pub enum LoadError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("HTTP status {0}")]
    HttpStatus(u16),

    /// Failed to parse the GeoJSON body
    #[error("Failed to parse GeoJSON: {0}")]
    GeoJsonParse(#[from] serde_json::Error),
}

/// Type alias for Results using LoadError
pub type Result<T> = std::result::Result<T, LoadError>;
