//! Catwalk: a catalog ETL pipeline
//!
//! This crate scrapes product listings from a paginated catalog site,
//! normalizes the extracted fields into a canonical tabular schema, and
//! fans the result out to CSV, SQLite, and spreadsheet sinks.

pub mod config;
pub mod load;
pub mod pipeline;
pub mod scrape;
pub mod transform;

use thiserror::Error;

/// Main error type for Catwalk operations
#[derive(Debug, Error)]
pub enum CatwalkError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Transform error: {0}")]
    Transform(#[from] transform::TransformError),

    #[error("Sink error: {0}")]
    Sink(#[from] load::SinkError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for Catwalk operations
pub type Result<T> = std::result::Result<T, CatwalkError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use transform::{CanonicalRecord, Dataset, RawBatch, RawRecord};
