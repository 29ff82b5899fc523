//! Transformation stage: field normalizers, record types, batch transformer
//!
//! Takes the raw string records produced by the scrape stage and emits the
//! canonical dataset consumed by the sink adapters.

mod dataset;
pub mod normalize;
mod transformer;

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during the transform stage
///
/// A missing source file is distinct from every other fault; both surface
/// to the pipeline driver as a stage failure.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("Input file not found: {0}")]
    SourceMissing(PathBuf),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;

pub use dataset::{CanonicalRecord, Dataset, RawBatch, RawRecord, COLUMNS, TIMESTAMP_FORMAT};
pub use normalize::{
    clean_colors, clean_gender, clean_price, clean_rating, clean_size, DEFAULT_EXCHANGE_RATE,
    PRICE_UNAVAILABLE,
};
pub use transformer::{
    read_raw_csv, transform_batch, transform_file, write_dataset_csv, write_raw_csv,
};
