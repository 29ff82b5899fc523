//! Load stage: sink adapters
//!
//! Three independent sinks persist the transformed dataset: a flat-file
//! copy, a relational table, and a remote spreadsheet. Each loads the
//! transformed CSV itself and reports how many rows it wrote; one sink's
//! failure never prevents another from running.

mod csv_sink;
mod sheets_sink;
mod table_sink;

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during sink operations
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("Input file not found: {0}")]
    SourceMissing(PathBuf),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Credential error: {0}")]
    Credential(String),

    #[error("Spreadsheet API error: {0}")]
    Api(String),
}

/// Result type for sink operations
pub type SinkResult<T> = Result<T, SinkError>;

/// A persistence target for the transformed dataset
///
/// Each adapter loads the dataset from the transformed CSV at `input` and
/// writes it to its own target, returning the number of data rows written.
#[async_trait]
pub trait Sink: Send + Sync {
    /// Human-readable sink name, used in diagnostics
    fn name(&self) -> &str;

    /// Loads the dataset from `input` and persists it
    async fn load(&self, input: &Path) -> SinkResult<usize>;
}

/// Reads the transformed CSV into a header row plus data rows
///
/// Shared by the sink adapters; a missing file is reported as
/// [`SinkError::SourceMissing`].
pub(crate) fn read_table(input: &Path) -> SinkResult<(Vec<String>, Vec<Vec<String>>)> {
    if !input.exists() {
        return Err(SinkError::SourceMissing(input.to_path_buf()));
    }

    let mut reader = csv::Reader::from_path(input)?;
    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        rows.push(record.iter().map(|f| f.to_string()).collect());
    }

    Ok((headers, rows))
}

pub use csv_sink::FileSink;
pub use sheets_sink::{HttpSheetsClient, SheetsSink, SpreadsheetClient, SHEETS_SCOPES};
pub use table_sink::TableSink;
