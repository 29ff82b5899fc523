//! File sink: verbatim CSV copy

use crate::load::{read_table, Sink, SinkResult};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::info;

/// Copies the transformed table verbatim to the final products file
pub struct FileSink {
    output: PathBuf,
}

impl FileSink {
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
        }
    }
}

#[async_trait]
impl Sink for FileSink {
    fn name(&self) -> &str {
        "csv"
    }

    async fn load(&self, input: &Path) -> SinkResult<usize> {
        let (headers, rows) = read_table(input)?;

        info!("Writing {} rows to {}", rows.len(), self.output.display());
        let mut writer = csv::Writer::from_path(&self.output)?;
        writer.write_record(&headers)?;
        for row in &rows {
            writer.write_record(row)?;
        }
        writer.flush()?;

        Ok(rows.len())
    }
}
