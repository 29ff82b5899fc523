//! Pipeline driver
//!
//! Sequences the three stages: catalog walk → transform → load to every
//! sink. An upstream stage failure short-circuits the stages after it; a
//! single sink failure never prevents the remaining sinks from running.

use crate::config::Config;
use crate::load::{FileSink, SheetsSink, Sink, SinkError, TableSink};
use crate::scrape::{walk, HttpFetcher};
use crate::transform::{transform_file, write_raw_csv, RawBatch};
use crate::Result;
use std::path::Path;
use std::time::Duration;
use tracing::{error, info, warn};

/// Outcome of one sink adapter run
#[derive(Debug)]
pub struct SinkOutcome {
    pub sink: String,
    pub result: std::result::Result<usize, SinkError>,
}

/// What each stage of a pipeline run produced
#[derive(Debug, Default)]
pub struct PipelineReport {
    pub scraped_rows: usize,
    pub transformed_rows: usize,
    pub sink_outcomes: Vec<SinkOutcome>,
}

impl PipelineReport {
    /// True when every sink that ran reported success
    pub fn all_sinks_succeeded(&self) -> bool {
        self.sink_outcomes.iter().all(|o| o.result.is_ok())
    }
}

/// Runs the full pipeline: scrape, transform, load to all sinks
///
/// An empty walk ends the run early without error (there is nothing to
/// transform); a transform failure propagates and the load stage never
/// starts. With `skip_sinks` the run stops after the transformed CSV is
/// written.
pub async fn run(config: &Config, skip_sinks: bool) -> Result<PipelineReport> {
    let mut report = PipelineReport::default();

    info!("Extraction stage started");
    let fetcher = HttpFetcher::new(&config.scrape.user_agent)?;
    let delay = Duration::from_millis(config.scrape.page_delay_ms);
    let records = walk(
        &fetcher,
        &config.scrape.base_url,
        config.scrape.start_page,
        delay,
    )
    .await;

    if records.is_empty() {
        warn!("No records scraped; skipping transform and load stages");
        return Ok(report);
    }

    report.scraped_rows = records.len();
    let batch = RawBatch::with_all_columns(records);
    let scraped_path = Path::new(&config.sinks.scraped_path);
    write_raw_csv(scraped_path, &batch)?;
    info!(
        "Saved {} scraped rows to {}",
        report.scraped_rows,
        scraped_path.display()
    );

    info!("Transform stage started");
    let transformed_path = Path::new(&config.sinks.transformed_path);
    report.transformed_rows = transform_file(
        scraped_path,
        transformed_path,
        config.transform.exchange_rate,
    )?;

    if skip_sinks {
        info!("Load stage skipped by request");
        return Ok(report);
    }

    info!("Load stage started");
    report.sink_outcomes = run_sinks(config, transformed_path).await;

    Ok(report)
}

/// Runs every configured sink against the transformed CSV
///
/// Sinks are order-independent and every one runs regardless of how its
/// siblings fared.
pub async fn run_sinks(config: &Config, input: &Path) -> Vec<SinkOutcome> {
    let sinks: Vec<Box<dyn Sink>> = vec![
        Box::new(FileSink::new(config.sinks.products_path.as_str())),
        Box::new(TableSink::new(
            config.sinks.connection_string.as_str(),
            config.sinks.table_name.as_str(),
        )),
        Box::new(SheetsSink::new(
            config.sinks.credential_path.as_str(),
            config.sinks.spreadsheet_id.as_str(),
            config.sinks.target_range.as_str(),
        )),
    ];

    let mut outcomes = Vec::with_capacity(sinks.len());
    for sink in &sinks {
        let result = sink.load(input).await;
        match &result {
            Ok(rows) => info!("Sink '{}' wrote {} rows", sink.name(), rows),
            Err(e) => error!("Sink '{}' failed: {}", sink.name(), e),
        }
        outcomes.push(SinkOutcome {
            sink: sink.name().to_string(),
            result,
        });
    }

    outcomes
}
