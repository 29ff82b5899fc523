//! Batch transformation: normalize, filter, deduplicate, sort
//!
//! The transformer turns a batch of raw records into the canonical
//! dataset. Steps run in a fixed order: column-wise normalization, title
//! filtering, required-field filtering, full-row deduplication, then (when
//! the batch carries a `Timestamp` column) timestamp parsing and a stable
//! descending sort.

use crate::transform::dataset::{CanonicalRecord, Dataset, RawBatch, RawRecord, COLUMNS};
use crate::transform::normalize::{
    clean_colors, clean_gender, clean_price, clean_rating, clean_size,
};
use crate::transform::TransformError;
use chrono::NaiveDateTime;
use csv::{ReaderBuilder, WriterBuilder};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

/// Timestamp parse format; `%.f` accepts both millisecond-precision and
/// fraction-less values
const TIMESTAMP_PARSE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// Intermediate row: normalized fields, timestamp still raw
///
/// Deduplication compares the raw timestamp text (full-row equality on the
/// batch as extracted), so parsing happens after the duplicate pass.
struct NormalizedRow {
    record: CanonicalRecord,
    raw_timestamp: Option<String>,
}

/// Transforms a raw batch into the canonical dataset
///
/// Total function: malformed fields become absences and are filtered, never
/// errors. Row order is stable through every step.
pub fn transform_batch(batch: &RawBatch, exchange_rate: f64) -> Dataset {
    let has_timestamp = batch.has_column("Timestamp");
    let input_rows = batch.rows.len();

    // Steps 1-2: column-wise normalization, then title filtering
    let normalized: Vec<NormalizedRow> = batch
        .rows
        .iter()
        .filter_map(|row| normalize_row(row, exchange_rate))
        .collect();

    // Step 3: drop rows with absence in any required column
    let complete: Vec<NormalizedRow> = normalized
        .into_iter()
        .filter(|row| {
            let r = &row.record;
            r.price.is_some()
                && r.rating.is_some()
                && r.color.is_some()
                && r.size.is_some()
                && r.gender.is_some()
        })
        .collect();

    // Step 4: drop exact full-row duplicates, first occurrence wins
    let mut seen = HashSet::new();
    let mut rows: Vec<NormalizedRow> = complete
        .into_iter()
        .filter(|row| seen.insert(dedup_key(row)))
        .collect();

    // Steps 5-6: timestamp parse + stable descending sort, only when the
    // batch carried a Timestamp column
    let records: Vec<CanonicalRecord> = if has_timestamp {
        for row in &mut rows {
            row.record.timestamp = row
                .raw_timestamp
                .as_deref()
                .and_then(|t| NaiveDateTime::parse_from_str(t.trim(), TIMESTAMP_PARSE_FORMAT).ok());
        }
        let mut records: Vec<CanonicalRecord> = rows.into_iter().map(|r| r.record).collect();
        records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        records
    } else {
        rows.into_iter().map(|r| r.record).collect()
    };

    for record in &records {
        debug!(title = %record.title, "transformed row");
    }

    info!(
        "Transformed {} raw rows into {} canonical rows",
        input_rows,
        records.len()
    );

    Dataset {
        columns: batch.columns.clone(),
        records,
    }
}

/// Normalizes one row; returns `None` when the title filter rejects it
fn normalize_row(row: &RawRecord, exchange_rate: f64) -> Option<NormalizedRow> {
    let title = match row.title.as_deref() {
        None | Some("") | Some("Unknown Product") => return None,
        Some(title) => title.to_string(),
    };

    Some(NormalizedRow {
        record: CanonicalRecord {
            title,
            price: clean_price(row.price.as_deref(), exchange_rate),
            rating: clean_rating(row.rating.as_deref()),
            color: clean_colors(row.color.as_deref()),
            size: clean_size(row.size.as_deref()),
            gender: clean_gender(row.gender.as_deref()),
            timestamp: None,
        },
        raw_timestamp: row.timestamp.clone(),
    })
}

/// Full-row equality key; floats compared by bit pattern
fn dedup_key(row: &NormalizedRow) -> (String, Option<u64>, Option<u64>, Option<i64>, Option<String>, Option<String>, Option<String>) {
    let r = &row.record;
    (
        r.title.clone(),
        r.price.map(f64::to_bits),
        r.rating.map(f64::to_bits),
        r.color,
        r.size.clone(),
        r.gender.clone(),
        row.raw_timestamp.clone(),
    )
}

/// Reads the scraped CSV, transforms it, and writes the transformed CSV
///
/// A missing input file is reported as [`TransformError::SourceMissing`],
/// distinct from every other failure. Returns the number of rows written.
pub fn transform_file(
    input: &Path,
    output: &Path,
    exchange_rate: f64,
) -> Result<usize, TransformError> {
    if !input.exists() {
        return Err(TransformError::SourceMissing(input.to_path_buf()));
    }

    info!("Reading scraped data from {}", input.display());
    let batch = read_raw_csv(input)?;

    let dataset = transform_batch(&batch, exchange_rate);

    info!("Writing transformed data to {}", output.display());
    write_dataset_csv(output, &dataset)?;

    Ok(dataset.len())
}

/// Reads a raw CSV into a batch, empty cells becoming absences
pub fn read_raw_csv(path: &Path) -> Result<RawBatch, TransformError> {
    let mut reader = ReaderBuilder::new().from_path(path)?;
    let columns: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

    let index_of = |name: &str| columns.iter().position(|c| c == name);
    let positions: Vec<Option<usize>> = COLUMNS.iter().map(|c| index_of(c)).collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let field = |slot: usize| -> Option<String> {
            positions[slot]
                .and_then(|i| record.get(i))
                .filter(|v| !v.is_empty())
                .map(|v| v.to_string())
        };

        rows.push(RawRecord {
            title: field(0),
            price: field(1),
            rating: field(2),
            color: field(3),
            size: field(4),
            gender: field(5),
            timestamp: field(6),
        });
    }

    Ok(RawBatch { columns, rows })
}

/// Writes a raw batch to a CSV file with the canonical header row
pub fn write_raw_csv(path: &Path, batch: &RawBatch) -> Result<(), TransformError> {
    let mut writer = WriterBuilder::new().from_path(path)?;
    writer.write_record(&COLUMNS)?;
    for row in &batch.rows {
        writer.write_record(&row.csv_fields())?;
    }
    writer.flush().map_err(TransformError::Io)?;
    Ok(())
}

/// Writes the dataset to a CSV file with a header row
pub fn write_dataset_csv(path: &Path, dataset: &Dataset) -> Result<(), TransformError> {
    let mut writer = WriterBuilder::new().from_path(path)?;

    let has_timestamp = dataset.columns.iter().any(|c| c == "Timestamp");
    let width = if has_timestamp { 7 } else { 6 };

    writer.write_record(&COLUMNS[..width])?;
    for record in &dataset.records {
        writer.write_record(&record.csv_fields()[..width])?;
    }
    writer.flush().map_err(TransformError::Io)?;

    Ok(())
}
