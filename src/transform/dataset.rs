//! Record and dataset types shared across the pipeline stages

use chrono::NaiveDateTime;

/// Canonical column order used by every tabular artifact
pub const COLUMNS: [&str; 7] = [
    "Title",
    "Price",
    "Rating",
    "Color",
    "Size",
    "Gender",
    "Timestamp",
];

/// Timestamp format written by the extractor (millisecond precision)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// One unvalidated catalog entry, exactly as extracted
///
/// Every field is a raw string; `None` marks a value that was absent at the
/// source (e.g. an empty CSV cell). Records are immutable once produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    pub title: Option<String>,
    pub price: Option<String>,
    pub rating: Option<String>,
    pub color: Option<String>,
    pub size: Option<String>,
    pub gender: Option<String>,
    pub timestamp: Option<String>,
}

impl RawRecord {
    /// Renders the record in canonical column order, absent values as ""
    pub fn csv_fields(&self) -> [String; 7] {
        [
            self.title.clone().unwrap_or_default(),
            self.price.clone().unwrap_or_default(),
            self.rating.clone().unwrap_or_default(),
            self.color.clone().unwrap_or_default(),
            self.size.clone().unwrap_or_default(),
            self.gender.clone().unwrap_or_default(),
            self.timestamp.clone().unwrap_or_default(),
        ]
    }
}

/// A batch of raw records together with their originating column set
///
/// The column set matters: a batch without a `Timestamp` column skips
/// timestamp parsing and sorting entirely.
#[derive(Debug, Clone)]
pub struct RawBatch {
    pub columns: Vec<String>,
    pub rows: Vec<RawRecord>,
}

impl RawBatch {
    /// Creates a batch carrying all seven canonical columns
    pub fn with_all_columns(rows: Vec<RawRecord>) -> Self {
        Self {
            columns: COLUMNS.iter().map(|c| c.to_string()).collect(),
            rows,
        }
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }
}

/// One fully normalized, validated record
///
/// A record that survives the transformer's filters has no `None` among
/// the six required fields (everything except `timestamp`).
#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalRecord {
    pub title: String,
    pub price: Option<f64>,
    pub rating: Option<f64>,
    pub color: Option<i64>,
    pub size: Option<String>,
    pub gender: Option<String>,
    pub timestamp: Option<NaiveDateTime>,
}

impl CanonicalRecord {
    /// Renders the record in canonical column order, absent values as ""
    pub fn csv_fields(&self) -> [String; 7] {
        [
            self.title.clone(),
            self.price.map(|v| format!("{}", v)).unwrap_or_default(),
            self.rating.map(|v| format!("{}", v)).unwrap_or_default(),
            self.color.map(|v| v.to_string()).unwrap_or_default(),
            self.size.clone().unwrap_or_default(),
            self.gender.clone().unwrap_or_default(),
            self.timestamp
                .map(|t| t.format(TIMESTAMP_FORMAT).to_string())
                .unwrap_or_default(),
        ]
    }
}

/// Ordered, deduplicated sequence of canonical records
///
/// Sorted descending by timestamp when the source batch carried a
/// `Timestamp` column; otherwise rows keep their surviving input order.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub columns: Vec<String>,
    pub records: Vec<CanonicalRecord>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
