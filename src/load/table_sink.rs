//! Table sink: full-table replace into a relational store
//!
//! Drop-and-recreate semantics: the named table's previous contents are
//! discarded on every load, not appended to.

use crate::load::{read_table, Sink, SinkResult};
use async_trait::async_trait;
use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection};
use std::path::Path;
use tracing::info;

/// Replaces the named table's contents with the transformed dataset
///
/// The connection string and table name are injected configuration, not
/// hardcoded in the adapter.
pub struct TableSink {
    connection_string: String,
    table_name: String,
}

impl TableSink {
    pub fn new(connection_string: impl Into<String>, table_name: impl Into<String>) -> Self {
        Self {
            connection_string: connection_string.into(),
            table_name: table_name.into(),
        }
    }

    /// SQL column type for a known column name; everything else is TEXT
    fn column_type(name: &str) -> &'static str {
        match name {
            "Price" | "Rating" => "REAL",
            "Color" => "INTEGER",
            _ => "TEXT",
        }
    }

    /// Converts one CSV cell to an SQL value per the column's type
    fn cell_value(column: &str, cell: &str) -> Value {
        if cell.is_empty() {
            return Value::Null;
        }
        match Self::column_type(column) {
            "REAL" => cell
                .parse::<f64>()
                .map(Value::Real)
                .unwrap_or_else(|_| Value::Text(cell.to_string())),
            "INTEGER" => cell
                .parse::<i64>()
                .map(Value::Integer)
                .unwrap_or_else(|_| Value::Text(cell.to_string())),
            _ => Value::Text(cell.to_string()),
        }
    }
}

#[async_trait]
impl Sink for TableSink {
    fn name(&self) -> &str {
        "table"
    }

    async fn load(&self, input: &Path) -> SinkResult<usize> {
        let (headers, rows) = read_table(input)?;

        let mut conn = Connection::open(&self.connection_string)?;

        let column_defs: Vec<String> = headers
            .iter()
            .map(|h| format!("\"{}\" {}", h, Self::column_type(h)))
            .collect();
        let placeholders: Vec<&str> = headers.iter().map(|_| "?").collect();

        let tx = conn.transaction()?;
        tx.execute_batch(&format!(
            "DROP TABLE IF EXISTS \"{table}\";
             CREATE TABLE \"{table}\" ({columns});",
            table = self.table_name,
            columns = column_defs.join(", ")
        ))?;

        {
            let mut insert = tx.prepare(&format!(
                "INSERT INTO \"{}\" VALUES ({})",
                self.table_name,
                placeholders.join(", ")
            ))?;
            for row in &rows {
                let values = headers
                    .iter()
                    .zip(row.iter())
                    .map(|(column, cell)| Self::cell_value(column, cell));
                insert.execute(params_from_iter(values))?;
            }
        }
        tx.commit()?;

        info!(
            "Replaced table '{}' with {} rows",
            self.table_name,
            rows.len()
        );

        Ok(rows.len())
    }
}
