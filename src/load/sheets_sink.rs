//! Spreadsheet sink: overwrite a fixed cell range in a remote spreadsheet
//!
//! The remote API sits behind the [`SpreadsheetClient`] boundary so tests
//! can inject a recording stub; the HTTP implementation authenticates from
//! a service credential file and performs a single values-overwrite call.

use crate::load::{read_table, Sink, SinkError, SinkResult};
use async_trait::async_trait;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// OAuth scopes requested for spreadsheet access
pub const SHEETS_SCOPES: [&str; 1] = ["https://www.googleapis.com/auth/spreadsheets"];

const DEFAULT_ENDPOINT: &str = "https://sheets.googleapis.com";

/// Boundary for the remote spreadsheet API
#[async_trait]
pub trait SpreadsheetClient: Send + Sync {
    /// Overwrites `range` in the named spreadsheet with `values`
    /// (header row + data rows)
    async fn overwrite_range(
        &self,
        spreadsheet_id: &str,
        range: &str,
        values: &[Vec<String>],
    ) -> SinkResult<()>;
}

/// reqwest-backed spreadsheet client with bearer-token authentication
pub struct HttpSheetsClient {
    http: reqwest::Client,
    token: String,
    endpoint: String,
}

impl HttpSheetsClient {
    /// Authenticates from a JSON service credential file
    ///
    /// The file must contain a `token` field; a missing or malformed file
    /// is a credential error, reported by the owning sink, never a panic.
    pub fn from_credential_file(path: &Path, scopes: &[&str]) -> SinkResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SinkError::Credential(format!(
                "Failed to read credential file {}: {}",
                path.display(),
                e
            ))
        })?;

        let credential: serde_json::Value = serde_json::from_str(&content)
            .map_err(|e| SinkError::Credential(format!("Malformed credential file: {}", e)))?;

        let token = credential
            .get("token")
            .and_then(|t| t.as_str())
            .ok_or_else(|| {
                SinkError::Credential("Credential file has no 'token' field".to_string())
            })?
            .to_string();

        debug!("Authenticated spreadsheet client with scopes: {:?}", scopes);

        Ok(Self {
            http: reqwest::Client::new(),
            token,
            endpoint: DEFAULT_ENDPOINT.to_string(),
        })
    }

    /// Overrides the API endpoint, used by tests against a mock server
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

#[async_trait]
impl SpreadsheetClient for HttpSheetsClient {
    async fn overwrite_range(
        &self,
        spreadsheet_id: &str,
        range: &str,
        values: &[Vec<String>],
    ) -> SinkResult<()> {
        let url = format!(
            "{}/v4/spreadsheets/{}/values/{}?valueInputOption=RAW",
            self.endpoint, spreadsheet_id, range
        );

        let body = json!({
            "range": range,
            "majorDimension": "ROWS",
            "values": values,
        });

        let response = self
            .http
            .put(&url)
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SinkError::Api(format!(
                "Values update for {} returned status {}",
                spreadsheet_id, status
            )));
        }

        Ok(())
    }
}

/// Overwrites the configured range with header row + data rows
pub struct SheetsSink {
    client: Option<Box<dyn SpreadsheetClient>>,
    credential_path: PathBuf,
    spreadsheet_id: String,
    target_range: String,
}

impl SheetsSink {
    /// Sink that authenticates from the credential file on each load
    pub fn new(
        credential_path: impl Into<PathBuf>,
        spreadsheet_id: impl Into<String>,
        target_range: impl Into<String>,
    ) -> Self {
        Self {
            client: None,
            credential_path: credential_path.into(),
            spreadsheet_id: spreadsheet_id.into(),
            target_range: target_range.into(),
        }
    }

    /// Sink with an injected client, bypassing credential-file authentication
    pub fn with_client(
        client: Box<dyn SpreadsheetClient>,
        spreadsheet_id: impl Into<String>,
        target_range: impl Into<String>,
    ) -> Self {
        Self {
            client: Some(client),
            credential_path: PathBuf::new(),
            spreadsheet_id: spreadsheet_id.into(),
            target_range: target_range.into(),
        }
    }
}

#[async_trait]
impl Sink for SheetsSink {
    fn name(&self) -> &str {
        "spreadsheet"
    }

    async fn load(&self, input: &Path) -> SinkResult<usize> {
        let (headers, rows) = read_table(input)?;

        let mut values = Vec::with_capacity(rows.len() + 1);
        values.push(headers);
        values.extend(rows.iter().cloned());

        info!(
            "Writing {} rows to spreadsheet {} range {}",
            rows.len(),
            self.spreadsheet_id,
            self.target_range
        );

        match &self.client {
            Some(client) => {
                client
                    .overwrite_range(&self.spreadsheet_id, &self.target_range, &values)
                    .await?
            }
            None => {
                let client =
                    HttpSheetsClient::from_credential_file(&self.credential_path, &SHEETS_SCOPES)?;
                client
                    .overwrite_range(&self.spreadsheet_id, &self.target_range, &values)
                    .await?
            }
        }

        Ok(rows.len())
    }
}
