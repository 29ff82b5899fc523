use serde::Deserialize;

/// Main configuration structure for Catwalk
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scrape: ScrapeConfig,
    pub transform: TransformConfig,
    pub sinks: SinkConfig,
}

/// Catalog traversal configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScrapeConfig {
    /// Base URL of the paginated catalog
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Page number to start the walk from
    #[serde(rename = "start-page")]
    pub start_page: u32,

    /// Pause between successive pages (milliseconds)
    #[serde(rename = "page-delay-ms")]
    pub page_delay_ms: u64,

    /// User-Agent header sent with catalog requests
    #[serde(rename = "user-agent")]
    pub user_agent: String,
}

/// Field normalization configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TransformConfig {
    /// USD → output currency conversion rate applied to prices
    #[serde(rename = "exchange-rate")]
    pub exchange_rate: f64,
}

/// Sink adapter configuration
///
/// Credentials, connection strings, and range strings are injected here
/// rather than hardcoded in the sink adapters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SinkConfig {
    /// Path of the intermediate scraped CSV
    #[serde(rename = "scraped-path")]
    pub scraped_path: String,

    /// Path of the transformed CSV
    #[serde(rename = "transformed-path")]
    pub transformed_path: String,

    /// Path of the final products CSV written by the file sink
    #[serde(rename = "products-path")]
    pub products_path: String,

    /// Connection string for the relational table sink
    #[serde(rename = "connection-string")]
    pub connection_string: String,

    /// Table replaced wholesale by the table sink
    #[serde(rename = "table-name")]
    pub table_name: String,

    /// Path of the spreadsheet service credential file
    #[serde(rename = "credential-path")]
    pub credential_path: String,

    /// Identifier of the target remote spreadsheet
    #[serde(rename = "spreadsheet-id")]
    pub spreadsheet_id: String,

    /// Cell range overwritten by the spreadsheet sink
    #[serde(rename = "target-range")]
    pub target_range: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scrape: ScrapeConfig::default(),
            transform: TransformConfig::default(),
            sinks: SinkConfig::default(),
        }
    }
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            base_url: "https://fashion-studio.dicoding.dev/".to_string(),
            start_page: 1,
            page_delay_ms: 1000,
            user_agent: concat!(
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 ",
                "(KHTML, like Gecko) Chrome/96.0.4664.110 Safari/537.36"
            )
            .to_string(),
        }
    }
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            exchange_rate: 16000.0,
        }
    }
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            scraped_path: "scrapped_data.csv".to_string(),
            transformed_path: "transformed.csv".to_string(),
            products_path: "products.csv".to_string(),
            connection_string: "fashionsdb.sqlite".to_string(),
            table_name: "fashion_products".to_string(),
            credential_path: "google-sheets-api.json".to_string(),
            spreadsheet_id: "1qkzwYBMQDRx0AFTONigI_vDn2ZUdWgZYl_CoBGktSxg".to_string(),
            target_range: "Sheet1!A1:G868".to_string(),
        }
    }
}
