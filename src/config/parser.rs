use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    // Read the configuration file
    let content = std::fs::read_to_string(path)?;

    // Parse TOML
    let config: Config = toml::from_str(&content)?;

    // Validate the configuration
    validate(&config)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_valid_config() {
        let config_content = r#"
[scrape]
base-url = "https://catalog.example.com/"
start-page = 2
page-delay-ms = 250

[transform]
exchange-rate = 15500.0

[sinks]
scraped-path = "./raw.csv"
transformed-path = "./clean.csv"
products-path = "./products.csv"
connection-string = "./test.sqlite"
table-name = "products"
credential-path = "./creds.json"
spreadsheet-id = "abc123"
target-range = "Sheet1!A1:G100"
"#;

        let file = create_temp_config(config_content);
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.scrape.base_url, "https://catalog.example.com/");
        assert_eq!(config.scrape.start_page, 2);
        assert_eq!(config.transform.exchange_rate, 15500.0);
        assert_eq!(config.sinks.table_name, "products");
    }

    #[test]
    fn test_missing_sections_fall_back_to_defaults() {
        let config_content = r#"
[scrape]
base-url = "https://catalog.example.com/"
"#;

        let file = create_temp_config(config_content);
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.scrape.base_url, "https://catalog.example.com/");
        assert_eq!(config.scrape.start_page, 1);
        assert_eq!(config.transform.exchange_rate, 16000.0);
        assert_eq!(config.sinks.table_name, "fashion_products");
    }

    #[test]
    fn test_load_config_with_invalid_path() {
        let result = load_config(Path::new("/nonexistent/config.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_with_invalid_toml() {
        let config_content = "this is not valid TOML {{{";
        let file = create_temp_config(config_content);
        let result = load_config(file.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_with_validation_error() {
        let config_content = r#"
[scrape]
base-url = ""
"#;

        let file = create_temp_config(config_content);
        let result = load_config(file.path());
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ConfigError::Validation(_)));
    }
}
