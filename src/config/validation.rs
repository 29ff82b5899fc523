use crate::config::types::{Config, ScrapeConfig, SinkConfig, TransformConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_scrape_config(&config.scrape)?;
    validate_transform_config(&config.transform)?;
    validate_sink_config(&config.sinks)?;
    Ok(())
}

/// Validates catalog traversal configuration
fn validate_scrape_config(config: &ScrapeConfig) -> Result<(), ConfigError> {
    if config.base_url.is_empty() {
        return Err(ConfigError::Validation(
            "base-url cannot be empty".to_string(),
        ));
    }

    Url::parse(&config.base_url)
        .map_err(|e| ConfigError::Validation(format!("Invalid base-url: {}", e)))?;

    if config.start_page < 1 {
        return Err(ConfigError::Validation(format!(
            "start-page must be >= 1, got {}",
            config.start_page
        )));
    }

    Ok(())
}

/// Validates field normalization configuration
fn validate_transform_config(config: &TransformConfig) -> Result<(), ConfigError> {
    if !config.exchange_rate.is_finite() || config.exchange_rate <= 0.0 {
        return Err(ConfigError::Validation(format!(
            "exchange-rate must be a positive number, got {}",
            config.exchange_rate
        )));
    }

    Ok(())
}

/// Validates sink adapter configuration
fn validate_sink_config(config: &SinkConfig) -> Result<(), ConfigError> {
    for (name, value) in [
        ("scraped-path", &config.scraped_path),
        ("transformed-path", &config.transformed_path),
        ("products-path", &config.products_path),
        ("connection-string", &config.connection_string),
        ("table-name", &config.table_name),
    ] {
        if value.is_empty() {
            return Err(ConfigError::Validation(format!(
                "{} cannot be empty",
                name
            )));
        }
    }

    Ok(())
}
