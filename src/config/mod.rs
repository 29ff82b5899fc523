//! Configuration module for Catwalk
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files, and carries the defaults that let the pipeline run unconfigured.
//!
//! # Example
//!
//! ```no_run
//! use catwalk::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Catalog base URL: {}", config.scrape.base_url);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, ScrapeConfig, SinkConfig, TransformConfig};

// Re-export parser functions
pub use parser::load_config;
