//! Configuration module for Page-Glean
//!
//! This module handles the fetcher settings and extraction limits, loaded
//! from an optional TOML file and validated before use.
//!
//! # Example
//!
//! ```no_run
//! use page_glean::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("glean.toml")).unwrap();
//! println!("Links limit: {}", config.limits.links_limit);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, FetcherConfig, ScrapeOptions, DEFAULT_USER_AGENT};

// Re-export parser and validation functions
pub use parser::{load_config, parse_config};
pub use validation::{validate, validate_fetcher_config, validate_scrape_options};
