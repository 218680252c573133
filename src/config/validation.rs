use crate::config::types::{Config, FetcherConfig, ScrapeOptions};
use crate::ConfigError;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_fetcher_config(&config.fetcher)?;
    validate_scrape_options(&config.limits)?;
    Ok(())
}

/// Validates fetcher configuration
pub fn validate_fetcher_config(config: &FetcherConfig) -> Result<(), ConfigError> {
    if config.timeout_ms == 0 {
        return Err(ConfigError::Validation(
            "timeout_ms must be >= 1".to_string(),
        ));
    }

    if config.max_retries == 0 {
        return Err(ConfigError::Validation(
            "max_retries must be >= 1".to_string(),
        ));
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates extraction limits; every limit must be a positive integer
pub fn validate_scrape_options(options: &ScrapeOptions) -> Result<(), ConfigError> {
    let limits = [
        ("headings_limit", options.headings_limit),
        ("paragraphs_limit", options.paragraphs_limit),
        ("links_limit", options.links_limit),
        ("images_limit", options.images_limit),
    ];

    for (name, value) in limits {
        if value == 0 {
            return Err(ConfigError::Validation(format!(
                "{} must be >= 1, got {}",
                name, value
            )));
        }
    }

    Ok(())
}
