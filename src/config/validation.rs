use crate::config::types::{Config, CrawlOptions, HttpConfig};
use crate::url::is_valid_url;
use crate::ConfigError;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    if let Some(seed) = &config.seed_url {
        validate_seed_url(seed)?;
    }
    validate_options(&config.crawl)?;
    validate_http_config(&config.http)?;
    Ok(())
}

/// Validates crawl options read from a configuration file
///
/// On top of the filter check, ignore-list entries must be non-empty.
pub fn validate_options(options: &CrawlOptions) -> Result<(), ConfigError> {
    validate_filters(options)?;

    if options.ignore_links.iter().any(|link| link.trim().is_empty()) {
        return Err(ConfigError::Validation(
            "ignore-links cannot contain empty entries".to_string(),
        ));
    }

    Ok(())
}

/// Rejects options that enable both link-type filters
pub fn validate_filters(options: &CrawlOptions) -> Result<(), ConfigError> {
    if options.has_conflicting_filters() {
        return Err(ConfigError::Conflict(
            "only-internal and only-external cannot both be enabled".to_string(),
        ));
    }
    Ok(())
}

fn validate_seed_url(seed: &str) -> Result<(), ConfigError> {
    if !is_valid_url(seed) {
        return Err(ConfigError::InvalidUrl(format!(
            "seed-url '{}' is not a valid absolute URL",
            seed
        )));
    }
    Ok(())
}

/// Validates HTTP client configuration
pub(crate) fn validate_http_config(config: &HttpConfig) -> Result<(), ConfigError> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    if config.timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "timeout-secs must be >= 1, got {}",
            config.timeout_secs
        )));
    }

    if config.connect_timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "connect-timeout-secs must be >= 1, got {}",
            config.connect_timeout_secs
        )));
    }

    if config.max_redirects < 1 {
        return Err(ConfigError::Validation(format!(
            "max-redirects must be >= 1, got {}",
            config.max_redirects
        )));
    }

    Ok(())
}
