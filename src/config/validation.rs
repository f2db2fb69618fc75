//! Configuration validation.
//!
//! Semantic checks that run after serde has accepted the file. All errors
//! found are returned, not just the first.

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::ChirpyConfig;

/// A single semantic validation failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("listener.bind_address is not a valid socket address: {0}")]
    InvalidBindAddress(String),

    #[error("observability.metrics_address is not a valid socket address: {0}")]
    InvalidMetricsAddress(String),

    #[error("static_assets.dir must not be empty")]
    EmptyStaticDir,

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroRequestTimeout,

    #[error("limits.max_body_size must be greater than zero")]
    ZeroBodyLimit,
}

/// Validate a parsed configuration.
pub fn validate_config(config: &ChirpyConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    // The metrics address only matters when the exporter is enabled.
    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<SocketAddr>()
            .is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if config.static_assets.dir.trim().is_empty() {
        errors.push(ValidationError::EmptyStaticDir);
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    if config.limits.max_body_size == 0 {
        errors.push(ValidationError::ZeroBodyLimit);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&ChirpyConfig::default()).is_ok());
    }

    #[test]
    fn collects_all_errors() {
        let mut config = ChirpyConfig::default();
        config.listener.bind_address = "not-an-address".to_string();
        config.timeouts.request_secs = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.contains(&ValidationError::ZeroRequestTimeout));
    }

    #[test]
    fn metrics_address_ignored_when_exporter_disabled() {
        let mut config = ChirpyConfig::default();
        config.observability.metrics_enabled = false;
        config.observability.metrics_address = "garbage".to_string();

        assert!(validate_config(&config).is_ok());
    }
}
