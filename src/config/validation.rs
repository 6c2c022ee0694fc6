//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, sane gas bounds)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is a pure function: DeployerConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted, and again after CLI overrides

use crate::config::schema::DeployerConfig;

/// A single semantic validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field.
    pub field: String,
    /// Human-readable description of the problem.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

fn err(field: &str, message: impl Into<String>) -> ValidationError {
    ValidationError {
        field: field.to_string(),
        message: message.into(),
    }
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &DeployerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match config.rpc.rpc_url.parse::<url::Url>() {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        Ok(url) => errors.push(err(
            "rpc.rpc_url",
            format!("unsupported scheme '{}', expected http or https", url.scheme()),
        )),
        Err(e) => errors.push(err("rpc.rpc_url", format!("not a valid URL: {e}"))),
    }

    for (i, failover) in config.rpc.failover_urls.iter().enumerate() {
        if failover.parse::<url::Url>().is_err() {
            errors.push(err(
                &format!("rpc.failover_urls[{i}]"),
                "not a valid URL",
            ));
        }
    }

    if config.rpc.chain_id == 0 {
        errors.push(err("rpc.chain_id", "must be non-zero"));
    }

    if config.rpc.rpc_timeout_secs == 0 {
        errors.push(err("rpc.rpc_timeout_secs", "must be greater than zero"));
    }

    if config.deployment.confirmation_blocks == 0 {
        errors.push(err(
            "deployment.confirmation_blocks",
            "must be at least 1",
        ));
    }

    if config.deployment.poll_interval_secs == 0 {
        errors.push(err(
            "deployment.poll_interval_secs",
            "must be greater than zero",
        ));
    } else if config.deployment.poll_interval_secs >= config.deployment.confirmation_timeout_secs {
        errors.push(err(
            "deployment.poll_interval_secs",
            "must be shorter than confirmation_timeout_secs",
        ));
    }

    if !config.deployment.gas_price_multiplier.is_finite()
        || config.deployment.gas_price_multiplier < 1.0
    {
        errors.push(err(
            "deployment.gas_price_multiplier",
            "must be a finite value >= 1.0",
        ));
    }

    if config.deployment.max_gas_price_gwei == 0 {
        errors.push(err(
            "deployment.max_gas_price_gwei",
            "must be greater than zero",
        ));
    }

    if config.artifacts.dir.as_os_str().is_empty() {
        errors.push(err("artifacts.dir", "must not be empty"));
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
        assert!(validate_config(&DeployerConfig::default()).is_ok());
    }

    #[test]
    fn rejects_bad_rpc_url() {
        let mut config = DeployerConfig::default();
        config.rpc.rpc_url = "not a url".into();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(|e| e.field == "rpc.rpc_url"));
    }

    #[test]
    fn rejects_non_http_scheme() {
        let mut config = DeployerConfig::default();
        config.rpc.rpc_url = "ftp://node.example".into();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors[0].message.contains("unsupported scheme"));
    }

    #[test]
    fn collects_all_errors() {
        let mut config = DeployerConfig::default();
        config.rpc.chain_id = 0;
        config.deployment.confirmation_blocks = 0;
        config.deployment.gas_price_multiplier = 0.5;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn poll_interval_must_fit_in_timeout() {
        let mut config = DeployerConfig::default();
        config.deployment.poll_interval_secs = 120;
        config.deployment.confirmation_timeout_secs = 60;
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.field == "deployment.poll_interval_secs"));
    }
}
