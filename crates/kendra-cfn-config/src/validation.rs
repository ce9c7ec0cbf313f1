// Configuration validation
//
// Validates that delays are usable and values are sensible

use crate::*;
use anyhow::{bail, Result};
use tracing::warn;

pub fn validate_config(config: &ProviderConfig) -> Result<()> {
    validate_stabilization_config(&config.stabilization)?;
    validate_client_config(&config.client)?;
    validate_logging_config(&config.logging)?;
    Ok(())
}

fn validate_stabilization_config(config: &StabilizationConfig) -> Result<()> {
    let delays = [
        ("stabilization.default_delay_secs", config.default_delay_secs),
        ("stabilization.index_delay_secs", config.index_delay_secs),
        ("stabilization.data_source_delay_secs", config.data_source_delay_secs),
        (
            "stabilization.data_source_delete_delay_secs",
            config.data_source_delete_delay_secs,
        ),
        ("stabilization.faq_delay_secs", config.faq_delay_secs),
    ];
    for (name, value) in delays {
        if value == 0 {
            bail!("{} must be greater than 0", name);
        }
        // CloudFormation caps callbackDelaySeconds well below this
        if value > 60 * 60 {
            warn!(setting = name, value, "stabilization delay is longer than an hour");
        }
    }

    if config.timeout_secs < config.max_delay_secs() {
        bail!(
            "stabilization.timeout_secs ({}) must be at least the largest delay ({})",
            config.timeout_secs,
            config.max_delay_secs()
        );
    }

    Ok(())
}

fn validate_client_config(config: &ClientConfig) -> Result<()> {
    if config.request_timeout_secs == 0 {
        bail!("client.request_timeout_secs must be greater than 0");
    }

    if let Some(ref endpoint) = config.endpoint_url {
        if let Err(e) = url::Url::parse(endpoint) {
            bail!("client.endpoint_url '{}' is not a valid URL: {}", endpoint, e);
        }
    }

    if let Some(ref region) = config.region {
        if region.is_empty() {
            bail!("client.region must not be empty when set");
        }
    }

    Ok(())
}

fn validate_logging_config(config: &LoggingConfig) -> Result<()> {
    if config.level.trim().is_empty() {
        bail!("logging.level must not be empty");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_stabilization_config() {
        let valid = StabilizationConfig::default();
        assert!(validate_stabilization_config(&valid).is_ok());

        let zero_delay = StabilizationConfig {
            index_delay_secs: 0,
            ..StabilizationConfig::default()
        };
        assert!(validate_stabilization_config(&zero_delay).is_err());

        let short_timeout = StabilizationConfig {
            timeout_secs: 10,
            ..StabilizationConfig::default()
        };
        assert!(validate_stabilization_config(&short_timeout).is_err());
    }

    #[test]
    fn test_validate_client_config() {
        let valid = ClientConfig {
            endpoint_url: Some("http://localhost:4566".to_string()),
            region: Some("us-east-1".to_string()),
            request_timeout_secs: 30,
        };
        assert!(validate_client_config(&valid).is_ok());

        let bad_endpoint = ClientConfig {
            endpoint_url: Some("not a url".to_string()),
            ..ClientConfig::default()
        };
        assert!(validate_client_config(&bad_endpoint).is_err());

        let zero_timeout = ClientConfig {
            request_timeout_secs: 0,
            ..ClientConfig::default()
        };
        assert!(validate_client_config(&zero_timeout).is_err());
    }

    #[test]
    fn test_validate_logging_config() {
        let blank = LoggingConfig {
            level: "  ".to_string(),
            format: LogFormat::Text,
        };
        assert!(validate_logging_config(&blank).is_err());
        assert!(validate_logging_config(&LoggingConfig::default()).is_ok());
    }
}
