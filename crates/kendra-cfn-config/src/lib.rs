// kendra-cfn-config - Provider configuration for the Kendra resource handlers
//
// Supports configuration from multiple sources:
// 1. Environment variables (highest priority)
// 2. Config file path from KENDRA_CFN_CONFIG env var
// 3. Config file contents from KENDRA_CFN_CONFIG_CONTENT env var
// 4. Default config file location (./kendra-cfn.toml)
// 5. Platform-specific defaults (lowest priority)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

mod env_overrides;
mod platform;
mod sources;
mod validation;

pub use env_overrides::{EnvSource, ENV_PREFIX};
pub use platform::Platform;

const DAY_SECS: u64 = 24 * 60 * 60;

/// Main provider configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(default)]
    pub stabilization: StabilizationConfig,

    #[serde(default)]
    pub client: ClientConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Callback delays and the overall deadline used while a resource settles.
///
/// The host re-invokes the handler after the delay carried by each
/// `IN_PROGRESS` event; the timeout only bounds how long the handler keeps
/// asking to be re-invoked. The schema-level timeout declared to
/// CloudFormation is authoritative, so the default is deliberately huge.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StabilizationConfig {
    pub default_delay_secs: u64,
    pub index_delay_secs: u64,
    pub data_source_delay_secs: u64,
    pub data_source_delete_delay_secs: u64,
    pub faq_delay_secs: u64,
    pub timeout_secs: u64,
}

impl StabilizationConfig {
    pub fn default_delay(&self) -> Duration {
        Duration::from_secs(self.default_delay_secs)
    }

    pub fn index_delay(&self) -> Duration {
        Duration::from_secs(self.index_delay_secs)
    }

    pub fn data_source_delay(&self) -> Duration {
        Duration::from_secs(self.data_source_delay_secs)
    }

    pub fn data_source_delete_delay(&self) -> Duration {
        Duration::from_secs(self.data_source_delete_delay_secs)
    }

    pub fn faq_delay(&self) -> Duration {
        Duration::from_secs(self.faq_delay_secs)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Largest configured delay, used to sanity-check the timeout
    pub fn max_delay_secs(&self) -> u64 {
        [
            self.default_delay_secs,
            self.index_delay_secs,
            self.data_source_delay_secs,
            self.data_source_delete_delay_secs,
            self.faq_delay_secs,
        ]
        .into_iter()
        .max()
        .unwrap_or(0)
    }
}

impl Default for StabilizationConfig {
    fn default() -> Self {
        Self {
            default_delay_secs: 60,
            index_delay_secs: 120,
            data_source_delay_secs: 60,
            data_source_delete_delay_secs: 300,
            faq_delay_secs: 60,
            timeout_secs: 365 * DAY_SECS,
        }
    }
}

/// Kendra client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    pub request_timeout_secs: u64,
}

impl ClientConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint_url: None,
            region: None,
            request_timeout_secs: 30,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Text,
    Json,
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Text => write!(f, "text"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            _ => anyhow::bail!("Unsupported log format: {}. Supported: text, json", s),
        }
    }
}

impl ProviderConfig {
    /// Load configuration from all sources with priority
    pub fn load() -> Result<Self> {
        let platform = Platform::detect();
        sources::load_config(platform)
    }

    /// Load configuration for a specific platform (useful for testing)
    pub fn load_for_platform(platform: Platform) -> Result<Self> {
        sources::load_config(platform)
    }

    /// Load configuration from a specific file path.
    pub fn load_from_path(path: impl AsRef<std::path::Path>) -> Result<Self> {
        sources::load_from_file_path(path)
    }

    /// Construct a config that contains only platform defaults (no env or files).
    pub fn from_platform_defaults(platform: Platform) -> Self {
        platform_defaults(platform)
    }

    /// Merge another config into this one (used for TOML layering).
    pub fn merge(&mut self, other: ProviderConfig) {
        self.stabilization = other.stabilization;
        self.logging = other.logging;

        if other.client.endpoint_url.is_some() {
            self.client.endpoint_url = other.client.endpoint_url;
        }
        if other.client.region.is_some() {
            self.client.region = other.client.region;
        }
        self.client.request_timeout_secs = other.client.request_timeout_secs;
    }

    /// Apply environment overrides from a custom source.
    pub fn apply_env_overrides_from<E: EnvSource>(&mut self, env: &E) -> Result<()> {
        env_overrides::apply_env_overrides(self, env)
    }

    /// Build a configuration for the given platform using inline config content
    /// plus overrides supplied by an `EnvSource`.
    pub fn load_for_platform_with_env<E: EnvSource>(
        platform: Platform,
        inline_config: Option<&str>,
        env: &E,
    ) -> Result<Self> {
        let mut config = ProviderConfig::from_platform_defaults(platform);

        if let Some(inline) = inline_config {
            let file_config: ProviderConfig =
                toml::from_str(inline).context("Failed to parse inline config content")?;
            config.merge(file_config);
        }

        config.apply_env_overrides_from(env)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        validation::validate_config(self)
    }
}

fn platform_defaults(platform: Platform) -> ProviderConfig {
    let defaults = platform.defaults();

    let format = defaults
        .log_format
        .parse::<LogFormat>()
        .unwrap_or(LogFormat::Text);

    ProviderConfig {
        stabilization: StabilizationConfig::default(),
        client: ClientConfig {
            endpoint_url: None,
            region: None,
            request_timeout_secs: defaults.request_timeout_secs,
        },
        logging: LoggingConfig {
            level: "info".to_string(),
            format,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_from_str() {
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("TEXT".parse::<LogFormat>().unwrap(), LogFormat::Text);
        assert_eq!("plain".parse::<LogFormat>().unwrap(), LogFormat::Text);
        assert!("xml".parse::<LogFormat>().is_err());
    }

    #[test]
    fn test_default_stabilization() {
        let stabilization = StabilizationConfig::default();
        assert_eq!(stabilization.index_delay(), Duration::from_secs(120));
        assert_eq!(stabilization.data_source_delete_delay(), Duration::from_secs(300));
        assert_eq!(stabilization.default_delay(), Duration::from_secs(60));
        assert_eq!(stabilization.timeout_secs, 365 * DAY_SECS);
        assert_eq!(stabilization.max_delay_secs(), 300);
    }

    #[test]
    fn test_partial_toml_keeps_section_defaults() {
        let config: ProviderConfig = toml::from_str(
            r#"
            [logging]
            level = "debug"
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.stabilization.index_delay_secs, 120);
        assert_eq!(config.client.request_timeout_secs, 30);
    }

    #[test]
    fn test_merge_keeps_unset_client_fields() {
        let mut base = ProviderConfig::from_platform_defaults(Platform::Lambda);
        base.client.region = Some("us-west-2".to_string());

        let other: ProviderConfig = toml::from_str(
            r#"
            [client]
            endpoint_url = "http://localhost:4566"
            request_timeout_secs = 10
            "#,
        )
        .unwrap();
        base.merge(other);

        assert_eq!(base.client.region.as_deref(), Some("us-west-2"));
        assert_eq!(
            base.client.endpoint_url.as_deref(),
            Some("http://localhost:4566")
        );
        assert_eq!(base.client.request_timeout_secs, 10);
    }
}
