use super::{LogFormat, ProviderConfig};
use anyhow::{anyhow, Context, Result};

pub const ENV_PREFIX: &str = "KENDRA_CFN_";

/// Abstraction over environment-variable lookups so tests can supply
/// their own source of overrides.
pub trait EnvSource {
    fn get(&self, key: &str) -> Option<String>;

    /// Get an environment variable WITHOUT the KENDRA_CFN_ prefix
    /// Used for AWS standard variables (AWS_REGION, AWS_ENDPOINT_URL_KENDRA)
    fn get_raw(&self, key: &str) -> Option<String>;
}

/// Apply environment-variable overrides (highest priority) to the provider config.
pub fn apply_env_overrides<E: EnvSource>(config: &mut ProviderConfig, env: &E) -> Result<()> {
    // Stabilization delays
    if let Some(val) = get_env_u64(env, "DEFAULT_STABILIZATION_DELAY_SECS")? {
        config.stabilization.default_delay_secs = val;
    }
    if let Some(val) = get_env_u64(env, "INDEX_STABILIZATION_DELAY_SECS")? {
        config.stabilization.index_delay_secs = val;
    }
    if let Some(val) = get_env_u64(env, "DATA_SOURCE_STABILIZATION_DELAY_SECS")? {
        config.stabilization.data_source_delay_secs = val;
    }
    if let Some(val) = get_env_u64(env, "DATA_SOURCE_DELETE_DELAY_SECS")? {
        config.stabilization.data_source_delete_delay_secs = val;
    }
    if let Some(val) = get_env_u64(env, "FAQ_STABILIZATION_DELAY_SECS")? {
        config.stabilization.faq_delay_secs = val;
    }
    if let Some(val) = get_env_u64(env, "STABILIZATION_TIMEOUT_SECS")? {
        config.stabilization.timeout_secs = val;
    }

    // Client configuration. The AWS standard variables come first so the
    // prefixed ones can override them.
    if let Some(region) = get_raw_env_string(env, "AWS_REGION")? {
        config.client.region = Some(region);
    }
    if let Some(region) = get_env_string(env, "REGION")? {
        config.client.region = Some(region);
    }
    if let Some(endpoint) = get_raw_env_string(env, "AWS_ENDPOINT_URL_KENDRA")? {
        config.client.endpoint_url = Some(endpoint);
    }
    if let Some(endpoint) = get_env_string(env, "ENDPOINT_URL")? {
        config.client.endpoint_url = Some(endpoint);
    }
    if let Some(val) = get_env_u64(env, "REQUEST_TIMEOUT_SECS")? {
        config.client.request_timeout_secs = val;
    }

    // Logging
    if let Some(level) = get_env_string(env, "LOG_LEVEL")? {
        config.logging.level = level;
    }
    if let Some(format) = get_env_string(env, "LOG_FORMAT")? {
        config.logging.format = format
            .parse::<LogFormat>()
            .context("Invalid KENDRA_CFN_LOG_FORMAT value")?;
    }

    Ok(())
}

fn get_env_string<E: EnvSource>(env: &E, key: &str) -> Result<Option<String>> {
    Ok(env.get(key).filter(|v| !v.is_empty()))
}

/// Get a raw environment variable without the KENDRA_CFN_ prefix
fn get_raw_env_string<E: EnvSource>(env: &E, key: &str) -> Result<Option<String>> {
    Ok(env.get_raw(key).filter(|v| !v.is_empty()))
}

fn get_env_u64<E: EnvSource>(env: &E, key: &str) -> Result<Option<u64>> {
    match get_env_string(env, key)? {
        Some(val) => {
            let parsed = val
                .parse::<u64>()
                .map_err(|e| anyhow!("Failed to parse {}{}: {}", ENV_PREFIX, key, e))?;
            Ok(Some(parsed))
        }
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Platform;
    use std::collections::HashMap;

    struct MapEnv(HashMap<&'static str, &'static str>);

    impl EnvSource for MapEnv {
        fn get(&self, key: &str) -> Option<String> {
            self.0
                .get(format!("{}{}", ENV_PREFIX, key).as_str())
                .map(|v| v.to_string())
        }

        fn get_raw(&self, key: &str) -> Option<String> {
            self.0.get(key).map(|v| v.to_string())
        }
    }

    #[test]
    fn test_env_overrides_delays_and_logging() {
        let env = MapEnv(HashMap::from([
            ("KENDRA_CFN_INDEX_STABILIZATION_DELAY_SECS", "30"),
            ("KENDRA_CFN_STABILIZATION_TIMEOUT_SECS", "3600"),
            ("KENDRA_CFN_LOG_LEVEL", "debug"),
            ("KENDRA_CFN_LOG_FORMAT", "json"),
        ]));
        let mut config = ProviderConfig::from_platform_defaults(Platform::Local);
        apply_env_overrides(&mut config, &env).unwrap();

        assert_eq!(config.stabilization.index_delay_secs, 30);
        assert_eq!(config.stabilization.timeout_secs, 3600);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_prefixed_region_wins_over_aws_region() {
        let env = MapEnv(HashMap::from([
            ("AWS_REGION", "us-east-1"),
            ("KENDRA_CFN_REGION", "eu-west-1"),
        ]));
        let mut config = ProviderConfig::default();
        apply_env_overrides(&mut config, &env).unwrap();
        assert_eq!(config.client.region.as_deref(), Some("eu-west-1"));
    }

    #[test]
    fn test_invalid_number_is_rejected() {
        let env = MapEnv(HashMap::from([(
            "KENDRA_CFN_FAQ_STABILIZATION_DELAY_SECS",
            "soon",
        )]));
        let mut config = ProviderConfig::default();
        let err = apply_env_overrides(&mut config, &env).unwrap_err();
        assert!(err
            .to_string()
            .contains("KENDRA_CFN_FAQ_STABILIZATION_DELAY_SECS"));
    }
}
