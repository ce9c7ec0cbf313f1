// Configuration source loading
//
// Priority order:
// 1. Environment variables (KENDRA_CFN_* prefix, plus AWS_REGION)
// 2. Config file path from KENDRA_CFN_CONFIG
// 3. Inline config content from KENDRA_CFN_CONFIG_CONTENT
// 4. Default config file (./kendra-cfn.toml)
// 5. Platform defaults (based on auto-detected Platform)

use crate::env_overrides::{self, EnvSource, ENV_PREFIX};
use crate::platform::Platform;
use crate::*;
use anyhow::{Context, Result};
use std::env;
use std::path::Path;

const DEFAULT_CONFIG_PATH: &str = "./kendra-cfn.toml";

/// Load configuration for the detected platform using native environment/file access.
pub fn load_config(platform: Platform) -> Result<ProviderConfig> {
    let mut config = ProviderConfig::from_platform_defaults(platform);

    if let Some(file_config) = load_from_file()? {
        config.merge(file_config);
    }

    env_overrides::apply_env_overrides(&mut config, &StdEnvSource)?;
    config.validate()?;
    Ok(config)
}

fn load_from_file() -> Result<Option<ProviderConfig>> {
    if let Ok(path) = env::var("KENDRA_CFN_CONFIG") {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        let config: ProviderConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path))?;
        return Ok(Some(config));
    }

    if let Ok(content) = env::var("KENDRA_CFN_CONFIG_CONTENT") {
        let config: ProviderConfig = toml::from_str(&content)
            .context("Failed to parse inline config from KENDRA_CFN_CONFIG_CONTENT")?;
        return Ok(Some(config));
    }

    if Path::new(DEFAULT_CONFIG_PATH).exists() {
        let content = std::fs::read_to_string(DEFAULT_CONFIG_PATH)
            .with_context(|| format!("Failed to read config file: {}", DEFAULT_CONFIG_PATH))?;
        let config: ProviderConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", DEFAULT_CONFIG_PATH))?;
        return Ok(Some(config));
    }

    Ok(None)
}

/// Load configuration from a specific file path.
/// Starts from platform defaults, layers the file, then applies env overrides.
pub fn load_from_file_path(path: impl AsRef<Path>) -> Result<ProviderConfig> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let file_config: ProviderConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

    let mut config = ProviderConfig::from_platform_defaults(Platform::detect());
    config.merge(file_config);

    env_overrides::apply_env_overrides(&mut config, &StdEnvSource)?;

    config.validate()?;
    Ok(config)
}

struct StdEnvSource;

impl EnvSource for StdEnvSource {
    fn get(&self, key: &str) -> Option<String> {
        env::var(format!("{}{}", ENV_PREFIX, key)).ok()
    }

    fn get_raw(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }
}
