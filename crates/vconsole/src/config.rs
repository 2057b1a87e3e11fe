//! Configuration loading

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;
use vconsole_core::{DescribeOptions, TypeRegistry};

/// Registry shipped with the binary, used when no file is configured
const BUILTIN_REGISTRY: &str = include_str!("../data/viewer.toml");

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub describe: DescribeOptions,
    #[serde(default)]
    pub registry: RegistryConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Path to a host type registry (TOML); the built-in one is used if unset
    #[serde(default)]
    pub path: Option<String>,
}

impl Config {
    /// Load the configured type registry
    pub fn load_registry(&self) -> Result<TypeRegistry> {
        match &self.registry.path {
            Some(path) => {
                let registry = TypeRegistry::from_file(Path::new(path))?;
                info!(path = %path, "Loaded type registry");
                Ok(registry)
            }
            None => Ok(TypeRegistry::from_toml(BUILTIN_REGISTRY)?),
        }
    }
}

/// Load configuration from file
pub fn load_config(path: &Path) -> Result<Config> {
    if path.exists() {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    } else {
        info!(
            path = %path.display(),
            "Configuration file not found, using defaults"
        );
        Ok(Config::default())
    }
}

/// Save default configuration to file
pub fn save_default_config(path: &Path) -> Result<()> {
    let content = toml::to_string_pretty(&Config::default())?;
    std::fs::write(path, content)?;
    Ok(())
}
