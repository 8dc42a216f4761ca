use crate::utils::error::{Result, StorefrontError};
use serde::Deserialize;

/// Optional TOML config file. Any field it sets fills the matching CLI
/// flag when that flag was left at its default.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StorefrontConfig {
    pub base_url: Option<String>,
    pub output_path: Option<String>,
}

impl StorefrontConfig {
    pub fn load(path: &str) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw).map_err(|e| StorefrontError::ConfigError {
            message: format!("could not parse {}: {}", path, e),
        })
    }
}
