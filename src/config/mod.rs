#[cfg(feature = "cli")]
pub mod cli;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::utils::error::{Result, ZoneError};
use crate::utils::validation::{validate_path, validate_url, Validate};

/// Channel-level pricing flag the shipping subsystem passes in.
///
/// The façade copies `prices_include_tax` into every quote it returns; it
/// never computes taxes itself.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ChannelSettings {
    pub prices_include_tax: bool,
}

/// TOML configuration for the demo binary.
///
/// ```toml
/// [channel]
/// prices_include_tax = true
///
/// [source]
/// zones_file = "zones.json"
/// # or:
/// # endpoint = "https://shop.example/admin/delivery-zones"
/// ```
///
/// When both sources are set, the file wins.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub channel: ChannelSettings,
    #[serde(default)]
    pub source: SourceConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceConfig {
    pub zones_file: Option<String>,
    pub endpoint: Option<String>,
}

impl AppConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&raw)?;
        Ok(config)
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        match (&self.source.zones_file, &self.source.endpoint) {
            (None, None) => Err(ZoneError::MissingConfigError {
                field: "source.zones_file or source.endpoint".to_string(),
            }),
            (Some(path), _) => validate_path("source.zones_file", path),
            (None, Some(endpoint)) => validate_url("source.endpoint", endpoint),
        }
    }
}
