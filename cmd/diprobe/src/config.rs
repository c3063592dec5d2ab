//! DI configuration file loading.
//!
//! The preference map is read from a YAML or JSON file with a
//! `preferences` section mapping interface names to target classes:
//!
//! ```yaml
//! preferences:
//!   "Vendor\\Api\\ThingInterface": "Vendor\\Model\\Thing"
//! ```
//!
//! Document order of the section is preserved.

use std::io;
use std::path::Path;

use diprobe_prefs::PreferenceMap;
use serde::Deserialize;
use thiserror::Error;

/// Default configuration filename.
pub const DEFAULT_CONFIG_FILE: &str = "di.yaml";

/// Error type for config loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    ReadFile(#[from] io::Error),
    #[error("failed to parse YAML: {0}")]
    ParseYaml(#[from] serde_yaml::Error),
    #[error("failed to parse JSON: {0}")]
    ParseJson(#[from] serde_json::Error),
    #[error("failed to parse config (tried YAML and JSON)")]
    ParseFailed,
}

/// DI configuration file contents.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DiConfig {
    /// Interface type name to concrete target class, in file order.
    #[serde(default)]
    pub preferences: PreferenceMap,
}

/// Loads the DI configuration from a YAML or JSON file.
pub fn load_config(path: impl AsRef<Path>) -> Result<DiConfig, ConfigError> {
    let data = std::fs::read(path.as_ref())?;
    parse_config(&data, path.as_ref())
}

/// Parses config data based on file extension or content.
fn parse_config(data: &[u8], path: &Path) -> Result<DiConfig, ConfigError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());

    match ext.as_deref() {
        Some("yaml") | Some("yml") => Ok(serde_yaml::from_slice(data)?),
        Some("json") => Ok(serde_json::from_slice(data)?),
        _ => {
            // Try YAML first, then JSON
            if let Ok(v) = serde_yaml::from_slice(data) {
                return Ok(v);
            }
            if let Ok(v) = serde_json::from_slice(data) {
                return Ok(v);
            }
            Err(ConfigError::ParseFailed)
        }
    }
}
