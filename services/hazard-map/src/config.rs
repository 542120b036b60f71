//! Viewer configuration.

use std::path::Path;

use anyhow::{Context, Result};
use renderer::{MapConfig, PopupFields, SizeScale};
use serde::{Deserialize, Serialize};

/// Top-level viewer configuration.
///
/// Every field has a default, so an absent config file and an empty one
/// behave the same. CLI flags override whatever was loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// Path to the hazard probability CSV
    #[serde(default = "default_data")]
    pub data: String,

    /// Listen address
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Initial map view
    #[serde(default)]
    pub map: MapConfig,

    /// Popup row selection
    #[serde(default)]
    pub popup_fields: PopupFields,

    /// Marker sizing rule
    #[serde(default)]
    pub size_scale: SizeScale,
}

fn default_data() -> String {
    "hazard_probabilities.csv".to_string()
}

fn default_listen() -> String {
    "0.0.0.0:8080".to_string()
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            data: default_data(),
            listen: default_listen(),
            map: MapConfig::default(),
            popup_fields: PopupFields::default(),
            size_scale: SizeScale::default(),
        }
    }
}

impl ViewerConfig {
    /// Load from a YAML file, or fall back to defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config file {}", path.display()))?;
                let config: ViewerConfig = serde_yaml::from_str(&raw)
                    .with_context(|| format!("Failed to parse config file {}", path.display()))?;
                Ok(config)
            }
            None => Ok(Self::default()),
        }
    }
}
