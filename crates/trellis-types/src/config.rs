//! UI configuration loaded from `trellis.toml` (or an equivalent JSON file).
//!
//! The config only carries raw values; colors stay as strings here and are
//! parsed when a theme is built from them, so a bad color never rejects an
//! otherwise valid file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TrellisError};

/// Built-in theme variant to start from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariant {
    #[default]
    Dark,
    Light,
}

/// Optional per-role color overrides, as `#RRGGBB` or `#RRGGBBAA`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorOverrides {
    #[serde(default)]
    pub background: Option<String>,
    #[serde(default)]
    pub button: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub disabled_text: Option<String>,
    #[serde(default)]
    pub primary: Option<String>,
    #[serde(default)]
    pub focus: Option<String>,
}

/// Top-level UI configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Base theme variant.
    #[serde(default)]
    pub theme: ThemeVariant,
    /// Text size override in points.
    #[serde(default)]
    pub text_size: Option<u16>,
    /// Inner padding override in pixels.
    #[serde(default)]
    pub padding: Option<u16>,
    /// Color overrides.
    #[serde(default)]
    pub colors: ColorOverrides,
}

impl UiConfig {
    /// Parse a config from TOML text.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Parse a config from JSON text.
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Load a config file, choosing the format by extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        let parse: fn(&str) -> Result<Self> = match ext.as_deref() {
            Some("toml") => Self::from_toml_str,
            Some("json") => Self::from_json_str,
            _ => {
                return Err(TrellisError::Config(format!(
                    "unsupported config format: {}",
                    path.display()
                )));
            },
        };
        let text = std::fs::read_to_string(path)?;
        let config = parse(&text)?;
        log::debug!("Loaded UI config from {}", path.display());
        Ok(config)
    }
}
