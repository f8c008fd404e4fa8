//! Render configuration with 3-layer resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Presentation options consumed by the engine's render layer.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`BITLENS_*`)
/// 2. Config file (`bitlens.toml`)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    /// Bits per display group in rendered bit strings. Default: 4.
    pub group_size: Option<usize>,
    /// Character shown for not-yet-computed high bits in addition traces.
    /// Default: `.`.
    pub placeholder: Option<char>,
    /// Prefix shown before hexadecimal output. Default: `0x`.
    pub hex_prefix: Option<String>,
    /// Render hexadecimal digits in uppercase. Default: true.
    pub uppercase_hex: Option<bool>,
}

impl RenderConfig {
    /// Load configuration with 3-layer resolution: defaults, then the
    /// given file (if it exists), then `BITLENS_*` environment variables.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if path.exists() {
            Self::merge_toml_file(&mut config, path)?;
        }

        Self::apply_env_overrides(&mut config);
        Self::validate(&config)?;

        tracing::debug!(?config, "render config resolved");
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &RenderConfig) -> Result<(), ConfigError> {
        if let Some(group_size) = config.group_size {
            if group_size == 0 || group_size > 32 || 32 % group_size != 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "group_size".to_string(),
                    message: "must divide 32 and be between 1 and 32".to_string(),
                });
            }
        }
        if let Some(placeholder) = config.placeholder {
            if placeholder == '0' || placeholder == '1' {
                return Err(ConfigError::ValidationFailed {
                    field: "placeholder".to_string(),
                    message: "must be distinguishable from a bit value".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Effective bits per display group, defaulting to 4.
    pub fn effective_group_size(&self) -> usize {
        self.group_size.unwrap_or(4)
    }

    /// Effective placeholder character, defaulting to `.`.
    pub fn effective_placeholder(&self) -> char {
        self.placeholder.unwrap_or('.')
    }

    /// Effective hexadecimal prefix, defaulting to `0x`.
    pub fn effective_hex_prefix(&self) -> &str {
        self.hex_prefix.as_deref().unwrap_or("0x")
    }

    /// Whether hexadecimal digits render uppercase, defaulting to true.
    pub fn effective_uppercase_hex(&self) -> bool {
        self.uppercase_hex.unwrap_or(true)
    }

    /// Merge a TOML file into the existing config.
    fn merge_toml_file(config: &mut RenderConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: RenderConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base`
    /// values only when `other` has a `Some` value.
    fn merge(base: &mut RenderConfig, other: &RenderConfig) {
        if other.group_size.is_some() {
            base.group_size = other.group_size;
        }
        if other.placeholder.is_some() {
            base.placeholder = other.placeholder;
        }
        if other.hex_prefix.is_some() {
            base.hex_prefix = other.hex_prefix.clone();
        }
        if other.uppercase_hex.is_some() {
            base.uppercase_hex = other.uppercase_hex;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `BITLENS_GROUP_SIZE`, `BITLENS_PLACEHOLDER`, etc.
    fn apply_env_overrides(config: &mut RenderConfig) {
        if let Ok(val) = std::env::var("BITLENS_GROUP_SIZE") {
            if let Ok(v) = val.parse::<usize>() {
                config.group_size = Some(v);
            }
        }
        if let Ok(val) = std::env::var("BITLENS_PLACEHOLDER") {
            if let Some(c) = val.chars().next() {
                config.placeholder = Some(c);
            }
        }
        if let Ok(val) = std::env::var("BITLENS_HEX_PREFIX") {
            config.hex_prefix = Some(val);
        }
        if let Ok(val) = std::env::var("BITLENS_UPPERCASE_HEX") {
            if let Ok(v) = val.parse::<bool>() {
                config.uppercase_hex = Some(v);
            }
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
