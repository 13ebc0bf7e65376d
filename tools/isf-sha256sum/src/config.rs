// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Tool configuration.
//!
//! Defaults can be placed in a TOML file; command-line flags override them.

use clap::ValueEnum;
use isf_sha256::HashLimits;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming a config file when `--config` is absent.
pub const CONFIG_ENV: &str = "ISF_SHA256SUM_CONFIG";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Line layout for hash output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputStyle {
    /// `<digest>  <name>` (coreutils)
    #[default]
    Gnu,
    /// `SHA256 (<name>) = <digest>`
    Bsd,
    /// One JSON object per line
    Json,
}

/// Text encoding of the digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    #[default]
    Hex,
    Base64,
}

/// isf-sha256sum configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolConfig {
    /// Output layout.
    #[serde(default)]
    pub format: OutputStyle,

    /// Digest encoding.
    #[serde(default)]
    pub encoding: Encoding,

    /// Largest input read into memory (MiB).
    #[serde(default = "default_max_input_mb")]
    pub max_input_mb: u64,

    /// Log level or filter directive.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_max_input_mb() -> u64 {
    1024
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            format: OutputStyle::default(),
            encoding: Encoding::default(),
            max_input_mb: default_max_input_mb(),
            log_level: default_log_level(),
        }
    }
}

impl ToolConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the config source: explicit path, then `ISF_SHA256SUM_CONFIG`,
    /// then built-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_input_mb == 0 {
            return Err(ConfigError::Invalid(
                "max_input_mb must be greater than zero".into(),
            ));
        }
        if self.max_input_mb > u64::MAX >> 20 {
            return Err(ConfigError::Invalid(format!(
                "max_input_mb {} is out of range",
                self.max_input_mb
            )));
        }
        if self.log_level.trim().is_empty() {
            return Err(ConfigError::Invalid("log_level must not be empty".into()));
        }
        Ok(())
    }

    pub fn limits(&self) -> HashLimits {
        HashLimits::new(self.max_input_mb << 20)
    }

    /// Render as a commented TOML document.
    pub fn to_toml_document(&self) -> Result<String, ConfigError> {
        let body = toml::to_string_pretty(self)?;
        Ok(format!(
            "# isf-sha256sum configuration\n# Generated by isf-sha256sum gen-config\n\n{}",
            body
        ))
    }
}
