//! Configuration loading and parsing
//!
//! Both filters read the same optional TOML file. Every key has a default, so
//! an empty file is a valid configuration.

use anyhow::{Context, Result};
use pinmap_core::FilterConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main application configuration (loaded from a TOML file)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct InputConfig {
    /// Leading lines of the signal table to skip (column titles)
    #[serde(default)]
    pub header_rows: usize,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DiagnosticsConfig {
    /// Fail on the first malformed row
    #[serde(default)]
    pub strict: bool,
}

impl AppConfig {
    /// Library configuration described by this file
    pub fn filter_config(&self) -> FilterConfig {
        FilterConfig::new()
            .with_header_rows(self.input.header_rows)
            .with_strict(self.diagnostics.strict)
    }
}

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: AppConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    Ok(config)
}
