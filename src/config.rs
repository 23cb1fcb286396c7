//! Configuration loading from TOML.
//!
//! Reads `config.toml` and deserializes into strongly-typed structs.
//! Sections that are omitted fall back to their defaults.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::time::Duration;

/// Top-level application configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSection,
    pub roster: RosterConfig,
    #[serde(default)]
    pub notices: NoticesConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSection {
    pub name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RosterConfig {
    /// Path to a `.toml` or `.json` roster file.
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct NoticesConfig {
    /// How long a notice stays visible, in seconds.
    #[serde(default = "default_notice_ttl_secs")]
    pub ttl_secs: u64,
}

impl Default for NoticesConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_notice_ttl_secs(),
        }
    }
}

impl NoticesConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }
}

fn default_notice_ttl_secs() -> u64 {
    3
}

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub enabled: bool,
    pub port: u16,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            port: 8080,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {path}"))?;
        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {path}"))
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(contents)?;
        Ok(config)
    }
}
