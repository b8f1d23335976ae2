//! Service configuration.
//!
//! Settings come from three layers, highest precedence first:
//! command-line flags (or their environment variables), the optional TOML
//! file at `~/.users-api/config.toml`, and built-in defaults.

mod loader;
mod settings;

pub use loader::load_config;
pub use settings::{Overrides, Settings};

use crate::utils::get_app_path;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Default bind address.
pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Service version reported by `GET /` when nothing else is configured.
pub const DEFAULT_VERSION: &str = "1.0.0";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// `[service]` table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ServiceSection {
    pub version: Option<String>,
}

/// `[server]` table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    pub addr: Option<String>,
    pub cors_origins: Option<Vec<String>>,
}

/// Top-level config file contents. Every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub service: ServiceSection,
    #[serde(default)]
    pub server: ServerSection,
}

/// Resolve the default config file path (`~/.users-api/config.toml`).
#[must_use]
pub fn default_config_path() -> PathBuf {
    get_app_path().join("config.toml")
}

#[cfg(test)]
#[path = "../config_tests.rs"]
mod config_tests;
