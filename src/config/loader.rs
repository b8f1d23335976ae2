use super::{ConfigError, FileConfig};
use std::path::Path;
use tracing::debug;

/// Load the config file at `path`.
///
/// Returns `Ok(FileConfig::default())` if the file does not exist.
///
/// # Errors
///
/// Returns [`ConfigError`] if the file exists but cannot be read or parsed.
pub fn load_config(path: &Path) -> Result<FileConfig, ConfigError> {
    if !path.exists() {
        debug!("Config not found at {}; using defaults", path.display());
        return Ok(FileConfig::default());
    }
    let content = std::fs::read_to_string(path)?;
    let config: FileConfig = toml::from_str(&content)?;
    debug!("Loaded config from {}", path.display());
    Ok(config)
}
