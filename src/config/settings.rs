use super::{FileConfig, DEFAULT_ADDR, DEFAULT_VERSION};
use crate::cors::DEFAULT_CORS_ORIGINS;

/// Values supplied on the command line or through the environment.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub addr: Option<String>,
    pub cors_origins: Option<Vec<String>>,
    pub version: Option<String>,
}

/// Effective settings after layering overrides, file config and defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub addr: String,
    pub cors_origins: Vec<String>,
    pub version: String,
}

impl Settings {
    #[must_use]
    pub fn resolve(overrides: Overrides, file: FileConfig) -> Self {
        let addr = overrides
            .addr
            .or(file.server.addr)
            .unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let version = not_blank(overrides.version)
            .or_else(|| not_blank(file.service.version))
            .unwrap_or_else(|| DEFAULT_VERSION.to_string());
        let cors_origins = overrides
            .cors_origins
            .or(file.server.cors_origins)
            .unwrap_or_else(|| DEFAULT_CORS_ORIGINS.split(',').map(str::to_string).collect())
            .iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        Self {
            addr,
            cors_origins,
            version,
        }
    }
}

/// A blank value counts as unset, so the next layer decides.
fn not_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
