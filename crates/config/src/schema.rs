//! Config schema for the obra client and CLI.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Backend endpoint used when no config file overrides it.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ObraConfig {
    pub api: ApiConfig,
    pub session: SessionConfig,
}

/// Backend API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL the client prefixes onto every route, without a trailing
    /// slash.
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Session persistence settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Override for the session file location. Defaults to `session.json`
    /// inside the config directory.
    pub path: Option<PathBuf>,
}
