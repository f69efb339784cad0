//! Persisted CLI settings

use crate::config::ConfigPaths;
use crate::error::CliResult;
use serde::{Deserialize, Serialize};

fn default_api_url() -> String {
    "http://localhost:8080/api".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Settings stored in config.json.
///
/// `api_url` includes the server's path prefix; resource paths are
/// appended to it unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the API, including the /api prefix
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Load settings from config.json, falling back to defaults when the
    /// file does not exist. `PORTERO_API_URL` overrides the file.
    pub fn load(paths: &ConfigPaths) -> CliResult<Self> {
        let mut config = if paths.config_file.exists() {
            let content = std::fs::read_to_string(&paths.config_file)?;
            serde_json::from_str(&content)?
        } else {
            Self::default()
        };

        if let Ok(url) = std::env::var("PORTERO_API_URL") {
            config.api_url = url;
        }

        Ok(config)
    }

    /// Save settings to config.json
    pub fn save(&self, paths: &ConfigPaths) -> CliResult<()> {
        paths.ensure_dir_exists()?;
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&paths.config_file, content)?;
        Ok(())
    }
}
