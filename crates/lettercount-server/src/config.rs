//! Relay configuration.

use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

/// Error type for configuration operations.
#[derive(Debug)]
pub enum ConfigError {
    /// Configuration file not found.
    NotFound(PathBuf),
    /// Failed to parse configuration.
    Parse(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(path) => write!(f, "Config file not found: {}", path.display()),
            Self::Parse(msg) => write!(f, "Failed to parse config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Relay configuration.
///
/// The defaults are the relay's published contract: listen on
/// `0.0.0.0:5001` and query `http://localhost:5000/app/A`. A config file
/// or `LETTERCOUNT_*` environment variables may override them; running
/// with nothing configured behaves exactly like the defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    pub host: String,
    pub port: u16,
    pub upstream_url: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5001,
            upstream_url: "http://localhost:5000/app/A".to_string(),
        }
    }
}

impl RelayConfig {
    /// Load configuration from the environment.
    ///
    /// A `.env` file is applied first if present. When `LETTERCOUNT_CONFIG`
    /// names a file it is loaded next (TOML/YAML/JSON, detected from the
    /// extension), and `LETTERCOUNT_*` variables override either source.
    pub fn load() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        match env::var("LETTERCOUNT_CONFIG") {
            Ok(path) => Self::from_file(Path::new(&path)),
            Err(_) => load_from_env(),
        }
    }

    /// Load configuration from a file with env var overrides.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        use config::{Config, File};

        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        Config::builder()
            .add_source(File::from(path))
            .add_source(env_source())
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Load config from environment variables only.
fn load_from_env() -> Result<RelayConfig, ConfigError> {
    use config::Config;

    Config::builder()
        .add_source(env_source())
        .build()
        .and_then(|c| c.try_deserialize())
        .map_err(|e| ConfigError::Parse(e.to_string()))
}

fn env_source() -> config::Environment {
    // Without an explicit prefix separator, config-0.15 reuses the nesting
    // separator and only matches `LETTERCOUNT__PORT`.
    config::Environment::with_prefix("LETTERCOUNT")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}
