use serde::{Deserialize, Serialize};
use std::path::Path;

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::query::{QueryConfig, MAX_RECV_BUFFER_SIZE, MIN_RECV_BUFFER_SIZE};

/// Config file picked up from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "ppdig.toml";

/// Main configuration structure for ppdig
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Query behaviour (timeout, buffer, metadata parsing)
    #[serde(default)]
    pub query: QueryConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ppdig.toml in current directory
    /// 3. Default configuration
    ///
    /// Command-line overrides are applied last, then the result is validated.
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if Path::new(DEFAULT_CONFIG_FILE).exists() {
            Self::from_file(DEFAULT_CONFIG_FILE)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file
    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(timeout) = overrides.timeout_secs {
            self.query.timeout_secs = timeout;
        }
        if let Some(size) = overrides.recv_buffer_size {
            self.query.recv_buffer_size = size;
        }
        if overrides.strict_metadata {
            self.query.strict_metadata = true;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let size = self.query.recv_buffer_size;
        if !(MIN_RECV_BUFFER_SIZE..=MAX_RECV_BUFFER_SIZE).contains(&size) {
            return Err(ConfigError::Validation(format!(
                "recv_buffer_size must be between {} and {}, got {}",
                MIN_RECV_BUFFER_SIZE, MAX_RECV_BUFFER_SIZE, size
            )));
        }

        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::Validation(
                "logging.level cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub timeout_secs: Option<u64>,
    pub recv_buffer_size: Option<usize>,
    pub strict_metadata: bool,
    pub log_level: Option<String>,
}
