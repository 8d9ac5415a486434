use crate::{ConfigError, ConfigErrorResult, LocalStoreConfig, LoggingConfig, RemoteStoreConfig};

use std::path::PathBuf;
use std::str::FromStr;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub local: LocalStoreConfig,
    pub remote: RemoteStoreConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration.
    ///
    /// Loading order:
    /// 1. Check for REG_CONFIG_DIR env var, else use ./.reg/
    /// 2. Auto-create the config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply REG_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: REG_CONFIG_DIR env var > ./.reg/ (relative to cwd)
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Ok(dir) = std::env::var("REG_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::invalid("Cannot determine current working directory"))?;
        Ok(cwd.join(".reg"))
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(value) = std::env::var("REG_LOCAL_PATH") {
            self.local.path = value;
        }
        if let Ok(value) = std::env::var("REG_LOCAL_SLOT") {
            self.local.slot = value;
        }
        if let Ok(value) = std::env::var("REG_REMOTE_URL") {
            self.remote.base_url = value;
        }
        if let Ok(value) = std::env::var("REG_REMOTE_COLLECTION") {
            self.remote.collection = value;
        }
        if let Ok(value) = std::env::var("REG_DIRECTORY_COLLECTION") {
            self.remote.directory_collection = value;
        }
        if let Ok(value) = std::env::var("REG_LOG_LEVEL") {
            // FromStr never fails; unknown strings fall back to info.
            self.logging.level = crate::LogLevel::from_str(&value).unwrap();
        }
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.local.validate()?;
        self.remote.validate()?;
        Ok(())
    }

    /// Absolute path to the local database file.
    pub fn local_db_path(&self) -> Result<PathBuf, ConfigError> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.local.path))
    }
}
