use crate::{DEFAULT_LOCAL_DB_PATH, DEFAULT_LOCAL_SLOT};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LocalStoreConfig {
    /// Database file, relative to the config directory.
    pub path: String,
    /// Name of the slot holding the record array.
    pub slot: String,
}

impl Default for LocalStoreConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_LOCAL_DB_PATH.to_string(),
            slot: DEFAULT_LOCAL_SLOT.to_string(),
        }
    }
}

impl LocalStoreConfig {
    pub fn validate(&self) -> Result<(), crate::ConfigError> {
        if self.slot.is_empty() {
            return Err(crate::ConfigError::invalid("local.slot must not be empty"));
        }

        // The database file stays inside the config directory.
        let path = std::path::Path::new(&self.path);
        if path.is_absolute() || self.path.contains("..") {
            return Err(crate::ConfigError::invalid(
                "local.path must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }
}
