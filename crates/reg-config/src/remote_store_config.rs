use crate::{DEFAULT_DIRECTORY_COLLECTION, DEFAULT_REMOTE_COLLECTION};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RemoteStoreConfig {
    /// Base URL of the remote document store.
    pub base_url: String,
    /// Main record collection.
    pub collection: String,
    /// Secondary read-only directory collection.
    pub directory_collection: String,
}

impl Default for RemoteStoreConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8080".to_string(),
            collection: DEFAULT_REMOTE_COLLECTION.to_string(),
            directory_collection: DEFAULT_DIRECTORY_COLLECTION.to_string(),
        }
    }
}

impl RemoteStoreConfig {
    pub fn validate(&self) -> Result<(), crate::ConfigError> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(crate::ConfigError::invalid(
                "remote.base_url must start with http:// or https://",
            ));
        }
        if self.collection.is_empty() || self.directory_collection.is_empty() {
            return Err(crate::ConfigError::invalid(
                "remote collection names must not be empty",
            ));
        }

        Ok(())
    }
}
