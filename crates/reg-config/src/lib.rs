pub mod config;
pub mod error;
pub mod local_store_config;
pub mod log_level;
pub mod logging_config;
pub mod remote_store_config;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use local_store_config::LocalStoreConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use remote_store_config::RemoteStoreConfig;

pub const DEFAULT_LOCAL_DB_PATH: &str = "registry.db";
pub const DEFAULT_LOCAL_SLOT: &str = "usuarios";
pub const DEFAULT_REMOTE_COLLECTION: &str = "usuarios";
pub const DEFAULT_DIRECTORY_COLLECTION: &str = "users";
pub const DEFAULT_LOG_LEVEL_STRING: &str = "info";
