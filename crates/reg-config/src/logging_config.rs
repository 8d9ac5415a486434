use crate::LogLevel;

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Log file path. None logs to stdout.
    pub file: Option<String>,
    pub colored: bool,
}
