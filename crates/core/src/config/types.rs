use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub write: WriteConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// How rewritten documents are written back.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct WriteConfig {
    /// Replace the file through a temporary sibling and a rename (default: true)
    #[serde(default = "default_atomic")]
    pub atomic: bool,
}

impl Default for WriteConfig {
    fn default() -> Self {
        Self { atomic: default_atomic() }
    }
}

fn default_atomic() -> bool {
    true
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// File the settings came from; `None` when running on defaults.
    pub source: Option<PathBuf>,
    pub logging: LoggingConfig,
    pub write: WriteConfig,
}
