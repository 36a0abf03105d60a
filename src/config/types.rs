//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};

use crate::puml::TransformOptions;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub convert: ConvertConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Conversion behavior
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertConfig {
    /// Fail a file on nested boxes, stray `end box`, or blocks left open
    #[serde(default = "default_strict")]
    pub strict: bool,
    /// Descend into sub-directories when given a directory
    #[serde(default)]
    pub recursive: bool,
}

pub fn default_strict() -> bool {
    true
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            strict: default_strict(),
            recursive: false,
        }
    }
}

impl ConvertConfig {
    pub fn transform_options(&self) -> TransformOptions {
        TransformOptions {
            strict: self.strict,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default level when RUST_LOG is not set ("error", "warn", "info", "debug", "trace")
    #[serde(default = "default_log_level")]
    pub level: String,
}

pub fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
