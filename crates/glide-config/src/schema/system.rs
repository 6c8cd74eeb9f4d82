//! System configuration types: logging.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
#[derive(Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// `tracing_subscriber::EnvFilter` directive for the Glide crates.
    pub fn directive(&self) -> &'static str {
        match self {
            LogLevel::Trace => "glide=trace",
            LogLevel::Debug => "glide=debug",
            LogLevel::Info => "glide=info",
            LogLevel::Warning => "glide=warn",
            LogLevel::Error => "glide=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
