//! Logging configuration types.

use serde::{Deserialize, Serialize};

/// Log verbosity.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// `tracing_subscriber::EnvFilter` directive scoped to the spaces crates.
    pub fn directive(self) -> &'static str {
        match self {
            Self::Trace => "spaces=trace",
            Self::Debug => "spaces=debug",
            Self::Info => "spaces=info",
            Self::Warn => "spaces=warn",
            Self::Error => "spaces=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
