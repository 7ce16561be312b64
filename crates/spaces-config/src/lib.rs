//! Spaces toast configuration.
//!
//! TOML-based configuration for per-kind toast display options and
//! logging. Every section has defaults so partial configs work as-is.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use spaces_config::load_config;
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}", config.toasts.participant_event.duration_ms);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{
    LogLevel, LoggingConfig, SpacesConfig, ToastKindConfig, ToastPosition, ToastsConfig,
    CONFIG_SCHEMA_VERSION,
};

use spaces_common::ConfigError;

/// Load config from the platform default path and validate it.
pub fn load_config() -> Result<SpacesConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &SpacesConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
