//! Full configuration validation.
//!
//! Each domain has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod helpers;
mod toasts;


use crate::schema::SpacesConfig;
use spaces_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &SpacesConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    toasts::validate_toasts(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
