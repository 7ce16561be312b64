//! Configuration schema types for Spaces toasts.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod system;
mod toasts;

pub use system::*;
pub use toasts::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SpacesConfig {
    pub toasts: ToastsConfig,
    pub logging: LoggingConfig,
}
