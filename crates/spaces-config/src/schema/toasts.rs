//! Per-kind toast display options.

use serde::{Deserialize, Serialize};

/// Where on screen a toast is anchored.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ToastPosition {
    #[default]
    Top,
    TopLeft,
    TopRight,
    Bottom,
    BottomLeft,
    BottomRight,
}

/// Display options for one kind of toast.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ToastKindConfig {
    /// Auto-close delay in milliseconds. `0` keeps the toast until closed.
    pub duration_ms: u32,
    pub position: ToastPosition,
}

impl ToastKindConfig {
    pub fn persistent(position: ToastPosition) -> Self {
        Self {
            duration_ms: 0,
            position,
        }
    }

    pub fn timed(duration_ms: u32, position: ToastPosition) -> Self {
        Self {
            duration_ms,
            position,
        }
    }

    pub fn is_persistent(&self) -> bool {
        self.duration_ms == 0
    }
}

impl Default for ToastKindConfig {
    fn default() -> Self {
        Self::persistent(ToastPosition::Top)
    }
}

/// Toast options for each toast kind the client shows.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastsConfig {
    pub sharing_screen: ToastKindConfig,
    pub viewing_shared_screen: ToastKindConfig,
    pub broadcasting: ToastKindConfig,
    pub participant_event: ToastKindConfig,
}

impl Default for ToastsConfig {
    fn default() -> Self {
        Self {
            sharing_screen: ToastKindConfig::persistent(ToastPosition::Top),
            viewing_shared_screen: ToastKindConfig::persistent(ToastPosition::Top),
            broadcasting: ToastKindConfig::persistent(ToastPosition::TopRight),
            participant_event: ToastKindConfig::timed(5000, ToastPosition::BottomLeft),
        }
    }
}
