//! Toast content and the fixed texts shown for session state.

use serde::{Deserialize, Serialize};

pub const SHARING_SCREEN_TEXT: &str = "You are sharing your screen.";
pub const BROADCASTING_TEXT: &str = "⦿ Space is currently being broadcast";

/// Interactive control rendered inside a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastAction {
    /// Ends the local screen share.
    StopScreenShare,
}

impl ToastAction {
    pub fn label(self) -> &'static str {
        match self {
            Self::StopScreenShare => "Stop Sharing",
        }
    }
}

/// What a toast says, plus an optional action button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastContent {
    pub text: String,
    pub action: Option<ToastAction>,
}

impl ToastContent {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            action: None,
        }
    }

    pub fn with_action(mut self, action: ToastAction) -> Self {
        self.action = Some(action);
        self
    }

    pub fn sharing_screen() -> Self {
        Self::text(SHARING_SCREEN_TEXT).with_action(ToastAction::StopScreenShare)
    }

    pub fn viewing_shared_screen(sharer_name: &str) -> Self {
        Self::text(format!("{sharer_name} is sharing their screen."))
    }

    pub fn broadcasting() -> Self {
        Self::text(BROADCASTING_TEXT)
    }

    pub fn participant_joined(name: &str) -> Self {
        Self::text(format!("{name} joined the space"))
    }

    pub fn participant_left(name: &str) -> Self {
        Self::text(format!("{name} left the space"))
    }
}
