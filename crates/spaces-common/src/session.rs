use serde::{Deserialize, Serialize};

/// Point-in-time view of the session signals that drive persistent toasts.
///
/// Derived from the live session on every update; never stored as history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionState {
    pub is_broadcasting: bool,
    pub is_screen_share_active: bool,
    pub is_local_screen_share: bool,
    /// Identity of the participant currently sharing, when known.
    pub sharer_identity: Option<String>,
}

impl SessionState {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn broadcasting(mut self, on: bool) -> Self {
        self.is_broadcasting = on;
        self
    }

    pub fn local_share(mut self) -> Self {
        self.is_screen_share_active = true;
        self.is_local_screen_share = true;
        self.sharer_identity = None;
        self
    }

    pub fn remote_share(mut self, sharer: Option<&str>) -> Self {
        self.is_screen_share_active = true;
        self.is_local_screen_share = false;
        self.sharer_identity = sharer.map(str::to_string);
        self
    }

    pub fn no_share(mut self) -> Self {
        self.is_screen_share_active = false;
        self.is_local_screen_share = false;
        self.sharer_identity = None;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_is_all_off() {
        let s = SessionState::idle();
        assert!(!s.is_broadcasting);
        assert!(!s.is_screen_share_active);
        assert!(!s.is_local_screen_share);
        assert!(s.sharer_identity.is_none());
    }

    #[test]
    fn builders_compose() {
        let s = SessionState::idle()
            .broadcasting(true)
            .remote_share(Some("alice|1"));
        assert!(s.is_broadcasting);
        assert!(s.is_screen_share_active);
        assert!(!s.is_local_screen_share);
        assert_eq!(s.sharer_identity.as_deref(), Some("alice|1"));

        let s = s.no_share();
        assert!(s.is_broadcasting);
        assert!(!s.is_screen_share_active);
    }

    #[test]
    fn partial_json_uses_defaults() {
        let s: SessionState = serde_json::from_str(r#"{"is_broadcasting":true}"#).unwrap();
        assert!(s.is_broadcasting);
        assert!(!s.is_screen_share_active);
    }
}
