//! Which screen-share toast a session snapshot calls for.

use spaces_common::SessionState;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ScreenShareState {
    #[default]
    Idle,
    LocalActive,
    RemoteActive {
        /// Full identity of the sharing participant.
        sharer: String,
    },
}

impl ScreenShareState {
    /// The state `state` moves to from `current`.
    ///
    /// Only an inactive share leads back to `Idle`. A remote share without a
    /// known sharer keeps whatever is current, so no toast with a missing
    /// name is ever shown and an existing one is not taken down.
    pub fn derive(current: &Self, state: &SessionState) -> Self {
        if !state.is_screen_share_active {
            return Self::Idle;
        }
        if state.is_local_screen_share {
            return Self::LocalActive;
        }
        match &state.sharer_identity {
            Some(sharer) => Self::RemoteActive {
                sharer: sharer.clone(),
            },
            None => current.clone(),
        }
    }

    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Idle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inactive_share_is_idle() {
        let state = SessionState::idle().broadcasting(true);
        let current = ScreenShareState::LocalActive;
        assert_eq!(
            ScreenShareState::derive(&current, &state),
            ScreenShareState::Idle
        );
    }

    #[test]
    fn local_share_ignores_sharer() {
        let mut state = SessionState::idle().local_share();
        state.sharer_identity = Some("me|1".into());
        assert_eq!(
            ScreenShareState::derive(&ScreenShareState::Idle, &state),
            ScreenShareState::LocalActive
        );
    }

    #[test]
    fn remote_share_needs_sharer() {
        let idle = ScreenShareState::Idle;
        let state = SessionState::idle().remote_share(None);
        assert_eq!(ScreenShareState::derive(&idle, &state), idle);

        let state = SessionState::idle().remote_share(Some("alice|9"));
        assert_eq!(
            ScreenShareState::derive(&idle, &state),
            ScreenShareState::RemoteActive {
                sharer: "alice|9".into()
            }
        );
    }

    #[test]
    fn missing_sharer_keeps_active_state() {
        let state = SessionState::idle().remote_share(None);

        let remote = ScreenShareState::RemoteActive {
            sharer: "alice|9".into(),
        };
        assert_eq!(ScreenShareState::derive(&remote, &state), remote);

        let local = ScreenShareState::LocalActive;
        assert_eq!(ScreenShareState::derive(&local, &state), local);
    }

    #[test]
    fn only_idle_is_inactive() {
        assert!(!ScreenShareState::Idle.is_active());
        assert!(ScreenShareState::LocalActive.is_active());
    }
}
