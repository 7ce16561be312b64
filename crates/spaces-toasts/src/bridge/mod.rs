//! Session event bridge.
//!
//! Keeps the previous [`SessionState`] snapshot, diffs each new one against
//! it and drives the singleton controller for the transitions that newly
//! happened. Participant events become queued toasts.

mod screen_share;


pub use screen_share::ScreenShareState;

use spaces_common::{display_name, SessionEvent, SessionState};
use spaces_config::ToastsConfig;
use tracing::{debug, info};

use crate::content::{ToastAction, ToastContent};
use crate::display::ToastDisplay;
use crate::options::ToastOptionsTable;
use crate::queue::ParticipantToastQueue;
use crate::singleton::{SingletonToasts, ToastCategory};

/// Requests the bridge hands back to the host for the live session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    StopScreenShare,
}

pub struct SessionToastBridge<D: ToastDisplay> {
    display: D,
    options: ToastOptionsTable,
    singletons: SingletonToasts<D::Handle>,
    participants: ParticipantToastQueue<D::Handle>,
    previous: SessionState,
    screen_share: ScreenShareState,
}

impl<D: ToastDisplay> SessionToastBridge<D> {
    pub fn new(display: D, options: ToastOptionsTable) -> Self {
        Self {
            display,
            options,
            singletons: SingletonToasts::new(),
            participants: ParticipantToastQueue::new(),
            previous: SessionState::default(),
            screen_share: ScreenShareState::Idle,
        }
    }

    pub fn with_config(display: D, config: &ToastsConfig) -> Self {
        Self::new(display, ToastOptionsTable::from_config(config))
    }

    pub fn handle_event(&mut self, event: &SessionEvent) {
        match event {
            SessionEvent::ParticipantJoined { identity } => {
                self.participant_joined(identity.as_str());
            }
            SessionEvent::ParticipantLeft { identity } => {
                self.participant_left(identity.as_str());
            }
            SessionEvent::StateChanged(state) => self.apply_state(state.clone()),
            SessionEvent::Unknown => debug!("ignoring unknown session event"),
        }
    }

    /// Applies a new session snapshot.
    pub fn apply_state(&mut self, next: SessionState) {
        let target = ScreenShareState::derive(&self.screen_share, &next);
        if target != self.screen_share {
            self.transition_screen_share(target);
        }

        if next.is_broadcasting != self.previous.is_broadcasting {
            if next.is_broadcasting {
                let options = self.options.for_category(ToastCategory::Broadcasting);
                self.singletons.show(
                    &mut self.display,
                    ToastCategory::Broadcasting,
                    ToastContent::broadcasting(),
                    options,
                );
            } else {
                self.singletons
                    .hide(&mut self.display, ToastCategory::Broadcasting);
            }
        }

        self.previous = next;
    }

    fn transition_screen_share(&mut self, target: ScreenShareState) {
        debug!(from = ?self.screen_share, to = ?target, "screen share changed");

        // The old toast must be gone before the new one is shown.
        if self.screen_share.is_active() {
            self.singletons
                .hide(&mut self.display, ToastCategory::LocalScreenShare);
            self.singletons
                .hide(&mut self.display, ToastCategory::RemoteScreenShare);
        }

        match &target {
            ScreenShareState::Idle => {}
            ScreenShareState::LocalActive => {
                let options = self.options.for_category(ToastCategory::LocalScreenShare);
                self.singletons.show(
                    &mut self.display,
                    ToastCategory::LocalScreenShare,
                    ToastContent::sharing_screen(),
                    options,
                );
            }
            ScreenShareState::RemoteActive { sharer } => {
                let options = self.options.for_category(ToastCategory::RemoteScreenShare);
                self.singletons.show(
                    &mut self.display,
                    ToastCategory::RemoteScreenShare,
                    ToastContent::viewing_shared_screen(display_name(sharer)),
                    options,
                );
            }
        }

        self.screen_share = target;
    }

    pub fn participant_joined(&mut self, identity: &str) -> D::Handle {
        let content = ToastContent::participant_joined(display_name(identity));
        self.participants
            .push(&mut self.display, content, self.options.participant_event())
    }

    pub fn participant_left(&mut self, identity: &str) -> D::Handle {
        let content = ToastContent::participant_left(display_name(identity));
        self.participants
            .push(&mut self.display, content, self.options.participant_event())
    }

    /// Handles the user pressing the action button of a toast.
    ///
    /// Only the local screen-share toast carries an action; the returned
    /// command must be forwarded to the session.
    pub fn handle_action(
        &mut self,
        handle: &D::Handle,
        action: ToastAction,
    ) -> Option<SessionCommand> {
        if self.singletons.handle(ToastCategory::LocalScreenShare) != Some(handle) {
            debug!(?handle, "action on untracked toast ignored");
            return None;
        }
        match action {
            ToastAction::StopScreenShare => {
                self.singletons
                    .hide(&mut self.display, ToastCategory::LocalScreenShare);
                Some(SessionCommand::StopScreenShare)
            }
        }
    }

    /// Closes every tracked toast and forgets the last snapshot, so the
    /// next snapshot is applied as if from a fresh view.
    pub fn close_all(&mut self) -> usize {
        let closed = self.singletons.close_all(&mut self.display)
            + self.participants.close_all(&mut self.display);
        self.previous = SessionState::default();
        self.screen_share = ScreenShareState::Idle;
        info!(closed, "closed all toasts");
        closed
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    pub fn singletons(&self) -> &SingletonToasts<D::Handle> {
        &self.singletons
    }

    pub fn participants(&self) -> &ParticipantToastQueue<D::Handle> {
        &self.participants
    }

    pub fn screen_share(&self) -> &ScreenShareState {
        &self.screen_share
    }

    pub fn last_state(&self) -> &SessionState {
        &self.previous
    }
}
