//! Drives the toast lifecycle from a parsed script.

use std::time::Duration;

use spaces_common::Navigator;
use spaces_config::ToastsConfig;
use spaces_toasts::{MemoryDisplay, NavigationGuard, SessionCommand, SessionToastBridge};
use tracing::{debug, info, warn};

use crate::script::ScriptStep;

/// Stands in for the hosting view: owns the navigator, the bridge and the
/// guard, and pumps navigation events after every step.
pub struct Replay {
    navigator: Navigator,
    guard: NavigationGuard,
    bridge: SessionToastBridge<MemoryDisplay>,
    commands: Vec<SessionCommand>,
}

impl Replay {
    pub fn new(config: &ToastsConfig) -> Self {
        Self {
            navigator: Navigator::default(),
            guard: NavigationGuard::new(),
            bridge: SessionToastBridge::with_config(MemoryDisplay::new(), config),
            commands: Vec::new(),
        }
    }

    pub fn run(&mut self, steps: impl IntoIterator<Item = ScriptStep>) {
        for step in steps {
            self.step(step);
        }
    }

    pub fn step(&mut self, step: ScriptStep) {
        debug!(?step, "replay step");
        match step {
            ScriptStep::Ready => {
                self.navigator.mark_ready();
                self.guard.arm(&self.navigator);
            }
            ScriptStep::Session(event) => self.bridge.handle_event(&event),
            ScriptStep::Navigate { url } => {
                self.navigator.start_route_change(url.as_str());
                self.navigator.complete_route_change(url);
            }
            ScriptStep::Tick { ms } => {
                let expired = self
                    .bridge
                    .display_mut()
                    .advance(Duration::from_millis(ms));
                if !expired.is_empty() {
                    debug!(count = expired.len(), "toasts timed out");
                }
            }
            ScriptStep::Expire { toast } => {
                if !self.bridge.display_mut().expire(toast) {
                    warn!(%toast, "expire: toast is not on screen");
                }
            }
            ScriptStep::Action { toast } => {
                let action = self
                    .bridge
                    .display()
                    .get(toast)
                    .and_then(|t| t.content.action);
                match action {
                    Some(action) => {
                        if let Some(cmd) = self.bridge.handle_action(&toast, action) {
                            info!(?cmd, "forwarding command to session");
                            self.commands.push(cmd);
                        }
                    }
                    None => warn!(%toast, "action: toast has no action"),
                }
            }
            ScriptStep::Teardown => self.guard.disarm(),
        }
        self.guard.poll(&mut self.bridge);
        // Nothing reads the call log during a replay.
        self.bridge.display_mut().clear_calls();
    }

    /// One tab-separated line per toast still on screen: id, kind, text and
    /// the action button label when there is one.
    pub fn open_toast_lines(&self) -> Vec<String> {
        self.bridge
            .display()
            .open_toasts()
            .map(|toast| {
                let mut line = format!(
                    "{}\t{}\t{}",
                    toast.id,
                    toast.options.kind.id(),
                    toast.content.text
                );
                if let Some(action) = toast.content.action {
                    line.push_str(&format!("\t[{}]", action.label()));
                }
                line
            })
            .collect()
    }

    pub fn bridge(&self) -> &SessionToastBridge<MemoryDisplay> {
        &self.bridge
    }

    pub fn commands(&self) -> &[SessionCommand] {
        &self.commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script;
    use spaces_toasts::{ToastCategory, ToastDisplay, ToastId, PARTICIPANT_TOAST_CAPACITY};

    fn replay(source: &str) -> Replay {
        let mut replay = Replay::new(&ToastsConfig::default());
        replay.run(script::parse(source).unwrap());
        replay
    }

    #[test]
    fn navigation_before_ready_keeps_toasts() {
        let r = replay(
            r#"
{"type":"session","data":{"type":"StateChanged","data":{"is_broadcasting":true}}}
{"type":"navigate","data":{"url":"/other"}}
"#,
        );
        assert!(r.bridge().singletons().is_tracked(ToastCategory::Broadcasting));
    }

    #[test]
    fn navigation_after_ready_clears_toasts() {
        let r = replay(
            r#"
{"type":"ready"}
{"type":"session","data":{"type":"StateChanged","data":{"is_broadcasting":true}}}
{"type":"session","data":{"type":"ParticipantJoined","data":{"identity":"alice|1"}}}
{"type":"navigate","data":{"url":"/other"}}
"#,
        );
        assert!(r.bridge().singletons().is_empty());
        assert!(r.bridge().participants().is_empty());
        assert_eq!(r.bridge().display().open_count(), 0);
    }

    #[test]
    fn teardown_disarms_guard() {
        let r = replay(
            r#"
{"type":"ready"}
{"type":"teardown"}
{"type":"session","data":{"type":"ParticipantLeft","data":{"identity":"bob"}}}
{"type":"navigate","data":{"url":"/other"}}
"#,
        );
        assert_eq!(r.bridge().participants().len(), 1);
    }

    #[test]
    fn ticks_time_out_participant_toasts() {
        let r = replay(
            r#"
{"type":"session","data":{"type":"ParticipantJoined","data":{"identity":"alice|1"}}}
{"type":"tick","data":{"ms":5000}}
{"type":"session","data":{"type":"ParticipantJoined","data":{"identity":"bob|2"}}}
"#,
        );
        // The first entry was pruned by the second push.
        assert_eq!(r.bridge().participants().len(), 1);
        assert_eq!(r.bridge().display().open_count(), 1);
    }

    #[test]
    fn stop_sharing_action_emits_command() {
        let r = replay(
            r#"
{"type":"session","data":{"type":"StateChanged","data":{"is_screen_share_active":true,"is_local_screen_share":true}}}
{"type":"action","data":{"toast":1}}
"#,
        );
        assert_eq!(r.commands(), &[SessionCommand::StopScreenShare]);
        assert!(!r.bridge().display().is_active(&ToastId(1)));
    }

    #[test]
    fn open_toast_lines_show_action_label() {
        let r = replay(
            r#"
{"type":"session","data":{"type":"StateChanged","data":{"is_screen_share_active":true,"is_local_screen_share":true}}}
{"type":"session","data":{"type":"ParticipantJoined","data":{"identity":"alice|1"}}}
"#,
        );
        assert_eq!(
            r.open_toast_lines(),
            vec![
                "toast#1\tsharing-screen\tYou are sharing your screen.\t[Stop Sharing]".to_string(),
                "toast#2\tparticipant-event\talice joined the space".to_string(),
            ]
        );
    }

    #[test]
    fn display_call_log_does_not_grow() {
        let mut source = String::new();
        for i in 0..50 {
            source.push_str(&format!(
                "{{\"type\":\"session\",\"data\":{{\"type\":\"ParticipantJoined\",\"data\":{{\"identity\":\"u{i}\"}}}}}}\n"
            ));
        }
        let r = replay(&source);
        assert!(r.bridge().display().calls().is_empty());
        assert_eq!(r.bridge().display().open_count(), PARTICIPANT_TOAST_CAPACITY);
    }

    #[test]
    fn expired_participant_toasts_free_queue_room() {
        let mut source = String::new();
        for i in 0..PARTICIPANT_TOAST_CAPACITY {
            source.push_str(&format!(
                "{{\"type\":\"session\",\"data\":{{\"type\":\"ParticipantJoined\",\"data\":{{\"identity\":\"u{i}\"}}}}}}\n"
            ));
        }
        source.push_str("{\"type\":\"expire\",\"data\":{\"toast\":1}}\n");
        source.push_str(
            "{\"type\":\"session\",\"data\":{\"type\":\"ParticipantLeft\",\"data\":{\"identity\":\"u0\"}}}\n",
        );

        let r = replay(&source);
        assert_eq!(r.bridge().participants().len(), PARTICIPANT_TOAST_CAPACITY);
        // Nothing had to be evicted.
        assert!(r.bridge().display().is_active(&ToastId(2)));
    }
}
