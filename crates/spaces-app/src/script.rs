//! Replay script format: one JSON step per line.

use serde::{Deserialize, Serialize};
use spaces_common::{SessionEvent, SpacesError};
use spaces_toasts::ToastId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum ScriptStep {
    /// The hosting view finished loading.
    Ready,
    Session(SessionEvent),
    Navigate { url: String },
    /// Advance the display clock.
    Tick { ms: u64 },
    /// A toast closes on its own.
    Expire { toast: ToastId },
    /// The user presses the action button of a toast.
    Action { toast: ToastId },
    /// The hosting view is torn down.
    Teardown,
}

/// Parses a script, skipping blank lines and `#` comments.
pub fn parse(source: &str) -> Result<Vec<ScriptStep>, SpacesError> {
    source
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        })
        .map(|(idx, line)| {
            serde_json::from_str(line).map_err(|e| SpacesError::Script {
                line: idx + 1,
                message: e.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use spaces_common::SessionState;

    #[test]
    fn parses_every_step_kind() {
        let source = r#"
# view boots
{"type":"ready"}
{"type":"session","data":{"type":"ParticipantJoined","data":{"identity":"alice|1"}}}
{"type":"session","data":{"type":"StateChanged","data":{"is_broadcasting":true}}}
{"type":"tick","data":{"ms":1500}}
{"type":"expire","data":{"toast":2}}
{"type":"action","data":{"toast":3}}
{"type":"navigate","data":{"url":"/home"}}
{"type":"teardown"}
"#;
        let steps = parse(source).unwrap();
        assert_eq!(steps.len(), 8);
        assert_eq!(steps[0], ScriptStep::Ready);
        assert_eq!(
            steps[1],
            ScriptStep::Session(SessionEvent::ParticipantJoined {
                identity: "alice|1".into()
            })
        );
        assert_eq!(
            steps[2],
            ScriptStep::Session(SessionEvent::StateChanged(
                SessionState::idle().broadcasting(true)
            ))
        );
        assert_eq!(steps[3], ScriptStep::Tick { ms: 1500 });
        assert_eq!(steps[4], ScriptStep::Expire { toast: ToastId(2) });
        assert_eq!(steps[7], ScriptStep::Teardown);
    }

    #[test]
    fn reports_line_of_bad_step() {
        let source = "{\"type\":\"ready\"}\n\n{\"type\":\"explode\"}\n";
        let err = parse(source).unwrap_err();
        assert!(matches!(err, SpacesError::Script { line: 3, .. }));
    }
}
