use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator between the human-readable name and the opaque suffix of a
/// participant identity (`"alice|abc123"`).
pub const IDENTITY_DELIMITER: char = '|';

/// Returns the display name embedded in a participant identity.
///
/// Everything before the first `|` is the name. Identities without the
/// delimiter are used as-is.
pub fn display_name(identity: &str) -> &str {
    match identity.split_once(IDENTITY_DELIMITER) {
        Some((name, _)) => name,
        None => identity,
    }
}

/// Identity string of a session participant, as delivered by the session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(String);

impl ParticipantId {
    pub fn new(identity: impl Into<String>) -> Self {
        Self(identity.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn display_name(&self) -> &str {
        display_name(&self.0)
    }
}

impl From<&str> for ParticipantId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ParticipantId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
