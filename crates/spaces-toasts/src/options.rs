//! Display options handed to the display adapter with every toast.

use std::time::Duration;

use spaces_config::{ToastKindConfig, ToastPosition, ToastsConfig};

use crate::singleton::ToastCategory;

/// The kinds of toast the client shows, each with a stable id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToastKind {
    SharingScreen,
    ViewingSharedScreen,
    Broadcasting,
    ParticipantEvent,
}

impl ToastKind {
    pub fn id(self) -> &'static str {
        match self {
            Self::SharingScreen => "sharing-screen",
            Self::ViewingSharedScreen => "viewing-shared-screen",
            Self::Broadcasting => "broadcasting",
            Self::ParticipantEvent => "participant-event",
        }
    }
}

impl From<ToastCategory> for ToastKind {
    fn from(category: ToastCategory) -> Self {
        match category {
            ToastCategory::LocalScreenShare => Self::SharingScreen,
            ToastCategory::RemoteScreenShare => Self::ViewingSharedScreen,
            ToastCategory::Broadcasting => Self::Broadcasting,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastOptions {
    pub kind: ToastKind,
    /// `None` keeps the toast on screen until it is closed.
    pub duration: Option<Duration>,
    pub position: ToastPosition,
}

impl ToastOptions {
    pub fn from_config(kind: ToastKind, config: &ToastKindConfig) -> Self {
        let duration = (!config.is_persistent())
            .then(|| Duration::from_millis(u64::from(config.duration_ms)));
        Self {
            kind,
            duration,
            position: config.position,
        }
    }
}

/// Options for every toast kind, resolved once from configuration.
#[derive(Debug, Clone)]
pub struct ToastOptionsTable {
    sharing_screen: ToastOptions,
    viewing_shared_screen: ToastOptions,
    broadcasting: ToastOptions,
    participant_event: ToastOptions,
}

impl ToastOptionsTable {
    pub fn from_config(config: &ToastsConfig) -> Self {
        Self {
            sharing_screen: ToastOptions::from_config(
                ToastKind::SharingScreen,
                &config.sharing_screen,
            ),
            viewing_shared_screen: ToastOptions::from_config(
                ToastKind::ViewingSharedScreen,
                &config.viewing_shared_screen,
            ),
            broadcasting: ToastOptions::from_config(ToastKind::Broadcasting, &config.broadcasting),
            participant_event: ToastOptions::from_config(
                ToastKind::ParticipantEvent,
                &config.participant_event,
            ),
        }
    }

    pub fn for_category(&self, category: ToastCategory) -> &ToastOptions {
        match category {
            ToastCategory::LocalScreenShare => &self.sharing_screen,
            ToastCategory::RemoteScreenShare => &self.viewing_shared_screen,
            ToastCategory::Broadcasting => &self.broadcasting,
        }
    }

    pub fn participant_event(&self) -> &ToastOptions {
        &self.participant_event
    }
}

impl Default for ToastOptionsTable {
    fn default() -> Self {
        Self::from_config(&ToastsConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persistent_config_has_no_duration() {
        let opts = ToastOptions::from_config(
            ToastKind::Broadcasting,
            &ToastKindConfig::persistent(ToastPosition::Top),
        );
        assert!(opts.duration.is_none());
    }

    #[test]
    fn timed_config_converts_to_duration() {
        let opts = ToastOptions::from_config(
            ToastKind::ParticipantEvent,
            &ToastKindConfig::timed(2500, ToastPosition::Bottom),
        );
        assert_eq!(opts.duration, Some(Duration::from_millis(2500)));
        assert_eq!(opts.position, ToastPosition::Bottom);
    }

    #[test]
    fn table_maps_categories_to_kinds() {
        let table = ToastOptionsTable::default();
        for category in ToastCategory::ALL {
            assert_eq!(
                table.for_category(category).kind,
                ToastKind::from(category)
            );
        }
        assert_eq!(
            table.participant_event().kind.id(),
            "participant-event"
        );
        assert_eq!(
            table.participant_event().duration,
            Some(Duration::from_secs(5))
        );
    }
}
