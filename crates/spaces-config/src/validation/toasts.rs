//! Toast option validation.

use super::helpers::validate_range;
use crate::schema::{SpacesConfig, ToastKindConfig};

const MIN_DURATION_MS: u32 = 500;
const MAX_DURATION_MS: u32 = 60_000;

pub(crate) fn validate_toasts(errors: &mut Vec<String>, config: &SpacesConfig) {
    let toasts = &config.toasts;
    validate_kind(errors, "toasts.sharing_screen", &toasts.sharing_screen);
    validate_kind(
        errors,
        "toasts.viewing_shared_screen",
        &toasts.viewing_shared_screen,
    );
    validate_kind(errors, "toasts.broadcasting", &toasts.broadcasting);
    validate_kind(errors, "toasts.participant_event", &toasts.participant_event);
}

fn validate_kind(errors: &mut Vec<String>, section: &str, kind: &ToastKindConfig) {
    // 0 means persistent
    if kind.is_persistent() {
        return;
    }
    validate_range(
        errors,
        &format!("{section}.duration_ms"),
        kind.duration_ms,
        MIN_DURATION_MS,
        MAX_DURATION_MS,
    );
}
