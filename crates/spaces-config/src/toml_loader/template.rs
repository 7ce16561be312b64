//! Default TOML config template.

pub(crate) fn default_config_toml() -> &'static str {
    r#"# Spaces toast configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.
#
# duration_ms: 0 keeps the toast until it is closed, otherwise 500-60000.
# position: top, top-left, top-right, bottom, bottom-left, bottom-right

[toasts.sharing_screen]
# duration_ms = 0
# position = "top"

[toasts.viewing_shared_screen]
# duration_ms = 0
# position = "top"

[toasts.broadcasting]
# duration_ms = 0
# position = "top-right"

[toasts.participant_event]
# duration_ms = 5000
# position = "bottom-left"

[logging]
# level = "info"         # trace, debug, info, warn, error
"#
}
