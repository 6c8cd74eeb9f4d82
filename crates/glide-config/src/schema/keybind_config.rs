//! Keyboard shortcuts configuration types.
//!
//! Named `keybind_config` to avoid clash with the crate-level `keybinds` module.

use serde::{Deserialize, Serialize};

/// Keyboard shortcuts configuration.
///
/// Format: "Modifier+Key" where Modifier is one of: Cmd, Option, Control, Shift.
/// Multiple modifiers: "Cmd+Shift+F". `Cmd` maps to Ctrl off macOS.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeybindConfig {
    pub find_open: String,
    pub find_close: String,
    pub toggle_float: String,
    pub new_tab: String,
    pub close_tab: String,
    pub reload: String,
    pub quit: String,
}

impl Default for KeybindConfig {
    fn default() -> Self {
        Self {
            find_open: "Cmd+F".into(),
            find_close: "Escape".into(),
            toggle_float: "Cmd+Shift+F".into(),
            new_tab: "Cmd+T".into(),
            close_tab: "Cmd+W".into(),
            reload: "Cmd+R".into(),
            quit: "Cmd+Q".into(),
        }
    }
}
