use std::collections::HashMap;

use glide_common::actions::Action;
use glide_config::schema::KeybindConfig;

use crate::keymap::{keybind_to_display, parse_keybind};

use super::key_combo::KeyCombo;

/// Maps key combinations to [`Action`]s.
///
/// Built from [`KeybindConfig`] at startup.
pub struct KeybindRegistry {
    bindings: HashMap<KeyCombo, Action>,
}

impl KeybindRegistry {
    /// Build the registry from the config keybind section.
    ///
    /// Invalid keybind strings are logged as warnings and skipped.
    pub fn from_config(config: &KeybindConfig) -> Self {
        let mappings: [(&str, Action); 7] = [
            (&config.find_open, Action::FindOpen),
            (&config.find_close, Action::FindClose),
            (&config.toggle_float, Action::ToggleFloat),
            (&config.new_tab, Action::NewTab),
            (&config.close_tab, Action::CloseTab),
            (&config.reload, Action::Reload),
            (&config.quit, Action::Quit),
        ];

        let mut bindings = HashMap::new();
        for (binding_str, action) in mappings {
            match parse_keybind(binding_str) {
                Ok(kb) => {
                    bindings.insert(KeyCombo::from_keybind(&kb), action);
                }
                Err(e) => {
                    tracing::warn!(action = action.label(), "invalid keybind '{binding_str}': {e}");
                }
            }
        }

        Self { bindings }
    }

    pub fn lookup(&self, combo: &KeyCombo) -> Option<Action> {
        self.bindings.get(combo).copied()
    }

    /// Display string for an action's keybind, if one is bound.
    pub fn keybind_for_action(&self, action: Action) -> Option<String> {
        self.bindings
            .iter()
            .find(|(_, a)| **a == action)
            .map(|(combo, _)| keybind_to_display(&combo.to_keybind()))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
