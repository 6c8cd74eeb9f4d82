//! Keybind validation utilities.

use crate::schema::KeybindConfig;
use glide_common::ConfigError;
use std::collections::HashMap;

/// Returns all keybinds as `(name, binding)` pairs.
pub fn all_keybinds(config: &KeybindConfig) -> Vec<(&str, &str)> {
    vec![
        ("find_open", &config.find_open),
        ("find_close", &config.find_close),
        ("toggle_float", &config.toggle_float),
        ("new_tab", &config.new_tab),
        ("close_tab", &config.close_tab),
        ("reload", &config.reload),
        ("quit", &config.quit),
    ]
}

/// Validate that no two keybinds are mapped to the same key combination.
pub fn validate_no_duplicates(config: &KeybindConfig) -> Result<(), ConfigError> {
    let binds = all_keybinds(config);
    let mut seen: HashMap<&str, &str> = HashMap::new();

    for (name, binding) in &binds {
        if let Some(existing_name) = seen.get(binding) {
            return Err(ConfigError::ValidationError(format!(
                "duplicate keybind '{binding}': assigned to both '{existing_name}' and '{name}'"
            )));
        }
        seen.insert(binding, name);
    }

    Ok(())
}
