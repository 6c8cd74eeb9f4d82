//! Full configuration validation.
//!
//! Validates numeric ranges and keybind uniqueness. Each domain has its own
//! submodule; this orchestrator calls them all and collects errors into a
//! single `ConfigError`.

mod helpers;
mod layout;
mod misc;

#[cfg(test)]
mod tests;

use crate::keybinds;
use crate::schema::GlideConfig;
use glide_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &GlideConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    if let Err(e) = keybinds::validate_no_duplicates(&config.keybinds) {
        errors.push(e.to_string());
    }

    layout::validate_layout(&mut errors, config);
    layout::validate_floating(&mut errors, config);
    misc::validate_window(&mut errors, config);
    misc::validate_startup(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
