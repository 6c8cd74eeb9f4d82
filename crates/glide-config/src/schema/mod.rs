//! Configuration schema types for Glide.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod keybind_config;
mod layout;
mod startup;
mod system;
mod window;

pub use keybind_config::*;
pub use layout::*;
pub use startup::*;
pub use system::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Glide.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct GlideConfig {
    pub window: WindowConfig,
    pub layout: LayoutConfig,
    pub floating: FloatingConfig,
    pub startup: StartupConfig,
    pub keybinds: KeybindConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_correct_layout() {
        let config = GlideConfig::default();
        assert_eq!(config.layout.header_height, 76);
        assert!((config.layout.padding_ratio - 0.02).abs() < f64::EPSILON);
        assert_eq!(config.layout.find_bar_width, 360);
    }

    #[test]
    fn default_config_has_correct_floating() {
        let config = GlideConfig::default();
        assert_eq!(config.floating.width, 480);
        assert_eq!(config.floating.height, 300);
        assert_eq!(config.floating.tick_ms, 16);
    }

    #[test]
    fn empty_toml_yields_defaults() {
        let config: GlideConfig = toml::from_str("").unwrap();
        assert_eq!(config.window.title, "Glide");
        assert_eq!(config.keybinds.find_open, "Cmd+F");
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn partial_toml_keeps_other_sections() {
        let config: GlideConfig = toml::from_str(
            r#"
[floating]
speed = 4.0

[startup]
home_url = "https://example.org"
"#,
        )
        .unwrap();
        assert!((config.floating.speed - 4.0).abs() < f64::EPSILON);
        assert_eq!(config.floating.width, 480);
        assert_eq!(config.startup.home_url, "https://example.org");
        assert_eq!(config.layout.header_height, 76);
    }
}
