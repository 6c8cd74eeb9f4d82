//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Main window appearance and startup size.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Static window title.
    pub title: String,
    /// Initial logical width, used until the window is docked to the work area.
    pub width: u32,
    /// Initial logical height.
    pub height: u32,
    /// Hide the OS title bar; the title-bar surface draws the chrome.
    pub frameless: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Glide".into(),
            width: 1280,
            height: 800,
            frameless: true,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
