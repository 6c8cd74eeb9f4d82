//! Surface layout and floating-mode configuration types.

use serde::{Deserialize, Serialize};

/// Docked-mode surface geometry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Height of the title bar / tab strip in pixels (valid range: 0-200).
    pub header_height: u32,
    /// Screen-edge padding as a fraction of the primary display height
    /// (valid range: 0.0-0.2). Computed once when the window is created.
    pub padding_ratio: f64,
    /// Find bar width in pixels (valid range: 100-1000).
    pub find_bar_width: u32,
    /// Find bar height in pixels (valid range: 20-200).
    pub find_bar_height: u32,
    /// Maximum URL-peek tooltip width in pixels (valid range: 100-2000).
    pub peek_width: u32,
    /// URL-peek tooltip height in pixels (valid range: 12-100).
    pub peek_height: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            header_height: 76,
            padding_ratio: 0.02,
            find_bar_width: 360,
            find_bar_height: 52,
            peek_width: 480,
            peek_height: 26,
        }
    }
}

impl LayoutConfig {
    /// Screen-edge padding for a display of the given height.
    pub fn padding_for_display(&self, display_height: u32) -> u32 {
        (f64::from(display_height) * self.padding_ratio).round() as u32
    }
}

/// Floating ("picture in picture") window mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FloatingConfig {
    /// Floating window width in pixels (valid range: 160-1920).
    pub width: u32,
    /// Floating window height in pixels (valid range: 90-1080).
    pub height: u32,
    /// Exponential approach rate toward the nearest corner, per second
    /// (valid range: 0.5-60.0).
    pub speed: f64,
    /// Motion loop tick interval in milliseconds (valid range: 4-100).
    pub tick_ms: u32,
}

impl Default for FloatingConfig {
    fn default() -> Self {
        Self {
            width: 480,
            height: 300,
            speed: 10.0,
            tick_ms: 16,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
