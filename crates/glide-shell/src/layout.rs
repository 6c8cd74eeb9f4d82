//! Surface bounds as pure functions of the window size and layout metrics.

use glide_common::types::{Rect, Size};
use serde::{Deserialize, Serialize};

/// Sizes the layout controller needs, resolved once at window creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutMetrics {
    /// Height of the title bar / tab strip while docked.
    pub header_height: u32,
    /// Inset from the work area edges, derived from the primary display
    /// height.
    pub padding: u32,
    pub find_bar: Size,
    pub peek: Size,
    /// Window size while floating.
    pub floating: Size,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            header_height: 76,
            padding: 22,
            find_bar: Size::new(360, 52),
            peek: Size::new(480, 26),
            floating: Size::new(480, 300),
        }
    }
}

impl LayoutMetrics {
    /// Header height in effect; collapses to 0 while floating.
    pub fn header(&self, floating: bool) -> u32 {
        if floating {
            0
        } else {
            self.header_height
        }
    }

    /// Padding in effect; collapses to 0 while floating.
    pub fn padding(&self, floating: bool) -> u32 {
        if floating {
            0
        } else {
            self.padding
        }
    }
}

pub fn tab_bounds(window: Size, metrics: &LayoutMetrics, floating: bool) -> Rect {
    let header = metrics.header(floating);
    Rect::new(
        0,
        header as i32,
        window.width,
        window.height.saturating_sub(header),
    )
}

pub fn title_bar_bounds(window: Size, metrics: &LayoutMetrics) -> Rect {
    Rect::new(0, 0, window.width, metrics.header_height)
}

/// Find bar, pinned under the header at the right edge.
pub fn find_bar_bounds(window: Size, metrics: &LayoutMetrics, floating: bool) -> Rect {
    let width = metrics.find_bar.width.min(window.width);
    Rect::new(
        window.width.saturating_sub(metrics.find_bar.width) as i32,
        metrics.header(floating) as i32,
        width,
        metrics.find_bar.height,
    )
}

/// URL peek tooltip, pinned to the bottom-left corner.
pub fn peek_bounds(window: Size, metrics: &LayoutMetrics) -> Rect {
    Rect::new(
        0,
        window.height.saturating_sub(metrics.peek.height) as i32,
        metrics.peek.width.min(window.width),
        metrics.peek.height,
    )
}

pub fn overlay_bounds(window: Size) -> Rect {
    Rect::new(0, 0, window.width, window.height)
}

/// Window frame on entering floating mode: the floating size at the
/// top-left of the work area, inset by the padding.
pub fn floating_window_bounds(work: Rect, metrics: &LayoutMetrics) -> Rect {
    let padding = metrics.padding as i32;
    Rect::new(
        work.x + padding,
        work.y + padding,
        metrics.floating.width,
        metrics.floating.height,
    )
}
