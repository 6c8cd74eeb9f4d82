//! Coordinate conversion between shell rects and wry rects.

use glide_common::types::Rect;

/// Convert a shell `Rect` (integer logical coords) to a wry `Rect`.
pub fn rect_to_wry(rect: &Rect) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Logical(wry::dpi::LogicalPosition::new(
            f64::from(rect.x),
            f64::from(rect.y),
        )),
        size: wry::dpi::Size::Logical(wry::dpi::LogicalSize::new(
            f64::from(rect.width),
            f64::from(rect.height),
        )),
    }
}
