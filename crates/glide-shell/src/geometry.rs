//! Pure helpers for window motion and view membership.

use glide_common::types::{Rect, SurfaceId};

use crate::stack::ViewStack;

/// Exponential approach of `current` toward `target` after `dt` seconds.
///
/// The remaining distance decays by `exp(-speed * dt)` and is then truncated
/// toward the target, so the result never overshoots and always makes at
/// least one pixel of progress once the decay drops the remainder below the
/// previous whole-pixel distance. Within one pixel the value snaps to
/// `target`.
pub fn approach(current: i32, target: i32, speed: f64, dt: f64) -> i32 {
    let decay = (-speed * dt.max(0.0)).exp();
    let remaining = f64::from(current) - f64::from(target);
    let next = remaining * decay;
    if next.abs() < 1.0 {
        return target;
    }
    target.saturating_add(next.trunc() as i32)
}

/// Corner of `work` nearest to `window`, inset by `padding`.
///
/// Returned as the top-left position the window should move to.
pub fn corner_target(window: Rect, work: Rect, padding: i32) -> (i32, i32) {
    let width = window.width as i32;
    let height = window.height as i32;

    let dist_left = window.x - work.x;
    let dist_right = work.right() - window.right();
    let x = if dist_left < dist_right {
        work.x + padding
    } else {
        work.right() - width - padding
    };

    let dist_top = window.y - work.y;
    let dist_bottom = work.bottom() - window.bottom();
    let y = if dist_top < dist_bottom {
        work.y + padding
    } else {
        work.bottom() - height - padding
    };

    (x, y)
}

/// One motion step of `window` toward its nearest corner. Size is kept.
pub fn step_toward_corner(window: Rect, work: Rect, padding: i32, speed: f64, dt: f64) -> Rect {
    let (tx, ty) = corner_target(window, work, padding);
    Rect {
        x: approach(window.x, tx, speed, dt),
        y: approach(window.y, ty, speed, dt),
        ..window
    }
}

/// Whether `id` is attached in `stack`.
pub fn contains_view(stack: &ViewStack, id: SurfaceId) -> bool {
    stack.contains(id)
}
