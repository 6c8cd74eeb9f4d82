//! Internal types and constants for the app state module.

use std::time::{Duration, Instant};

use glide_common::types::TabId;

/// How often to drain webview events (approx 120 Hz).
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(8);

/// A native window drag with no move events for this long is over.
pub(super) const DRAG_IDLE: Duration = Duration::from_millis(400);

/// Tracks the last sign of life from a native window drag.
///
/// The OS move loop often swallows the button release, so a drag that
/// stops producing `Moved` events is treated as released.
#[derive(Debug, Default)]
pub(super) struct DragWatch {
    last_activity: Option<Instant>,
}

impl DragWatch {
    pub(super) fn touch(&mut self, now: Instant) {
        self.last_activity = Some(now);
    }

    pub(super) fn clear(&mut self) {
        self.last_activity = None;
    }

    /// Whether a watched drag has gone quiet for [`DRAG_IDLE`].
    pub(super) fn is_idle(&self, now: Instant) -> bool {
        self.last_activity
            .is_some_and(|t| now.saturating_duration_since(t) >= DRAG_IDLE)
    }
}

/// Hands out ids for tabs opened by shortcuts.
///
/// The chrome assigns its own ids, so every id it uses is observed to keep
/// the two from colliding.
#[derive(Debug, Default)]
pub(super) struct TabIdAllocator {
    next: u32,
}

impl TabIdAllocator {
    pub(super) fn allocate(&mut self) -> TabId {
        let id = TabId(self.next);
        self.next = self.next.saturating_add(1);
        id
    }

    pub(super) fn observe(&mut self, id: TabId) {
        self.next = self.next.max(id.0.saturating_add(1));
    }
}
