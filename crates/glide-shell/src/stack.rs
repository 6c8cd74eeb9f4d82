//! Bottom-to-top ordering of the surfaces attached to a window.

use glide_common::types::SurfaceId;

/// The surfaces currently attached to a window, ordered bottom to top.
/// The last entry is drawn above everything else.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewStack {
    views: Vec<SurfaceId>,
}

impl ViewStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    pub fn contains(&self, id: SurfaceId) -> bool {
        self.views.contains(&id)
    }

    /// Topmost attached surface.
    pub fn top(&self) -> Option<SurfaceId> {
        self.views.last().copied()
    }

    /// Attached surfaces, bottom first.
    pub fn views(&self) -> &[SurfaceId] {
        &self.views
    }

    /// Position from the bottom, if attached.
    pub fn position(&self, id: SurfaceId) -> Option<usize> {
        self.views.iter().position(|&v| v == id)
    }

    /// Attached tab surfaces, bottom first.
    pub fn tabs(&self) -> impl Iterator<Item = SurfaceId> + '_ {
        self.views.iter().copied().filter(SurfaceId::is_tab)
    }

    /// Push `id` on top. Returns `false` if it was already attached, in
    /// which case the order is left alone.
    pub fn attach(&mut self, id: SurfaceId) -> bool {
        if self.contains(id) {
            return false;
        }
        self.views.push(id);
        true
    }

    /// Remove `id`. Returns `true` if it was attached.
    pub fn detach(&mut self, id: SurfaceId) -> bool {
        match self.position(id) {
            Some(idx) => {
                self.views.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Move an attached surface to the top. Returns `false` if not attached.
    pub fn raise(&mut self, id: SurfaceId) -> bool {
        match self.position(id) {
            Some(idx) => {
                let view = self.views.remove(idx);
                self.views.push(view);
                true
            }
            None => false,
        }
    }
}
