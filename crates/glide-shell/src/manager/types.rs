//! Core types and constructors for WindowManager.

use std::collections::HashMap;

use glide_common::types::{SurfaceId, TabId};

use crate::compositor::Compositor;
use crate::find::FindSession;
use crate::host::HostWindow;
use crate::layout::LayoutMetrics;
use crate::stack::ViewStack;
use crate::tab::TabView;

/// Owns one window's tabs, chrome surfaces, find session, and mode flags.
pub struct WindowManager<H: HostWindow> {
    /// Host window plus the mirrored attach order.
    pub(super) surfaces: Compositor<H>,
    pub(super) tabs: HashMap<TabId, TabView>,
    /// The tab whose surface is attached, if any.
    pub(super) active: Option<TabId>,
    pub(super) find: FindSession,
    /// Set while the user drags the window; gates the motion loop.
    pub(super) dragging: bool,
    pub(super) floating: bool,
    pub(super) metrics: LayoutMetrics,
}

impl<H: HostWindow> WindowManager<H> {
    /// Start docked with the title bar attached and every surface laid out.
    ///
    /// Docked means filling the work area, so the window is moved there
    /// first. Leaving docked mode later restores exactly these bounds.
    pub fn new(mut host: H, metrics: LayoutMetrics) -> Self {
        if host.is_alive() {
            let work = host.work_area();
            host.set_bounds(work);
        }
        let mut mgr = Self {
            surfaces: Compositor::new(host),
            tabs: HashMap::new(),
            active: None,
            find: FindSession::default(),
            dragging: false,
            floating: false,
            metrics,
        };
        mgr.surfaces.attach(SurfaceId::TitleBar);
        mgr.relayout();
        mgr
    }

    // -- Accessors --

    pub fn host(&self) -> &H {
        self.surfaces.host()
    }

    pub fn host_mut(&mut self) -> &mut H {
        self.surfaces.host_mut()
    }

    pub fn views(&self) -> &ViewStack {
        self.surfaces.stack()
    }

    pub fn active(&self) -> Option<TabId> {
        self.active
    }

    pub fn tab(&self, id: TabId) -> Option<&TabView> {
        self.tabs.get(&id)
    }

    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    /// Live tab ids in ascending order.
    pub fn tab_ids(&self) -> Vec<TabId> {
        let mut ids: Vec<TabId> = self.tabs.keys().copied().collect();
        ids.sort();
        ids
    }

    pub fn find(&self) -> &FindSession {
        &self.find
    }

    pub fn metrics(&self) -> &LayoutMetrics {
        &self.metrics
    }

    pub fn is_floating(&self) -> bool {
        self.floating
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn set_dragging(&mut self, dragging: bool) {
        self.dragging = dragging;
    }

    /// The chrome surface kept above the active tab: the title bar while
    /// docked, the drag overlay while floating.
    pub(super) fn chrome_surface(&self) -> SurfaceId {
        if self.floating {
            SurfaceId::Overlay
        } else {
            SurfaceId::TitleBar
        }
    }
}
