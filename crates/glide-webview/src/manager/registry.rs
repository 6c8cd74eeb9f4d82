use std::collections::HashMap;

use glide_common::types::{Rect, SurfaceId};
use tracing::debug;
use wry::raw_window_handle;

use crate::events::WebViewEvent;

use super::handle::WebViewHandle;
use super::types::WebViewConfig;
use super::WebViewManager;

/// Maps surfaces to their WebView handles and owns the manager that
/// creates them.
pub struct WebViewRegistry {
    manager: WebViewManager,
    handles: HashMap<SurfaceId, WebViewHandle>,
}

impl WebViewRegistry {
    pub fn new(manager: WebViewManager) -> Self {
        Self {
            manager,
            handles: HashMap::new(),
        }
    }

    /// Create a WebView for `surface` and register it, replacing any
    /// previous one.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &mut self,
        surface: SurfaceId,
        window: &W,
        bounds: Rect,
        config: WebViewConfig,
    ) -> Result<(), wry::Error> {
        let handle = self.manager.create(surface, window, bounds, config)?;
        self.handles.insert(surface, handle);
        Ok(())
    }

    pub fn get(&self, surface: SurfaceId) -> Option<&WebViewHandle> {
        self.handles.get(&surface)
    }

    pub fn get_mut(&mut self, surface: SurfaceId) -> Option<&mut WebViewHandle> {
        self.handles.get_mut(&surface)
    }

    /// Destroy a WebView. Dropping the handle tears down the native view.
    pub fn destroy(&mut self, surface: SurfaceId) -> bool {
        if self.handles.remove(&surface).is_some() {
            debug!(%surface, "WebView destroyed");
            self.manager.push_event(WebViewEvent::Closed { surface });
            true
        } else {
            false
        }
    }

    pub fn surfaces(&self) -> Vec<SurfaceId> {
        self.handles.keys().copied().collect()
    }

    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        self.manager.drain_events()
    }

    /// Destroy all WebViews. Used during shutdown.
    pub fn destroy_all(&mut self) {
        for surface in self.surfaces() {
            self.destroy(surface);
        }
    }
}
