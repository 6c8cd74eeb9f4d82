//! WebView lifecycle management.
//!
//! `WebViewManager` creates `wry::WebView` children of the main window, one
//! per surface: the four chrome pages plus one per tab.

use std::sync::{Arc, Mutex};

use crate::content::ContentProvider;
use crate::events::WebViewEvent;

mod handle;
pub mod handlers;
mod lifecycle;
mod registry;
mod types;

pub use handle::WebViewHandle;
pub use registry::WebViewRegistry;
pub use types::WebViewConfig;

/// Creates WebViews and collects their events.
pub struct WebViewManager {
    /// Event sink. wry callbacks push here; the event loop drains it.
    pub(crate) events: Arc<Mutex<Vec<WebViewEvent>>>,
    /// Content provider for the `glide://` custom protocol.
    content_provider: Option<Arc<ContentProvider>>,
}

impl WebViewManager {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            content_provider: None,
        }
    }

    /// Drain all pending events.
    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }

    pub(crate) fn push_event(&self, event: WebViewEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

impl Default for WebViewManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glide_common::types::SurfaceId;

    #[test]
    fn drain_empties_the_sink() {
        let mgr = WebViewManager::new();
        mgr.push_event(WebViewEvent::Closed {
            surface: SurfaceId::FindBar,
        });
        let drained = mgr.drain_events();
        assert_eq!(drained.len(), 1);
        assert_eq!(drained[0].surface(), SurfaceId::FindBar);
        assert!(mgr.drain_events().is_empty());
    }
}
