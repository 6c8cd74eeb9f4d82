use glide_common::types::{Rect, SurfaceId};
use glide_shell::{ChromeMessage, NavigationState};
use wry::WebView;

use crate::bounds::rect_to_wry;
use crate::history::HistoryTracker;
use crate::ipc;

/// Handle to a managed WebView instance.
pub struct WebViewHandle {
    pub(super) webview: WebView,
    pub(super) surface: SurfaceId,
    /// Last committed URL (best-effort tracking).
    pub(super) current_url: String,
    /// Attached surfaces are visible; detached ones are hidden.
    pub(super) visible: bool,
    pub(super) history: HistoryTracker,
}

impl WebViewHandle {
    pub fn surface(&self) -> SurfaceId {
        self.surface
    }

    pub fn current_url(&self) -> &str {
        &self.current_url
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn load_url(&mut self, url: &str) -> Result<(), wry::Error> {
        self.history.cancel_pending();
        self.webview.load_url(url)
    }

    pub fn evaluate_script(&self, js: &str) -> Result<(), wry::Error> {
        self.webview.evaluate_script(js)
    }

    /// Deliver a chrome message to the page's `window.glide.ipc` handlers.
    pub fn send_message(&self, message: &ChromeMessage) -> Result<(), wry::Error> {
        let script = ipc::js_dispatch_message(message.kind(), &message.payload());
        self.webview.evaluate_script(&script)
    }

    pub fn set_bounds(&self, bounds: Rect) -> Result<(), wry::Error> {
        self.webview.set_bounds(rect_to_wry(&bounds))
    }

    pub fn set_visible(&mut self, visible: bool) -> Result<(), wry::Error> {
        self.visible = visible;
        self.webview.set_visible(visible)
    }

    /// Bring the surface above its siblings.
    ///
    /// wry has no z-order API for child webviews; re-showing the view moves
    /// it to the front on the native backends.
    pub fn raise(&self) -> Result<(), wry::Error> {
        if !self.visible {
            return Ok(());
        }
        self.webview.set_visible(false)?;
        self.webview.set_visible(true)
    }

    pub fn focus(&self) -> Result<(), wry::Error> {
        self.webview.focus()
    }

    pub fn find(&self, query: &str, fresh: bool) -> Result<(), wry::Error> {
        self.webview
            .evaluate_script(&ipc::js_find_in_page(query, fresh))
    }

    pub fn stop_find(&self) -> Result<(), wry::Error> {
        self.webview.evaluate_script(ipc::JS_STOP_FIND)
    }

    /// Go back if the tracked history allows it.
    pub fn go_back(&mut self) -> Result<(), wry::Error> {
        if self.history.go_back() {
            self.webview.evaluate_script(ipc::JS_GO_BACK)?;
        }
        Ok(())
    }

    pub fn go_forward(&mut self) -> Result<(), wry::Error> {
        if self.history.go_forward() {
            self.webview.evaluate_script(ipc::JS_GO_FORWARD)?;
        }
        Ok(())
    }

    pub fn reload(&mut self) -> Result<(), wry::Error> {
        self.history.reload();
        self.webview.evaluate_script(ipc::JS_RELOAD)
    }

    /// Record a committed navigation and return the tab's new state.
    pub fn commit_navigation(&mut self, url: &str) -> NavigationState {
        self.current_url = url.to_string();
        self.history.commit(url)
    }
}
