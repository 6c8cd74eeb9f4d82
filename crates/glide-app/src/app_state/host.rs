//! `HostWindow` over a winit window and its wry child webviews.
//!
//! The shell works in logical pixels; winit reports physical ones, so every
//! conversion goes through the window's scale factor.

use std::sync::Arc;

use glide_common::errors::ShellError;
use glide_common::types::{Rect, Size, SurfaceId, TabId};
use glide_shell::{ChromeMessage, HostWindow};
use glide_webview::{WebViewConfig, WebViewHandle, WebViewRegistry};
use winit::dpi::{LogicalPosition, LogicalSize, PhysicalPosition, PhysicalSize};
use winit::window::{Window, WindowLevel};

pub struct WinitHost {
    window: Arc<Window>,
    webviews: WebViewRegistry,
    alive: bool,
}

impl WinitHost {
    pub fn new(window: Arc<Window>, webviews: WebViewRegistry) -> Self {
        Self {
            window,
            webviews,
            alive: true,
        }
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn webviews(&self) -> &WebViewRegistry {
        &self.webviews
    }

    pub fn webviews_mut(&mut self) -> &mut WebViewRegistry {
        &mut self.webviews
    }

    /// Create the webview of a chrome surface, hidden until attached.
    pub fn create_chrome_surface(
        &mut self,
        surface: SurfaceId,
        url: &str,
    ) -> Result<(), wry::Error> {
        self.webviews.create(
            surface,
            self.window.as_ref(),
            Rect::default(),
            WebViewConfig::chrome(url).visible(false),
        )
    }

    /// Tear down every webview. The window is treated as gone afterwards.
    pub fn destroy_all(&mut self) {
        self.webviews.destroy_all();
        self.alive = false;
    }

    fn scale(&self) -> f64 {
        self.window.scale_factor()
    }

    /// Run `f` on the surface's webview. Failures are logged, never fatal.
    fn with_handle(
        &mut self,
        surface: SurfaceId,
        op: &str,
        f: impl FnOnce(&mut WebViewHandle) -> Result<(), wry::Error>,
    ) {
        let Some(handle) = self.webviews.get_mut(surface) else {
            tracing::debug!(%surface, op, "no webview for surface");
            return;
        };
        if let Err(e) = f(handle) {
            tracing::warn!(%surface, op, "webview operation failed: {e}");
        }
    }
}

fn logical_rect(position: PhysicalPosition<i32>, size: PhysicalSize<u32>, scale: f64) -> Rect {
    let position: LogicalPosition<i32> = position.to_logical(scale);
    let size: LogicalSize<u32> = size.to_logical(scale);
    Rect::new(position.x, position.y, size.width, size.height)
}

impl HostWindow for WinitHost {
    fn is_alive(&self) -> bool {
        self.alive
    }

    fn is_visible(&self) -> bool {
        // Platforms that cannot tell report `None`; a live window is shown.
        self.alive && self.window.is_visible().unwrap_or(true)
    }

    fn size(&self) -> Size {
        let size: LogicalSize<u32> = self.window.inner_size().to_logical(self.scale());
        Size::new(size.width, size.height)
    }

    fn bounds(&self) -> Rect {
        let position = self
            .window
            .outer_position()
            .unwrap_or(PhysicalPosition::new(0, 0));
        logical_rect(position, self.window.outer_size(), self.scale())
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.window
            .set_outer_position(LogicalPosition::new(bounds.x, bounds.y));
        let _ = self
            .window
            .request_inner_size(LogicalSize::new(bounds.width, bounds.height));
    }

    fn set_always_on_top(&mut self, on_top: bool) {
        let level = if on_top {
            WindowLevel::AlwaysOnTop
        } else {
            WindowLevel::Normal
        };
        self.window.set_window_level(level);
    }

    fn work_area(&self) -> Rect {
        // winit exposes no work-area query; the monitor rect stands in.
        match self.window.current_monitor() {
            Some(monitor) => {
                logical_rect(monitor.position(), monitor.size(), monitor.scale_factor())
            }
            None => self.bounds(),
        }
    }

    fn create_tab_surface(&mut self, id: TabId, url: &str) -> Result<(), ShellError> {
        self.webviews
            .create(
                SurfaceId::Tab(id),
                self.window.as_ref(),
                Rect::default(),
                WebViewConfig::tab(url).visible(false),
            )
            .map_err(|e| ShellError::Host(e.to_string()))
    }

    fn dispose_tab_surface(&mut self, id: TabId) {
        self.webviews.destroy(SurfaceId::Tab(id));
    }

    fn attach(&mut self, surface: SurfaceId) {
        self.with_handle(surface, "attach", |h| h.set_visible(true));
    }

    fn detach(&mut self, surface: SurfaceId) {
        self.with_handle(surface, "detach", |h| h.set_visible(false));
    }

    fn raise(&mut self, surface: SurfaceId) {
        self.with_handle(surface, "raise", |h| h.raise());
    }

    fn set_surface_bounds(&mut self, surface: SurfaceId, bounds: Rect) {
        self.with_handle(surface, "set_bounds", |h| h.set_bounds(bounds));
    }

    fn focus_surface(&mut self, surface: SurfaceId) {
        self.with_handle(surface, "focus", |h| h.focus());
    }

    fn send(&mut self, surface: SurfaceId, message: &ChromeMessage) {
        self.with_handle(surface, message.kind(), |h| h.send_message(message));
    }

    fn find_in_page(&mut self, tab: TabId, query: &str, fresh: bool) {
        self.with_handle(SurfaceId::Tab(tab), "find", |h| h.find(query, fresh));
    }

    fn stop_find_in_page(&mut self, tab: TabId) {
        self.with_handle(SurfaceId::Tab(tab), "stop_find", |h| h.stop_find());
    }

    fn navigate(&mut self, tab: TabId, url: &str) {
        self.with_handle(SurfaceId::Tab(tab), "navigate", |h| h.load_url(url));
    }

    fn go_back(&mut self, tab: TabId) {
        self.with_handle(SurfaceId::Tab(tab), "go_back", |h| h.go_back());
    }

    fn go_forward(&mut self, tab: TabId) {
        self.with_handle(SurfaceId::Tab(tab), "go_forward", |h| h.go_forward());
    }

    fn reload(&mut self, tab: TabId) {
        self.with_handle(SurfaceId::Tab(tab), "reload", |h| h.reload());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn physical_rect_scales_to_logical() {
        let rect = logical_rect(
            PhysicalPosition::new(200, 100),
            PhysicalSize::new(1600, 1200),
            2.0,
        );
        assert_eq!(rect, Rect::new(100, 50, 800, 600));
    }

    #[test]
    fn unit_scale_is_identity() {
        let rect = logical_rect(
            PhysicalPosition::new(-1920, 0),
            PhysicalSize::new(1920, 1080),
            1.0,
        );
        assert_eq!(rect, Rect::new(-1920, 0, 1920, 1080));
    }
}
