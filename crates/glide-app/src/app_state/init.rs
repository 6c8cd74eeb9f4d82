//! Window creation, chrome webview setup, and the first tab.

use std::sync::Arc;

use glide_common::errors::PlatformError;
use glide_common::types::{Size, SurfaceId};
use glide_config::schema::GlideConfig;
use glide_shell::{ChromeMessage, HostWindow, LayoutMetrics, WindowManager};
use glide_webview::content::chrome_url;
use glide_webview::{ContentProvider, WebViewManager, WebViewRegistry};
use winit::dpi::LogicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use super::core::GlideApp;
use super::host::WinitHost;

// =============================================================================
// INITIALIZATION
// =============================================================================

impl GlideApp {
    /// Create the window, the chrome surfaces, and the first tab.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let display_height = match primary_display_height(event_loop) {
            Ok(h) => h,
            Err(e) => {
                tracing::error!("Cannot start: {e}");
                return false;
            }
        };

        let attrs = WindowAttributes::default()
            .with_title(self.config.window.title.clone())
            .with_decorations(!self.config.window.frameless)
            .with_inner_size(LogicalSize::new(
                self.config.window.width,
                self.config.window.height,
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        let mut host = WinitHost::new(window, self.initialize_webviews());
        for surface in SurfaceId::CHROME {
            let Some(url) = chrome_url(surface) else {
                continue;
            };
            if let Err(e) = host.create_chrome_surface(surface, &url) {
                tracing::error!(%surface, "Failed to create chrome webview: {e}");
                return false;
            }
        }

        let metrics = layout_metrics(&self.config, display_height);
        tracing::info!(
            padding = metrics.padding,
            header = metrics.header_height,
            "Window created"
        );
        self.manager = Some(WindowManager::new(host, metrics));

        let url = self
            .initial_url
            .take()
            .unwrap_or_else(|| self.home_url().to_string());
        self.open_tab(&url);
        true
    }

    /// Set up the WebView registry with the content provider for `glide://`.
    fn initialize_webviews(&self) -> WebViewRegistry {
        let assets_path = std::env::current_dir()
            .unwrap_or_default()
            .join(&self.config.startup.assets_dir);

        if !assets_path.is_dir() {
            tracing::warn!(
                path = %assets_path.display(),
                "Chrome assets directory not found; chrome surfaces will be blank"
            );
        }

        let mut manager = WebViewManager::new();
        manager.set_content_provider(ContentProvider::new(&assets_path));
        tracing::info!(assets_dir = %assets_path.display(), "WebView registry initialized");
        WebViewRegistry::new(manager)
    }

    /// Create and activate a tab with a fresh id, telling the title bar
    /// about it. Used for the first tab and the new-tab shortcut.
    pub(super) fn open_tab(&mut self, url: &str) {
        let Some(manager) = self.manager.as_mut() else {
            return;
        };
        let id = self.tab_ids.allocate();
        if let Err(e) = manager.create_tab(id, url) {
            tracing::error!(tab_id = %id, "Failed to open tab: {e}");
            return;
        }
        manager.host_mut().send(
            SurfaceId::TitleBar,
            &ChromeMessage::TabOpened {
                tab_id: id,
                url: url.to_string(),
            },
        );
        if let Err(e) = manager.activate(Some(id)) {
            tracing::error!(tab_id = %id, "Failed to activate tab: {e}");
        }
    }
}

/// Logical height of the primary display. Padding derives from it once.
fn primary_display_height(event_loop: &ActiveEventLoop) -> Result<u32, PlatformError> {
    let monitor = event_loop
        .primary_monitor()
        .or_else(|| event_loop.available_monitors().next())
        .ok_or(PlatformError::NoDisplay)?;
    let size: LogicalSize<u32> = monitor.size().to_logical(monitor.scale_factor());
    Ok(size.height)
}

fn layout_metrics(config: &GlideConfig, display_height: u32) -> LayoutMetrics {
    let layout = &config.layout;
    LayoutMetrics {
        header_height: layout.header_height,
        padding: layout.padding_for_display(display_height),
        find_bar: Size::new(layout.find_bar_width, layout.find_bar_height),
        peek: Size::new(layout.peek_width, layout.peek_height),
        floating: Size::new(config.floating.width, config.floating.height),
    }
}
