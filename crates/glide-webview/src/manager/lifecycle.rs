use std::borrow::Cow;
use std::sync::Arc;

use glide_common::types::{Rect, SurfaceId};
use tracing::{debug, warn};
use wry::http::Response;
use wry::raw_window_handle;
use wry::WebViewBuilder;

use crate::bounds::rect_to_wry;
use crate::content::{self, ContentProvider, PROTOCOL};
use crate::history::HistoryTracker;
use crate::ipc::{CONTENT_BRIDGE_SCRIPT, IPC_INIT_SCRIPT, SHORTCUT_BRIDGE_SCRIPT};

use super::handle::WebViewHandle;
use super::types::WebViewConfig;
use super::WebViewManager;

impl WebViewManager {
    /// Create a WebView for `surface` as a child of `window`, positioned at
    /// `bounds` in logical window coordinates.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &self,
        surface: SurfaceId,
        window: &W,
        bounds: Rect,
        config: WebViewConfig,
    ) -> Result<WebViewHandle, wry::Error> {
        let events = &self.events;

        let mut builder = WebViewBuilder::new()
            .with_bounds(rect_to_wry(&bounds))
            .with_transparent(config.transparent)
            .with_devtools(config.devtools)
            .with_clipboard(config.clipboard)
            .with_autoplay(config.autoplay)
            .with_visible(config.visible)
            .with_focused(false)
            .with_initialization_script(IPC_INIT_SCRIPT)
            .with_initialization_script(SHORTCUT_BRIDGE_SCRIPT);

        if config.content_bridge {
            builder = builder.with_initialization_script(CONTENT_BRIDGE_SCRIPT);
        }
        if let Some(ua) = &config.user_agent {
            builder = builder.with_user_agent(ua);
        }

        builder = Self::attach_ipc_handler(builder, Arc::clone(events), surface);
        builder = Self::attach_page_load_handler(builder, Arc::clone(events), surface);
        builder = Self::attach_title_handler(builder, Arc::clone(events), surface);
        builder = Self::attach_navigation_handler(builder, Arc::clone(events), surface);
        builder = self.attach_custom_protocol(builder);

        let webview = builder.with_url(&config.url).build_as_child(window)?;

        debug!(%surface, url = %config.url, "WebView created");

        Ok(WebViewHandle {
            webview,
            surface,
            current_url: config.url,
            visible: config.visible,
            history: HistoryTracker::new(),
        })
    }

    /// Set the content provider serving bundled chrome assets via `glide://`.
    pub fn set_content_provider(&mut self, provider: ContentProvider) {
        self.content_provider = Some(Arc::new(provider));
    }

    fn attach_custom_protocol<'a>(&self, builder: WebViewBuilder<'a>) -> WebViewBuilder<'a> {
        let Some(provider) = &self.content_provider else {
            return builder;
        };
        let cp = Arc::clone(provider);
        builder.with_custom_protocol(PROTOCOL.to_string(), move |_wv_id, request| {
            let uri = request.uri().to_string();
            let path = content::request_path(&uri);

            match cp.resolve(path) {
                Some((mime, data)) => respond(200, &mime, data.into_owned()),
                None => {
                    warn!(path = %path, "custom protocol: asset not found");
                    respond(404, "text/plain", b"Not Found".to_vec())
                }
            }
        })
    }
}

fn respond(status: u16, mime: &str, body: Vec<u8>) -> Response<Cow<'static, [u8]>> {
    Response::builder()
        .status(status)
        .header("Content-Type", mime)
        .header("Access-Control-Allow-Origin", "glide://localhost")
        .body(Cow::from(body))
        .unwrap_or_else(|_| Response::new(Cow::from(Vec::new())))
}
