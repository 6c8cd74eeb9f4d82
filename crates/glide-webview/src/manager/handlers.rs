use std::sync::{Arc, Mutex};

use glide_common::types::SurfaceId;
use tracing::{debug, warn};
use wry::WebViewBuilder;

use crate::events::{PageLoadState, WebViewEvent};

use super::WebViewManager;

// =============================================================================
// NAVIGATION ALLOWLIST
// =============================================================================

/// Origins the bundled chrome pages may load.
pub const CHROME_NAV_PREFIXES: &[&str] = &[
    "glide://",
    // On Windows, WebView2 rewrites glide://localhost/... to http://glide.localhost/...
    "http://glide.localhost",
    "about:blank",
];

/// Schemes a tab may navigate to.
pub const TAB_NAV_PREFIXES: &[&str] = &["https://", "http://", "about:blank"];

/// Check whether `surface` may navigate to `url`.
///
/// Chrome pages stay on the bundled protocol; tabs get the web but never
/// the chrome protocol, `file:`, `data:` or `javascript:` URLs.
pub fn is_navigation_allowed(surface: SurfaceId, url: &str) -> bool {
    let prefixes = if surface.is_tab() {
        if url.starts_with("http://glide.localhost") {
            return false;
        }
        TAB_NAV_PREFIXES
    } else {
        CHROME_NAV_PREFIXES
    };
    prefixes.iter().any(|prefix| url.starts_with(prefix))
}

// =============================================================================
// HANDLER ATTACHMENTS
// =============================================================================

impl WebViewManager {
    pub(super) fn attach_ipc_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        surface: SurfaceId,
    ) -> WebViewBuilder<'a> {
        builder.with_ipc_handler(move |request| {
            let body = request.body().to_string();

            if serde_json::from_str::<serde_json::Value>(&body).is_err() {
                warn!(
                    %surface,
                    body_len = body.len(),
                    "IPC message rejected: invalid JSON"
                );
                return;
            }

            debug!(%surface, body_len = body.len(), "IPC message from JS");
            if let Ok(mut evts) = events.lock() {
                evts.push(WebViewEvent::IpcMessage { surface, body });
            }
        })
    }

    pub(super) fn attach_page_load_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        surface: SurfaceId,
    ) -> WebViewBuilder<'a> {
        builder.with_on_page_load_handler(move |event, url| {
            let state = PageLoadState::from(event);
            debug!(%surface, ?state, url = %url, "page load");
            if let Ok(mut evts) = events.lock() {
                evts.push(WebViewEvent::PageLoad {
                    surface,
                    state,
                    url,
                });
            }
        })
    }

    pub(super) fn attach_title_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        surface: SurfaceId,
    ) -> WebViewBuilder<'a> {
        builder.with_document_title_changed_handler(move |title| {
            debug!(%surface, title = %title, "title changed");
            if let Ok(mut evts) = events.lock() {
                evts.push(WebViewEvent::TitleChanged { surface, title });
            }
        })
    }

    pub(super) fn attach_navigation_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        surface: SurfaceId,
    ) -> WebViewBuilder<'a> {
        builder.with_navigation_handler(move |url| {
            if !is_navigation_allowed(surface, &url) {
                warn!(%surface, url = %url, "navigation blocked");
                return false;
            }

            if let Ok(mut evts) = events.lock() {
                evts.push(WebViewEvent::NavigationRequested { surface, url });
            }
            true
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================
