//! WebView event types.

use glide_common::types::SurfaceId;
use serde::{Deserialize, Serialize};

/// State of a page load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLoadState {
    /// Navigation has started.
    Started,
    /// Page has fully loaded.
    Finished,
}

impl From<wry::PageLoadEvent> for PageLoadState {
    fn from(e: wry::PageLoadEvent) -> Self {
        match e {
            wry::PageLoadEvent::Started => Self::Started,
            wry::PageLoadEvent::Finished => Self::Finished,
        }
    }
}

/// Events emitted by a WebView instance, tagged with the surface they
/// came from.
#[derive(Debug, Clone, PartialEq)]
pub enum WebViewEvent {
    PageLoad {
        surface: SurfaceId,
        state: PageLoadState,
        url: String,
    },
    TitleChanged {
        surface: SurfaceId,
        title: String,
    },
    /// Raw IPC body, already checked to be valid JSON.
    IpcMessage {
        surface: SurfaceId,
        body: String,
    },
    /// An allowed navigation is about to start.
    NavigationRequested {
        surface: SurfaceId,
        url: String,
    },
    Closed {
        surface: SurfaceId,
    },
}

impl WebViewEvent {
    pub fn surface(&self) -> SurfaceId {
        match self {
            WebViewEvent::PageLoad { surface, .. }
            | WebViewEvent::TitleChanged { surface, .. }
            | WebViewEvent::IpcMessage { surface, .. }
            | WebViewEvent::NavigationRequested { surface, .. }
            | WebViewEvent::Closed { surface } => *surface,
        }
    }
}
