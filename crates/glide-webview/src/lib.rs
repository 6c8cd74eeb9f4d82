//! WebView bridge for Glide's chrome and tab surfaces.
//!
//! Wraps the `wry` crate to provide:
//! - Managed child WebViews keyed by [`SurfaceId`](glide_common::types::SurfaceId)
//! - Bidirectional IPC (Rust <-> JavaScript)
//! - The `glide://` protocol serving bundled chrome pages
//! - Per-tab history tracking and find-in-page scripts
//! - Translation of raw webview events into shell content events

pub mod bounds;
pub mod bridge;
pub mod content;
pub mod events;
pub mod history;
pub mod ipc;
pub mod manager;

pub use bridge::{translate_event, Translated};
pub use content::ContentProvider;
pub use events::{PageLoadState, WebViewEvent};
pub use history::HistoryTracker;
pub use ipc::{IpcMessage, ShortcutPress};
pub use manager::{WebViewConfig, WebViewHandle, WebViewManager, WebViewRegistry};
