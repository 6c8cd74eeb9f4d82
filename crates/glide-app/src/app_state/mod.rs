//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Owns the window manager, which composes the chrome and tab
//! webviews inside the single frameless window.

mod core;
mod dispatch;
mod event_handler;
mod host;
mod init;
mod polling;
mod shutdown;
mod types;

pub use core::GlideApp;
