//! Window and view composition for the Glide browser shell.
//!
//! Everything in this crate is GUI-free: the real window and webviews sit
//! behind the [`HostWindow`] trait, which `glide-app` implements over winit
//! and wry.

pub mod commands;
pub mod compositor;
pub mod find;
pub mod geometry;
pub mod host;
pub mod layout;
pub mod manager;
pub mod messages;
pub mod motion;
pub mod stack;
pub mod tab;

#[cfg(test)]
pub(crate) mod testing;

pub use commands::ShellCommand;
pub use compositor::Compositor;
pub use find::FindSession;
pub use host::HostWindow;
pub use layout::LayoutMetrics;
pub use manager::WindowManager;
pub use messages::{ChromeMessage, ContentEvent, NavigationState};
pub use motion::MotionLoop;
pub use stack::ViewStack;
pub use tab::TabView;
