//! The WindowManager composes tabs and chrome surfaces inside one window.

mod find;
mod floating;
mod tabs;
mod types;

pub use types::*;
