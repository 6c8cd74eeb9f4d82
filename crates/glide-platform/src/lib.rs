pub mod crash_report;
pub mod input;
pub mod keymap;
pub mod paths;
pub mod winit_keys;

pub use input::{KeyCombo, KeybindRegistry};
pub use keymap::{KeyBind, Modifier};
pub use paths::{config_dir, crash_report_dir, data_dir, ensure_dirs, log_dir};
pub use winit_keys::normalize_winit_key;
