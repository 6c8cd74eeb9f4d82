use serde::{Deserialize, Serialize};

/// Every user-triggerable action in the shell.
///
/// Keybinds and chrome IPC both resolve to an `Action`; the app dispatcher
/// matches on it to drive the window manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    // -- Tabs --
    NewTab,
    CloseTab,
    Reload,

    // -- Find --
    FindOpen,
    FindClose,

    // -- Window --
    ToggleFloat,
    Quit,

    // -- Noop --
    None,
}
