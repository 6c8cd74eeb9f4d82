use super::types::{KeyBind, Modifier};

/// Converts a [`KeyBind`] into a platform-appropriate display string:
/// symbols on macOS (`⌘⇧F`), `+`-joined names elsewhere (`Ctrl+Shift+F`).
pub fn keybind_to_display(kb: &KeyBind) -> String {
    let mac = cfg!(target_os = "macos");
    let mut parts: Vec<&str> = kb
        .modifiers
        .iter()
        .map(|m| display_modifier(*m, mac))
        .collect();
    parts.push(&kb.key);
    parts.join(if mac { "" } else { "+" })
}

fn display_modifier(modifier: Modifier, mac: bool) -> &'static str {
    match (modifier, mac) {
        (Modifier::Ctrl, true) => "\u{2303}",
        (Modifier::Alt, true) => "\u{2325}",
        (Modifier::Shift, true) => "\u{21E7}",
        (Modifier::Super, true) => "\u{2318}",
        (Modifier::Ctrl, false) => "Ctrl",
        (Modifier::Alt, false) => "Alt",
        (Modifier::Shift, false) => "Shift",
        (Modifier::Super, false) => {
            if cfg!(target_os = "windows") {
                "Win"
            } else {
                "Super"
            }
        }
    }
}
