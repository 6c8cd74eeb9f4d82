//! Winit key name normalization.
//!
//! Converts winit's logical key names to the names produced by
//! [`parse_keybind`](crate::keymap::parse_keybind), so both sides of a
//! [`KeyCombo`](crate::input::KeyCombo) lookup agree.

/// Convert a winit key name (`"ArrowUp"`, `" "`, `"f"`) to the keybind form.
pub fn normalize_winit_key(key: &str) -> String {
    match key {
        "ArrowUp" => "Up".into(),
        "ArrowDown" => "Down".into(),
        "ArrowLeft" => "Left".into(),
        "ArrowRight" => "Right".into(),
        " " | "Space" => "Space".into(),
        // Single characters (letters, digits, punctuation) compare uppercased.
        _ if key.chars().count() == 1 => key.to_uppercase(),
        // Named keys (Escape, Enter, F1...) already match.
        _ => key.to_string(),
    }
}
