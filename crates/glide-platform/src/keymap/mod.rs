mod display;
mod parse;
mod types;

pub use display::keybind_to_display;
pub use parse::parse_keybind;
pub use types::{KeyBind, Modifier};

#[cfg(test)]
mod tests {
    use super::*;

    fn primary() -> Modifier {
        if cfg!(target_os = "macos") {
            Modifier::Super
        } else {
            Modifier::Ctrl
        }
    }

    #[test]
    fn parse_cmd_resolves_per_platform() {
        let kb = parse_keybind("Cmd+F").unwrap();
        assert_eq!(kb.modifiers, vec![primary()]);
        assert_eq!(kb.key, "F");
    }

    #[test]
    fn parse_multi_modifier_keybind() {
        let kb = parse_keybind("Cmd+Shift+F").unwrap();
        assert_eq!(kb.modifiers, vec![primary(), Modifier::Shift]);
        assert_eq!(kb.key, "F");
    }

    #[test]
    fn parse_bare_escape() {
        let kb = parse_keybind("Escape").unwrap();
        assert!(kb.modifiers.is_empty());
        assert_eq!(kb.key, "Escape");

        assert_eq!(parse_keybind("esc").unwrap().key, "Escape");
    }

    #[test]
    fn parse_option_becomes_alt() {
        let kb = parse_keybind("Option+Period").unwrap();
        assert_eq!(kb.modifiers, vec![Modifier::Alt]);
        assert_eq!(kb.key, ".");
    }

    #[test]
    fn parse_lowercase_key_is_uppercased() {
        assert_eq!(parse_keybind("Ctrl+t").unwrap().key, "T");
        assert_eq!(parse_keybind("Ctrl+pageup").unwrap().key, "Pageup");
    }

    #[test]
    fn parse_duplicate_modifiers_deduplicated() {
        let kb = parse_keybind("Ctrl+Ctrl+W").unwrap();
        assert_eq!(kb.modifiers, vec![Modifier::Ctrl]);
    }

    #[test]
    fn parse_rejects_empty_and_dangling() {
        assert!(parse_keybind("").is_err());
        assert!(parse_keybind("Ctrl+").is_err());
        assert!(parse_keybind("Hyper+F").is_err());
    }

    #[test]
    fn display_keybind_platform() {
        let kb = KeyBind {
            modifiers: vec![Modifier::Ctrl, Modifier::Shift],
            key: "F".into(),
        };
        let display = keybind_to_display(&kb);
        if cfg!(target_os = "macos") {
            assert_eq!(display, "\u{2303}\u{21E7}F");
        } else {
            assert_eq!(display, "Ctrl+Shift+F");
        }
    }

    #[test]
    fn keybind_serialization_roundtrip() {
        let kb = parse_keybind("Alt+Shift+R").unwrap();
        let json = serde_json::to_string(&kb).unwrap();
        let deserialized: KeyBind = serde_json::from_str(&json).unwrap();
        assert_eq!(kb, deserialized);
    }
}
