mod action_enum;
mod dispatch;

pub use action_enum::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_bindable_actions_have_labels() {
        for action in Action::bindable() {
            let label = action.label();
            assert!(!label.is_empty(), "action {:?} has empty label", action);
        }
    }

    #[test]
    fn bindable_excludes_none() {
        assert!(!Action::bindable().contains(&Action::None));
    }

    #[test]
    fn find_labels() {
        assert_eq!(Action::FindOpen.label(), "Find");
        assert_eq!(Action::FindClose.label(), "Stop Find");
        assert_eq!(Action::ToggleFloat.label(), "Float");
    }

    #[test]
    fn page_shortcuts_limited_to_view_actions() {
        assert!(Action::FindOpen.allowed_from_page());
        assert!(Action::FindClose.allowed_from_page());
        assert!(Action::ToggleFloat.allowed_from_page());
        assert!(Action::Reload.allowed_from_page());
        assert!(!Action::Quit.allowed_from_page());
        assert!(!Action::NewTab.allowed_from_page());
        assert!(!Action::CloseTab.allowed_from_page());
    }

    #[test]
    fn action_serde_roundtrip() {
        let actions = vec![Action::NewTab, Action::FindOpen, Action::ToggleFloat];

        for action in &actions {
            let json = serde_json::to_string(action).unwrap();
            let deserialized: Action = serde_json::from_str(&json).unwrap();
            assert_eq!(*action, deserialized);
        }
    }
}
