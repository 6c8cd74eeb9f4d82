use super::Action;

impl Action {
    /// Human-readable label, as it would appear in a menu.
    pub fn label(&self) -> &'static str {
        match self {
            Action::NewTab => "New Tab",
            Action::CloseTab => "Close Tab",
            Action::Reload => "Reload",
            Action::FindOpen => "Find",
            Action::FindClose => "Stop Find",
            Action::ToggleFloat => "Float",
            Action::Quit => "Quit",
            Action::None => "None",
        }
    }

    /// Whether a shortcut forwarded from web content may trigger this
    /// action. Page scripts can synthesize key presses, so anything that
    /// creates or destroys tabs or ends the app is reserved for the shell.
    pub fn allowed_from_page(&self) -> bool {
        matches!(
            self,
            Action::Reload | Action::FindOpen | Action::FindClose | Action::ToggleFloat
        )
    }

    /// All actions that can be bound to a key.
    pub fn bindable() -> Vec<Action> {
        vec![
            Action::NewTab,
            Action::CloseTab,
            Action::Reload,
            Action::FindOpen,
            Action::FindClose,
            Action::ToggleFloat,
            Action::Quit,
        ]
    }
}
