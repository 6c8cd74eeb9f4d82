//! Back/forward bookkeeping for one tab.
//!
//! wry reports committed URLs but not the session history, so each tab
//! keeps its own list and cursor.

use glide_shell::NavigationState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    Back,
    Forward,
    Reload,
}

#[derive(Debug, Clone, Default)]
pub struct HistoryTracker {
    entries: Vec<String>,
    index: usize,
    pending: Option<Pending>,
}

impl HistoryTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn can_go_back(&self) -> bool {
        !self.entries.is_empty() && self.index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    pub fn current(&self) -> Option<&str> {
        self.entries.get(self.index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Note a back request. Returns `false` when there is nothing to go
    /// back to and the request should not be issued.
    pub fn go_back(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        self.pending = Some(Pending::Back);
        true
    }

    pub fn go_forward(&mut self) -> bool {
        if !self.can_go_forward() {
            return false;
        }
        self.pending = Some(Pending::Forward);
        true
    }

    pub fn reload(&mut self) {
        self.pending = Some(Pending::Reload);
    }

    /// Record a committed navigation to `url` and return the resulting
    /// navigation state.
    pub fn commit(&mut self, url: &str) -> NavigationState {
        match self.pending.take() {
            Some(Pending::Back) if self.can_go_back() => {
                self.index -= 1;
                self.entries[self.index] = url.to_string();
            }
            Some(Pending::Forward) if self.can_go_forward() => {
                self.index += 1;
                self.entries[self.index] = url.to_string();
            }
            Some(Pending::Reload) if !self.entries.is_empty() => {
                self.entries[self.index] = url.to_string();
            }
            _ => self.push(url),
        }
        self.state()
    }

    /// Forget a pending back/forward/reload, e.g. when the page vetoed it.
    pub fn cancel_pending(&mut self) {
        self.pending = None;
    }

    pub fn state(&self) -> NavigationState {
        NavigationState {
            url: self.current().unwrap_or_default().to_string(),
            can_go_back: self.can_go_back(),
            can_go_forward: self.can_go_forward(),
        }
    }

    fn push(&mut self, url: &str) {
        if self.current() == Some(url) {
            return;
        }
        if !self.entries.is_empty() {
            self.entries.truncate(self.index + 1);
        }
        self.entries.push(url.to_string());
        self.index = self.entries.len() - 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_history_cannot_move() {
        let mut h = HistoryTracker::new();
        assert!(!h.can_go_back());
        assert!(!h.can_go_forward());
        assert!(!h.go_back());
        assert_eq!(h.state(), NavigationState::default());
    }

    #[test]
    fn commits_push_entries() {
        let mut h = HistoryTracker::new();
        h.commit("https://a.test/");
        let state = h.commit("https://b.test/");
        assert_eq!(state.url, "https://b.test/");
        assert!(state.can_go_back);
        assert!(!state.can_go_forward);
        assert_eq!(h.len(), 2);
    }

    #[test]
    fn repeated_commit_is_not_duplicated() {
        let mut h = HistoryTracker::new();
        h.commit("https://a.test/");
        h.commit("https://a.test/");
        assert_eq!(h.len(), 1);
    }

    #[test]
    fn back_then_forward() {
        let mut h = HistoryTracker::new();
        h.commit("https://a.test/");
        h.commit("https://b.test/");

        assert!(h.go_back());
        let state = h.commit("https://a.test/");
        assert_eq!(state.url, "https://a.test/");
        assert!(!state.can_go_back);
        assert!(state.can_go_forward);

        assert!(h.go_forward());
        let state = h.commit("https://b.test/");
        assert!(state.can_go_back);
        assert!(!state.can_go_forward);
    }

    #[test]
    fn new_navigation_drops_forward_entries() {
        let mut h = HistoryTracker::new();
        h.commit("https://a.test/");
        h.commit("https://b.test/");
        h.go_back();
        h.commit("https://a.test/");
        let state = h.commit("https://c.test/");
        assert_eq!(h.len(), 2);
        assert!(!state.can_go_forward);
        assert_eq!(h.current(), Some("https://c.test/"));
    }

    #[test]
    fn reload_keeps_position() {
        let mut h = HistoryTracker::new();
        h.commit("https://a.test/");
        h.commit("https://b.test/");
        h.reload();
        let state = h.commit("https://b.test/?r=1");
        assert_eq!(h.len(), 2);
        assert_eq!(state.url, "https://b.test/?r=1");
    }

    #[test]
    fn cancelled_back_is_a_plain_commit() {
        let mut h = HistoryTracker::new();
        h.commit("https://a.test/");
        h.commit("https://b.test/");
        h.go_back();
        h.cancel_pending();
        h.commit("https://d.test/");
        assert_eq!(h.len(), 3);
    }
}
