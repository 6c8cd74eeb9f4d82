/// In-page find state for one window.
///
/// Closed sessions always carry empty strings. `last_searched` lets the
/// next search continue from the current match instead of restarting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FindSession {
    open: bool,
    query: String,
    last_searched: String,
}

impl FindSession {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn last_searched(&self) -> &str {
        &self.last_searched
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Mark the session open and return `(query, fresh)` for the next search,
    /// recording the query as searched.
    pub(crate) fn begin_search(&mut self) -> (String, bool) {
        self.open = true;
        let fresh = self.query != self.last_searched;
        self.last_searched = self.query.clone();
        (self.query.clone(), fresh)
    }

    pub(crate) fn mark_open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.query.clear();
        self.last_searched.clear();
    }

    /// Forget the last searched query so the next search starts fresh.
    pub fn reset_text_search(&mut self) {
        self.last_searched.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_search_is_fresh_then_continues() {
        let mut find = FindSession::default();
        find.set_query("rust");
        assert_eq!(find.begin_search(), ("rust".to_string(), true));
        assert_eq!(find.begin_search(), ("rust".to_string(), false));
        find.set_query("rusty");
        assert_eq!(find.begin_search(), ("rusty".to_string(), true));
        assert!(find.is_open());
    }

    #[test]
    fn reset_only_clears_last_searched() {
        let mut find = FindSession::default();
        find.set_query("abc");
        find.begin_search();
        find.reset_text_search();
        assert_eq!(find.query(), "abc");
        assert_eq!(find.last_searched(), "");
        assert!(find.begin_search().1);
    }

    #[test]
    fn close_clears_everything() {
        let mut find = FindSession::default();
        find.set_query("abc");
        find.begin_search();
        find.close();
        assert_eq!(find, FindSession::default());
    }
}
