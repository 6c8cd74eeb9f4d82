//! Find-in-page session handling.

use glide_common::types::{SurfaceId, TabId};
use tracing::debug;

use crate::host::HostWindow;
use crate::messages::ChromeMessage;

use super::WindowManager;

impl<H: HostWindow> WindowManager<H> {
    /// Show the find bar and, with an active tab, search for the current
    /// query. Repeating the same query steps to the next match.
    pub fn open_find(&mut self) {
        if !self.surfaces.is_attached(SurfaceId::FindBar) {
            self.surfaces.attach_and_raise(SurfaceId::FindBar);
        }
        self.find.mark_open();

        let Some(active) = self.active else {
            return;
        };
        let host = self.surfaces.host_mut();
        host.focus_surface(SurfaceId::FindBar);
        host.send(SurfaceId::FindBar, &ChromeMessage::OpenFind);

        let (query, fresh) = self.find.begin_search();
        debug!(tab_id = %active, fresh, "find in page");
        self.surfaces.host_mut().find_in_page(active, &query, fresh);
    }

    /// Store a query typed into the find bar and search for it.
    pub fn set_find_query(&mut self, text: impl Into<String>) {
        self.find.set_query(text);
        self.open_find();
    }

    pub fn close_find(&mut self) {
        self.end_find(self.active);
    }

    pub fn reset_text_search(&mut self) {
        self.find.reset_text_search();
    }

    pub(super) fn end_find(&mut self, tab: Option<TabId>) {
        self.surfaces.detach(SurfaceId::FindBar);
        if let Some(id) = tab {
            self.surfaces.host_mut().stop_find_in_page(id);
        }
        self.find.close();
    }
}
