//! Tab lifecycle: create, activate, remove, navigate, content events.

use glide_common::errors::ShellError;
use glide_common::types::{SurfaceId, TabId};
use tracing::{debug, info};

use crate::host::HostWindow;
use crate::messages::ContentEvent;
use crate::tab::TabView;

use super::WindowManager;

impl<H: HostWindow> WindowManager<H> {
    /// Create a detached tab. Activation attaches it.
    pub fn create_tab(&mut self, id: TabId, url: &str) -> Result<(), ShellError> {
        if self.tabs.contains_key(&id) {
            return Err(ShellError::DuplicateTab(id));
        }
        let tab = TabView::new(&mut self.surfaces, id, url, self.metrics, self.floating)?;
        self.tabs.insert(id, tab);
        info!(tab_id = %id, "tab created");
        Ok(())
    }

    /// Make `target` the attached tab, or detach every tab for `None`.
    ///
    /// Unknown ids fail before anything changes.
    pub fn activate(&mut self, target: Option<TabId>) -> Result<(), ShellError> {
        if target == self.active {
            return Ok(());
        }
        if let Some(id) = target {
            if !self.tabs.contains_key(&id) {
                return Err(ShellError::TabNotFound(id));
            }
        }

        let previous = self.active.take();
        if let Some(prev) = previous {
            self.surfaces.detach(SurfaceId::Tab(prev));
        }

        let Some(id) = target else {
            debug!("no active tab");
            return Ok(());
        };

        let chrome = self.chrome_surface();
        self.surfaces.attach(SurfaceId::Tab(id));
        self.surfaces.raise(chrome);
        self.active = Some(id);

        if self.find.is_open() {
            self.end_find(previous);
        }
        if self.surfaces.is_attached(SurfaceId::UrlPeek) {
            self.surfaces.raise(SurfaceId::UrlPeek);
        }
        if let Some(tab) = self.tabs.get_mut(&id) {
            tab.resize(&mut self.surfaces);
        }
        debug!(tab_id = %id, "tab activated");
        Ok(())
    }

    /// Detach and dispose the tab's surface now. Removing the active tab
    /// leaves no tab active.
    pub fn remove_tab(&mut self, id: TabId) -> Result<(), ShellError> {
        let tab = self.tabs.remove(&id).ok_or(ShellError::TabNotFound(id))?;
        self.surfaces.detach(tab.surface());
        self.surfaces.host_mut().dispose_tab_surface(id);
        if self.active == Some(id) {
            self.active = None;
        }
        info!(tab_id = %id, "tab removed");
        Ok(())
    }

    pub fn navigate(&mut self, id: TabId, url: &str) -> Result<(), ShellError> {
        self.ensure_tab(id)?;
        self.surfaces.host_mut().navigate(id, url);
        Ok(())
    }

    pub fn go_back(&mut self, id: TabId) -> Result<(), ShellError> {
        self.ensure_tab(id)?;
        self.surfaces.host_mut().go_back(id);
        Ok(())
    }

    pub fn go_forward(&mut self, id: TabId) -> Result<(), ShellError> {
        self.ensure_tab(id)?;
        self.surfaces.host_mut().go_forward(id);
        Ok(())
    }

    pub fn reload(&mut self, id: TabId) -> Result<(), ShellError> {
        self.ensure_tab(id)?;
        self.surfaces.host_mut().reload(id);
        Ok(())
    }

    /// Route a content event to its tab.
    pub fn handle_content_event(
        &mut self,
        id: TabId,
        event: ContentEvent,
    ) -> Result<(), ShellError> {
        let tab = self.tabs.get_mut(&id).ok_or(ShellError::TabNotFound(id))?;
        tab.on_content_event(&mut self.surfaces, event);
        Ok(())
    }

    /// Dispose every tab surface. Used when the window closes.
    pub fn close_all(&mut self) {
        if self.find.is_open() {
            self.close_find();
        }
        self.active = None;
        for (id, tab) in self.tabs.drain() {
            self.surfaces.detach(tab.surface());
            self.surfaces.host_mut().dispose_tab_surface(id);
        }
        debug!("all tabs closed");
    }

    fn ensure_tab(&self, id: TabId) -> Result<(), ShellError> {
        if self.tabs.contains_key(&id) {
            Ok(())
        } else {
            Err(ShellError::TabNotFound(id))
        }
    }
}
