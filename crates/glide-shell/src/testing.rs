//! Recording `HostWindow` double used by the shell's unit tests.

use std::collections::{HashMap, HashSet};

use glide_common::errors::ShellError;
use glide_common::types::{Rect, Size, SurfaceId, TabId};

use crate::host::HostWindow;
use crate::messages::ChromeMessage;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    SetBounds(Rect),
    SetAlwaysOnTop(bool),
    CreateTab(TabId, String),
    DisposeTab(TabId),
    Attach(SurfaceId),
    Detach(SurfaceId),
    Raise(SurfaceId),
    Focus(SurfaceId),
    Send(SurfaceId, ChromeMessage),
    Find(TabId, String, bool),
    StopFind(TabId),
    Navigate(TabId, String),
    GoBack(TabId),
    GoForward(TabId),
    Reload(TabId),
}

pub struct RecordingHost {
    pub alive: bool,
    pub visible: bool,
    pub bounds: Rect,
    pub work_area: Rect,
    pub always_on_top: bool,
    /// Host-side attach order, bottom first.
    pub attached: Vec<SurfaceId>,
    pub surfaces: HashSet<TabId>,
    pub surface_bounds: HashMap<SurfaceId, Rect>,
    pub calls: Vec<HostCall>,
    pub fail_create: bool,
}

impl RecordingHost {
    pub fn new() -> Self {
        let work_area = Rect::new(0, 25, 1920, 1055);
        Self {
            alive: true,
            visible: true,
            bounds: work_area,
            work_area,
            always_on_top: false,
            attached: Vec::new(),
            surfaces: HashSet::new(),
            surface_bounds: HashMap::new(),
            calls: Vec::new(),
            fail_create: false,
        }
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    /// Index of the first recorded call equal to `call`.
    pub fn call_index(&self, call: &HostCall) -> Option<usize> {
        self.calls.iter().position(|c| c == call)
    }

    pub fn moves(&self) -> Vec<Rect> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                HostCall::SetBounds(r) => Some(*r),
                _ => None,
            })
            .collect()
    }

    pub fn sent_to(&self, surface: SurfaceId) -> Vec<ChromeMessage> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                HostCall::Send(s, m) if *s == surface => Some(m.clone()),
                _ => None,
            })
            .collect()
    }
}

impl HostWindow for RecordingHost {
    fn is_alive(&self) -> bool {
        self.alive
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn size(&self) -> Size {
        self.bounds.size()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.calls.push(HostCall::SetBounds(bounds));
    }

    fn set_always_on_top(&mut self, on_top: bool) {
        self.always_on_top = on_top;
        self.calls.push(HostCall::SetAlwaysOnTop(on_top));
    }

    fn work_area(&self) -> Rect {
        self.work_area
    }

    fn create_tab_surface(&mut self, id: TabId, url: &str) -> Result<(), ShellError> {
        if self.fail_create {
            return Err(ShellError::Host("webview creation failed".into()));
        }
        self.surfaces.insert(id);
        self.calls.push(HostCall::CreateTab(id, url.to_string()));
        Ok(())
    }

    fn dispose_tab_surface(&mut self, id: TabId) {
        self.surfaces.remove(&id);
        self.calls.push(HostCall::DisposeTab(id));
    }

    fn attach(&mut self, surface: SurfaceId) {
        self.attached.retain(|&s| s != surface);
        self.attached.push(surface);
        self.calls.push(HostCall::Attach(surface));
    }

    fn detach(&mut self, surface: SurfaceId) {
        self.attached.retain(|&s| s != surface);
        self.calls.push(HostCall::Detach(surface));
    }

    fn raise(&mut self, surface: SurfaceId) {
        if self.attached.contains(&surface) {
            self.attached.retain(|&s| s != surface);
            self.attached.push(surface);
        }
        self.calls.push(HostCall::Raise(surface));
    }

    fn set_surface_bounds(&mut self, surface: SurfaceId, bounds: Rect) {
        self.surface_bounds.insert(surface, bounds);
    }

    fn focus_surface(&mut self, surface: SurfaceId) {
        self.calls.push(HostCall::Focus(surface));
    }

    fn send(&mut self, surface: SurfaceId, message: &ChromeMessage) {
        self.calls.push(HostCall::Send(surface, message.clone()));
    }

    fn find_in_page(&mut self, tab: TabId, query: &str, fresh: bool) {
        self.calls.push(HostCall::Find(tab, query.to_string(), fresh));
    }

    fn stop_find_in_page(&mut self, tab: TabId) {
        self.calls.push(HostCall::StopFind(tab));
    }

    fn navigate(&mut self, tab: TabId, url: &str) {
        self.calls.push(HostCall::Navigate(tab, url.to_string()));
    }

    fn go_back(&mut self, tab: TabId) {
        self.calls.push(HostCall::GoBack(tab));
    }

    fn go_forward(&mut self, tab: TabId) {
        self.calls.push(HostCall::GoForward(tab));
    }

    fn reload(&mut self, tab: TabId) {
        self.calls.push(HostCall::Reload(tab));
    }
}
