//! One browser tab: a content surface plus the state the chrome shows for it.

use glide_common::errors::ShellError;
use glide_common::types::{Rect, SurfaceId, TabId};
use tracing::debug;

use crate::compositor::Compositor;
use crate::host::HostWindow;
use crate::layout::{self, LayoutMetrics};
use crate::messages::{ChromeMessage, ContentEvent, NavigationState};

#[derive(Debug, Clone)]
pub struct TabView {
    id: TabId,
    title: String,
    favicon: Option<String>,
    navigation: NavigationState,
    floating: bool,
    bounds: Rect,
    metrics: LayoutMetrics,
}

impl TabView {
    /// Create the tab's content surface, detached, and size it for the
    /// current window.
    pub fn new<H: HostWindow>(
        surfaces: &mut Compositor<H>,
        id: TabId,
        url: &str,
        metrics: LayoutMetrics,
        floating: bool,
    ) -> Result<Self, ShellError> {
        if !surfaces.host().is_alive() {
            return Err(ShellError::WindowUnavailable);
        }
        surfaces.host_mut().create_tab_surface(id, url)?;

        let mut tab = Self {
            id,
            title: String::new(),
            favicon: None,
            navigation: NavigationState {
                url: url.to_string(),
                ..NavigationState::default()
            },
            floating,
            bounds: Rect::default(),
            metrics,
        };
        tab.resize(surfaces);
        debug!(tab_id = %id, url, "tab surface created");
        Ok(tab)
    }

    pub fn id(&self) -> TabId {
        self.id
    }

    pub fn surface(&self) -> SurfaceId {
        SurfaceId::Tab(self.id)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn favicon(&self) -> Option<&str> {
        self.favicon.as_deref()
    }

    pub fn url(&self) -> &str {
        &self.navigation.url
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    pub fn is_floating(&self) -> bool {
        self.floating
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn set_floating(&mut self, floating: bool) {
        self.floating = floating;
    }

    /// Fit the surface to the window below the header, or to the whole
    /// window while floating.
    pub fn resize<H: HostWindow>(&mut self, surfaces: &mut Compositor<H>) {
        let size = surfaces.host().size();
        self.bounds = layout::tab_bounds(size, &self.metrics, self.floating);
        surfaces
            .host_mut()
            .set_surface_bounds(self.surface(), self.bounds);
    }

    /// Record a content event and relay it to the chrome.
    pub fn on_content_event<H: HostWindow>(
        &mut self,
        surfaces: &mut Compositor<H>,
        event: ContentEvent,
    ) {
        match event {
            ContentEvent::TitleUpdated(title) => {
                self.title = title.clone();
                surfaces.send(
                    SurfaceId::TitleBar,
                    &ChromeMessage::TabTitle {
                        tab_id: self.id,
                        title,
                    },
                );
            }
            ContentEvent::FaviconUpdated(url) => {
                self.favicon = Some(url.clone());
                surfaces.send(
                    SurfaceId::TitleBar,
                    &ChromeMessage::TabFavicon {
                        tab_id: self.id,
                        url,
                    },
                );
            }
            ContentEvent::Navigated(state) => {
                surfaces.send(
                    SurfaceId::TitleBar,
                    &ChromeMessage::TabNavigation {
                        tab_id: self.id,
                        can_go_back: state.can_go_back,
                        can_go_forward: state.can_go_forward,
                        url: state.url.clone(),
                    },
                );
                self.navigation = state;
            }
            ContentEvent::HoveredLinkChanged(url) => {
                if url.is_empty() {
                    surfaces.detach(SurfaceId::UrlPeek);
                } else {
                    surfaces.attach_and_raise(SurfaceId::UrlPeek);
                    surfaces.send(SurfaceId::UrlPeek, &ChromeMessage::PeekUrl { url });
                }
            }
        }
    }
}
