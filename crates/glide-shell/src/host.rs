use glide_common::errors::ShellError;
use glide_common::types::{Rect, Size, SurfaceId, TabId};

use crate::messages::ChromeMessage;

/// The native window and its embedded surfaces, as seen by the shell.
///
/// `glide-app` implements this over winit and wry. Operations on surfaces
/// that do not exist are ignored by implementations; the shell only ever
/// addresses surfaces it created.
pub trait HostWindow {
    // -- Window --

    /// Whether the native window still exists.
    fn is_alive(&self) -> bool;
    fn is_visible(&self) -> bool;
    /// Inner (content) size.
    fn size(&self) -> Size;
    /// Outer frame in screen coordinates.
    fn bounds(&self) -> Rect;
    fn set_bounds(&mut self, bounds: Rect);
    fn set_always_on_top(&mut self, on_top: bool);
    /// Usable area of the display holding the window.
    fn work_area(&self) -> Rect;

    // -- Surfaces --

    /// Create a detached content surface for `id` loading `url`.
    fn create_tab_surface(&mut self, id: TabId, url: &str) -> Result<(), ShellError>;
    fn dispose_tab_surface(&mut self, id: TabId);
    fn attach(&mut self, surface: SurfaceId);
    fn detach(&mut self, surface: SurfaceId);
    fn raise(&mut self, surface: SurfaceId);
    fn set_surface_bounds(&mut self, surface: SurfaceId, bounds: Rect);
    fn focus_surface(&mut self, surface: SurfaceId);
    fn send(&mut self, surface: SurfaceId, message: &ChromeMessage);

    // -- Content --

    /// Search the tab's page for `query`. `fresh` restarts from the top.
    fn find_in_page(&mut self, tab: TabId, query: &str, fresh: bool);
    fn stop_find_in_page(&mut self, tab: TabId);
    fn navigate(&mut self, tab: TabId, url: &str);
    fn go_back(&mut self, tab: TabId);
    fn go_forward(&mut self, tab: TabId);
    fn reload(&mut self, tab: TabId);
}
