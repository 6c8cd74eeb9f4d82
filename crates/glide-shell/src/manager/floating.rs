//! Docked/floating mode switching, relayout, and the motion step.

use glide_common::errors::ShellError;
use glide_common::types::SurfaceId;
use tracing::info;

use crate::geometry;
use crate::host::HostWindow;
use crate::layout;
use crate::messages::ChromeMessage;

use super::WindowManager;

impl<H: HostWindow> WindowManager<H> {
    /// Switch between docked and floating mode.
    ///
    /// Returns `Ok(false)` without touching anything when the window is
    /// hidden.
    pub fn toggle_float(&mut self) -> Result<bool, ShellError> {
        if !self.surfaces.host().is_alive() {
            return Err(ShellError::WindowUnavailable);
        }
        if !self.surfaces.host().is_visible() {
            return Ok(false);
        }

        let work = self.surfaces.host().work_area();
        if self.floating {
            let host = self.surfaces.host_mut();
            host.set_bounds(work);
            // Re-applying on-top forces the frame to repaint after the resize.
            host.set_always_on_top(true);
            self.surfaces.detach(SurfaceId::Overlay);
            self.surfaces.attach_and_raise(SurfaceId::TitleBar);
        } else {
            self.surfaces.attach_and_raise(SurfaceId::Overlay);
            self.surfaces.detach(SurfaceId::TitleBar);
            let host = self.surfaces.host_mut();
            host.set_bounds(layout::floating_window_bounds(work, &self.metrics));
            host.set_always_on_top(true);
        }
        self.floating = !self.floating;

        for tab in self.tabs.values_mut() {
            tab.set_floating(self.floating);
        }
        self.relayout();

        let msg = ChromeMessage::FloatChanged {
            floating: self.floating,
        };
        self.surfaces.send(SurfaceId::TitleBar, &msg);
        self.surfaces.send(SurfaceId::Overlay, &msg);
        info!(floating = self.floating, "window mode changed");
        Ok(true)
    }

    /// Recompute every surface's bounds for the current window size.
    pub fn relayout(&mut self) {
        let size = self.surfaces.host().size();
        let m = self.metrics;
        let floating = self.floating;
        let host = self.surfaces.host_mut();
        host.set_surface_bounds(SurfaceId::TitleBar, layout::title_bar_bounds(size, &m));
        host.set_surface_bounds(
            SurfaceId::FindBar,
            layout::find_bar_bounds(size, &m, floating),
        );
        host.set_surface_bounds(SurfaceId::UrlPeek, layout::peek_bounds(size, &m));
        host.set_surface_bounds(SurfaceId::Overlay, layout::overlay_bounds(size));

        for tab in self.tabs.values_mut() {
            tab.resize(&mut self.surfaces);
        }
    }

    /// Move the window one step toward its nearest work-area corner.
    ///
    /// Does nothing unless floating and not being dragged. Returns whether
    /// the window moved.
    pub fn step_motion(&mut self, dt: f64, speed: f64) -> bool {
        if !self.floating || self.dragging {
            return false;
        }
        let host = self.surfaces.host_mut();
        let window = host.bounds();
        let next = geometry::step_toward_corner(
            window,
            host.work_area(),
            self.metrics.padding as i32,
            speed,
            dt,
        );
        if next == window {
            return false;
        }
        host.set_bounds(next);
        true
    }
}
