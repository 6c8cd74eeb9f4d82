//! Webview event draining and the floating-mode motion tick.

use std::time::Instant;

use glide_common::actions::Action;
use glide_common::errors::ShellError;
use glide_common::types::{SurfaceId, TabId};
use glide_platform::{normalize_winit_key, KeyCombo};
use glide_shell::{ContentEvent, HostWindow};
use glide_webview::{translate_event, ShortcutPress, Translated};
use winit::event_loop::{ActiveEventLoop, ControlFlow};

use super::core::GlideApp;
use super::types::POLL_INTERVAL;

impl GlideApp {
    /// Run polling and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        if now.duration_since(self.last_poll) >= POLL_INTERVAL {
            self.last_poll = now;
            self.poll_webview_events();
        }

        if self.drag_watch.is_idle(now) {
            self.end_window_drag();
        }

        let mut wake = Instant::now() + POLL_INTERVAL;
        if let Some(manager) = self.manager.as_mut() {
            if self.motion.is_due(now) {
                self.motion.tick(manager, now);
            }
            if manager.is_floating() {
                wake = wake.min(self.motion.next_deadline(now));
            }
        }

        event_loop.set_control_flow(ControlFlow::WaitUntil(wake));
    }

    /// Drain the webview sink and route each event to the shell.
    fn poll_webview_events(&mut self) {
        let Some(manager) = self.manager.as_mut() else {
            return;
        };
        let events = manager.host().webviews().drain_events();
        if events.is_empty() {
            return;
        }

        let translated: Vec<Translated> = events
            .into_iter()
            .filter_map(|event| translate_event(manager.host_mut().webviews_mut(), event))
            .collect();

        for item in translated {
            match item {
                Translated::Content(id, event) => self.handle_content(id, event),
                Translated::Command(cmd) => self.dispatch_command(cmd),
                Translated::Shortcut(surface, press) => {
                    if let Some(action) = self.shortcut_action(surface, &press) {
                        self.dispatch(action);
                    }
                }
            }
        }
    }

    /// Resolve a forwarded shortcut. Presses from tab content only reach
    /// actions a page is allowed to trigger.
    fn shortcut_action(&self, surface: SurfaceId, press: &ShortcutPress) -> Option<Action> {
        let action = self.registry.lookup(&shortcut_combo(press))?;
        if matches!(surface, SurfaceId::Tab(_)) && !action.allowed_from_page() {
            tracing::warn!(%surface, action = action.label(), "page shortcut dropped");
            return None;
        }
        Some(action)
    }

    fn handle_content(&mut self, id: TabId, event: ContentEvent) {
        let Some(manager) = self.manager.as_mut() else {
            return;
        };
        if !manager.host().is_alive() {
            return;
        }
        match manager.handle_content_event(id, event) {
            Ok(()) => {}
            // Late events for a tab that was already removed.
            Err(ShellError::TabNotFound(_)) => {
                tracing::debug!(tab_id = %id, "content event for closed tab dropped");
            }
            Err(e) => tracing::warn!(tab_id = %id, "content event failed: {e}"),
        }
    }
}

/// Key combination of a shortcut forwarded by a focused webview.
fn shortcut_combo(press: &ShortcutPress) -> KeyCombo {
    KeyCombo::from_winit(
        press.ctrl,
        press.alt,
        press.shift,
        press.meta,
        normalize_winit_key(&press.key),
    )
}
