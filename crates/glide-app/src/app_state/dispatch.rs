//! Action dispatch: routes keybind actions and chrome commands to the
//! window manager.

use glide_common::actions::Action;
use glide_common::errors::ShellError;
use glide_common::types::SurfaceId;
use glide_shell::{ChromeMessage, HostWindow, ShellCommand};

use super::core::GlideApp;

impl GlideApp {
    /// Dispatch a resolved keybind [`Action`].
    pub(super) fn dispatch(&mut self, action: Action) {
        if action == Action::Quit {
            tracing::info!("Quit requested");
            self.should_exit = true;
            return;
        }
        if action == Action::NewTab {
            let url = self.home_url().to_string();
            self.open_tab(&url);
            return;
        }

        let Some(manager) = self.manager.as_mut() else {
            return;
        };
        let result = match action {
            Action::CloseTab => match manager.active() {
                Some(id) => manager.remove_tab(id).map(|()| {
                    manager
                        .host_mut()
                        .send(SurfaceId::TitleBar, &ChromeMessage::TabClosed { tab_id: id });
                }),
                None => Ok(()),
            },
            Action::Reload => match manager.active() {
                Some(id) => manager.reload(id),
                None => Ok(()),
            },
            Action::FindOpen => {
                manager.open_find();
                Ok(())
            }
            Action::FindClose => {
                manager.close_find();
                Ok(())
            }
            Action::ToggleFloat => manager.toggle_float().map(|_| ()),
            Action::NewTab | Action::Quit | Action::None => Ok(()),
        };
        if let Err(e) = result {
            tracing::error!(action = action.label(), "Action failed: {e}");
        }
    }

    /// Apply a command posted by one of the chrome surfaces.
    pub(super) fn dispatch_command(&mut self, command: ShellCommand) {
        tracing::debug!(?command, "chrome command");
        if let ShellCommand::NewTab { id, .. } = &command {
            self.tab_ids.observe(*id);
        }
        let home = self.home_url().to_string();

        let Some(manager) = self.manager.as_mut() else {
            return;
        };
        let result: Result<(), ShellError> = match command {
            ShellCommand::NewTab { id, url } => {
                manager.create_tab(id, url.as_deref().unwrap_or(&home))
            }
            ShellCommand::ActivateTab { id } => manager.activate(id),
            ShellCommand::CloseTab { id } => manager.remove_tab(id),
            ShellCommand::Navigate { id, url } => manager.navigate(id, &url),
            ShellCommand::GoBack { id } => manager.go_back(id),
            ShellCommand::GoForward { id } => manager.go_forward(id),
            ShellCommand::Reload { id } => manager.reload(id),
            ShellCommand::FindQuery { text } => {
                manager.set_find_query(text);
                Ok(())
            }
            ShellCommand::CloseFind => {
                manager.close_find();
                Ok(())
            }
            ShellCommand::ToggleFloat => manager.toggle_float().map(|_| ()),
            ShellCommand::WindowDrag { dragging } => {
                manager.set_dragging(dragging);
                if dragging {
                    self.drag_watch.touch(std::time::Instant::now());
                    if let Err(e) = manager.host().window().drag_window() {
                        tracing::warn!("Native window drag unavailable: {e}");
                    }
                } else {
                    self.drag_watch.clear();
                }
                Ok(())
            }
        };
        if let Err(e) = result {
            tracing::error!("Chrome command failed: {e}");
        }
    }

    /// Clear the dragging flag so the motion loop resumes.
    pub(super) fn end_window_drag(&mut self) {
        self.drag_watch.clear();
        if let Some(manager) = self.manager.as_mut() {
            if manager.is_dragging() {
                manager.set_dragging(false);
                tracing::debug!("window drag ended");
            }
        }
    }
}
