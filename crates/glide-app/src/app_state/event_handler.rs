//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, MouseButton, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::Key;
use winit::window::WindowId;

use glide_platform::{normalize_winit_key, KeyCombo};

use super::core::GlideApp;

impl ApplicationHandler for GlideApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.manager.is_some() {
            return;
        }

        if !self.initialize_window(event_loop) {
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    if let Some(manager) = self.manager.as_mut() {
                        manager.relayout();
                    }
                }
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(manager) = self.manager.as_mut() {
                    manager.relayout();
                }
            }

            // A native drag ends with the button release or a focus change;
            // the chrome's own mouseup may never arrive.
            WindowEvent::MouseInput {
                state: ElementState::Released,
                button: MouseButton::Left,
                ..
            }
            | WindowEvent::Focused(false) => {
                self.end_window_drag();
            }

            WindowEvent::Moved(_) => {
                if self.manager.as_ref().is_some_and(|m| m.is_dragging()) {
                    self.drag_watch.touch(std::time::Instant::now());
                }
            }

            WindowEvent::ModifiersChanged(new_modifiers) => {
                self.modifiers = new_modifiers.state();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                self.handle_keyboard_input(event);
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            self.shutdown();
            event_loop.exit();
            return;
        }
        self.poll_and_schedule(event_loop);
    }
}

impl GlideApp {
    /// Resolve a key press against the keybind registry and dispatch it.
    fn handle_keyboard_input(&mut self, event: KeyEvent) {
        let KeyEvent {
            logical_key, state, ..
        } = event;
        if state != ElementState::Pressed {
            return;
        }

        let key_name = match &logical_key {
            Key::Named(named) => format!("{named:?}"),
            Key::Character(c) => c.to_string(),
            _ => return,
        };

        let combo = KeyCombo::from_winit(
            self.modifiers.control_key(),
            self.modifiers.alt_key(),
            self.modifiers.shift_key(),
            self.modifiers.super_key(),
            normalize_winit_key(&key_name),
        );
        if let Some(action) = self.registry.lookup(&combo) {
            self.dispatch(action);
        }
    }
}
