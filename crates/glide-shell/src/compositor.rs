//! Keeps the host's attached surfaces and the shell's [`ViewStack`] in step.

use glide_common::types::SurfaceId;

use crate::host::HostWindow;
use crate::messages::ChromeMessage;
use crate::stack::ViewStack;

/// Owns the host window together with the mirrored attach order.
///
/// All attach/detach/raise calls go through here so the stack always
/// reflects what the host shows.
pub struct Compositor<H: HostWindow> {
    host: H,
    stack: ViewStack,
}

impl<H: HostWindow> Compositor<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            stack: ViewStack::new(),
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn stack(&self) -> &ViewStack {
        &self.stack
    }

    pub fn is_attached(&self, surface: SurfaceId) -> bool {
        self.stack.contains(surface)
    }

    pub fn attach(&mut self, surface: SurfaceId) {
        if self.stack.attach(surface) {
            self.host.attach(surface);
        }
    }

    pub fn detach(&mut self, surface: SurfaceId) {
        if self.stack.detach(surface) {
            self.host.detach(surface);
        }
    }

    pub fn raise(&mut self, surface: SurfaceId) {
        if self.stack.raise(surface) {
            self.host.raise(surface);
        }
    }

    pub fn attach_and_raise(&mut self, surface: SurfaceId) {
        self.attach(surface);
        self.raise(surface);
    }

    pub fn send(&mut self, surface: SurfaceId, message: &ChromeMessage) {
        self.host.send(surface, message);
    }
}
