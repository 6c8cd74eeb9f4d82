//! GlideApp struct definition and constructor.

use std::time::{Duration, Instant};

use glide_config::schema::GlideConfig;
use glide_platform::KeybindRegistry;
use glide_shell::{MotionLoop, WindowManager};

use super::host::WinitHost;
use super::types::{DragWatch, TabIdAllocator};

/// Top-level application state.
pub struct GlideApp {
    pub(super) config: GlideConfig,
    pub(super) registry: KeybindRegistry,

    /// Created in `resumed`, once a window exists.
    pub(super) manager: Option<WindowManager<WinitHost>>,
    pub(super) motion: MotionLoop,
    pub(super) tab_ids: TabIdAllocator,
    pub(super) drag_watch: DragWatch,

    /// URL from the command line, consumed by the first tab.
    pub(super) initial_url: Option<String>,

    // Modifier tracking (winit sends these separately)
    pub(super) modifiers: winit::keyboard::ModifiersState,

    pub(super) should_exit: bool,
    pub(super) last_poll: Instant,
}

impl GlideApp {
    pub fn new(config: GlideConfig, registry: KeybindRegistry, initial_url: Option<String>) -> Self {
        let motion = MotionLoop::new(
            config.floating.speed,
            Duration::from_millis(u64::from(config.floating.tick_ms)),
        );
        Self {
            config,
            registry,
            manager: None,
            motion,
            tab_ids: TabIdAllocator::default(),
            drag_watch: DragWatch::default(),
            initial_url,
            modifiers: winit::keyboard::ModifiersState::empty(),
            should_exit: false,
            last_poll: Instant::now(),
        }
    }

    /// URL for a tab opened without an explicit one.
    pub(super) fn home_url(&self) -> &str {
        &self.config.startup.home_url
    }
}
