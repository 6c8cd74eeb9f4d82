//! Fixed-interval driver for floating-mode corner snapping.

use std::time::{Duration, Instant};

use crate::host::HostWindow;
use crate::manager::WindowManager;

/// Drives [`WindowManager::step_motion`] from the event loop.
#[derive(Debug, Clone)]
pub struct MotionLoop {
    speed: f64,
    interval: Duration,
    last_tick: Option<Instant>,
}

impl MotionLoop {
    pub fn new(speed: f64, interval: Duration) -> Self {
        Self {
            speed,
            interval,
            last_tick: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// When the next tick is due.
    pub fn next_deadline(&self, now: Instant) -> Instant {
        self.last_tick.map_or(now, |t| t + self.interval)
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_deadline(now)
    }

    /// Advance one tick. The previous-tick instant is always updated, even
    /// when the manager is docked or being dragged, so resuming never sees a
    /// stale delta. Returns whether the window moved.
    pub fn tick<H: HostWindow>(&mut self, manager: &mut WindowManager<H>, now: Instant) -> bool {
        let dt = self
            .last_tick
            .map(|prev| now.saturating_duration_since(prev).as_secs_f64())
            .unwrap_or(0.0);
        self.last_tick = Some(now);
        manager.step_motion(dt, self.speed)
    }
}
