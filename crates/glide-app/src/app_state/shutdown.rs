//! Graceful shutdown: dispose tabs, then destroy the chrome webviews.

use super::core::GlideApp;

// =============================================================================
// SHUTDOWN
// =============================================================================

impl GlideApp {
    /// Tear down every surface. Safe to call more than once.
    ///
    /// Tabs go first so the find session and active tab are cleared through
    /// the manager; the chrome webviews are destroyed afterwards.
    pub(super) fn shutdown(&mut self) {
        let Some(mut manager) = self.manager.take() else {
            return;
        };
        tracing::info!("Initiating graceful shutdown");

        manager.close_all();
        manager.host_mut().destroy_all();

        tracing::info!("Graceful shutdown complete");
    }
}

// =============================================================================
// TESTS
// =============================================================================
