//! Startup behavior configuration types.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StartupConfig {
    /// URL opened in the first tab when none is given on the command line.
    pub home_url: String,
    /// Directory holding the bundled chrome pages (titlebar/, peek/, find/,
    /// overlay/), relative to the working directory.
    pub assets_dir: String,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            home_url: "https://duckduckgo.com".into(),
            assets_dir: "assets/chrome".into(),
        }
    }
}
