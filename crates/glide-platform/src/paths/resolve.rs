use std::path::PathBuf;

use glide_common::PlatformError;

pub(super) const APP_NAME: &str = "glide";

/// Platform configuration directory for Glide.
///
/// - macOS: `~/Library/Application Support/glide`
/// - Linux: `$XDG_CONFIG_HOME/glide` (defaults to `~/.config/glide`)
/// - Windows: `%APPDATA%\glide`
pub fn config_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::config_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine config directory".into()))?
        .join(APP_NAME))
}

/// Platform data directory for Glide.
pub fn data_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::data_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine data directory".into()))?
        .join(APP_NAME))
}

/// `data_dir()/logs`.
pub fn log_dir() -> Result<PathBuf, PlatformError> {
    Ok(data_dir()?.join("logs"))
}

/// `log_dir()/crash-reports`.
pub fn crash_report_dir() -> Result<PathBuf, PlatformError> {
    Ok(log_dir()?.join("crash-reports"))
}
