use std::fs;

use glide_common::PlatformError;

use super::resolve::{config_dir, crash_report_dir, data_dir};

/// Creates the config, data, and crash report directories if missing.
pub fn ensure_dirs() -> Result<(), PlatformError> {
    for dir in [config_dir()?, data_dir()?, crash_report_dir()?] {
        fs::create_dir_all(&dir)
            .map_err(|e| PlatformError::PathError(format!("{}: {e}", dir.display())))?;
    }
    Ok(())
}
