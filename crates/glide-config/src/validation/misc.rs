//! Validation for smaller config sections: window and startup.

use crate::schema::GlideConfig;

use super::helpers::validate_range;

pub(crate) fn validate_window(errors: &mut Vec<String>, config: &GlideConfig) {
    validate_range(errors, "window.width", config.window.width, 320, 16384);
    validate_range(errors, "window.height", config.window.height, 240, 16384);
}

pub(crate) fn validate_startup(errors: &mut Vec<String>, config: &GlideConfig) {
    if config.startup.home_url.trim().is_empty() {
        errors.push("startup.home_url must not be empty".into());
    }
}
