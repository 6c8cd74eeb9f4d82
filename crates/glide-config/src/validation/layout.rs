//! Layout and floating-mode validation.

use crate::schema::GlideConfig;

use super::helpers::{validate_range, validate_range_f64};

/// Validate docked-mode surface geometry.
pub(crate) fn validate_layout(errors: &mut Vec<String>, config: &GlideConfig) {
    let layout = &config.layout;
    validate_range(errors, "layout.header_height", layout.header_height, 0, 200);
    validate_range_f64(errors, "layout.padding_ratio", layout.padding_ratio, 0.0, 0.2);
    validate_range(errors, "layout.find_bar_width", layout.find_bar_width, 100, 1000);
    validate_range(errors, "layout.find_bar_height", layout.find_bar_height, 20, 200);
    validate_range(errors, "layout.peek_width", layout.peek_width, 100, 2000);
    validate_range(errors, "layout.peek_height", layout.peek_height, 12, 100);
}

/// Validate floating window size and motion tuning.
pub(crate) fn validate_floating(errors: &mut Vec<String>, config: &GlideConfig) {
    let floating = &config.floating;
    validate_range(errors, "floating.width", floating.width, 160, 1920);
    validate_range(errors, "floating.height", floating.height, 90, 1080);
    validate_range_f64(errors, "floating.speed", floating.speed, 0.5, 60.0);
    validate_range(errors, "floating.tick_ms", floating.tick_ms, 4, 100);
}
