//! Tests for the full validation pipeline.

use super::*;

#[test]
fn default_config_validates() {
    let config = GlideConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_header_height_too_large() {
    let mut config = GlideConfig::default();
    config.layout.header_height = 500;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("layout.header_height"));
}

#[test]
fn catches_padding_ratio_out_of_range() {
    let mut config = GlideConfig::default();
    config.layout.padding_ratio = 0.5;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("layout.padding_ratio"));
}

#[test]
fn catches_nan_speed() {
    let mut config = GlideConfig::default();
    config.floating.speed = f64::NAN;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("floating.speed"));
}

#[test]
fn catches_zero_tick() {
    let mut config = GlideConfig::default();
    config.floating.tick_ms = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("floating.tick_ms"));
}

#[test]
fn catches_empty_home_url() {
    let mut config = GlideConfig::default();
    config.startup.home_url = "  ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("startup.home_url"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = GlideConfig::default();
    config.floating.width = 10;
    config.window.height = 10;
    config.keybinds.quit = "Cmd+F".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("floating.width"));
    assert!(err.contains("window.height"));
    assert!(err.contains("duplicate keybind"));
}
