//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Glide Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[window]
# title = "Glide"
# width = 1280
# height = 800
# frameless = true

[layout]
# header_height = 76         # 0-200
# padding_ratio = 0.02       # 0.0-0.2, fraction of display height
# find_bar_width = 360       # 100-1000
# find_bar_height = 52       # 20-200
# peek_width = 480           # 100-2000
# peek_height = 26           # 12-100

[floating]
# width = 480                # 160-1920
# height = 300               # 90-1080
# speed = 10.0               # 0.5-60.0, corner approach rate per second
# tick_ms = 16               # 4-100

[startup]
# home_url = "https://duckduckgo.com"
# assets_dir = "assets/chrome"

[keybinds]
# find_open = "Cmd+F"
# find_close = "Escape"
# toggle_float = "Cmd+Shift+F"
# new_tab = "Cmd+T"
# close_tab = "Cmd+W"
# reload = "Cmd+R"
# quit = "Cmd+Q"

[logging]
# level = "INFO"             # TRACE, DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
