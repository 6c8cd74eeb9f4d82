mod app_state;
mod cli;

use glide_config::schema::GlideConfig;
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

const DEFAULT_LOG_DIRECTIVE: &str = "glide=info";

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let path = glide_platform::crash_report::write_crash_report(info);

        eprintln!("\n--- Glide crashed ---");
        if let Some(p) = &path {
            eprintln!("Crash report written to: {}", p.display());
        }
        eprintln!("---------------------\n");

        default_hook(info);
    }));
}

/// Config from `--config` when given, otherwise from the platform default
/// path. Falls back to defaults so a broken file never blocks startup.
fn load_config(args: &cli::Args) -> (GlideConfig, Option<String>) {
    let loaded = match &args.config {
        Some(path) => glide_config::load_config_from(path),
        None => glide_config::load_config(),
    };
    match loaded {
        Ok(config) => (config, None),
        Err(e) => (GlideConfig::default(), Some(e.to_string())),
    }
}

/// `--log-level` wins over the config file.
fn log_directive(args: &cli::Args, config: &GlideConfig) -> String {
    match &args.log_level {
        Some(level) if level.contains('=') => level.clone(),
        Some(level) => format!("glide={level}"),
        None => config.logging.level.directive().to_string(),
    }
}

fn init_tracing(directive: &str) {
    let directive = directive
        .parse()
        .or_else(|_| DEFAULT_LOG_DIRECTIVE.parse());
    let filter = match directive {
        Ok(d) => EnvFilter::from_default_env().add_directive(d),
        Err(_) => EnvFilter::from_default_env(),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() {
    install_panic_hook();

    let args = cli::parse();

    // Logging needs the config's level, so config errors are reported once
    // the subscriber exists.
    let (config, config_error) = load_config(&args);
    init_tracing(&log_directive(&args, &config));

    tracing::info!("Glide v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(path) = &args.config {
        tracing::info!(path = %path.display(), "Using config override");
    }
    if let Some(e) = config_error {
        tracing::warn!("Config load failed, using defaults: {e}");
    }

    if let Err(e) = glide_platform::ensure_dirs() {
        tracing::warn!("Failed to create directories: {e}");
    }

    let registry = glide_platform::KeybindRegistry::from_config(&config.keybinds);
    tracing::info!("Keybind registry loaded ({} bindings)", registry.len());

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            std::process::exit(1);
        }
    };
    let mut app = app_state::GlideApp::new(config, registry, args.url);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use glide_config::schema::LogLevel;

    fn args(argv: &[&str]) -> cli::Args {
        cli::Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn log_level_flag_overrides_config() {
        let mut config = GlideConfig::default();
        config.logging.level = LogLevel::Error;
        assert_eq!(
            log_directive(&args(&["glide", "--log-level", "debug"]), &config),
            "glide=debug"
        );
    }

    #[test]
    fn full_directive_passes_through() {
        let config = GlideConfig::default();
        assert_eq!(
            log_directive(&args(&["glide", "--log-level", "wry=trace"]), &config),
            "wry=trace"
        );
    }

    #[test]
    fn config_level_used_without_flag() {
        let mut config = GlideConfig::default();
        config.logging.level = LogLevel::Warning;
        assert_eq!(log_directive(&args(&["glide"]), &config), "glide=warn");
    }

    #[test]
    fn missing_config_override_falls_back_to_defaults() {
        let (config, error) = load_config(&args(&[
            "glide",
            "--config",
            "/tmp/glide-no-such-dir/config.toml",
        ]));
        assert_eq!(config.window.title, "Glide");
        assert!(error.unwrap().contains("not found"));
    }
}
