use std::path::PathBuf;

use clap::Parser;

/// Glide: a browser shell with a floating picture-in-picture mode.
#[derive(Parser, Debug)]
#[command(name = "glide", version, about)]
pub struct Args {
    /// URL to open in the first tab instead of the configured home page.
    pub url: Option<String>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error) or a full
    /// tracing directive.
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
