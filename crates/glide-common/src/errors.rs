use std::path::PathBuf;

use crate::types::TabId;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("path error: {0}")]
    PathError(String),

    #[error("no display detected")]
    NoDisplay,

    #[error("window error: {0}")]
    WindowError(String),

    #[error("not supported: {0}")]
    NotSupported(String),
}

/// Failures raised by the window/tab composition layer.
///
/// `TabNotFound`, `DuplicateTab` and `WindowUnavailable` are caller bugs:
/// they are returned, never retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShellError {
    #[error("tab not found: {0}")]
    TabNotFound(TabId),

    #[error("duplicate tab id: {0}")]
    DuplicateTab(TabId),

    #[error("owning window is not available")]
    WindowUnavailable,

    #[error("host error: {0}")]
    Host(String),
}

#[derive(Debug, thiserror::Error)]
pub enum GlideError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Shell(#[from] ShellError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("webview error: {0}")]
    WebView(String),

    #[error("{0}")]
    Other(String),
}
