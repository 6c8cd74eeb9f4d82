pub mod actions;
pub mod errors;
pub mod types;

pub use actions::Action;
pub use errors::{ConfigError, GlideError, PlatformError, ShellError};
pub use types::{Rect, Size, SurfaceId, TabId};

pub type Result<T> = std::result::Result<T, GlideError>;
