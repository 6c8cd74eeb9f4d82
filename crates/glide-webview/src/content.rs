//! Local content serving via the `glide://` custom protocol.
//!
//! The chrome surfaces (title bar, URL peek, find bar, overlay) are plain
//! HTML pages bundled with the app and loaded from `glide://localhost/`
//! without a local HTTP server.

use std::borrow::Cow;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use glide_common::types::SurfaceId;

pub const PROTOCOL: &str = "glide";

/// Serves local files from a base directory via custom protocol.
///
/// A request for `glide://localhost/find/index.html` resolves to
/// `{base_dir}/find/index.html`.
pub struct ContentProvider {
    base_dir: PathBuf,
    /// In-memory overrides: path -> (mime, data).
    overrides: HashMap<String, (String, Vec<u8>)>,
}

impl ContentProvider {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            overrides: HashMap::new(),
        }
    }

    /// Register an in-memory asset override.
    pub fn add_override(
        &mut self,
        path: impl Into<String>,
        mime: impl Into<String>,
        data: impl Into<Vec<u8>>,
    ) {
        self.overrides
            .insert(path.into(), (mime.into(), data.into()));
    }

    /// Resolve a request path to MIME type and content bytes.
    pub fn resolve(&self, path: &str) -> Option<(Cow<'_, str>, Cow<'_, [u8]>)> {
        let clean = path.trim_start_matches('/');
        let clean = clean.split(['?', '#']).next().unwrap_or_default();

        if let Some((mime, data)) = self.overrides.get(clean) {
            return Some((Cow::Borrowed(mime.as_str()), Cow::Borrowed(data.as_slice())));
        }

        let file_path = self.base_dir.join(clean);

        // Canonicalize both sides so `..` and symlinks cannot escape the base.
        let canonical_base = std::fs::canonicalize(&self.base_dir).ok()?;
        let canonical_file = std::fs::canonicalize(&file_path).ok()?;
        if !canonical_file.starts_with(&canonical_base) {
            return None;
        }

        let data = std::fs::read(&canonical_file).ok()?;
        let mime = mime_from_extension(&file_path);
        Some((Cow::Owned(mime.to_string()), Cow::Owned(data)))
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

/// Strip the scheme and host from a `glide://` request URI.
pub fn request_path(uri: &str) -> &str {
    uri.strip_prefix("glide://localhost/")
        .or_else(|| uri.strip_prefix("glide://localhost"))
        .or_else(|| uri.strip_prefix("glide:///"))
        .or_else(|| uri.strip_prefix("glide://"))
        // WebView2 rewrites custom protocols to http://<scheme>.localhost
        .or_else(|| uri.strip_prefix("http://glide.localhost/"))
        .unwrap_or("")
}

/// Start page of a chrome surface. Tabs load remote content and have none.
pub fn chrome_url(surface: SurfaceId) -> Option<String> {
    surface
        .asset_name()
        .map(|name| format!("{PROTOCOL}://localhost/{name}/index.html"))
}

/// Guess MIME type from file extension.
fn mime_from_extension(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") | Some("htm") => "text/html",
        Some("css") => "text/css",
        Some("js") | Some("mjs") => "application/javascript",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("ttf") => "font/ttf",
        Some("webp") => "image/webp",
        Some("txt") => "text/plain",
        _ => "application/octet-stream",
    }
}
