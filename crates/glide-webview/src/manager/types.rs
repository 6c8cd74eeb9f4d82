/// Configuration for creating a new WebView instance.
#[derive(Debug, Clone)]
pub struct WebViewConfig {
    pub url: String,
    /// Whether the WebView background should be transparent.
    pub transparent: bool,
    /// Whether to enable dev tools (always on in debug builds).
    pub devtools: bool,
    pub user_agent: Option<String>,
    pub clipboard: bool,
    pub autoplay: bool,
    /// Inject the content bridge (hovered link, favicon, in-page
    /// navigation). Only tab surfaces want it.
    pub content_bridge: bool,
    /// Start hidden. Detached surfaces are created this way.
    pub visible: bool,
}

impl Default for WebViewConfig {
    fn default() -> Self {
        Self {
            url: "about:blank".to_string(),
            transparent: false,
            devtools: cfg!(debug_assertions),
            user_agent: None,
            clipboard: true,
            autoplay: true,
            content_bridge: false,
            visible: false,
        }
    }
}

impl WebViewConfig {
    /// A bundled chrome page: transparent, no content bridge.
    pub fn chrome(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            transparent: true,
            ..Default::default()
        }
    }

    /// A tab surface loading remote content.
    pub fn tab(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            content_bridge: true,
            ..Default::default()
        }
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }
}
