//! IPC protocol between Rust and the JavaScript running in each surface.
//!
//! Messages flow in both directions:
//! - **JS -> Rust**: JavaScript calls `window.glide.ipc.send(kind, payload)`,
//!   which posts `{kind, payload}` JSON to the `ipc_handler` of the WebView.
//! - **Rust -> JS**: Rust calls `webview.evaluate_script(...)` to invoke
//!   `window.glide.ipc._dispatch(kind, payload)`.

use serde::{Deserialize, Serialize};

/// A typed IPC message from JavaScript to Rust.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IpcMessage {
    /// The message type / command name.
    pub kind: String,
    /// The message payload, `null` when absent.
    #[serde(default)]
    pub payload: serde_json::Value,
}

impl IpcMessage {
    /// Parse an IPC message from a raw JSON string (from JS postMessage).
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    /// String field of an object payload.
    pub fn payload_str(&self, field: &str) -> Option<&str> {
        self.payload.get(field).and_then(serde_json::Value::as_str)
    }
}

/// JavaScript snippet that sets up the IPC bridge on the JS side.
/// Injected as an initialization script into every WebView.
pub const IPC_INIT_SCRIPT: &str = r#"
(function() {
    window.glide = window.glide || {};
    window.glide.ipc = {
        send: function(kind, payload) {
            window.ipc.postMessage(JSON.stringify({
                kind: kind,
                payload: payload === undefined ? null : payload
            }));
        },
        _handlers: {},
        on: function(kind, callback) {
            this._handlers[kind] = callback;
        },
        _dispatch: function(kind, payload) {
            var handler = this._handlers[kind];
            if (handler) {
                handler(payload);
            }
        }
    };
})();
"#;

/// Extra initialization script for tab surfaces. Reports the hovered link,
/// the page favicon, and same-document navigations that wry does not
/// surface as page loads.
pub const CONTENT_BRIDGE_SCRIPT: &str = r#"
(function() {
    if (window.top !== window) { return; }
    var send = function(kind, payload) { window.glide.ipc.send(kind, payload); };

    var hovered = "";
    document.addEventListener("mouseover", function(e) {
        var a = e.target && e.target.closest ? e.target.closest("a[href]") : null;
        var url = a ? a.href : "";
        if (url !== hovered) {
            hovered = url;
            send("hovered-link", { url: url });
        }
    }, true);
    document.addEventListener("mouseleave", function() {
        if (hovered !== "") {
            hovered = "";
            send("hovered-link", { url: "" });
        }
    });

    var reportFavicon = function() {
        var link = document.querySelector("link[rel~='icon']");
        var url = link ? link.href : (location.origin + "/favicon.ico");
        if (location.protocol === "http:" || location.protocol === "https:") {
            send("favicon", { url: url });
        }
    };
    if (document.readyState === "loading") {
        document.addEventListener("DOMContentLoaded", reportFavicon);
    } else {
        reportFavicon();
    }

    var inPage = function() { send("in-page-navigation", { url: location.href }); };
    ["pushState", "replaceState"].forEach(function(name) {
        var original = history[name];
        history[name] = function() {
            var result = original.apply(this, arguments);
            inPage();
            return result;
        };
    });
    window.addEventListener("popstate", inPage);
    window.addEventListener("hashchange", inPage);
})();
"#;

/// Forwards modifier shortcuts and Escape to Rust. A focused webview
/// swallows key events before winit sees them.
pub const SHORTCUT_BRIDGE_SCRIPT: &str = r#"
(function() {
    document.addEventListener("keydown", function(e) {
        if (!e.isTrusted) { return; }
        if (!(e.ctrlKey || e.metaKey || e.key === "Escape")) { return; }
        window.glide.ipc.send("shortcut", {
            key: e.key,
            ctrl: e.ctrlKey,
            alt: e.altKey,
            shift: e.shiftKey,
            meta: e.metaKey
        });
    }, true);
})();
"#;

/// A key press forwarded by [`SHORTCUT_BRIDGE_SCRIPT`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortcutPress {
    pub key: String,
    #[serde(default)]
    pub ctrl: bool,
    #[serde(default)]
    pub alt: bool,
    #[serde(default)]
    pub shift: bool,
    #[serde(default)]
    pub meta: bool,
}

/// Generate a JS snippet that dispatches a message to the JS IPC handler.
pub fn js_dispatch_message(kind: &str, payload: &serde_json::Value) -> String {
    let payload_json = serde_json::to_string(payload).unwrap_or_else(|_| "null".to_string());
    format!(
        "window.glide.ipc._dispatch({}, {});",
        serde_json::to_string(kind).unwrap_or_else(|_| "\"unknown\"".to_string()),
        payload_json,
    )
}

/// Script running an in-page search. `fresh` drops the current selection
/// so the search restarts from the top of the document.
pub fn js_find_in_page(query: &str, fresh: bool) -> String {
    let query = serde_json::to_string(query).unwrap_or_else(|_| "\"\"".to_string());
    let reset = if fresh {
        "window.getSelection().removeAllRanges();"
    } else {
        ""
    };
    format!("{reset}if ({query}.length) {{ window.find({query}, false, false, true); }}")
}

pub const JS_STOP_FIND: &str = "window.getSelection().removeAllRanges();";
pub const JS_GO_BACK: &str = "history.back();";
pub const JS_GO_FORWARD: &str = "history.forward();";
pub const JS_RELOAD: &str = "location.reload();";

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_message_with_payload() {
        let msg = IpcMessage::from_json(r#"{"kind":"favicon","payload":{"url":"https://a.test/i.png"}}"#)
            .unwrap();
        assert_eq!(msg.kind, "favicon");
        assert_eq!(msg.payload_str("url"), Some("https://a.test/i.png"));
    }

    #[test]
    fn parse_message_without_payload() {
        let msg = IpcMessage::from_json(r#"{"kind":"toggle-float"}"#).unwrap();
        assert_eq!(msg.payload, serde_json::Value::Null);
        assert_eq!(msg.payload_str("url"), None);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(IpcMessage::from_json("{").is_none());
        assert!(IpcMessage::from_json(r#"{"payload":1}"#).is_none());
    }

    #[test]
    fn dispatch_script_escapes_arguments() {
        let js = js_dispatch_message("peek-url", &json!({ "url": "https://x.test/\"q\"" }));
        assert_eq!(
            js,
            r#"window.glide.ipc._dispatch("peek-url", {"url":"https://x.test/\"q\""});"#
        );
    }

    #[test]
    fn find_script_fresh_resets_selection() {
        let fresh = js_find_in_page("needle", true);
        assert!(fresh.starts_with("window.getSelection().removeAllRanges();"));
        assert!(fresh.contains(r#"window.find("needle", false, false, true)"#));

        let next = js_find_in_page("needle", false);
        assert!(!next.contains("removeAllRanges"));
    }

    #[test]
    fn find_script_quotes_query() {
        let js = js_find_in_page("a\"); alert(1); (\"", false);
        assert!(js.contains(r#""a\"); alert(1); (\"""#));
    }

    #[test]
    fn init_scripts_use_glide_namespace() {
        assert!(IPC_INIT_SCRIPT.contains("window.glide.ipc"));
        assert!(CONTENT_BRIDGE_SCRIPT.contains("hovered-link"));
        assert!(CONTENT_BRIDGE_SCRIPT.contains("in-page-navigation"));
        assert!(SHORTCUT_BRIDGE_SCRIPT.contains("\"shortcut\""));
        assert!(SHORTCUT_BRIDGE_SCRIPT.contains("e.isTrusted"));
    }

    #[test]
    fn shortcut_payload_parses() {
        let press: ShortcutPress =
            serde_json::from_value(json!({ "key": "f", "meta": true, "shift": false })).unwrap();
        assert_eq!(press.key, "f");
        assert!(press.meta);
        assert!(!press.ctrl);
    }
}
