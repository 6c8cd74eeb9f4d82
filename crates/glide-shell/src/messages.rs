//! Messages flowing between content surfaces, the shell, and the chrome.

use glide_common::types::TabId;
use serde::{Deserialize, Serialize};

/// Navigation state of a tab after a navigation event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationState {
    pub url: String,
    pub can_go_back: bool,
    pub can_go_forward: bool,
}

/// Lifecycle events reported by a tab's content surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentEvent {
    TitleUpdated(String),
    FaviconUpdated(String),
    /// Any committed navigation, including in-page and frame navigations.
    Navigated(NavigationState),
    /// Link under the pointer. Empty when the pointer left the link.
    HoveredLinkChanged(String),
}

/// Messages the shell pushes into chrome surfaces.
///
/// Serialized as `{"kind": "...", "payload": {...}}`; the JS side of the
/// chrome dispatches on `kind`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "kebab-case")]
pub enum ChromeMessage {
    #[serde(rename_all = "camelCase")]
    TabTitle { tab_id: TabId, title: String },
    #[serde(rename_all = "camelCase")]
    TabFavicon { tab_id: TabId, url: String },
    #[serde(rename_all = "camelCase")]
    TabNavigation {
        tab_id: TabId,
        can_go_back: bool,
        can_go_forward: bool,
        url: String,
    },
    /// A tab created by a shortcut rather than by the chrome itself.
    #[serde(rename_all = "camelCase")]
    TabOpened { tab_id: TabId, url: String },
    #[serde(rename_all = "camelCase")]
    TabClosed { tab_id: TabId },
    PeekUrl { url: String },
    OpenFind,
    FloatChanged { floating: bool },
}

impl ChromeMessage {
    pub fn kind(&self) -> &'static str {
        match self {
            ChromeMessage::TabTitle { .. } => "tab-title",
            ChromeMessage::TabFavicon { .. } => "tab-favicon",
            ChromeMessage::TabNavigation { .. } => "tab-navigation",
            ChromeMessage::TabOpened { .. } => "tab-opened",
            ChromeMessage::TabClosed { .. } => "tab-closed",
            ChromeMessage::PeekUrl { .. } => "peek-url",
            ChromeMessage::OpenFind => "open-find",
            ChromeMessage::FloatChanged { .. } => "float-changed",
        }
    }

    /// The `payload` half of the wire form, `null` for unit messages.
    pub fn payload(&self) -> serde_json::Value {
        match serde_json::to_value(self) {
            Ok(serde_json::Value::Object(mut map)) => {
                map.remove("payload").unwrap_or(serde_json::Value::Null)
            }
            _ => serde_json::Value::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tab_navigation_wire_form() {
        let msg = ChromeMessage::TabNavigation {
            tab_id: TabId(3),
            can_go_back: true,
            can_go_forward: false,
            url: "https://example.com/".into(),
        };
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(
            value,
            json!({
                "kind": "tab-navigation",
                "payload": {
                    "tabId": 3,
                    "canGoBack": true,
                    "canGoForward": false,
                    "url": "https://example.com/"
                }
            })
        );
    }

    #[test]
    fn open_find_has_no_payload() {
        let value = serde_json::to_value(ChromeMessage::OpenFind).unwrap();
        assert_eq!(value, json!({ "kind": "open-find" }));
        assert_eq!(ChromeMessage::OpenFind.payload(), serde_json::Value::Null);
    }

    #[test]
    fn kind_matches_serialized_tag() {
        let messages = [
            ChromeMessage::TabTitle {
                tab_id: TabId(1),
                title: "t".into(),
            },
            ChromeMessage::TabFavicon {
                tab_id: TabId(1),
                url: "u".into(),
            },
            ChromeMessage::TabOpened {
                tab_id: TabId(2),
                url: "u".into(),
            },
            ChromeMessage::TabClosed { tab_id: TabId(2) },
            ChromeMessage::PeekUrl { url: "u".into() },
            ChromeMessage::OpenFind,
            ChromeMessage::FloatChanged { floating: true },
        ];
        for msg in messages {
            let value = serde_json::to_value(&msg).unwrap();
            assert_eq!(value["kind"], msg.kind());
        }
    }

    #[test]
    fn payload_extracts_fields() {
        let msg = ChromeMessage::TabTitle {
            tab_id: TabId(9),
            title: "Docs".into(),
        };
        assert_eq!(msg.payload(), json!({ "tabId": 9, "title": "Docs" }));
    }
}
