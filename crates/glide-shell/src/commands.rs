use glide_common::types::TabId;
use serde::{Deserialize, Deserializer, Serialize};

/// Requests posted by the chrome surfaces over IPC.
///
/// Wire form is `{"kind": "...", "payload": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "kebab-case")]
pub enum ShellCommand {
    NewTab {
        id: TabId,
        #[serde(default)]
        url: Option<String>,
    },
    /// `id` of -1 deactivates every tab.
    ActivateTab {
        #[serde(deserialize_with = "wire_tab_id", serialize_with = "serialize_wire_tab_id")]
        id: Option<TabId>,
    },
    CloseTab { id: TabId },
    Navigate { id: TabId, url: String },
    GoBack { id: TabId },
    GoForward { id: TabId },
    Reload { id: TabId },
    FindQuery { text: String },
    CloseFind,
    ToggleFloat,
    WindowDrag { dragging: bool },
}

impl ShellCommand {
    /// Parse a raw IPC body. Unknown kinds and malformed payloads are `None`.
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    /// Build from an already-split IPC message.
    pub fn from_parts(kind: &str, payload: serde_json::Value) -> Option<Self> {
        let mut map = serde_json::Map::new();
        map.insert("kind".into(), serde_json::Value::String(kind.to_string()));
        if !payload.is_null() {
            map.insert("payload".into(), payload);
        }
        serde_json::from_value(serde_json::Value::Object(map)).ok()
    }
}

fn wire_tab_id<'de, D>(deserializer: D) -> Result<Option<TabId>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = i64::deserialize(deserializer)?;
    TabId::from_wire(raw)
        .map_err(|_| serde::de::Error::custom(format!("tab id {raw} out of range")))
}

fn serialize_wire_tab_id<S>(id: &Option<TabId>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_i64(TabId::to_wire(*id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_new_tab_with_and_without_url() {
        let cmd = ShellCommand::from_json(
            r#"{"kind":"new-tab","payload":{"id":4,"url":"https://rust-lang.org"}}"#,
        );
        assert_eq!(
            cmd,
            Some(ShellCommand::NewTab {
                id: TabId(4),
                url: Some("https://rust-lang.org".into()),
            })
        );

        let cmd = ShellCommand::from_json(r#"{"kind":"new-tab","payload":{"id":5}}"#);
        assert_eq!(
            cmd,
            Some(ShellCommand::NewTab {
                id: TabId(5),
                url: None,
            })
        );
    }

    #[test]
    fn activate_negative_means_none() {
        let cmd = ShellCommand::from_json(r#"{"kind":"activate-tab","payload":{"id":-1}}"#);
        assert_eq!(cmd, Some(ShellCommand::ActivateTab { id: None }));

        let cmd = ShellCommand::from_json(r#"{"kind":"activate-tab","payload":{"id":2}}"#);
        assert_eq!(cmd, Some(ShellCommand::ActivateTab { id: Some(TabId(2)) }));
    }

    #[test]
    fn activate_out_of_range_id_is_rejected() {
        let cmd =
            ShellCommand::from_json(r#"{"kind":"activate-tab","payload":{"id":4294967296}}"#);
        assert_eq!(cmd, None);
    }

    #[test]
    fn activate_serializes_sentinel() {
        let value = serde_json::to_value(ShellCommand::ActivateTab { id: None }).unwrap();
        assert_eq!(value, json!({ "kind": "activate-tab", "payload": { "id": -1 } }));
    }

    #[test]
    fn unit_commands_without_payload() {
        assert_eq!(
            ShellCommand::from_json(r#"{"kind":"toggle-float"}"#),
            Some(ShellCommand::ToggleFloat)
        );
        assert_eq!(
            ShellCommand::from_parts("close-find", serde_json::Value::Null),
            Some(ShellCommand::CloseFind)
        );
    }

    #[test]
    fn from_parts_with_payload() {
        assert_eq!(
            ShellCommand::from_parts("window-drag", json!({ "dragging": true })),
            Some(ShellCommand::WindowDrag { dragging: true })
        );
        assert_eq!(
            ShellCommand::from_parts("find-query", json!({ "text": "needle" })),
            Some(ShellCommand::FindQuery {
                text: "needle".into()
            })
        );
    }

    #[test]
    fn rejects_unknown_or_malformed() {
        assert_eq!(ShellCommand::from_json(r#"{"kind":"self-destruct"}"#), None);
        assert_eq!(
            ShellCommand::from_json(r#"{"kind":"close-tab","payload":{"id":-3}}"#),
            None
        );
        assert_eq!(ShellCommand::from_json("not json"), None);
    }
}
