//! Turns raw [`WebViewEvent`]s into shell input.
//!
//! Tab surfaces produce [`ContentEvent`]s. Chrome surfaces produce
//! [`ShellCommand`]s. Tabs never get to issue shell commands. Any surface
//! may forward a keyboard shortcut; the origin travels with it so the shell
//! can restrict what page content triggers.

use glide_common::types::{SurfaceId, TabId};
use glide_shell::{ContentEvent, ShellCommand};
use tracing::{debug, warn};

use crate::events::{PageLoadState, WebViewEvent};
use crate::ipc::{IpcMessage, ShortcutPress};
use crate::manager::WebViewRegistry;

/// What a webview event means to the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Translated {
    Content(TabId, ContentEvent),
    Command(ShellCommand),
    Shortcut(SurfaceId, ShortcutPress),
}

/// Translate one event, updating per-tab history on committed navigations.
///
/// Events for surfaces that no longer exist are dropped.
pub fn translate_event(registry: &mut WebViewRegistry, event: WebViewEvent) -> Option<Translated> {
    match event {
        WebViewEvent::PageLoad {
            surface: SurfaceId::Tab(id),
            state: PageLoadState::Finished,
            url,
        } => commit(registry, id, &url),
        WebViewEvent::TitleChanged {
            surface: SurfaceId::Tab(id),
            title,
        } => {
            registry.get(SurfaceId::Tab(id))?;
            Some(Translated::Content(id, ContentEvent::TitleUpdated(title)))
        }
        WebViewEvent::IpcMessage { surface, body } => {
            let Some(msg) = IpcMessage::from_json(&body) else {
                warn!(%surface, "unparseable IPC message");
                return None;
            };
            if msg.kind == "shortcut" {
                return serde_json::from_value(msg.payload)
                    .ok()
                    .map(|press| Translated::Shortcut(surface, press));
            }
            match surface {
                SurfaceId::Tab(id) => content_ipc(registry, id, msg),
                chrome => {
                    let cmd = ShellCommand::from_parts(&msg.kind, msg.payload);
                    if cmd.is_none() {
                        warn!(surface = %chrome, kind = %msg.kind, "unknown shell command");
                    }
                    cmd.map(Translated::Command)
                }
            }
        }
        other => {
            debug!(surface = %other.surface(), "webview event ignored");
            None
        }
    }
}

fn content_ipc(registry: &mut WebViewRegistry, id: TabId, msg: IpcMessage) -> Option<Translated> {
    let url = msg.payload_str("url").unwrap_or_default().to_string();
    let event = match msg.kind.as_str() {
        "hovered-link" => ContentEvent::HoveredLinkChanged(url),
        "favicon" if !url.is_empty() => ContentEvent::FaviconUpdated(url),
        "in-page-navigation" if !url.is_empty() => return commit(registry, id, &url),
        kind => {
            debug!(tab_id = %id, kind, "ignored content IPC");
            return None;
        }
    };
    Some(Translated::Content(id, event))
}

fn commit(registry: &mut WebViewRegistry, id: TabId, url: &str) -> Option<Translated> {
    let handle = registry.get_mut(SurfaceId::Tab(id))?;
    let state = handle.commit_navigation(url);
    Some(Translated::Content(id, ContentEvent::Navigated(state)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manager::WebViewManager;

    fn registry() -> WebViewRegistry {
        WebViewRegistry::new(WebViewManager::new())
    }

    #[test]
    fn chrome_ipc_becomes_command() {
        let mut reg = registry();
        let out = translate_event(
            &mut reg,
            WebViewEvent::IpcMessage {
                surface: SurfaceId::TitleBar,
                body: r#"{"kind":"activate-tab","payload":{"id":-1}}"#.into(),
            },
        );
        assert_eq!(
            out,
            Some(Translated::Command(ShellCommand::ActivateTab { id: None }))
        );
    }

    #[test]
    fn shortcut_from_any_surface() {
        let mut reg = registry();
        for surface in [SurfaceId::Tab(TabId(1)), SurfaceId::FindBar] {
            let out = translate_event(
                &mut reg,
                WebViewEvent::IpcMessage {
                    surface,
                    body: r#"{"kind":"shortcut","payload":{"key":"Escape"}}"#.into(),
                },
            );
            assert_eq!(
                out,
                Some(Translated::Shortcut(
                    surface,
                    ShortcutPress {
                        key: "Escape".into(),
                        ctrl: false,
                        alt: false,
                        shift: false,
                        meta: false,
                    }
                ))
            );
        }
    }

    #[test]
    fn unknown_chrome_command_dropped() {
        let mut reg = registry();
        let out = translate_event(
            &mut reg,
            WebViewEvent::IpcMessage {
                surface: SurfaceId::FindBar,
                body: r#"{"kind":"format-disk"}"#.into(),
            },
        );
        assert_eq!(out, None);
    }

    #[test]
    fn tab_cannot_issue_commands() {
        let mut reg = registry();
        let out = translate_event(
            &mut reg,
            WebViewEvent::IpcMessage {
                surface: SurfaceId::Tab(TabId(1)),
                body: r#"{"kind":"close-tab","payload":{"id":1}}"#.into(),
            },
        );
        assert_eq!(out, None);
    }

    #[test]
    fn hovered_link_and_favicon_from_tab() {
        let mut reg = registry();
        let out = translate_event(
            &mut reg,
            WebViewEvent::IpcMessage {
                surface: SurfaceId::Tab(TabId(2)),
                body: r#"{"kind":"hovered-link","payload":{"url":""}}"#.into(),
            },
        );
        assert_eq!(
            out,
            Some(Translated::Content(
                TabId(2),
                ContentEvent::HoveredLinkChanged(String::new())
            ))
        );

        let out = translate_event(
            &mut reg,
            WebViewEvent::IpcMessage {
                surface: SurfaceId::Tab(TabId(2)),
                body: r#"{"kind":"favicon","payload":{"url":"https://a.test/f.ico"}}"#.into(),
            },
        );
        assert_eq!(
            out,
            Some(Translated::Content(
                TabId(2),
                ContentEvent::FaviconUpdated("https://a.test/f.ico".into())
            ))
        );
    }

    #[test]
    fn events_for_missing_tabs_are_dropped() {
        let mut reg = registry();
        let out = translate_event(
            &mut reg,
            WebViewEvent::TitleChanged {
                surface: SurfaceId::Tab(TabId(7)),
                title: "gone".into(),
            },
        );
        assert_eq!(out, None);

        let out = translate_event(
            &mut reg,
            WebViewEvent::PageLoad {
                surface: SurfaceId::Tab(TabId(7)),
                state: PageLoadState::Finished,
                url: "https://a.test/".into(),
            },
        );
        assert_eq!(out, None);
    }

    #[test]
    fn page_load_started_and_chrome_loads_ignored() {
        let mut reg = registry();
        assert_eq!(
            translate_event(
                &mut reg,
                WebViewEvent::PageLoad {
                    surface: SurfaceId::Tab(TabId(1)),
                    state: PageLoadState::Started,
                    url: "https://a.test/".into(),
                },
            ),
            None
        );
        assert_eq!(
            translate_event(
                &mut reg,
                WebViewEvent::TitleChanged {
                    surface: SurfaceId::TitleBar,
                    title: "Glide".into(),
                },
            ),
            None
        );
    }
}
