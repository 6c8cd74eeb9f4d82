use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer pixel rectangle in logical window coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Exclusive right edge.
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width as i32)
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height as i32)
    }

    pub fn size(&self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Caller-assigned tab identifier, unique while the tab is live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TabId(pub u32);

impl TabId {
    /// Decode the chrome's wire form, where any negative id (conventionally
    /// `-1`) means "no tab". Positive ids that do not fit a `u32` are an
    /// error, not "no tab".
    pub fn from_wire(raw: i64) -> Result<Option<Self>, std::num::TryFromIntError> {
        if raw < 0 {
            return Ok(None);
        }
        u32::try_from(raw).map(|id| Some(TabId(id)))
    }

    /// Inverse of [`TabId::from_wire`].
    pub fn to_wire(id: Option<Self>) -> i64 {
        id.map_or(-1, |t| i64::from(t.0))
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tab-{}", self.0)
    }
}

/// Every embeddable surface a window can stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SurfaceId {
    TitleBar,
    UrlPeek,
    FindBar,
    Overlay,
    Tab(TabId),
}

impl SurfaceId {
    /// The four singleton chrome surfaces, in creation order.
    pub const CHROME: [SurfaceId; 4] = [
        SurfaceId::TitleBar,
        SurfaceId::UrlPeek,
        SurfaceId::FindBar,
        SurfaceId::Overlay,
    ];

    pub fn is_tab(&self) -> bool {
        matches!(self, SurfaceId::Tab(_))
    }

    /// Asset directory name used by the bundled chrome pages.
    pub fn asset_name(&self) -> Option<&'static str> {
        match self {
            SurfaceId::TitleBar => Some("titlebar"),
            SurfaceId::UrlPeek => Some("peek"),
            SurfaceId::FindBar => Some("find"),
            SurfaceId::Overlay => Some("overlay"),
            SurfaceId::Tab(_) => None,
        }
    }
}

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceId::Tab(id) => write!(f, "{id}"),
            other => f.write_str(other.asset_name().unwrap_or("surface")),
        }
    }
}
