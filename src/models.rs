use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{panel_width, COLLAPSED_PANEL_HEIGHT, FALLBACK_PANEL_HEIGHT};

#[derive(Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Debug)]
pub enum PanelKind {
    /// A prompt/response exchange from the conversation.
    Exchange,
    /// A standalone user note.
    Note,
    /// A freehand drawing.
    Drawing,
}

/// Named anchor points on a panel's boundary where edges attach.
#[derive(Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Debug)]
pub enum HandleSide {
    Left,
    Right,
    Top,
    Bottom,
}

/// Where newly created panels are placed relative to the reference panel.
#[derive(Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Debug, Default)]
pub enum StackDirection {
    #[default]
    Down,
    Up,
    Left,
    Right,
}

#[derive(Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Debug, Default)]
pub enum CanvasMode {
    #[default]
    Canvas,
    Linear,
}

/// Panel represents a positioned rectangle on the canvas: a prompt/response
/// exchange, a standalone note, or a freehand drawing.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct Panel {
    pub id: String,
    pub kind: PanelKind,
    pub x: f64,
    pub y: f64,
    /// Nominal width, fixed per panel kind.
    pub width: f64,
    /// Rendered height, unknown until the host has measured it once.
    pub measured_height: Option<f64>,
    pub collapsed: bool,
    pub draggable: bool,
    pub connectable: bool,
    pub content: String,
    /// Originating prompt message, for exchange panels.
    pub prompt_message_id: Option<String>,
    /// Which response to the prompt this panel shows (fan-out index).
    pub response_index: usize,
    pub created_at: DateTime<Utc>,
}

impl Panel {
    pub fn new(id: String, kind: PanelKind, x: f64, y: f64, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            kind,
            x,
            y,
            width: panel_width(kind),
            measured_height: None,
            collapsed: false,
            draggable: true,
            connectable: true,
            content: String::new(),
            prompt_message_id: None,
            response_index: 0,
            created_at,
        }
    }

    /// Effective height for layout math. The measurement always wins; the
    /// collapsed-header and fallback constants only cover panels whose
    /// current rendering has not been measured yet.
    pub fn height(&self) -> f64 {
        if let Some(h) = self.measured_height {
            return h;
        }
        if self.collapsed {
            COLLAPSED_PANEL_HEIGHT
        } else {
            FALLBACK_PANEL_HEIGHT
        }
    }

    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }
}

/// A directed connection between two panels' handles.
///
/// The id is derived from the ordered endpoints, so flipping direction
/// changes the id while the struct is updated in place.
#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
pub struct PanelEdge {
    pub id: String,
    pub source_id: String,
    pub target_id: String,
    pub source_handle: HandleSide,
    pub target_handle: HandleSide,
    pub dotted: bool,
}

impl PanelEdge {
    pub fn derived_id(source_id: &str, target_id: &str) -> String {
        format!("edge-{}-{}", source_id, target_id)
    }

    pub fn touches(&self, panel_id: &str) -> bool {
        self.source_id == panel_id || self.target_id == panel_id
    }

    /// Unordered endpoint pair, for the at-most-one-edge-per-pair invariant.
    pub fn unordered_pair(&self) -> (String, String) {
        if self.source_id <= self.target_id {
            (self.source_id.clone(), self.target_id.clone())
        } else {
            (self.target_id.clone(), self.source_id.clone())
        }
    }
}

/// Camera state. Owned by the rendering collaborator; the controllers here
/// read it and write guarded replacements.
#[derive(Clone, Copy, Serialize, Deserialize, PartialEq, Debug)]
pub struct Viewport {
    pub x: f64,
    pub y: f64,
    pub zoom: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            zoom: crate::constants::DEFAULT_ZOOM,
        }
    }
}

/// Axis-aligned rectangle in screen pixels.
#[derive(Clone, Copy, Serialize, Deserialize, PartialEq, Debug, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Snapshot of the host chrome the alignment controller needs. Injected on
/// every layout-affecting event instead of being queried from a live DOM.
#[derive(Clone, Copy, Serialize, Deserialize, PartialEq, Debug)]
pub struct LayoutMetrics {
    pub sidebar_width: f64,
    pub minimap: Rect,
    pub input_box: Rect,
    pub map_width: f64,
    pub map_height: f64,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            sidebar_width: 0.0,
            minimap: Rect::new(1080.0, 620.0, 200.0, 150.0),
            input_box: Rect::new(390.0, 640.0, 500.0, 120.0),
            map_width: 1280.0,
            map_height: 800.0,
        }
    }
}

#[derive(Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Debug)]
pub enum MessageRole {
    User,
    Assistant,
}

/// One logical conversation item from the data source: an entry in the
/// ordered message list, with link declarations carried separately.
/// Transport-agnostic; the host adapts whatever backend it talks to.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct ChatItem {
    pub id: String,
    pub role: MessageRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    /// Assistant responses attached to this prompt (fan-out when > 1).
    pub responses: Vec<String>,
    /// Position restored from a persisted layout, if any.
    pub stored_position: Option<(f64, f64)>,
}

/// Externally-declared link between two panels.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct LinkDecl {
    pub source_id: String,
    pub target_id: String,
}
