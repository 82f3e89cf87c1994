// src/messages.rs
//
// Every event the canvas core reacts to, and the side effects it hands back
// to the host. Time-sensitive events carry `now_ms` (the host's
// animation-frame timestamp) so reducers never read a clock.

use crate::models::{ChatItem, LayoutMetrics, LinkDecl, StackDirection};
use crate::storage::ConversationLayout;

#[derive(Clone, Debug)]
pub enum Message {
    // Data source -----------------------------------------------------------
    /// A batch of conversation items (and externally-declared links) arrived.
    ItemsLoaded {
        items: Vec<ChatItem>,
        links: Vec<LinkDecl>,
    },
    /// A persisted layout arrived from the host's store: reapply saved
    /// positions to the panels that exist and restore the saved camera.
    LayoutRestored { layout: ConversationLayout },
    /// A message was deleted upstream; its panels and edges go with it.
    MessageDeleted { message_id: String },
    /// Conversation switched or closed: drop all layout state.
    ConversationCleared,

    // Panel interaction ------------------------------------------------------
    SelectPanel {
        panel_id: Option<String>,
        now_ms: f64,
    },
    StartPanelDrag { panel_id: String },
    UpdatePanelDrag {
        panel_id: String,
        x: f64,
        y: f64,
    },
    StopPanelDrag { panel_id: String },
    /// The host measured a panel's rendered height.
    PanelHeightMeasured { panel_id: String, height: f64 },
    ToggleCollapsed { panel_id: String },
    /// Post-toggle height, measured by the host after its CSS resize
    /// settled. Starts the reflow animation.
    CollapseSettled {
        panel_id: String,
        new_height: f64,
        now_ms: f64,
    },
    AddNote {
        content: String,
        position: Option<(f64, f64)>,
    },
    AddDrawing { position: Option<(f64, f64)> },
    DeletePanel { panel_id: String },

    // Edges ------------------------------------------------------------------
    ConnectPanels {
        source_id: String,
        target_id: String,
    },
    DeleteEdge { edge_id: String },

    // Camera -----------------------------------------------------------------
    ZoomCanvas {
        new_zoom: f64,
        viewport_x: f64,
        viewport_y: f64,
    },
    StartCanvasDrag { start_x: f64, start_y: f64 },
    UpdateCanvasDrag { current_x: f64, current_y: f64 },
    StopCanvasDrag,

    // Layout-affecting host events -------------------------------------------
    HostResized { metrics: LayoutMetrics, now_ms: f64 },
    SidebarToggled { metrics: LayoutMetrics, now_ms: f64 },
    MinimapRelocated { metrics: LayoutMetrics, now_ms: f64 },

    // Mode and navigation ----------------------------------------------------
    ToggleMode { now_ms: f64 },
    WheelScrolled {
        delta_y: f64,
        zoom_modifier: bool,
        now_ms: f64,
    },
    SetStackDirection(StackDirection),
    SetLocked(bool),

    // Transient camera animations; each start opens a suspension window the
    // matching settle event closes.
    FitViewStarted,
    FitViewSettled,
    ZoomToFullStarted,
    ZoomToFullSettled,
    ScrollToBottomStarted,
    ScrollToBottomSettled,

    // History ----------------------------------------------------------------
    Undo,
    Redo,

    /// Per-frame driver: advances reflow animations, expires suspensions and
    /// flushes the debounced persist.
    AnimationTick { now_ms: f64 },
}

/// Commands represent side effects that should be executed after state
/// updates. This separates pure state changes from effects like repainting
/// and persistence.
pub enum Command {
    /// Chain another message to be processed.
    SendMessage(Message),

    /// Ask the rendering collaborator to repaint.
    Redraw,

    /// Persist the conversation's layout (debounced upstream of this).
    PersistLayout {
        conversation_id: String,
        layout: ConversationLayout,
    },

    /// Ask the host to (re)measure a panel's rendered height.
    RequestMeasure { panel_id: String },

    /// Represents no side effect.
    NoOp,
}

impl Command {
    /// Helper to create a SendMessage command.
    pub fn send(msg: Message) -> Self {
        Command::SendMessage(msg)
    }

    /// Helper to create a NoOp command.
    pub fn none() -> Self {
        Command::NoOp
    }
}
