use std::collections::HashMap;

use crate::alignment::{realign_pan_x, Suspensions};
use crate::geometry::panels_bounds;
use crate::history::LayoutHistory;
use crate::messages::{Command, Message};
use crate::mode::ModeController;
use crate::models::{
    CanvasMode, LayoutMetrics, Panel, PanelEdge, StackDirection, Viewport,
};
use crate::reflow::ReflowAnimation;
use crate::scroll::ScrollNavigator;
use crate::storage::ConversationLayout;
use crate::update::update;

// Store the canvas application state for one conversation.
pub struct AppState {
    pub conversation_id: String,

    // Canvas contents
    pub panels: HashMap<String, Panel>,
    pub edges: Vec<PanelEdge>,

    // Camera (owned by the rendering collaborator; mirrored here)
    pub viewport: Viewport,

    // Mode, preferences and selection
    pub mode: CanvasMode,
    pub stack_direction: StackDirection,
    pub selected_panel_id: Option<String>,
    pub locked: bool,

    // Host chrome snapshot, refreshed on every layout-affecting event
    pub metrics: LayoutMetrics,

    // Controllers
    pub mode_ctl: ModeController,
    pub scroll: ScrollNavigator,
    pub suspensions: Suspensions,
    pub history: LayoutHistory,

    // In-flight reflow animations, at most one per toggled panel
    pub reflows: HashMap<String, ReflowAnimation>,
    // Height recorded when a collapse toggle started, keyed by panel id
    pub pending_collapse: HashMap<String, f64>,

    // Panel dragging
    pub dragging: Option<String>,
    // Canvas panning
    pub canvas_dragging: bool,
    pub drag_last_x: f64,
    pub drag_last_y: f64,

    // Repaint/persist bookkeeping
    pub dirty: bool,
    pub state_modified: bool,
    pub last_modified_ms: f64,
    pub last_tick_ms: f64,
}

impl AppState {
    pub fn new(conversation_id: impl Into<String>) -> Self {
        Self {
            conversation_id: conversation_id.into(),
            panels: HashMap::new(),
            edges: Vec::new(),
            viewport: Viewport::default(),
            mode: CanvasMode::Canvas,
            stack_direction: StackDirection::default(),
            selected_panel_id: None,
            locked: false,
            metrics: LayoutMetrics::default(),
            mode_ctl: ModeController::default(),
            scroll: ScrollNavigator::new(),
            suspensions: Suspensions::default(),
            history: LayoutHistory::default(),
            reflows: HashMap::new(),
            pending_collapse: HashMap::new(),
            dragging: None,
            canvas_dragging: false,
            drag_last_x: 0.0,
            drag_last_y: 0.0,
            dirty: false,
            state_modified: false,
            last_modified_ms: 0.0,
            last_tick_ms: 0.0,
        }
    }

    /// Something visual changed; the host should repaint.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// A persistable layout mutation happened. Restarts the debounce window;
    /// a newer mutation always replaces the pending deadline.
    pub fn mark_modified(&mut self) {
        self.state_modified = true;
        self.last_modified_ms = self.last_tick_ms;
    }

    /// Snapshot of everything the persisted-layout contract covers.
    pub fn layout_snapshot(&self) -> ConversationLayout {
        ConversationLayout {
            positions: self
                .panels
                .iter()
                .map(|(id, p)| (id.clone(), (p.x, p.y)))
                .collect(),
            viewport: Some(self.viewport.into()),
        }
    }

    /// Re-run the push/center alignment unless a suspension window is open.
    /// Called on layout-affecting events only, never on ordinary panning.
    pub fn realign_if_allowed(&mut self, now_ms: f64) {
        if self.suspensions.is_suspended(now_ms) {
            return;
        }
        if let Some((min_x, _, max_x, _)) = panels_bounds(self.panels.values()) {
            if realign_pan_x(&mut self.viewport, &self.metrics, min_x, max_x) {
                self.mark_dirty();
            }
        }
    }

    /// Chronologically ordered panel ids (the linear-mode list).
    pub fn panel_order(&self) -> Vec<String> {
        crate::mode::chronological_ids(&self.panels)
    }

    /// Dispatch a message, chasing chained `SendMessage` commands, and
    /// return the remaining side effects for the host to execute.
    pub fn dispatch(&mut self, msg: Message) -> Vec<Command> {
        let mut queue = vec![msg];
        let mut effects = Vec::new();
        // Bound on chained SendMessage depth.
        let mut budget = 64;
        while let Some(msg) = queue.pop() {
            let mut cmds = Vec::new();
            update(self, &msg, &mut cmds);
            for cmd in cmds {
                match cmd {
                    Command::SendMessage(next) => queue.push(next),
                    Command::NoOp => {}
                    other => effects.push(other),
                }
            }
            budget -= 1;
            if budget == 0 && !queue.is_empty() {
                crate::debug_log!(
                    "dispatch chain exceeded budget, dropping {} queued messages",
                    queue.len()
                );
                break;
            }
        }
        if self.dirty {
            self.dirty = false;
            effects.push(Command::Redraw);
        }
        effects
    }
}
