// Canonical layout constants - these are the single source of truth for the
// canvas geometry. Earlier revisions carried several near-duplicate values
// (400/500/768 widths, 50/250 gaps) across legacy code paths; only this set
// is authoritative.

use std::collections::HashMap;

use crate::models::PanelKind;

/// Nominal width of a prompt/response exchange panel.
pub const EXCHANGE_PANEL_WIDTH: f64 = 500.0;
/// Nominal width of a standalone note or freehand drawing panel.
pub const NOTE_PANEL_WIDTH: f64 = 768.0;

/// Height assumed for a panel that has not been measured yet.
pub const FALLBACK_PANEL_HEIGHT: f64 = 400.0;

/// Fixed gap between stacked panels, in world units.
pub const PANEL_GAP: f64 = 50.0;

/// Vertical origin of the first placed panel / the linear-mode column.
pub const COLUMN_START_Y: f64 = 100.0;

/// A collapse/expand height change smaller than this does not reflow
/// neighbouring panels.
pub const REFLOW_MIN_HEIGHT_DELTA: f64 = 10.0;
/// Duration of the collapse/expand reflow animation, milliseconds.
pub const REFLOW_DURATION_MS: f64 = 300.0;

/// Accumulated wheel delta required to advance one panel in linear mode.
pub const SCROLL_STEP_THRESHOLD: f64 = 250.0;

/// How long a selection keeps the alignment controller suspended in linear
/// mode, so clicking a panel does not yank the camera.
pub const SELECTION_SUSPENSION_MS: f64 = 500.0;

/// Debounce window before a layout mutation is persisted.
pub const PERSIST_DEBOUNCE_MS: f64 = 400.0;

/// Default camera zoom when nothing has been restored.
pub const DEFAULT_ZOOM: f64 = 1.0;
pub const MIN_ZOOM: f64 = 0.1;
pub const MAX_ZOOM: f64 = 2.0;

/// Undo history depth.
pub const HISTORY_LIMIT: usize = 64;

// Text sizing estimates used before the host has rendered a panel.
pub const CHARS_PER_LINE: usize = 60;
pub const LINE_HEIGHT: f64 = 24.0;
pub const PANEL_CHROME_HEIGHT: f64 = 96.0;
/// Rendered height of a collapsed panel (header only).
pub const COLLAPSED_PANEL_HEIGHT: f64 = 56.0;

lazy_static::lazy_static! {
    /// Nominal width per panel kind.
    pub static ref PANEL_WIDTHS: HashMap<PanelKind, f64> = {
        let mut m = HashMap::new();
        m.insert(PanelKind::Exchange, EXCHANGE_PANEL_WIDTH);
        m.insert(PanelKind::Note, NOTE_PANEL_WIDTH);
        m.insert(PanelKind::Drawing, NOTE_PANEL_WIDTH);
        m
    };
}

/// Width lookup that never fails.
pub fn panel_width(kind: PanelKind) -> f64 {
    PANEL_WIDTHS
        .get(&kind)
        .copied()
        .unwrap_or(EXCHANGE_PANEL_WIDTH)
}
