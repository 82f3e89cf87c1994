//! Mode Transition Controller: the `canvas ⇄ linear` state machine. Canvas
//! layout is snapshotted on the way into linear mode and restored on the
//! way out, so the free-form arrangement survives the round trip exactly.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::alignment::realign_pan_x;
use crate::constants::{COLUMN_START_Y, DEFAULT_ZOOM, PANEL_GAP};
use crate::geometry::panels_bounds;
use crate::models::{CanvasMode, LayoutMetrics, Panel, Viewport};
use crate::viewport::apply_guarded;

/// Panel ids in chronological order; ties broken by id so the order is
/// stable across runs.
pub fn chronological_ids(panels: &HashMap<String, Panel>) -> Vec<String> {
    let mut ids: Vec<&Panel> = panels.values().collect();
    ids.sort_by(|a, b| {
        a.created_at
            .cmp(&b.created_at)
            .then_with(|| a.response_index.cmp(&b.response_index))
            .then_with(|| a.id.cmp(&b.id))
    });
    ids.into_iter().map(|p| p.id.clone()).collect()
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ModeController {
    /// Canvas-mode positions captured on entry into linear mode.
    saved_positions: HashMap<String, (f64, f64)>,
    saved_canvas_zoom: Option<f64>,
    saved_linear_zoom: Option<f64>,
}

impl ModeController {
    /// `canvas → linear`: snapshot positions, restack chronologically into a
    /// single column, restore the linear zoom and realign the camera.
    /// Selection skips the vertical centering so the view does not jump out
    /// from under the user.
    pub fn enter_linear(
        &mut self,
        panels: &mut HashMap<String, Panel>,
        viewport: &mut Viewport,
        metrics: &LayoutMetrics,
        selected_id: Option<&str>,
    ) {
        self.saved_positions = panels
            .iter()
            .map(|(id, p)| (id.clone(), (p.x, p.y)))
            .collect();
        self.saved_canvas_zoom = Some(viewport.zoom);

        let order = chronological_ids(panels);
        let mut y = COLUMN_START_Y;
        for id in &order {
            if let Some(panel) = panels.get_mut(id) {
                panel.x = -panel.width / 2.0;
                panel.y = y;
                y += panel.height() + PANEL_GAP;
            }
        }

        let zoom = self.saved_linear_zoom.unwrap_or(DEFAULT_ZOOM);
        apply_guarded(
            viewport,
            Viewport {
                x: viewport.x,
                y: viewport.y,
                zoom,
            },
        );

        if let Some((min_x, _, max_x, _)) = panels_bounds(panels.values()) {
            realign_pan_x(viewport, metrics, min_x, max_x);
        }

        match selected_id.and_then(|id| panels.get(id)) {
            // Keep the selected panel where the user is looking.
            Some(_) => {}
            None => {
                // Bring the end of the conversation into view.
                if let Some(last) = order.last().and_then(|id| panels.get(id)) {
                    center_panel_vertically(viewport, metrics, last);
                }
            }
        }
    }

    /// `linear → canvas`: restore the snapshot (panels placed while in
    /// linear mode keep their column position), restore the canvas zoom and
    /// re-center, preferring the selected panel.
    pub fn exit_linear(
        &mut self,
        panels: &mut HashMap<String, Panel>,
        viewport: &mut Viewport,
        metrics: &LayoutMetrics,
        selected_id: Option<&str>,
    ) {
        self.saved_linear_zoom = Some(viewport.zoom);
        for (id, panel) in panels.iter_mut() {
            if let Some(&(x, y)) = self.saved_positions.get(id) {
                panel.x = x;
                panel.y = y;
            }
        }
        self.saved_positions.clear();

        let zoom = self.saved_canvas_zoom.take().unwrap_or(DEFAULT_ZOOM);
        apply_guarded(
            viewport,
            Viewport {
                x: viewport.x,
                y: viewport.y,
                zoom,
            },
        );

        if let Some(panel) = selected_id.and_then(|id| panels.get(id)) {
            center_on_panel(viewport, metrics, panel);
        } else if let Some((min_x, _, max_x, _)) = panels_bounds(panels.values()) {
            realign_pan_x(viewport, metrics, min_x, max_x);
        }
    }
}

/// Re-derive every panel's interaction flags from the lock flag and the
/// current mode. Writes only happen when a flag actually changes, to avoid
/// redundant re-renders downstream.
pub fn derive_interaction_flags(
    panels: &mut HashMap<String, Panel>,
    locked: bool,
    mode: CanvasMode,
) -> bool {
    let draggable = !locked && mode == CanvasMode::Canvas;
    let connectable = !locked && mode == CanvasMode::Canvas;
    let mut changed = false;
    for panel in panels.values_mut() {
        if panel.draggable != draggable || panel.connectable != connectable {
            panel.draggable = draggable;
            panel.connectable = connectable;
            changed = true;
        }
    }
    changed
}

/// Pan so the panel's center lands in the middle of the map area.
pub fn center_on_panel(viewport: &mut Viewport, metrics: &LayoutMetrics, panel: &Panel) {
    let candidate = Viewport {
        x: metrics.map_width / 2.0 - panel.center_x() * viewport.zoom,
        y: metrics.map_height / 2.0 - (panel.y + panel.height() / 2.0) * viewport.zoom,
        zoom: viewport.zoom,
    };
    apply_guarded(viewport, candidate);
}

/// Vertical half of `center_on_panel`: pan-y only.
pub fn center_panel_vertically(viewport: &mut Viewport, metrics: &LayoutMetrics, panel: &Panel) {
    let candidate = Viewport {
        x: viewport.x,
        y: metrics.map_height / 2.0 - (panel.y + panel.height() / 2.0) * viewport.zoom,
        zoom: viewport.zoom,
    };
    apply_guarded(viewport, candidate);
}
