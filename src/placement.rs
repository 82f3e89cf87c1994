//! Panel Placement Engine: decides where each new panel appears relative to
//! previously placed panels. Already-placed panels are never moved, so user
//! drags survive refreshes and repeated data loads.

use std::collections::HashMap;

use crate::constants::{panel_width, COLUMN_START_Y, PANEL_GAP};
use crate::models::{ChatItem, Panel, PanelKind, StackDirection};
use crate::utils::estimate_text_height;

/// Stable panel id for a (prompt, response) pair. Response index 0 keeps the
/// bare id so single-response conversations stay readable.
pub fn panel_id_for(message_id: &str, response_index: usize) -> String {
    if response_index == 0 {
        format!("panel-{}", message_id)
    } else {
        format!("panel-{}-r{}", message_id, response_index)
    }
}

/// Offset of a freshly placed panel from its reference panel.
///
/// Down/right offsets step past the reference's extent; up/left offsets step
/// past the new panel's own extent so the gap lands between the two.
pub fn directional_offset(
    direction: StackDirection,
    reference: &Panel,
    new_width: f64,
    new_height: f64,
) -> (f64, f64) {
    match direction {
        StackDirection::Down => (0.0, reference.height() + PANEL_GAP),
        StackDirection::Up => (0.0, -(new_height + PANEL_GAP)),
        StackDirection::Right => (reference.width + PANEL_GAP, 0.0),
        StackDirection::Left => (-(new_width + PANEL_GAP), 0.0),
    }
}

/// Step between fan-out siblings along the active direction's axis.
fn fan_out_step(direction: StackDirection, width: f64, estimated_height: f64) -> (f64, f64) {
    match direction {
        StackDirection::Down => (0.0, estimated_height + PANEL_GAP),
        StackDirection::Up => (0.0, -(estimated_height + PANEL_GAP)),
        StackDirection::Right => (width + PANEL_GAP, 0.0),
        StackDirection::Left => (-(width + PANEL_GAP), 0.0),
    }
}

/// The panel new placements stack against: the selected panel when there is
/// one, otherwise the most recently created panel.
pub fn reference_panel<'a>(
    panels: &'a HashMap<String, Panel>,
    selected_id: Option<&str>,
) -> Option<&'a Panel> {
    if let Some(id) = selected_id {
        // A stale selection (panel deleted mid-operation) falls through to
        // the most-recent rule instead of aborting.
        if let Some(p) = panels.get(id) {
            return Some(p);
        }
    }
    panels.values().max_by_key(|p| p.created_at)
}

/// Place every item that does not already have a panel. Returns the ids of
/// freshly created panels, in placement order.
pub fn place_items(
    panels: &mut HashMap<String, Panel>,
    items: &[ChatItem],
    direction: StackDirection,
    selected_id: Option<&str>,
) -> Vec<String> {
    let mut placed = Vec::new();
    // Vertical accumulator for the no-reference starting column.
    let mut column_y = COLUMN_START_Y;

    for item in items {
        let response_count = item.responses.len().max(1);
        let mut first_position: Option<(f64, f64)> = None;

        for index in 0..response_count {
            let id = panel_id_for(&item.id, index);
            if panels.contains_key(&id) {
                // Idempotent: an already-placed panel keeps its position.
                continue;
            }

            let width = panel_width(PanelKind::Exchange);
            let content = match item.responses.get(index) {
                Some(response) => format!("{}\n{}", item.content, response),
                None => item.content.clone(),
            };
            let estimated_height = estimate_text_height(&content);

            let (x, y) = if index > 0 {
                // Fan-out: siblings step from the first response panel,
                // which may have been placed in an earlier batch.
                let (fx, fy) = first_position
                    .or_else(|| {
                        panels
                            .get(&panel_id_for(&item.id, 0))
                            .map(|p| (p.x, p.y))
                    })
                    .unwrap_or((0.0, column_y));
                let (sx, sy) = fan_out_step(direction, width, estimated_height);
                (fx + sx * index as f64, fy + sy * index as f64)
            } else if let Some((sx, sy)) = item.stored_position {
                // A persisted layout entry is reused verbatim.
                (sx, sy)
            } else if let Some(reference) = reference_panel(panels, selected_id) {
                let (dx, dy) = directional_offset(direction, reference, width, estimated_height);
                (reference.x + dx, reference.y + dy)
            } else {
                // First panel ever: horizontally centered column, vertical
                // position accumulating from a fixed start since nothing has
                // rendered yet.
                let pos = (-width / 2.0, column_y);
                column_y += estimated_height + PANEL_GAP;
                pos
            };

            if index == 0 {
                first_position = Some((x, y));
            }

            let mut panel = Panel::new(id.clone(), PanelKind::Exchange, x, y, item.timestamp);
            panel.content = content;
            panel.prompt_message_id = Some(item.id.clone());
            panel.response_index = index;
            crate::debug_log!("placed panel {} at ({}, {})", id, x, y);
            panels.insert(id.clone(), panel);
            placed.push(id);
        }
    }

    placed
}

/// Place a standalone note or drawing panel. With no explicit position it
/// stacks off the reference panel like any other placement.
pub fn place_standalone(
    panels: &mut HashMap<String, Panel>,
    kind: PanelKind,
    content: String,
    position: Option<(f64, f64)>,
    direction: StackDirection,
    selected_id: Option<&str>,
    created_at: chrono::DateTime<chrono::Utc>,
) -> String {
    let id = format!("{}-{}", kind_prefix(kind), uuid::Uuid::new_v4());
    let width = panel_width(kind);
    let estimated_height = estimate_text_height(&content);

    let (x, y) = position.unwrap_or_else(|| {
        match reference_panel(panels, selected_id) {
            Some(reference) => {
                let (dx, dy) = directional_offset(direction, reference, width, estimated_height);
                (reference.x + dx, reference.y + dy)
            }
            None => (-width / 2.0, COLUMN_START_Y),
        }
    });

    let mut panel = Panel::new(id.clone(), kind, x, y, created_at);
    panel.content = content;
    panels.insert(id.clone(), panel);
    id
}

fn kind_prefix(kind: PanelKind) -> &'static str {
    match kind {
        PanelKind::Exchange => "panel",
        PanelKind::Note => "note",
        PanelKind::Drawing => "drawing",
    }
}
