//! Panel and edge mutations: placement of loaded conversation items,
//! dragging, collapse/expand, notes and drawings, connections, lock state
//! and undo/redo.

use crate::edges::{create_edge, prune_edges, reconcile_edges_for_panel};
use crate::messages::{Command, Message};
use crate::mode::{chronological_ids, derive_interaction_flags};
use crate::models::{CanvasMode, PanelKind, Viewport};
use crate::placement::{panel_id_for, place_items, place_standalone};
use crate::reflow::ReflowAnimation;
use crate::state::AppState;
use crate::viewport::{apply_guarded, clamp_zoom};

pub fn update(state: &mut AppState, msg: &Message, commands: &mut Vec<Command>) -> bool {
    match msg {
        Message::ItemsLoaded { items, links } => {
            // Snapshot for undo only when this batch will actually create
            // something; repeated loads of the same data must be no-ops.
            let will_place = items.iter().any(|item| {
                (0..item.responses.len().max(1))
                    .any(|i| !state.panels.contains_key(&panel_id_for(&item.id, i)))
            });
            if will_place {
                state.history.push(&state.panels);
            }

            let placed = place_items(
                &mut state.panels,
                items,
                state.stack_direction,
                state.selected_panel_id.as_deref(),
            );

            for link in links {
                let from = panel_id_for(&link.source_id, 0);
                let to = panel_id_for(&link.target_id, 0);
                if let Some(edge) = create_edge(&state.panels, &state.edges, &from, &to, true) {
                    state.edges.push(edge);
                }
            }
            prune_edges(&state.panels, &mut state.edges);
            derive_interaction_flags(&mut state.panels, state.locked, state.mode);

            for id in &placed {
                commands.push(Command::RequestMeasure {
                    panel_id: id.clone(),
                });
            }
            if !placed.is_empty() {
                state.mark_modified();
            }
            state.mark_dirty();
            true
        }

        Message::LayoutRestored { layout } => {
            for (id, &(x, y)) in &layout.positions {
                if let Some(panel) = state.panels.get_mut(id) {
                    panel.x = x;
                    panel.y = y;
                }
            }
            reconcile_all_edges(state);
            if let Some(saved) = layout.viewport {
                let mut candidate: Viewport = saved.into();
                candidate.zoom = clamp_zoom(candidate.zoom);
                apply_guarded(&mut state.viewport, candidate);
            }
            state.mark_dirty();
            true
        }

        Message::MessageDeleted { message_id } => {
            let before = state.panels.len();
            state
                .panels
                .retain(|_, p| p.prompt_message_id.as_deref() != Some(message_id.as_str()));
            if state.panels.len() == before {
                return true;
            }
            prune_edges(&state.panels, &mut state.edges);
            if let Some(selected) = &state.selected_panel_id {
                if !state.panels.contains_key(selected) {
                    state.selected_panel_id = None;
                }
            }
            state.mark_dirty();
            state.mark_modified();
            true
        }

        Message::ConversationCleared => {
            state.panels.clear();
            state.edges.clear();
            state.selected_panel_id = None;
            state.dragging = None;
            state.reflows.clear();
            state.pending_collapse.clear();
            state.history.clear();
            state.scroll.reset();
            state.suspensions.reset();
            state.mode_ctl = Default::default();
            state.state_modified = false;
            state.mark_dirty();
            true
        }

        Message::StartPanelDrag { panel_id } => {
            let draggable = state
                .panels
                .get(panel_id)
                .map(|p| p.draggable)
                .unwrap_or(false);
            if draggable {
                state.history.push(&state.panels);
                state.dragging = Some(panel_id.clone());
            }
            true
        }

        Message::UpdatePanelDrag { panel_id, x, y } => {
            if state.dragging.as_deref() != Some(panel_id.as_str()) {
                return true;
            }
            match state.panels.get_mut(panel_id) {
                Some(panel) => {
                    panel.x = *x;
                    panel.y = *y;
                }
                None => return true,
            }
            reconcile_edges_for_panel(&state.panels, &mut state.edges, panel_id);
            state.mark_dirty();
            true
        }

        Message::StopPanelDrag { panel_id } => {
            if state.dragging.take().is_some() {
                reconcile_edges_for_panel(&state.panels, &mut state.edges, panel_id);
                state.mark_dirty();
                state.mark_modified();
            }
            true
        }

        Message::PanelHeightMeasured { panel_id, height } => {
            if let Some(panel) = state.panels.get_mut(panel_id) {
                if panel.measured_height != Some(*height) {
                    panel.measured_height = Some(*height);
                    // Linear mode restacks instantly; animated reflow is a
                    // canvas-mode, collapse-driven affair.
                    if state.mode == CanvasMode::Linear {
                        restack_linear_column(state);
                    }
                    state.mark_dirty();
                }
            }
            true
        }

        Message::ToggleCollapsed { panel_id } => {
            if let Some(panel) = state.panels.get_mut(panel_id) {
                state
                    .pending_collapse
                    .insert(panel_id.clone(), panel.height());
                panel.collapsed = !panel.collapsed;
                // The old measurement described the other collapse state.
                panel.measured_height = None;
                commands.push(Command::RequestMeasure {
                    panel_id: panel_id.clone(),
                });
                state.mark_dirty();
            }
            true
        }

        Message::CollapseSettled {
            panel_id,
            new_height,
            now_ms,
        } => {
            let old_height = match state.pending_collapse.remove(panel_id) {
                Some(h) => h,
                None => return true,
            };
            if let Some(panel) = state.panels.get_mut(panel_id) {
                panel.measured_height = Some(*new_height);
            } else {
                return true;
            }
            // Every in-flight reflow snaps to its end before a new one
            // starts: animations write absolute positions captured at their
            // own start, so overlapping ones must compose sequentially or a
            // shared downstream panel loses part of one delta.
            for (_, old) in state.reflows.drain() {
                old.finish(&mut state.panels);
            }
            let delta = new_height - old_height;
            if let Some(anim) = ReflowAnimation::begin(
                &state.panels,
                panel_id,
                delta,
                state.stack_direction,
                *now_ms,
            ) {
                state.reflows.insert(panel_id.clone(), anim);
            }
            state.mark_dirty();
            state.mark_modified();
            true
        }

        Message::AddNote { content, position } => {
            state.history.push(&state.panels);
            let id = place_standalone(
                &mut state.panels,
                PanelKind::Note,
                content.clone(),
                *position,
                state.stack_direction,
                state.selected_panel_id.as_deref(),
                chrono::Utc::now(),
            );
            derive_interaction_flags(&mut state.panels, state.locked, state.mode);
            commands.push(Command::RequestMeasure { panel_id: id });
            state.mark_dirty();
            state.mark_modified();
            true
        }

        Message::AddDrawing { position } => {
            state.history.push(&state.panels);
            let id = place_standalone(
                &mut state.panels,
                PanelKind::Drawing,
                String::new(),
                *position,
                state.stack_direction,
                state.selected_panel_id.as_deref(),
                chrono::Utc::now(),
            );
            derive_interaction_flags(&mut state.panels, state.locked, state.mode);
            commands.push(Command::RequestMeasure { panel_id: id });
            state.mark_dirty();
            state.mark_modified();
            true
        }

        Message::DeletePanel { panel_id } => {
            if state.panels.remove(panel_id).is_none() {
                return true;
            }
            prune_edges(&state.panels, &mut state.edges);
            state.reflows.remove(panel_id);
            state.pending_collapse.remove(panel_id);
            if state.selected_panel_id.as_deref() == Some(panel_id.as_str()) {
                state.selected_panel_id = None;
            }
            state.mark_dirty();
            state.mark_modified();
            true
        }

        Message::ConnectPanels {
            source_id,
            target_id,
        } => {
            let connectable = state
                .panels
                .get(source_id)
                .zip(state.panels.get(target_id))
                .map(|(s, t)| s.connectable && t.connectable)
                .unwrap_or(false);
            if !connectable {
                return true;
            }
            if let Some(edge) =
                create_edge(&state.panels, &state.edges, source_id, target_id, false)
            {
                state.edges.push(edge);
                state.mark_dirty();
            }
            true
        }

        Message::DeleteEdge { edge_id } => {
            let before = state.edges.len();
            state.edges.retain(|e| e.id != *edge_id);
            if state.edges.len() != before {
                state.mark_dirty();
            }
            true
        }

        Message::SetStackDirection(direction) => {
            state.stack_direction = *direction;
            true
        }

        Message::SetLocked(locked) => {
            state.locked = *locked;
            if derive_interaction_flags(&mut state.panels, state.locked, state.mode) {
                state.mark_dirty();
            }
            true
        }

        Message::Undo => {
            if state.history.undo(&mut state.panels) {
                reconcile_all_edges(state);
                state.mark_dirty();
                state.mark_modified();
            }
            true
        }

        Message::Redo => {
            if state.history.redo(&mut state.panels) {
                reconcile_all_edges(state);
                state.mark_dirty();
                state.mark_modified();
            }
            true
        }

        _ => false,
    }
}

/// Instant (non-animated) restack of the linear-mode column, used when a
/// fresh measurement changes a panel's height while the column is showing.
pub fn restack_linear_column(state: &mut AppState) {
    let order = chronological_ids(&state.panels);
    let mut y = crate::constants::COLUMN_START_Y;
    for id in &order {
        if let Some(panel) = state.panels.get_mut(id) {
            panel.x = -panel.width / 2.0;
            panel.y = y;
            y += panel.height() + crate::constants::PANEL_GAP;
        }
    }
}

/// Re-run handle assignment for every edge after a bulk position change
/// (undo/redo, reflow completion).
pub fn reconcile_all_edges(state: &mut AppState) {
    let ids: Vec<String> = state.panels.keys().cloned().collect();
    for id in ids {
        reconcile_edges_for_panel(&state.panels, &mut state.edges, &id);
    }
}
