//! The canvas ⇄ linear state machine, selection, and linear mode's
//! discrete wheel navigation.

use crate::messages::{Command, Message};
use crate::mode::{center_panel_vertically, derive_interaction_flags};
use crate::models::CanvasMode;
use crate::state::AppState;

pub fn update(state: &mut AppState, msg: &Message, _commands: &mut Vec<Command>) -> bool {
    match msg {
        Message::ToggleMode { now_ms: _ } => {
            match state.mode {
                CanvasMode::Canvas => {
                    state.mode = CanvasMode::Linear;
                    let selected = state.selected_panel_id.clone();
                    state.mode_ctl.enter_linear(
                        &mut state.panels,
                        &mut state.viewport,
                        &state.metrics,
                        selected.as_deref(),
                    );
                    // Wheel focus starts where the camera landed: the
                    // selection if any, the end of the column otherwise.
                    let order = state.panel_order();
                    let focus = match &selected {
                        Some(id) => order.iter().position(|p| p == id),
                        None => order.len().checked_sub(1),
                    };
                    state.scroll.reset();
                    state.scroll.focus(focus);
                }
                CanvasMode::Linear => {
                    state.mode = CanvasMode::Canvas;
                    let selected = state.selected_panel_id.clone();
                    state.mode_ctl.exit_linear(
                        &mut state.panels,
                        &mut state.viewport,
                        &state.metrics,
                        selected.as_deref(),
                    );
                    state.scroll.reset();
                }
            }
            derive_interaction_flags(&mut state.panels, state.locked, state.mode);
            state.mark_dirty();
            true
        }

        Message::WheelScrolled {
            delta_y,
            zoom_modifier,
            now_ms: _,
        } => {
            // Modifier-wheel is zoom; the host converts it to ZoomCanvas.
            // Canvas-mode wheel pans/zooms at the host's discretion too, so
            // only plain wheel input in linear mode lands here.
            if state.mode != CanvasMode::Linear || *zoom_modifier {
                return false;
            }
            let order = state.panel_order();
            if let Some(index) = state.scroll.on_wheel(*delta_y, order.len()) {
                if let Some(panel) = order.get(index).and_then(|id| state.panels.get(id)) {
                    center_panel_vertically(&mut state.viewport, &state.metrics, panel);
                }
                state.mark_dirty();
            }
            true
        }

        Message::SelectPanel { panel_id, now_ms } => {
            state.selected_panel_id = panel_id.clone();
            if state.mode == CanvasMode::Linear {
                // Alignment stands down briefly so the click does not get a
                // camera jump as its echo.
                state.suspensions.note_selection(*now_ms);
                let focus = panel_id.as_ref().and_then(|id| {
                    state.panel_order().iter().position(|p| p == id)
                });
                state.scroll.focus(focus);
            }
            state.mark_dirty();
            true
        }

        _ => false,
    }
}
