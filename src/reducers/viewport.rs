//! Camera mutations, layout-affecting host events, alignment suspension
//! windows and the per-frame animation tick.

use crate::alignment::SuspensionReason;
use crate::constants::PERSIST_DEBOUNCE_MS;
use crate::messages::{Command, Message};
use crate::models::Viewport;
use crate::state::AppState;
use crate::viewport::{apply_guarded, clamp_zoom};

pub fn update(state: &mut AppState, msg: &Message, commands: &mut Vec<Command>) -> bool {
    match msg {
        Message::ZoomCanvas {
            new_zoom,
            viewport_x,
            viewport_y,
        } => {
            let candidate = Viewport {
                x: *viewport_x,
                y: *viewport_y,
                zoom: clamp_zoom(*new_zoom),
            };
            if apply_guarded(&mut state.viewport, candidate) {
                state.mark_dirty();
                state.mark_modified();
            }
            true
        }

        Message::StartCanvasDrag { start_x, start_y } => {
            state.canvas_dragging = true;
            state.drag_last_x = *start_x;
            state.drag_last_y = *start_y;
            true
        }

        Message::UpdateCanvasDrag {
            current_x,
            current_y,
        } => {
            if !state.canvas_dragging {
                return true;
            }
            // Pan lives in screen pixels, so the pointer delta applies as-is.
            let candidate = Viewport {
                x: state.viewport.x + (current_x - state.drag_last_x),
                y: state.viewport.y + (current_y - state.drag_last_y),
                zoom: state.viewport.zoom,
            };
            state.drag_last_x = *current_x;
            state.drag_last_y = *current_y;
            if apply_guarded(&mut state.viewport, candidate) {
                state.mark_dirty();
            }
            true
        }

        Message::StopCanvasDrag => {
            if state.canvas_dragging {
                state.canvas_dragging = false;
                state.mark_modified();
            }
            true
        }

        Message::HostResized { metrics, now_ms }
        | Message::SidebarToggled { metrics, now_ms }
        | Message::MinimapRelocated { metrics, now_ms } => {
            state.metrics = *metrics;
            state.realign_if_allowed(*now_ms);
            state.mark_dirty();
            true
        }

        Message::FitViewStarted => {
            state
                .suspensions
                .suspend_for_event(SuspensionReason::FitViewAnimation);
            true
        }
        Message::FitViewSettled => {
            state.suspensions.clear(SuspensionReason::FitViewAnimation);
            true
        }
        Message::ZoomToFullStarted => {
            state
                .suspensions
                .suspend_for_event(SuspensionReason::ZoomToFullTransition);
            true
        }
        Message::ZoomToFullSettled => {
            state
                .suspensions
                .clear(SuspensionReason::ZoomToFullTransition);
            true
        }
        Message::ScrollToBottomStarted => {
            state
                .suspensions
                .suspend_for_event(SuspensionReason::ScrollToBottomAnimation);
            true
        }
        Message::ScrollToBottomSettled => {
            state
                .suspensions
                .clear(SuspensionReason::ScrollToBottomAnimation);
            true
        }

        Message::AnimationTick { now_ms } => {
            state.last_tick_ms = *now_ms;

            // Advance in-flight reflows; completed ones come off the map.
            let mut reflows = std::mem::take(&mut state.reflows);
            let running = reflows.len();
            reflows.retain(|_, anim| !anim.step(&mut state.panels, *now_ms));
            let finished = running - reflows.len();
            state.reflows = reflows;

            if running > 0 {
                crate::reducers::canvas::reconcile_all_edges(state);
                state.mark_dirty();
            }
            if finished > 0 {
                state.mark_modified();
            }

            // Debounced persist: flush once the layout has been quiet for
            // the whole window.
            if state.state_modified && *now_ms - state.last_modified_ms > PERSIST_DEBOUNCE_MS {
                state.state_modified = false;
                commands.push(Command::PersistLayout {
                    conversation_id: state.conversation_id.clone(),
                    layout: state.layout_snapshot(),
                });
            }
            true
        }

        _ => false,
    }
}
