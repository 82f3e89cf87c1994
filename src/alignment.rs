//! Viewport-Alignment Controller: keeps the panel column visually tied to
//! the floating input box across resizes, sidebar toggles and minimap
//! moves. Ordinary panning is deliberately left alone so the controller
//! never fights the user.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::constants::SELECTION_SUSPENSION_MS;
use crate::models::{LayoutMetrics, Viewport};
use crate::viewport::apply_guarded;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ColumnAlignment {
    /// Column centered in the available map area.
    Centered,
    /// Column left-aligned at a fixed gap from the sidebar.
    LeftAligned,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct AlignmentDecision {
    pub alignment: ColumnAlignment,
    /// Screen-x the column's reference point must land on: the input box's
    /// center when centered, its left edge when left-aligned.
    pub anchor_screen_x: f64,
}

/// The push/center rule. The input box and the panel column both consult
/// this, so the two can never visually diverge.
pub fn resolve_alignment(metrics: &LayoutMetrics) -> AlignmentDecision {
    let map_left = metrics.sidebar_width;
    let map_right = metrics.minimap.x;
    let available = (map_right - map_left).max(0.0);

    // Half the space between sidebar and minimap, minus the input box's
    // nominal width, floored at zero: the "center" reservation.
    let left_gap = (available / 2.0 - metrics.input_box.width).max(0.0);
    let right_gap = available - left_gap - metrics.input_box.width;

    if right_gap < left_gap {
        AlignmentDecision {
            alignment: ColumnAlignment::Centered,
            anchor_screen_x: map_left + available / 2.0,
        }
    } else {
        AlignmentDecision {
            alignment: ColumnAlignment::LeftAligned,
            anchor_screen_x: map_left + left_gap,
        }
    }
}

/// Recompute the camera pan-x so the column's reference point (center or
/// left edge of its bounding box, per the push/center decision) lands on
/// the anchor. Pan-y is untouched. Returns true when the viewport changed.
pub fn realign_pan_x(
    viewport: &mut Viewport,
    metrics: &LayoutMetrics,
    column_min_x: f64,
    column_max_x: f64,
) -> bool {
    let decision = resolve_alignment(metrics);
    let reference_world_x = match decision.alignment {
        ColumnAlignment::Centered => (column_min_x + column_max_x) / 2.0,
        ColumnAlignment::LeftAligned => column_min_x,
    };
    let candidate = Viewport {
        x: decision.anchor_screen_x - reference_world_x * viewport.zoom,
        y: viewport.y,
        zoom: viewport.zoom,
    };
    if candidate == *viewport {
        return false;
    }
    apply_guarded(viewport, candidate)
}

/// Why the alignment controller is currently standing down.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum SuspensionReason {
    FitViewAnimation,
    ZoomToFullTransition,
    ScrollToBottomAnimation,
    RecentSelection,
}

#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
enum SuspensionUntil {
    /// Cleared when the matching end event arrives.
    Event,
    /// Self-clears once the deadline passes.
    DeadlineMs(f64),
}

/// Explicit suspension set replacing the tangle of boolean refs: every
/// reason is named, time- or event-bounded, and self-clearing.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Suspensions {
    active: HashMap<SuspensionReason, SuspensionUntil>,
}

impl Suspensions {
    pub fn suspend_for_event(&mut self, reason: SuspensionReason) {
        self.active.insert(reason, SuspensionUntil::Event);
    }

    pub fn suspend_until(&mut self, reason: SuspensionReason, deadline_ms: f64) {
        self.active.insert(reason, SuspensionUntil::DeadlineMs(deadline_ms));
    }

    /// Record a selection in linear mode: alignment stands down briefly so
    /// the camera does not jump out from under the click.
    pub fn note_selection(&mut self, now_ms: f64) {
        self.suspend_until(
            SuspensionReason::RecentSelection,
            now_ms + SELECTION_SUSPENSION_MS,
        );
    }

    pub fn clear(&mut self, reason: SuspensionReason) {
        self.active.remove(&reason);
    }

    /// Drop expired deadlines, then report whether anything is still active.
    pub fn is_suspended(&mut self, now_ms: f64) -> bool {
        self.active.retain(|_, until| match until {
            SuspensionUntil::Event => true,
            SuspensionUntil::DeadlineMs(deadline) => now_ms < *deadline,
        });
        !self.active.is_empty()
    }

    pub fn reset(&mut self) {
        self.active.clear();
    }
}
