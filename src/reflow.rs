//! Reflow Animator: when a panel's rendered height changes (collapse or
//! expand), panels further along the stacking axis slide by the height
//! delta with an eased, time-based interpolation.
//!
//! One animation may be in flight per toggled panel; a new toggle on the
//! same panel supersedes the old animation, restarting from current
//! positions.

use std::collections::HashMap;

use crate::constants::{REFLOW_DURATION_MS, REFLOW_MIN_HEIGHT_DELTA};
use crate::models::{Panel, StackDirection};
use crate::utils::ease_out_cubic;

/// A panel being carried by an in-flight reflow: id plus its position on the
/// primary axis when the animation started.
#[derive(Clone, Debug)]
struct Carried {
    panel_id: String,
    start_primary: f64,
}

#[derive(Clone, Debug)]
pub struct ReflowAnimation {
    pub toggled_id: String,
    pub height_delta: f64,
    pub start_ms: f64,
    direction: StackDirection,
    carried: Vec<Carried>,
}

impl ReflowAnimation {
    /// Build a reflow for a height change of `height_delta` on `toggled_id`.
    /// Returns None when the change is too small to matter.
    pub fn begin(
        panels: &HashMap<String, Panel>,
        toggled_id: &str,
        height_delta: f64,
        direction: StackDirection,
        now_ms: f64,
    ) -> Option<Self> {
        if height_delta.abs() < REFLOW_MIN_HEIGHT_DELTA {
            return None;
        }
        let toggled = panels.get(toggled_id)?;

        // Panels positioned further along the primary axis than the toggled
        // panel move; everything else stays put.
        let carried: Vec<Carried> = panels
            .values()
            .filter(|p| p.id != toggled_id)
            .filter(|p| match direction {
                StackDirection::Down | StackDirection::Up => p.y > toggled.y,
                StackDirection::Right | StackDirection::Left => p.x > toggled.x,
            })
            .map(|p| Carried {
                panel_id: p.id.clone(),
                start_primary: match direction {
                    StackDirection::Down | StackDirection::Up => p.y,
                    StackDirection::Right | StackDirection::Left => p.x,
                },
            })
            .collect();

        if carried.is_empty() {
            return None;
        }

        Some(Self {
            toggled_id: toggled_id.to_string(),
            height_delta,
            start_ms: now_ms,
            direction,
            carried,
        })
    }

    /// Advance the animation to `now_ms`, writing interpolated positions.
    /// Returns true when the animation has completed.
    pub fn step(&self, panels: &mut HashMap<String, Panel>, now_ms: f64) -> bool {
        let progress = ((now_ms - self.start_ms) / REFLOW_DURATION_MS).clamp(0.0, 1.0);
        let eased = ease_out_cubic(progress);
        for carried in &self.carried {
            // A panel deleted mid-animation is skipped, not an error.
            if let Some(panel) = panels.get_mut(&carried.panel_id) {
                let value = carried.start_primary + self.height_delta * eased;
                match self.direction {
                    StackDirection::Down | StackDirection::Up => panel.y = value,
                    StackDirection::Right | StackDirection::Left => panel.x = value,
                }
            }
        }
        progress >= 1.0
    }

    /// Snap carried panels to their final positions. Used when a reflow is
    /// superseded or torn down so no panel is left mid-slide.
    pub fn finish(&self, panels: &mut HashMap<String, Panel>) {
        self.step(panels, self.start_ms + REFLOW_DURATION_MS);
    }
}
