//! Discrete Scroll Navigator: linear mode turns continuous wheel input into
//! one-panel-at-a-time navigation by accumulating delta magnitude until a
//! threshold is crossed.

use serde::{Deserialize, Serialize};

use crate::constants::SCROLL_STEP_THRESHOLD;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum ScrollDirection {
    Up,
    Down,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ScrollNavigator {
    pub focused_index: Option<usize>,
    accumulator: f64,
    last_direction: Option<ScrollDirection>,
}

impl ScrollNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one wheel event. Returns the newly focused index when the
    /// accumulated delta crossed the threshold and the focus moved.
    ///
    /// Small and inertial wheel deltas accumulate invisibly; a direction
    /// change resets the accumulator so an overshoot correction does not
    /// inherit momentum from the previous gesture.
    pub fn on_wheel(&mut self, delta_y: f64, panel_count: usize) -> Option<usize> {
        if panel_count == 0 || delta_y == 0.0 {
            return None;
        }
        let direction = if delta_y > 0.0 {
            ScrollDirection::Down
        } else {
            ScrollDirection::Up
        };
        if self.last_direction != Some(direction) {
            self.accumulator = 0.0;
            self.last_direction = Some(direction);
        }
        self.accumulator += delta_y.abs();
        if self.accumulator < SCROLL_STEP_THRESHOLD {
            return None;
        }
        self.accumulator = 0.0;

        let current = self.focused_index.unwrap_or(0);
        let next = match direction {
            ScrollDirection::Down => (current + 1).min(panel_count - 1),
            ScrollDirection::Up => current.saturating_sub(1),
        };
        if Some(next) == self.focused_index {
            return None;
        }
        self.focused_index = Some(next);
        Some(next)
    }

    /// Focus a panel directly (selection click, mode entry).
    pub fn focus(&mut self, index: Option<usize>) {
        self.focused_index = index;
        self.accumulator = 0.0;
        self.last_direction = None;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
