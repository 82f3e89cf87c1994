//! World↔screen coordinate mapping for the camera owned by the rendering
//! collaborator, plus the non-finite guard every viewport write goes
//! through.

use crate::constants::{MAX_ZOOM, MIN_ZOOM};
use crate::models::Viewport;

/// `screen = world * zoom + pan`
pub fn world_to_screen(world: (f64, f64), viewport: &Viewport) -> (f64, f64) {
    (
        world.0 * viewport.zoom + viewport.x,
        world.1 * viewport.zoom + viewport.y,
    )
}

/// `world = (screen - pan) / zoom`
pub fn screen_to_world(screen: (f64, f64), viewport: &Viewport) -> (f64, f64) {
    (
        (screen.0 - viewport.x) / viewport.zoom,
        (screen.1 - viewport.y) / viewport.zoom,
    )
}

fn is_usable(v: &Viewport) -> bool {
    v.x.is_finite() && v.y.is_finite() && v.zoom.is_finite() && v.zoom > 0.0
}

/// Apply a computed viewport, discarding it when any component is
/// non-finite or the zoom is non-positive. Protects against divide-by-zero
/// zoom and NaN propagation from unmeasured panel heights.
pub fn apply_guarded(current: &mut Viewport, candidate: Viewport) -> bool {
    if is_usable(&candidate) {
        *current = candidate;
        true
    } else {
        crate::debug_log!(
            "discarding non-finite viewport update ({}, {}, zoom {})",
            candidate.x,
            candidate.y,
            candidate.zoom
        );
        false
    }
}

pub fn clamp_zoom(zoom: f64) -> f64 {
    zoom.clamp(MIN_ZOOM, MAX_ZOOM)
}
