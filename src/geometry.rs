//! Pure geometry over panel snapshots: bounding boxes, handle anchor points
//! and the closest facing handle pair between two panels.

use crate::models::{HandleSide, Panel};

/// World-space midpoint of the named edge of a panel's bounding box.
/// Uses the measured height when available, the fallback constant otherwise.
pub fn handle_position(panel: &Panel, side: HandleSide) -> (f64, f64) {
    let w = panel.width;
    let h = panel.height();
    match side {
        HandleSide::Left => (panel.x, panel.y + h / 2.0),
        HandleSide::Right => (panel.x + w, panel.y + h / 2.0),
        HandleSide::Top => (panel.x + w / 2.0, panel.y),
        HandleSide::Bottom => (panel.x + w / 2.0, panel.y + h),
    }
}

fn distance(a: (f64, f64), b: (f64, f64)) -> f64 {
    let dx = a.0 - b.0;
    let dy = a.1 - b.1;
    (dx * dx + dy * dy).sqrt()
}

/// The four directionally-meaningful handle combinations, in tie-break
/// order: the first candidate wins when distances are equal.
const HANDLE_CANDIDATES: [(HandleSide, HandleSide); 4] = [
    (HandleSide::Right, HandleSide::Left),
    (HandleSide::Left, HandleSide::Right),
    (HandleSide::Bottom, HandleSide::Top),
    (HandleSide::Top, HandleSide::Bottom),
];

/// Pick the pair of facing handles with minimal Euclidean distance between
/// panels `a` and `b`. Returns `(a_side, b_side)`.
pub fn closest_handle_pair(a: &Panel, b: &Panel) -> (HandleSide, HandleSide) {
    let mut best = HANDLE_CANDIDATES[0];
    let mut best_dist = f64::INFINITY;
    for (a_side, b_side) in HANDLE_CANDIDATES {
        let d = distance(handle_position(a, a_side), handle_position(b, b_side));
        if d < best_dist {
            best_dist = d;
            best = (a_side, b_side);
        }
    }
    best
}

/// Bounding box of a set of panels: `(min_x, min_y, max_x, max_y)`.
/// None when the set is empty.
pub fn panels_bounds<'a, I>(panels: I) -> Option<(f64, f64, f64, f64)>
where
    I: IntoIterator<Item = &'a Panel>,
{
    let mut bounds: Option<(f64, f64, f64, f64)> = None;
    for p in panels {
        let (min_x, min_y, max_x, max_y) =
            bounds.unwrap_or((f64::MAX, f64::MAX, f64::MIN, f64::MIN));
        bounds = Some((
            min_x.min(p.x),
            min_y.min(p.y),
            max_x.max(p.x + p.width),
            max_y.max(p.y + p.height()),
        ));
    }
    bounds
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PanelKind;
    use chrono::Utc;
    use proptest::prelude::*;

    fn panel(id: &str, x: f64, y: f64, height: f64) -> Panel {
        let mut p = Panel::new(id.to_string(), PanelKind::Exchange, x, y, Utc::now());
        p.measured_height = Some(height);
        p
    }

    #[test]
    fn handle_positions_use_measured_height() {
        let p = panel("a", 100.0, 200.0, 300.0);
        assert_eq!(handle_position(&p, HandleSide::Left), (100.0, 350.0));
        assert_eq!(handle_position(&p, HandleSide::Right), (600.0, 350.0));
        assert_eq!(handle_position(&p, HandleSide::Top), (350.0, 200.0));
        assert_eq!(handle_position(&p, HandleSide::Bottom), (350.0, 500.0));
    }

    #[test]
    fn handle_positions_fall_back_when_unmeasured() {
        let p = Panel::new("a".into(), PanelKind::Exchange, 0.0, 0.0, Utc::now());
        // fallback height 400
        assert_eq!(handle_position(&p, HandleSide::Bottom), (250.0, 400.0));
    }

    #[test]
    fn side_by_side_panels_pick_facing_sides() {
        let a = panel("a", 0.0, 0.0, 200.0);
        let b = panel("b", 800.0, 0.0, 200.0);
        assert_eq!(
            closest_handle_pair(&a, &b),
            (HandleSide::Right, HandleSide::Left)
        );
        assert_eq!(
            closest_handle_pair(&b, &a),
            (HandleSide::Left, HandleSide::Right)
        );
    }

    #[test]
    fn stacked_panels_pick_vertical_sides() {
        let a = panel("a", 0.0, 0.0, 200.0);
        let b = panel("b", 0.0, 600.0, 200.0);
        assert_eq!(
            closest_handle_pair(&a, &b),
            (HandleSide::Bottom, HandleSide::Top)
        );
    }

    #[test]
    fn equal_distance_tie_break_is_enumeration_order() {
        // Identical positions: every candidate pair has the same distance,
        // so the first enumerated candidate must win.
        let a = panel("a", 0.0, 0.0, 500.0);
        let b = panel("b", 0.0, 0.0, 500.0);
        assert_eq!(
            closest_handle_pair(&a, &b),
            (HandleSide::Right, HandleSide::Left)
        );
    }

    proptest! {
        /// closest_handle_pair(a, b) and closest_handle_pair(b, a) select
        /// geometrically mirrored pairs.
        #[test]
        fn closest_pair_is_symmetric(
            ax in -5000.0..5000.0f64,
            ay in -5000.0..5000.0f64,
            bx in -5000.0..5000.0f64,
            by in -5000.0..5000.0f64,
            ah in 50.0..900.0f64,
            bh in 50.0..900.0f64,
        ) {
            let a = panel("a", ax, ay, ah);
            let b = panel("b", bx, by, bh);
            let (sa, sb) = closest_handle_pair(&a, &b);
            let (ta, tb) = closest_handle_pair(&b, &a);
            let d_ab = {
                let pa = handle_position(&a, sa);
                let pb = handle_position(&b, sb);
                ((pa.0 - pb.0).powi(2) + (pa.1 - pb.1).powi(2)).sqrt()
            };
            let d_ba = {
                let pa = handle_position(&b, ta);
                let pb = handle_position(&a, tb);
                ((pa.0 - pb.0).powi(2) + (pa.1 - pb.1).powi(2)).sqrt()
            };
            // Both orderings must find the same minimal separation.
            prop_assert!((d_ab - d_ba).abs() < 1e-9);
        }
    }

    #[test]
    fn bounds_cover_all_panels() {
        let a = panel("a", 0.0, 0.0, 200.0);
        let b = panel("b", 700.0, -100.0, 300.0);
        let (min_x, min_y, max_x, max_y) = panels_bounds([&a, &b]).unwrap();
        assert_eq!((min_x, min_y), (0.0, -100.0));
        assert_eq!(max_x, 700.0 + a.width);
        assert_eq!(max_y, 200.0);
        assert!(panels_bounds(std::iter::empty::<&Panel>()).is_none());
    }
}
