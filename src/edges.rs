//! Edge Reconciler: keeps every edge attached to the closest facing handle
//! pair of its endpoints as panels move, flipping direction in place when
//! the nearer pair reverses.

use std::collections::{HashMap, HashSet};

use crate::geometry::closest_handle_pair;
use crate::models::{Panel, PanelEdge};

/// Create an edge between two panels with the closest handle pair already
/// assigned. Returns None when either endpoint is missing, when the
/// endpoints are the same panel, or when the unordered pair is already
/// connected.
pub fn create_edge(
    panels: &HashMap<String, Panel>,
    edges: &[PanelEdge],
    source_id: &str,
    target_id: &str,
    dotted: bool,
) -> Option<PanelEdge> {
    if source_id == target_id {
        return None;
    }
    let source = panels.get(source_id)?;
    let target = panels.get(target_id)?;
    let duplicate = edges.iter().any(|e| {
        (e.source_id == source_id && e.target_id == target_id)
            || (e.source_id == target_id && e.target_id == source_id)
    });
    if duplicate {
        return None;
    }
    let (source_handle, target_handle) = closest_handle_pair(source, target);
    Some(PanelEdge {
        id: PanelEdge::derived_id(source_id, target_id),
        source_id: source_id.to_string(),
        target_id: target_id.to_string(),
        source_handle,
        target_handle,
        dotted,
    })
}

/// Recompute the handle pair of every edge touching `moved_id`. The edge's
/// direction flips (source and target swap, id re-derived) when the closest
/// pair is reversed relative to the current orientation; this is an
/// update-in-place so the rendering collaborator never sees the edge vanish.
///
/// Returns true when any edge changed.
pub fn reconcile_edges_for_panel(
    panels: &HashMap<String, Panel>,
    edges: &mut [PanelEdge],
    moved_id: &str,
) -> bool {
    let mut changed = false;
    for edge in edges.iter_mut().filter(|e| e.touches(moved_id)) {
        let (source, target) = match (panels.get(&edge.source_id), panels.get(&edge.target_id)) {
            (Some(s), Some(t)) => (s, t),
            // Stale endpoint: leave the edge for deletion elsewhere.
            _ => continue,
        };
        let (source_handle, target_handle) = closest_handle_pair(source, target);

        if source_handle != edge.source_handle || target_handle != edge.target_handle {
            edge.source_handle = source_handle;
            edge.target_handle = target_handle;
            changed = true;
        }

        if should_flip(edge.source_handle) {
            std::mem::swap(&mut edge.source_id, &mut edge.target_id);
            std::mem::swap(&mut edge.source_handle, &mut edge.target_handle);
            edge.id = PanelEdge::derived_id(&edge.source_id, &edge.target_id);
            changed = true;
        }
    }
    changed
}

/// A source whose closest handle is its left or top side trails its target
/// spatially: the near pair has reversed, so the connection keeps its
/// identity but source and target swap.
fn should_flip(source_handle: crate::models::HandleSide) -> bool {
    use crate::models::HandleSide;
    matches!(source_handle, HandleSide::Left | HandleSide::Top)
}

/// Drop edges whose endpoints no longer exist and collapse duplicates so at
/// most one edge connects any unordered panel pair.
pub fn prune_edges(panels: &HashMap<String, Panel>, edges: &mut Vec<PanelEdge>) {
    let mut seen: HashSet<(String, String)> = HashSet::new();
    edges.retain(|e| {
        panels.contains_key(&e.source_id)
            && panels.contains_key(&e.target_id)
            && seen.insert(e.unordered_pair())
    });
}
