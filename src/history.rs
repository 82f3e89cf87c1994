//! Bounded undo/redo over panel layout. Snapshots capture positions only;
//! content, edges and camera are deliberately outside the history so undo
//! never resurrects deleted conversation data.

use std::collections::HashMap;

use crate::constants::HISTORY_LIMIT;
use crate::models::Panel;

type PositionSnapshot = HashMap<String, (f64, f64)>;

#[derive(Clone, Debug, Default)]
pub struct LayoutHistory {
    past: Vec<PositionSnapshot>,
    future: Vec<PositionSnapshot>,
}

fn snapshot(panels: &HashMap<String, Panel>) -> PositionSnapshot {
    panels
        .iter()
        .map(|(id, p)| (id.clone(), (p.x, p.y)))
        .collect()
}

fn restore(panels: &mut HashMap<String, Panel>, snap: &PositionSnapshot) {
    for (id, &(x, y)) in snap {
        if let Some(panel) = panels.get_mut(id) {
            panel.x = x;
            panel.y = y;
        }
    }
}

impl LayoutHistory {
    /// Record the layout as it is *before* a mutation. Clears the redo
    /// stack, as any new edit forks history.
    pub fn push(&mut self, panels: &HashMap<String, Panel>) {
        self.future.clear();
        self.past.push(snapshot(panels));
        if self.past.len() > HISTORY_LIMIT {
            self.past.remove(0);
        }
    }

    pub fn undo(&mut self, panels: &mut HashMap<String, Panel>) -> bool {
        match self.past.pop() {
            Some(snap) => {
                self.future.push(snapshot(panels));
                restore(panels, &snap);
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self, panels: &mut HashMap<String, Panel>) -> bool {
        match self.future.pop() {
            Some(snap) => {
                self.past.push(snapshot(panels));
                restore(panels, &snap);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }
}
