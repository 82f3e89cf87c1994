//! Persisted layout contract. The core treats stored positions as a cache:
//! an entry is reused verbatim on reload, absence means "place fresh".
//! The transport (REST, localStorage, disk) belongs to the host, which
//! supplies a `LayoutStore`; an in-memory implementation backs tests.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::Viewport;

/// Saved camera state, persisted alongside the position map.
#[derive(Clone, Copy, Serialize, Deserialize, PartialEq, Debug)]
pub struct SavedViewport {
    pub x: f64,
    pub y: f64,
    pub zoom: f64,
}

impl From<Viewport> for SavedViewport {
    fn from(v: Viewport) -> Self {
        Self {
            x: v.x,
            y: v.y,
            zoom: v.zoom,
        }
    }
}

impl From<SavedViewport> for Viewport {
    fn from(v: SavedViewport) -> Self {
        Self {
            x: v.x,
            y: v.y,
            zoom: v.zoom,
        }
    }
}

/// Per-conversation layout: panel id → world position, plus the viewport.
#[derive(Clone, Serialize, Deserialize, PartialEq, Debug, Default)]
pub struct ConversationLayout {
    pub positions: HashMap<String, (f64, f64)>,
    pub viewport: Option<SavedViewport>,
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("layout serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("layout store backend failed: {0}")]
    Backend(String),
}

pub trait LayoutStore {
    fn save(&mut self, conversation_id: &str, layout: &ConversationLayout)
        -> Result<(), StoreError>;
    fn load(&self, conversation_id: &str) -> Result<Option<ConversationLayout>, StoreError>;
}

/// In-memory store holding serialized JSON, so tests exercise the same
/// serde round trip a real backend would.
#[derive(Default)]
pub struct MemoryLayoutStore {
    entries: HashMap<String, String>,
}

impl LayoutStore for MemoryLayoutStore {
    fn save(
        &mut self,
        conversation_id: &str,
        layout: &ConversationLayout,
    ) -> Result<(), StoreError> {
        let json = serde_json::to_string(layout)?;
        self.entries.insert(conversation_id.to_string(), json);
        Ok(())
    }

    fn load(&self, conversation_id: &str) -> Result<Option<ConversationLayout>, StoreError> {
        match self.entries.get(conversation_id) {
            Some(json) => Ok(Some(serde_json::from_str(json)?)),
            None => Ok(None),
        }
    }
}
