//! Reducer-level tests: drive `AppState::dispatch` with realistic message
//! sequences and assert on the resulting layout, the way the host would
//! observe it.

mod placement_tests;

use chrono::{Duration, TimeZone, Utc};

use crate::messages::Message;
use crate::models::{ChatItem, MessageRole};
use crate::state::AppState;

/// A conversation item `minute` minutes into a fixed epoch, with a single
/// short response so its estimated height is one line.
pub(crate) fn item(id: &str, minute: i64) -> ChatItem {
    ChatItem {
        id: id.to_string(),
        role: MessageRole::User,
        content: format!("prompt {}", id),
        timestamp: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
            + Duration::minutes(minute),
        responses: vec!["ok".to_string()],
        stored_position: None,
    }
}

pub(crate) fn load(state: &mut AppState, items: Vec<ChatItem>) {
    state.dispatch(Message::ItemsLoaded {
        items,
        links: vec![],
    });
}

/// Full drag gesture: start, one move, stop.
pub(crate) fn drag(state: &mut AppState, panel_id: &str, x: f64, y: f64) {
    state.dispatch(Message::StartPanelDrag {
        panel_id: panel_id.to_string(),
    });
    state.dispatch(Message::UpdatePanelDrag {
        panel_id: panel_id.to_string(),
        x,
        y,
    });
    state.dispatch(Message::StopPanelDrag {
        panel_id: panel_id.to_string(),
    });
}

pub(crate) fn measure(state: &mut AppState, panel_id: &str, height: f64) {
    state.dispatch(Message::PanelHeightMeasured {
        panel_id: panel_id.to_string(),
        height,
    });
}
