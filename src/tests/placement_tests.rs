use super::{drag, item, load, measure};
use crate::constants::{COLUMN_START_Y, PANEL_GAP};
use crate::messages::Message;
use crate::models::StackDirection;
use crate::state::AppState;
use crate::utils::estimate_text_height;

#[test]
fn first_panel_starts_a_centered_column() {
    let mut state = AppState::new("conv");
    load(&mut state, vec![item("m1", 1)]);

    let panel = &state.panels["panel-m1"];
    assert_eq!(panel.x, -panel.width / 2.0);
    assert_eq!(panel.y, COLUMN_START_Y);
}

#[test]
fn reloading_the_same_items_moves_nothing() {
    let mut state = AppState::new("conv");
    load(&mut state, vec![item("m1", 1), item("m2", 2)]);
    drag(&mut state, "panel-m1", 777.0, -300.0);

    load(&mut state, vec![item("m1", 1), item("m2", 2)]);

    assert_eq!(state.panels.len(), 2);
    let panel = &state.panels["panel-m1"];
    assert_eq!((panel.x, panel.y), (777.0, -300.0));
}

#[test]
fn downward_placement_steps_past_the_reference_height() {
    let mut state = AppState::new("conv");
    load(&mut state, vec![item("m1", 1)]);
    drag(&mut state, "panel-m1", 100.0, 100.0);
    measure(&mut state, "panel-m1", 300.0);

    load(&mut state, vec![item("m1", 1), item("m2", 2)]);

    let next = &state.panels["panel-m2"];
    assert_eq!((next.x, next.y), (100.0, 100.0 + 300.0 + PANEL_GAP));
}

#[test]
fn rightward_placement_steps_past_the_reference_width() {
    let mut state = AppState::new("conv");
    // A note panel is wider than an exchange panel; the offset must use the
    // reference's own width, not the new panel's.
    state.dispatch(Message::AddNote {
        content: "anchor".to_string(),
        position: Some((0.0, 0.0)),
    });
    state.dispatch(Message::SetStackDirection(StackDirection::Right));

    load(&mut state, vec![item("m1", 1)]);

    let note_width = state
        .panels
        .values()
        .find(|p| p.id.starts_with("note-"))
        .unwrap()
        .width;
    let panel = &state.panels["panel-m1"];
    assert_eq!((panel.x, panel.y), (note_width + PANEL_GAP, 0.0));
}

#[test]
fn upward_placement_steps_past_the_new_panels_own_height() {
    let mut state = AppState::new("conv");
    load(&mut state, vec![item("m1", 1)]);
    drag(&mut state, "panel-m1", 100.0, 100.0);
    measure(&mut state, "panel-m1", 300.0);
    state.dispatch(Message::SetStackDirection(StackDirection::Up));

    load(&mut state, vec![item("m1", 1), item("m2", 2)]);

    // Up steps by the new panel's own estimated height, not the
    // reference's, so the gap lands between the two.
    let next = &state.panels["panel-m2"];
    let estimated = estimate_text_height(&next.content);
    assert_eq!((next.x, next.y), (100.0, 100.0 - (estimated + PANEL_GAP)));
}

#[test]
fn leftward_placement_steps_past_the_new_panels_own_width() {
    let mut state = AppState::new("conv");
    load(&mut state, vec![item("m1", 1)]);
    drag(&mut state, "panel-m1", 0.0, 0.0);
    state.dispatch(Message::SetStackDirection(StackDirection::Left));

    load(&mut state, vec![item("m1", 1), item("m2", 2)]);

    let next = &state.panels["panel-m2"];
    assert_eq!((next.x, next.y), (-(next.width + PANEL_GAP), 0.0));
}

#[test]
fn stored_positions_are_reused_verbatim() {
    let mut state = AppState::new("conv");
    let mut restored = item("m1", 1);
    restored.stored_position = Some((40.0, -70.0));
    load(&mut state, vec![restored]);

    let panel = &state.panels["panel-m1"];
    assert_eq!((panel.x, panel.y), (40.0, -70.0));
}

#[test]
fn multiple_responses_fan_out_from_the_first() {
    let mut state = AppState::new("conv");
    let mut fanned = item("m1", 1);
    fanned.responses = vec!["a".into(), "b".into(), "c".into()];
    load(&mut state, vec![fanned]);

    let first = state.panels["panel-m1"].clone();
    let second = &state.panels["panel-m1-r1"];
    let third = &state.panels["panel-m1-r2"];
    // Default direction is down: siblings share x and space out in y.
    assert_eq!(second.x, first.x);
    assert_eq!(third.x, first.x);
    let step = second.y - first.y;
    assert!(step > 0.0);
    assert_eq!(third.y - second.y, step);
}

#[test]
fn selected_panel_wins_over_most_recent_as_reference() {
    let mut state = AppState::new("conv");
    load(&mut state, vec![item("m1", 1), item("m2", 2)]);
    drag(&mut state, "panel-m1", 1000.0, 1000.0);
    measure(&mut state, "panel-m1", 300.0);
    state.dispatch(Message::SelectPanel {
        panel_id: Some("panel-m1".to_string()),
        now_ms: 0.0,
    });

    load(&mut state, vec![item("m1", 1), item("m2", 2), item("m3", 3)]);

    let panel = &state.panels["panel-m3"];
    assert_eq!((panel.x, panel.y), (1000.0, 1000.0 + 300.0 + PANEL_GAP));
}

#[test]
fn link_declarations_become_dotted_edges_once() {
    let mut state = AppState::new("conv");
    let items = vec![item("m1", 1), item("m2", 2)];
    let links = vec![crate::models::LinkDecl {
        source_id: "m1".to_string(),
        target_id: "m2".to_string(),
    }];
    state.dispatch(Message::ItemsLoaded {
        items: items.clone(),
        links: links.clone(),
    });
    state.dispatch(Message::ItemsLoaded { items, links });

    assert_eq!(state.edges.len(), 1);
    assert!(state.edges[0].dotted);

    // A user connection on the same pair is rejected as a duplicate.
    state.dispatch(Message::ConnectPanels {
        source_id: "panel-m2".to_string(),
        target_id: "panel-m1".to_string(),
    });
    assert_eq!(state.edges.len(), 1);
}

#[test]
fn deleting_a_message_removes_its_panels_and_edges() {
    let mut state = AppState::new("conv");
    load(&mut state, vec![item("m1", 1), item("m2", 2)]);
    state.dispatch(Message::ConnectPanels {
        source_id: "panel-m1".to_string(),
        target_id: "panel-m2".to_string(),
    });
    assert_eq!(state.edges.len(), 1);

    state.dispatch(Message::MessageDeleted {
        message_id: "m1".to_string(),
    });

    assert!(!state.panels.contains_key("panel-m1"));
    assert!(state.edges.is_empty());
}

#[test]
fn undo_reverts_a_drag_and_redo_reapplies_it() {
    let mut state = AppState::new("conv");
    load(&mut state, vec![item("m1", 1)]);
    let original = {
        let p = &state.panels["panel-m1"];
        (p.x, p.y)
    };
    drag(&mut state, "panel-m1", 500.0, 500.0);

    state.dispatch(Message::Undo);
    let p = &state.panels["panel-m1"];
    assert_eq!((p.x, p.y), original);

    state.dispatch(Message::Redo);
    let p = &state.panels["panel-m1"];
    assert_eq!((p.x, p.y), (500.0, 500.0));
}

#[test]
fn locking_freezes_dragging() {
    let mut state = AppState::new("conv");
    load(&mut state, vec![item("m1", 1)]);
    state.dispatch(Message::SetLocked(true));
    let before = {
        let p = &state.panels["panel-m1"];
        (p.x, p.y)
    };

    drag(&mut state, "panel-m1", 999.0, 999.0);

    let p = &state.panels["panel-m1"];
    assert_eq!((p.x, p.y), before);

    state.dispatch(Message::SetLocked(false));
    drag(&mut state, "panel-m1", 999.0, 999.0);
    let p = &state.panels["panel-m1"];
    assert_eq!((p.x, p.y), (999.0, 999.0));
}

#[test]
fn clearing_the_conversation_drops_all_layout_state() {
    let mut state = AppState::new("conv");
    load(&mut state, vec![item("m1", 1), item("m2", 2)]);
    state.dispatch(Message::ConnectPanels {
        source_id: "panel-m1".to_string(),
        target_id: "panel-m2".to_string(),
    });
    drag(&mut state, "panel-m1", 5.0, 5.0);

    state.dispatch(Message::ConversationCleared);

    assert!(state.panels.is_empty());
    assert!(state.edges.is_empty());
    assert_eq!(state.selected_panel_id, None);
    // History does not survive the conversation it describes.
    state.dispatch(Message::Undo);
    assert!(state.panels.is_empty());
}
