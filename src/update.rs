//! Root reducer. Delegates each message to the sub-reducer that owns it;
//! sub-reducers return whether they handled the message so exactly one of
//! them acts on any given event.

use crate::messages::{Command, Message};
use crate::reducers;
use crate::state::AppState;

pub fn update(state: &mut AppState, msg: &Message, commands: &mut Vec<Command>) {
    let handled = reducers::canvas::update(state, msg, commands)
        || reducers::linear::update(state, msg, commands)
        || reducers::viewport::update(state, msg, commands);
    if !handled {
        crate::debug_log!("unhandled message: {:?}", msg);
    }
}
