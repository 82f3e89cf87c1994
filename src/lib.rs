//! Layout and geometry core for a node-based conversation canvas.
//!
//! Each prompt/response exchange in a chat is a panel on an infinite 2D
//! canvas. This crate owns the pure state machine behind that surface:
//! where new panels go, how edges stay attached while panels move, the
//! collapse/expand reflow animation, the canvas ⇄ linear mode round trip,
//! camera alignment against the host chrome, and discrete wheel
//! navigation.
//!
//! The crate is deliberately host-agnostic. Rendering, measurement, real
//! clocks and persistence transports live in the embedding application,
//! which feeds [`messages::Message`] values into [`state::AppState`] and
//! executes the [`messages::Command`] side effects that come back.

#[macro_use]
pub mod macros;

pub mod alignment;
pub mod constants;
pub mod edges;
pub mod geometry;
pub mod history;
pub mod messages;
pub mod mode;
pub mod models;
pub mod placement;
pub mod reducers;
pub mod reflow;
pub mod scroll;
pub mod state;
pub mod storage;
pub mod update;
pub mod utils;
pub mod viewport;

#[cfg(test)]
mod tests;
