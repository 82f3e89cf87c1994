//! Message reducers, split by concern: `canvas` owns panel and edge
//! mutations, `linear` owns the mode state machine and discrete scrolling,
//! `viewport` owns the camera and the per-frame tick.

pub mod canvas;
pub mod linear;
pub mod viewport;
