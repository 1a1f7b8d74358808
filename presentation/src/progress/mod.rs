//! Progress reporting and redraw on state transitions

pub mod reporter;
