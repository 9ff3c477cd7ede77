//! Host infrastructure for the MUG terminal app.
//!
//! Everything the app shell needs around the face itself: an event type and
//! FIFO bus, the input-to-gesture mapping, shared app state, and the logging
//! subsystem.

pub mod bus;
pub mod event;
pub mod gesture;
pub mod logging;
pub mod state;
