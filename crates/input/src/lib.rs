//! Terminal input module (engine-facing).
//!
//! Maps raw key codes and `crossterm` key events into
//! [`crate::types::Direction`] / [`crate::types::GameAction`]. Moves are
//! edge-triggered: [`KeyTrigger`] fires once per key release, or once per press
//! on terminals that never report releases.

pub mod handler;
pub mod map;

pub use road_crossing_types as types;

pub use handler::KeyTrigger;
pub use map::{handle_key_event, should_quit, translate};
