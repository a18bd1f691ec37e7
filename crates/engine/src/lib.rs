//! Engine glue between a host loop and the game core.
//!
//! [`Session`] takes raw key codes, abstract actions and frame times;
//! [`FrameClock`] turns wall-clock time into bounded `dt` values.

pub mod clock;
pub mod session;

pub use road_crossing_core as core;
pub use road_crossing_input as input;
pub use road_crossing_types as types;

pub use clock::FrameClock;
pub use session::Session;
