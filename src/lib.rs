//! Road Crossing (workspace facade crate).
//!
//! Re-exports `road_crossing::{core,engine,input,term,types}` from the crates
//! under `crates/`, and hosts the binary's argument parsing, logging setup and
//! headless runner.

pub use road_crossing_core as core;
pub use road_crossing_engine as engine;
pub use road_crossing_input as input;
pub use road_crossing_term as term;
pub use road_crossing_types as types;

pub mod args;
pub mod headless;
pub mod logging;
