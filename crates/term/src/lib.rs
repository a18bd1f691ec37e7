//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: [`GameView`] draws a snapshot into a
//! [`FrameBuffer`] and [`TerminalRenderer`] flushes it with diffing. No widget
//! toolkit; the grid maps onto fixed-size blocks of terminal cells.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use road_crossing_core as core;
pub use road_crossing_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{sprite_glyph, GameView, Glyph, Viewport, HUD_ROWS};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
