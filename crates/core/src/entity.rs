//! Entity model shared by every character on the playfield.
//!
//! The set of characters is closed: [`Enemy`](crate::Enemy),
//! [`Player`](crate::Player) and [`Heart`](crate::Heart). Each owns an
//! [`Entity`] and implements [`Character`].

use serde::Serialize;

use crate::config::SpeedPolicy;
use crate::grid::GridSpec;
use crate::rng::SimpleRng;
use crate::types::SpriteId;

/// Grid position: fractional column, whole row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position {
    pub col: f32,
    pub row: u32,
}

impl Position {
    pub const fn new(col: f32, row: u32) -> Self {
        Self { col, row }
    }

    /// Same lane and unit cells centered on each column overlap.
    pub fn overlaps(&self, other: &Position) -> bool {
        self.row == other.row && (self.col - other.col).abs() < 1.0
    }
}

/// What every character exposes to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Entity {
    pub sprite: SpriteId,
    pub position: Position,
}

impl Entity {
    pub const fn new(sprite: SpriteId, position: Position) -> Self {
        Self { sprite, position }
    }
}

/// Everything a per-tick update may read or draw from.
pub struct UpdateCtx<'a> {
    pub grid: &'a GridSpec,
    pub speed: SpeedPolicy,
    pub rng: &'a mut SimpleRng,
}

/// Common behaviour of playfield characters.
pub trait Character {
    fn entity(&self) -> &Entity;

    /// Advance by `dt` seconds. Characters that only react to input keep the
    /// default no-op.
    fn update(&mut self, _dt: f32, _ctx: &mut UpdateCtx<'_>) {}

    fn sprite(&self) -> SpriteId {
        self.entity().sprite
    }

    fn position(&self) -> Position {
        self.entity().position
    }
}
