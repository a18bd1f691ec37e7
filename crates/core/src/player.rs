//! The player, its lives and the heart strip that mirrors them.

use arrayvec::ArrayVec;
use log::debug;

use crate::entity::{Character, Entity, Position};
use crate::grid::GridSpec;
use crate::rng::SimpleRng;
use crate::types::{Direction, SpriteId, MAX_LIVES, PLAYER_SPRITES};

/// Decorative life indicator, laid out in the HUD by slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Heart {
    entity: Entity,
    slot: usize,
}

impl Heart {
    pub fn new(slot: usize) -> Self {
        Self {
            entity: Entity::new(SpriteId::Heart, Position::new(slot as f32, 0)),
            slot,
        }
    }

    pub fn slot(&self) -> usize {
        self.slot
    }
}

impl Character for Heart {
    fn entity(&self) -> &Entity {
        &self.entity
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerStatus {
    Alive,
    /// Out of lives; only a full reset leaves this state.
    Depleted,
}

/// Result of one directional input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved,
    /// Already at the boundary in that direction.
    Blocked,
    /// Stepped up from the top row: score awarded, position reset.
    Goal,
    /// The player is depleted.
    Ignored,
}

#[derive(Debug, Clone)]
pub struct Player {
    entity: Entity,
    lives: u32,
    default_lives: u32,
    score: u32,
    hearts: ArrayVec<Heart, MAX_LIVES>,
    status: PlayerStatus,
}

impl Player {
    /// Create a player with a random skin and run a full reset.
    ///
    /// `lives` is clamped to `1..=MAX_LIVES`.
    pub fn new(grid: &GridSpec, lives: u32, rng: &mut SimpleRng) -> Self {
        let sprite = rng.choose(&PLAYER_SPRITES).unwrap_or(SpriteId::CharBoy);
        let mut player = Self {
            entity: Entity::new(sprite, Position::new(0.0, grid.bottom_row())),
            lives: 0,
            default_lives: lives.clamp(1, MAX_LIVES as u32),
            score: 0,
            hearts: ArrayVec::new(),
            status: PlayerStatus::Alive,
        };
        player.reset(grid, rng);
        player
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn hearts(&self) -> &[Heart] {
        &self.hearts
    }

    pub fn status(&self) -> PlayerStatus {
        self.status
    }

    pub fn is_depleted(&self) -> bool {
        self.status == PlayerStatus::Depleted
    }

    /// Full reset: default lives, fresh hearts, zero score, new spawn point.
    pub fn reset(&mut self, grid: &GridSpec, rng: &mut SimpleRng) {
        self.lives = self.default_lives;
        self.hearts.clear();
        for slot in 0..self.default_lives as usize {
            self.hearts.push(Heart::new(slot));
        }
        self.score = 0;
        self.status = PlayerStatus::Alive;
        self.reset_position(grid, rng);
    }

    /// Random column on the spawn row.
    pub fn reset_position(&mut self, grid: &GridSpec, rng: &mut SimpleRng) {
        let col = rng.range_inclusive(0, grid.last_column());
        self.entity.position = Position::new(col as f32, grid.bottom_row());
    }

    /// Drop one heart and respawn. Returns `false` when there was no life left
    /// to lose.
    pub fn reduce_life(&mut self, grid: &GridSpec, rng: &mut SimpleRng) -> bool {
        if self.hearts.pop().is_none() {
            return false;
        }
        self.lives = self.lives.saturating_sub(1);
        self.reset_position(grid, rng);
        if self.lives == 0 {
            self.status = PlayerStatus::Depleted;
        }
        debug!("player lost a life, {} left", self.lives);
        true
    }

    /// Apply one step of directional input.
    pub fn handle_input(
        &mut self,
        direction: Direction,
        grid: &GridSpec,
        rng: &mut SimpleRng,
    ) -> MoveOutcome {
        if self.is_depleted() {
            return MoveOutcome::Ignored;
        }

        let pos = &mut self.entity.position;
        let moved = match direction {
            Direction::Left => {
                let can = pos.col > 0.0;
                if can {
                    pos.col -= 1.0;
                }
                can
            }
            Direction::Right => {
                let can = pos.col < grid.last_column() as f32;
                if can {
                    pos.col += 1.0;
                }
                can
            }
            Direction::Down => {
                let can = pos.row < grid.bottom_row();
                if can {
                    pos.row += 1;
                }
                can
            }
            Direction::Up => {
                if pos.row > grid.top_row() {
                    pos.row -= 1;
                    true
                } else {
                    self.score += 1;
                    debug!("player reached the water, score {}", self.score);
                    self.reset_position(grid, rng);
                    return MoveOutcome::Goal;
                }
            }
        };

        if moved {
            MoveOutcome::Moved
        } else {
            MoveOutcome::Blocked
        }
    }

    #[cfg(test)]
    pub(crate) fn set_position(&mut self, position: Position) {
        self.entity.position = position;
    }
}

impl Character for Player {
    fn entity(&self) -> &Entity {
        &self.entity
    }
}
