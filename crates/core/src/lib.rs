//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds the rules of the road-crossing game: grid geometry,
//! enemy traffic, the player's lives and score, and the per-tick collision
//! pass. It has no dependencies on terminals, clocks or I/O; the host feeds it
//! elapsed time and directions and reads back a [`GameSnapshot`].
//!
//! # Module Structure
//!
//! - [`grid`]: row bands and columns derived from the viewport
//! - [`entity`]: shared position/sprite data and the [`Character`] trait
//! - [`enemy`]: rightward traffic that respawns past the right edge
//! - [`player`]: directional input, goal scoring, lives and hearts
//! - [`game_state`]: owns the characters and runs tick/collision
//! - [`snapshot`]: serializable read-only view for renderers
//! - [`config`]: defaults, TOML and environment overrides
//! - [`rng`]: seeded LCG behind every random draw
//!
//! # Rules
//!
//! - Enemies move `dt * speed` columns per tick; once strictly past the last
//!   column they restart at column -1 on a random road lane with a new speed.
//! - The player steps one cell per input and never leaves the grid. Pressing
//!   up on the top row scores a point and sends the player back to the spawn
//!   row.
//! - An enemy in the player's lane less than one column away costs one life;
//!   at most one life is lost per tick. With no lives left the game is over.
//!
//! # Example
//!
//! ```
//! use road_crossing_core::{compute_grid, GameConfig, GameState};
//! use road_crossing_types::Direction;
//!
//! let grid = compute_grid(40, 16, 4, 2, 1, 2);
//! let config = GameConfig { seed: Some(7), ..GameConfig::default() };
//! let mut game = GameState::new(grid, &config).unwrap();
//!
//! game.handle_input(Direction::Up);
//! game.tick(0.016);
//!
//! assert!(game.lives() >= 2);
//! assert!(!game.game_over());
//! ```

pub mod config;
pub mod enemy;
pub mod entity;
pub mod error;
pub mod game_state;
pub mod grid;
pub mod player;
pub mod rng;
pub mod snapshot;

pub use road_crossing_types as types;

pub use config::{GameConfig, SpeedPolicy, ENV_ENEMIES, ENV_LIVES, ENV_SEED};
pub use enemy::Enemy;
pub use entity::{Character, Entity, Position, UpdateCtx};
pub use error::ConfigError;
pub use game_state::{GameEvent, GameState, TickReport};
pub use grid::{compute_grid, Band, GridSpec};
pub use player::{Heart, MoveOutcome, Player, PlayerStatus};
pub use rng::SimpleRng;
pub use snapshot::{EntitySnapshot, GameSnapshot};
