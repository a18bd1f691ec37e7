//! Shared types and constants for the road-crossing game.
//!
//! Everything here is plain data so it can be used by the core simulation,
//! the input layer, the terminal renderer and the headless runner alike.
//!
//! # Grid defaults
//!
//! The playfield is split into horizontal bands, top to bottom:
//!
//! | Band  | Default rows | Role |
//! |-------|--------------|------|
//! | water | 1            | goal, never entered |
//! | road  | derived      | enemy lanes |
//! | grass | 2            | safe spawn area |
//!
//! Step sizes are measured in terminal cells: one grid column is
//! [`DEFAULT_STEP_X`] characters wide and one grid row is [`DEFAULT_STEP_Y`]
//! characters tall.
//!
//! # Examples
//!
//! ```
//! use road_crossing_types::{Direction, GameAction, SpriteId, KEY_UP};
//!
//! assert_eq!(Direction::from_key_code(KEY_UP), Some(Direction::Up));
//! assert_eq!(GameAction::from_str("left"), Some(GameAction::Move(Direction::Left)));
//! assert_eq!(SpriteId::EnemyBug.as_str(), "enemy-bug");
//! ```

use serde::{Deserialize, Serialize};

/// Terminal columns per grid column.
pub const DEFAULT_STEP_X: u32 = 4;

/// Terminal rows per grid row.
pub const DEFAULT_STEP_Y: u32 = 2;

/// Rows of water at the top of the grid (the goal band).
pub const DEFAULT_WATER_ROWS: u32 = 1;

/// Rows of grass at the bottom of the grid (the spawn band).
pub const DEFAULT_GRASS_ROWS: u32 = 2;

/// Lives granted by a full reset.
pub const DEFAULT_LIVES: u32 = 3;

/// Upper bound on configurable lives (capacity of the heart strip).
pub const MAX_LIVES: usize = 9;

/// Upper bound on the enemy pool, whether configured or derived from the grid.
pub const MAX_ENEMIES: usize = 256;

/// Column an enemy is placed on when it (re)enters from the left edge.
pub const ENEMY_RESPAWN_COLUMN: f32 = -1.0;

/// Speed range used by the fixed speed policy (columns per second).
pub const FIXED_SPEED_MIN: u32 = 1;
pub const FIXED_SPEED_MAX: u32 = 3;

/// Seed used when neither the config nor the host picks one.
pub const DEFAULT_SEED: u32 = 1;

/// Host frame interval in milliseconds (16ms ≈ 60 FPS).
pub const FRAME_MS: u32 = 16;

/// Largest `dt` the host clock hands to the simulation, in seconds.
pub const DEFAULT_MAX_DT_SECS: f32 = 0.25;

/// Raw key codes delivered by a browser-style host (`KeyboardEvent.keyCode`).
pub const KEY_LEFT: u32 = 37;
pub const KEY_UP: u32 = 38;
pub const KEY_RIGHT: u32 = 39;
pub const KEY_DOWN: u32 = 40;

/// Abstract movement direction consumed by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

impl Direction {
    /// Map an arrow-key code (37..=40) to a direction.
    ///
    /// Unrecognized codes map to `None`.
    ///
    /// ```
    /// use road_crossing_types::Direction;
    ///
    /// assert_eq!(Direction::from_key_code(37), Some(Direction::Left));
    /// assert_eq!(Direction::from_key_code(40), Some(Direction::Down));
    /// assert_eq!(Direction::from_key_code(13), None);
    /// ```
    pub fn from_key_code(code: u32) -> Option<Self> {
        match code {
            KEY_LEFT => Some(Direction::Left),
            KEY_UP => Some(Direction::Up),
            KEY_RIGHT => Some(Direction::Right),
            KEY_DOWN => Some(Direction::Down),
            _ => None,
        }
    }

    /// Parse a direction name (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" => Some(Direction::Left),
            "up" => Some(Direction::Up),
            "right" => Some(Direction::Right),
            "down" => Some(Direction::Down),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
        }
    }
}

/// Actions a host can apply to a running game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Step the player one cell.
    Move(Direction),
    /// Full reset: fresh lives, zero score, respawned traffic.
    Restart,
}

impl GameAction {
    /// Parse an action name as used by the headless runner.
    ///
    /// ```
    /// use road_crossing_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("UP"), Some(GameAction::Move(Direction::Up)));
    /// assert_eq!(GameAction::from_str("restart"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("restart") {
            return Some(GameAction::Restart);
        }
        Direction::from_str(s).map(GameAction::Move)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Move(dir) => dir.as_str(),
            GameAction::Restart => "restart",
        }
    }
}

/// Identity of a drawable sprite.
///
/// The renderer resolves these to whatever it can draw; the core only hands
/// them out alongside positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpriteId {
    EnemyBug,
    Heart,
    CharBoy,
    CharCatGirl,
    CharHornGirl,
    CharPinkGirl,
    CharPrincessGirl,
}

/// Skins a player can be drawn with; one is picked at random per player.
pub const PLAYER_SPRITES: [SpriteId; 5] = [
    SpriteId::CharBoy,
    SpriteId::CharCatGirl,
    SpriteId::CharHornGirl,
    SpriteId::CharPinkGirl,
    SpriteId::CharPrincessGirl,
];

impl SpriteId {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpriteId::EnemyBug => "enemy-bug",
            SpriteId::Heart => "heart",
            SpriteId::CharBoy => "char-boy",
            SpriteId::CharCatGirl => "char-cat-girl",
            SpriteId::CharHornGirl => "char-horn-girl",
            SpriteId::CharPinkGirl => "char-pink-girl",
            SpriteId::CharPrincessGirl => "char-princess-girl",
        }
    }

    pub fn is_player(&self) -> bool {
        PLAYER_SPRITES.contains(self)
    }
}
