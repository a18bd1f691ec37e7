//! Game configuration: defaults, TOML file, environment overrides.
//!
//! Priority, lowest first: built-in defaults, a TOML file, `CROSSING_*`
//! environment variables. The host applies command-line flags on top.
//!
//! ```
//! use road_crossing_core::{GameConfig, SpeedPolicy};
//!
//! let config = GameConfig::from_toml_str(
//!     r#"
//!     lives = 5
//!     seed = 42
//!     speed = { kind = "fixed", min = 1, max = 3 }
//!     "#,
//! )
//! .unwrap();
//! assert_eq!(config.lives, 5);
//! assert_eq!(config.speed, SpeedPolicy::Fixed { min: 1, max: 3 });
//! assert!(config.validate().is_ok());
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::grid::GridSpec;
use crate::rng::SimpleRng;
use crate::types::{
    DEFAULT_GRASS_ROWS, DEFAULT_LIVES, DEFAULT_MAX_DT_SECS, DEFAULT_STEP_X, DEFAULT_STEP_Y,
    DEFAULT_WATER_ROWS, MAX_ENEMIES, MAX_LIVES,
};

pub const ENV_SEED: &str = "CROSSING_SEED";
pub const ENV_LIVES: &str = "CROSSING_LIVES";
pub const ENV_ENEMIES: &str = "CROSSING_ENEMIES";

/// How enemy speeds (columns per second) are drawn on spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SpeedPolicy {
    /// Integer in `[1, max(1, columns / 3)]`: wider grids get faster traffic.
    Scaled,
    /// Integer in `[min, max]`.
    Fixed { min: u32, max: u32 },
}

impl Default for SpeedPolicy {
    fn default() -> Self {
        SpeedPolicy::Scaled
    }
}

impl SpeedPolicy {
    /// Inclusive speed bounds for a grid.
    pub fn bounds(&self, grid: &GridSpec) -> (u32, u32) {
        match *self {
            SpeedPolicy::Scaled => (1, (grid.columns / 3).max(1)),
            SpeedPolicy::Fixed { min, max } => (min, max),
        }
    }

    pub fn draw(&self, grid: &GridSpec, rng: &mut SimpleRng) -> f32 {
        let (min, max) = self.bounds(grid);
        rng.range_inclusive(min, max) as f32
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Viewport units per grid column.
    pub step_x: u32,
    /// Viewport units per grid row.
    pub step_y: u32,
    pub water_rows: u32,
    pub grass_rows: u32,
    /// Lives granted on every full reset.
    pub lives: u32,
    pub speed: SpeedPolicy,
    /// Enemy pool size; `None` means one more than the number of road rows.
    pub enemy_count: Option<u32>,
    /// RNG seed; `None` lets the host pick one.
    pub seed: Option<u32>,
    /// Upper bound on a single frame's `dt`, in seconds.
    pub max_dt: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            step_x: DEFAULT_STEP_X,
            step_y: DEFAULT_STEP_Y,
            water_rows: DEFAULT_WATER_ROWS,
            grass_rows: DEFAULT_GRASS_ROWS,
            lives: DEFAULT_LIVES,
            speed: SpeedPolicy::default(),
            enemy_count: None,
            seed: None,
            max_dt: DEFAULT_MAX_DT_SECS,
        }
    }
}

impl GameConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Read a TOML config file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply `CROSSING_*` overrides from a key lookup, normally the process
    /// environment.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        if let Some(v) = lookup(ENV_SEED) {
            self.seed = Some(parse_u32(ENV_SEED, &v)?);
        }
        if let Some(v) = lookup(ENV_LIVES) {
            self.lives = parse_u32(ENV_LIVES, &v)?;
        }
        if let Some(v) = lookup(ENV_ENEMIES) {
            self.enemy_count = Some(parse_u32(ENV_ENEMIES, &v)?);
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lives == 0 || self.lives as usize > MAX_LIVES {
            return Err(ConfigError::InvalidLives {
                lives: self.lives,
                max: MAX_LIVES,
            });
        }
        if let SpeedPolicy::Fixed { min, max } = self.speed {
            if min == 0 || min > max {
                return Err(ConfigError::InvalidSpeedRange { min, max });
            }
        }
        if !(self.max_dt.is_finite() && self.max_dt > 0.0) {
            return Err(ConfigError::InvalidMaxDt(self.max_dt));
        }
        if let Some(count) = self.enemy_count {
            check_enemy_count(count as usize)?;
        }
        Ok(())
    }

    /// Enemy pool size for a grid.
    pub fn enemy_count_for(&self, grid: &GridSpec) -> usize {
        match self.enemy_count {
            Some(n) => n as usize,
            None => grid.road_rows as usize + 1,
        }
    }

    /// Like [`enemy_count_for`](Self::enemy_count_for), but rejects pools
    /// larger than `MAX_ENEMIES`. Tall grids can exceed it on their own.
    pub fn checked_enemy_count(&self, grid: &GridSpec) -> Result<usize, ConfigError> {
        let count = self.enemy_count_for(grid);
        check_enemy_count(count)?;
        Ok(count)
    }
}

fn check_enemy_count(count: usize) -> Result<(), ConfigError> {
    if count > MAX_ENEMIES {
        return Err(ConfigError::TooManyEnemies {
            count,
            max: MAX_ENEMIES,
        });
    }
    Ok(())
}

fn parse_u32(var: &'static str, value: &str) -> Result<u32, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidEnv {
        var,
        value: value.to_string(),
    })
}
