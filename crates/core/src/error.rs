use std::path::PathBuf;

use thiserror::Error;

/// Reasons a grid or configuration cannot host a game.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("viewport leaves no road rows (need at least 1)")]
    NoRoad,

    #[error("viewport leaves no columns (need at least 1)")]
    NoColumns,

    #[error("road and grass bands must span at least 2 rows, got {rows}")]
    NoPlayableRows { rows: u32 },

    #[error("lives must be between 1 and {max}, got {lives}")]
    InvalidLives { lives: u32, max: usize },

    #[error("fixed speed range must satisfy 1 <= min <= max, got {min}..={max}")]
    InvalidSpeedRange { min: u32, max: u32 },

    #[error("enemy pool of {count} exceeds the limit of {max}")]
    TooManyEnemies { count: usize, max: usize },

    #[error("max_dt must be a positive number of seconds, got {0}")]
    InvalidMaxDt(f32),

    #[error("invalid value {value:?} for {var}")]
    InvalidEnv { var: &'static str, value: String },

    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
