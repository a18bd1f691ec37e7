//! Grid geometry - row bands and column count derived from the viewport.

use std::ops::RangeInclusive;

use serde::Serialize;

use crate::error::ConfigError;

/// Horizontal band a row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Band {
    /// Goal rows at the top.
    Water,
    /// Enemy lanes.
    Road,
    /// Safe rows at the bottom.
    Grass,
}

/// Immutable playfield geometry.
///
/// Rows are numbered from the top: water first, then road, then grass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GridSpec {
    pub step_x: u32,
    pub step_y: u32,
    pub water_rows: u32,
    pub road_rows: u32,
    pub grass_rows: u32,
    pub columns: u32,
}

/// Derive the grid from a viewport.
///
/// `road_rows` takes whatever height the water and grass bands leave over,
/// clamped at zero. A zero step yields zero rows/columns; callers reject the
/// result through [`GridSpec::validate`].
pub fn compute_grid(
    viewport_width: u32,
    viewport_height: u32,
    step_x: u32,
    step_y: u32,
    water_rows: u32,
    grass_rows: u32,
) -> GridSpec {
    let rows = viewport_height.checked_div(step_y).unwrap_or(0);
    let columns = viewport_width.checked_div(step_x).unwrap_or(0);
    let road_rows = rows.saturating_sub(water_rows).saturating_sub(grass_rows);

    GridSpec {
        step_x,
        step_y,
        water_rows,
        road_rows,
        grass_rows,
        columns,
    }
}

impl GridSpec {
    /// Check that a game can be played on this grid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.columns == 0 {
            return Err(ConfigError::NoColumns);
        }
        if self.road_rows == 0 {
            return Err(ConfigError::NoRoad);
        }
        // The player spawns on the second-to-last row, which must not sit
        // above the first road row.
        let playable = self.road_rows + self.grass_rows;
        if playable < 2 {
            return Err(ConfigError::NoPlayableRows { rows: playable });
        }
        Ok(())
    }

    pub fn total_rows(&self) -> u32 {
        self.water_rows + self.road_rows + self.grass_rows
    }

    /// Highest row the player can stand on; stepping up from here scores.
    pub fn top_row(&self) -> u32 {
        self.water_rows
    }

    /// Spawn row for the player (second-to-last row of the grid).
    pub fn bottom_row(&self) -> u32 {
        self.total_rows().saturating_sub(2)
    }

    pub fn last_column(&self) -> u32 {
        self.columns.saturating_sub(1)
    }

    /// Rows enemies may occupy.
    pub fn road_band(&self) -> RangeInclusive<u32> {
        let first = self.water_rows;
        first..=first + self.road_rows.saturating_sub(1)
    }

    pub fn band_of(&self, row: u32) -> Band {
        if row < self.water_rows {
            Band::Water
        } else if row < self.water_rows + self.road_rows {
            Band::Road
        } else {
            Band::Grass
        }
    }
}
