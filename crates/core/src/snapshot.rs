use serde::Serialize;

use crate::entity::{Character, Position};
use crate::grid::GridSpec;
use crate::types::SpriteId;

/// Sprite and position of one character.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EntitySnapshot {
    pub sprite: SpriteId,
    pub position: Position,
}

impl EntitySnapshot {
    pub fn of<C: Character + ?Sized>(character: &C) -> Self {
        Self {
            sprite: character.sprite(),
            position: character.position(),
        }
    }
}

/// Read-only view of a game, fed to renderers and the headless runner.
///
/// Reuse one snapshot across frames with
/// [`GameState::snapshot_into`](crate::GameState::snapshot_into); its vectors
/// keep their capacity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameSnapshot {
    pub grid: GridSpec,
    pub enemies: Vec<EntitySnapshot>,
    pub player: EntitySnapshot,
    pub hearts: Vec<EntitySnapshot>,
    pub lives: u32,
    pub score: u32,
    pub game_over: bool,
    pub episode_id: u32,
    pub seed: u32,
    pub ticks: u64,
}

impl GameSnapshot {
    pub fn empty(grid: GridSpec, player: EntitySnapshot) -> Self {
        Self {
            grid,
            enemies: Vec::new(),
            player,
            hearts: Vec::new(),
            lives: 0,
            score: 0,
            game_over: false,
            episode_id: 0,
            seed: 0,
            ticks: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GameConfig;
    use crate::game_state::GameState;
    use crate::grid::compute_grid;

    #[test]
    fn snapshot_into_reuses_buffers() {
        let gs = GameState::new(compute_grid(40, 16, 4, 2, 1, 2), &GameConfig::default()).unwrap();
        let mut snap = gs.snapshot();
        let cap = snap.enemies.capacity();
        gs.snapshot_into(&mut snap);
        assert_eq!(snap.enemies.capacity(), cap);
        assert_eq!(snap.enemies.len(), gs.enemies().len());
    }

    #[test]
    fn serializes_sprites_by_asset_name() {
        let gs = GameState::new(compute_grid(40, 16, 4, 2, 1, 2), &GameConfig::default()).unwrap();
        let json = serde_json::to_value(gs.snapshot()).unwrap();
        assert_eq!(json["enemies"][0]["sprite"], "enemy-bug");
        assert_eq!(json["hearts"][0]["sprite"], "heart");
        assert_eq!(json["lives"], 3);
        assert_eq!(json["grid"]["columns"], 10);
        assert!(json["player"]["position"]["row"].is_u64());
    }
}
