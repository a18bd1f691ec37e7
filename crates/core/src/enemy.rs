//! Enemies drive rightward along road lanes and re-enter from the left.

use log::trace;

use crate::config::SpeedPolicy;
use crate::entity::{Character, Entity, Position, UpdateCtx};
use crate::grid::GridSpec;
use crate::rng::SimpleRng;
use crate::types::{SpriteId, ENEMY_RESPAWN_COLUMN};

#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    entity: Entity,
    /// Columns per second.
    speed: f32,
}

impl Enemy {
    /// Create an enemy in its respawned state: left edge, random lane and speed.
    pub fn spawn(grid: &GridSpec, speed: SpeedPolicy, rng: &mut SimpleRng) -> Self {
        let mut enemy = Self::at(Position::new(ENEMY_RESPAWN_COLUMN, grid.water_rows), 0.0);
        enemy.respawn(grid, speed, rng);
        enemy
    }

    /// Place an enemy explicitly.
    pub fn at(position: Position, speed: f32) -> Self {
        Self {
            entity: Entity::new(SpriteId::EnemyBug, position),
            speed,
        }
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Reset to the left edge with a fresh lane and speed.
    pub fn respawn(&mut self, grid: &GridSpec, speed: SpeedPolicy, rng: &mut SimpleRng) {
        let lanes = grid.road_band();
        let row = rng.range_inclusive(*lanes.start(), *lanes.end());
        self.entity.position = Position::new(ENEMY_RESPAWN_COLUMN, row);
        self.speed = speed.draw(grid, rng);
        trace!("enemy respawned on row {} at speed {}", row, self.speed);
    }

    /// Advance one tick. Returns `true` when the enemy respawned instead of moving.
    ///
    /// The edge check runs before the move, so an enemy is reset at most once
    /// per tick no matter how large `dt` is.
    pub fn advance(&mut self, dt: f32, ctx: &mut UpdateCtx<'_>) -> bool {
        if self.entity.position.col > ctx.grid.columns as f32 {
            self.respawn(ctx.grid, ctx.speed, ctx.rng);
            true
        } else {
            self.entity.position.col += dt * self.speed;
            false
        }
    }
}

impl Character for Enemy {
    fn entity(&self) -> &Entity {
        &self.entity
    }

    fn update(&mut self, dt: f32, ctx: &mut UpdateCtx<'_>) {
        self.advance(dt, ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::compute_grid;

    fn grid() -> GridSpec {
        compute_grid(40, 16, 4, 2, 1, 2)
    }

    fn ctx<'a>(grid: &'a GridSpec, speed: SpeedPolicy, rng: &'a mut SimpleRng) -> UpdateCtx<'a> {
        UpdateCtx { grid, speed, rng }
    }

    #[test]
    fn spawn_lands_on_road_at_left_edge() {
        let g = grid();
        let mut rng = SimpleRng::new(5);
        for _ in 0..50 {
            let e = Enemy::spawn(&g, SpeedPolicy::Scaled, &mut rng);
            assert_eq!(e.position().col, ENEMY_RESPAWN_COLUMN);
            assert!(g.road_band().contains(&e.position().row));
            assert!((1.0..=3.0).contains(&e.speed()));
            assert_eq!(e.sprite(), SpriteId::EnemyBug);
        }
    }

    #[test]
    fn moves_by_dt_times_speed() {
        let g = grid();
        let mut rng = SimpleRng::new(1);
        let mut e = Enemy::at(Position::new(0.0, 2), 2.0);
        assert!(!e.advance(0.5, &mut ctx(&g, SpeedPolicy::Scaled, &mut rng)));
        assert_eq!(e.position().col, 1.0);
        assert_eq!(e.position().row, 2);
    }

    #[test]
    fn zero_dt_does_not_move() {
        let g = grid();
        let mut rng = SimpleRng::new(1);
        let mut e = Enemy::at(Position::new(4.25, 3), 3.0);
        e.advance(0.0, &mut ctx(&g, SpeedPolicy::Scaled, &mut rng));
        assert_eq!(e.position().col, 4.25);
    }

    #[test]
    fn sitting_on_the_edge_still_moves() {
        let g = grid();
        let mut rng = SimpleRng::new(1);
        let mut e = Enemy::at(Position::new(g.columns as f32, 3), 1.0);
        assert!(!e.advance(0.5, &mut ctx(&g, SpeedPolicy::Scaled, &mut rng)));
        assert_eq!(e.position().col, g.columns as f32 + 0.5);
    }

    #[test]
    fn past_the_edge_respawns_once() {
        let g = grid();
        let mut rng = SimpleRng::new(1);
        let policy = SpeedPolicy::Fixed { min: 1, max: 3 };
        let mut e = Enemy::at(Position::new(g.columns as f32 + 1.0, 3), 2.0);

        assert!(e.advance(1.0, &mut ctx(&g, policy, &mut rng)));
        assert_eq!(e.position().col, ENEMY_RESPAWN_COLUMN);
        assert!(g.road_band().contains(&e.position().row));
        assert!((1.0..=3.0).contains(&e.speed()));
    }

    #[test]
    fn huge_dt_overshoots_then_respawns_next_tick() {
        let g = grid();
        let mut rng = SimpleRng::new(1);
        let mut e = Enemy::at(Position::new(0.0, 3), 1.0);

        assert!(!e.advance(1000.0, &mut ctx(&g, SpeedPolicy::Scaled, &mut rng)));
        assert_eq!(e.position().col, 1000.0);

        assert!(e.advance(1000.0, &mut ctx(&g, SpeedPolicy::Scaled, &mut rng)));
        assert_eq!(e.position().col, ENEMY_RESPAWN_COLUMN);
    }

    #[test]
    fn update_through_trait_matches_advance() {
        let g = grid();
        let mut rng = SimpleRng::new(1);
        let mut e = Enemy::at(Position::new(1.0, 2), 2.0);
        let mut ctx = UpdateCtx {
            grid: &g,
            speed: SpeedPolicy::Scaled,
            rng: &mut rng,
        };
        e.update(0.25, &mut ctx);
        assert_eq!(e.position().col, 1.5);
    }
}
