//! Game state module - owns the traffic and the player
//!
//! A tick updates every enemy first and only then checks collisions, so the
//! player is always tested against fresh enemy positions.

use log::{debug, info};

use crate::config::{GameConfig, SpeedPolicy};
use crate::enemy::Enemy;
use crate::entity::{Character, UpdateCtx};
use crate::error::ConfigError;
use crate::grid::GridSpec;
use crate::player::{MoveOutcome, Player};
use crate::rng::SimpleRng;
use crate::snapshot::{EntitySnapshot, GameSnapshot};
use crate::types::{Direction, GameAction, DEFAULT_SEED};

/// Notable outcome of the most recent tick or input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    GoalReached { score: u32 },
    LifeLost { lives_left: u32 },
    GameOver { score: u32 },
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Enemies that were reset to the left edge this tick.
    pub respawns: u32,
    /// Whether the player was hit (at most one life is lost per tick).
    pub collision: bool,
}

#[derive(Debug, Clone)]
pub struct GameState {
    grid: GridSpec,
    speed: SpeedPolicy,
    enemies: Vec<Enemy>,
    player: Player,
    rng: SimpleRng,
    seed: u32,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    ticks: u64,
    last_event: Option<GameEvent>,
}

impl GameState {
    /// Build a game on a validated grid.
    pub fn new(grid: GridSpec, config: &GameConfig) -> Result<Self, ConfigError> {
        grid.validate()?;
        config.validate()?;
        let enemy_count = config.checked_enemy_count(&grid)?;

        let seed = config.seed.unwrap_or(DEFAULT_SEED);
        let mut rng = SimpleRng::new(seed);
        let enemies = (0..enemy_count)
            .map(|_| Enemy::spawn(&grid, config.speed, &mut rng))
            .collect();
        let player = Player::new(&grid, config.lives, &mut rng);

        info!(
            "new game: {} columns, {} road rows, {} enemies, seed {}",
            grid.columns,
            grid.road_rows,
            enemy_count,
            seed
        );

        Ok(Self {
            grid,
            speed: config.speed,
            enemies,
            player,
            rng,
            seed,
            episode_id: 0,
            ticks: 0,
            last_event: None,
        })
    }

    pub fn grid(&self) -> &GridSpec {
        &self.grid
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn score(&self) -> u32 {
        self.player.score()
    }

    pub fn lives(&self) -> u32 {
        self.player.lives()
    }

    pub fn game_over(&self) -> bool {
        self.player.is_depleted()
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Take and clear the latest event.
    pub fn take_last_event(&mut self) -> Option<GameEvent> {
        self.last_event.take()
    }

    /// Every character in draw order: enemies, player, hearts.
    pub fn characters(&self) -> impl Iterator<Item = &dyn Character> + '_ {
        self.enemies
            .iter()
            .map(|e| e as &dyn Character)
            .chain(std::iter::once(&self.player as &dyn Character))
            .chain(self.player.hearts().iter().map(|h| h as &dyn Character))
    }

    /// Advance the simulation by `dt` seconds.
    ///
    /// Negative or non-finite `dt` counts as zero. Does nothing once the game
    /// is over.
    pub fn tick(&mut self, dt: f32) -> TickReport {
        let mut report = TickReport::default();
        if self.game_over() {
            return report;
        }
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.ticks += 1;

        let mut ctx = UpdateCtx {
            grid: &self.grid,
            speed: self.speed,
            rng: &mut self.rng,
        };
        for enemy in &mut self.enemies {
            if enemy.advance(dt, &mut ctx) {
                report.respawns += 1;
            }
        }
        self.player.update(dt, &mut ctx);

        let player_pos = self.player.position();
        if self.enemies.iter().any(|e| e.position().overlaps(&player_pos)) {
            report.collision = self.player.reduce_life(&self.grid, &mut self.rng);
        }

        if report.collision {
            if self.game_over() {
                info!("game over with score {}", self.score());
                self.last_event = Some(GameEvent::GameOver { score: self.score() });
            } else {
                self.last_event = Some(GameEvent::LifeLost {
                    lives_left: self.lives(),
                });
            }
        }

        report
    }

    /// Forward a direction to the player. Returns `true` if anything changed.
    pub fn handle_input(&mut self, direction: Direction) -> bool {
        match self.player.handle_input(direction, &self.grid, &mut self.rng) {
            MoveOutcome::Moved => true,
            MoveOutcome::Goal => {
                self.last_event = Some(GameEvent::GoalReached {
                    score: self.score(),
                });
                true
            }
            MoveOutcome::Blocked | MoveOutcome::Ignored => false,
        }
    }

    /// Apply a host action.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Move(direction) => self.handle_input(direction),
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    /// Full reset of the player and the traffic; the RNG keeps its sequence.
    pub fn restart(&mut self) {
        self.player.reset(&self.grid, &mut self.rng);
        for enemy in &mut self.enemies {
            enemy.respawn(&self.grid, self.speed, &mut self.rng);
        }
        self.episode_id = self.episode_id.wrapping_add(1);
        self.ticks = 0;
        self.last_event = None;
        debug!("restarted, episode {}", self.episode_id);
    }

    /// Write the current state into `out`, reusing its buffers.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.grid = self.grid;
        out.enemies.clear();
        out.enemies
            .extend(self.enemies.iter().map(|e| EntitySnapshot::of(e)));
        out.player = EntitySnapshot::of(&self.player);
        out.hearts.clear();
        out.hearts
            .extend(self.player.hearts().iter().map(|h| EntitySnapshot::of(h)));
        out.lives = self.lives();
        out.score = self.score();
        out.game_over = self.game_over();
        out.episode_id = self.episode_id;
        out.seed = self.seed;
        out.ticks = self.ticks;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::empty(self.grid, EntitySnapshot::of(&self.player));
        self.snapshot_into(&mut s);
        s
    }

    #[cfg(test)]
    pub(crate) fn enemies_mut(&mut self) -> &mut Vec<Enemy> {
        &mut self.enemies
    }

    #[cfg(test)]
    pub(crate) fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }
}
