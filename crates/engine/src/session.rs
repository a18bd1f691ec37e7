//! Host-facing session: routes key codes, actions and frames into a game.

use log::{debug, info};

use crate::core::{GameEvent, GameSnapshot, GameState, TickReport};
use crate::input::translate;
use crate::types::GameAction;

#[derive(Debug, Clone)]
pub struct Session {
    state: GameState,
    frames: u64,
}

impl Session {
    pub fn new(state: GameState) -> Self {
        Self { state, frames: 0 }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Raw key code from the host, delivered on key release.
    /// Codes other than the four arrows are ignored.
    pub fn on_key_code(&mut self, code: u32) -> bool {
        match translate(code) {
            Some(direction) => self.on_action(GameAction::Move(direction)),
            None => {
                debug!("ignoring key code {}", code);
                false
            }
        }
    }

    pub fn on_action(&mut self, action: GameAction) -> bool {
        if action == GameAction::Restart {
            info!("restart requested");
        }
        let changed = self.state.apply_action(action);
        self.drain_event();
        changed
    }

    /// Advance the game by `dt` seconds.
    pub fn on_frame(&mut self, dt: f32) -> TickReport {
        self.frames += 1;
        let report = self.state.tick(dt);
        self.drain_event();
        report
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.state.snapshot_into(out);
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.state.snapshot()
    }

    fn drain_event(&mut self) {
        let Some(event) = self.state.take_last_event() else {
            return;
        };
        match event {
            GameEvent::GoalReached { score } => info!("goal reached, score {}", score),
            GameEvent::LifeLost { lives_left } => info!("hit by an enemy, {} lives left", lives_left),
            GameEvent::GameOver { score } => info!("game over, final score {}", score),
        }
    }
}
