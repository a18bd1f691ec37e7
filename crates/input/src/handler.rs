//! Edge-triggered key handling.
//!
//! With keyboard enhancement enabled a terminal reports `Release` events and a
//! move fires when the key comes up. Without it only `Press` (and OS auto
//! repeat, reported as `Press` or `Repeat`) arrives, so the press fires.
//! Either way, holding a key never produces more than one move.

use crossterm::event::{KeyEvent, KeyEventKind};

use crate::map::handle_key_event;
use crate::types::GameAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyTrigger {
    release_events: bool,
}

impl KeyTrigger {
    pub fn new(release_events: bool) -> Self {
        Self { release_events }
    }

    pub fn release_events(&self) -> bool {
        self.release_events
    }

    /// Whether an event of this kind should fire a game action.
    pub fn accept(&self, kind: KeyEventKind) -> bool {
        match kind {
            KeyEventKind::Release => self.release_events,
            KeyEventKind::Press => !self.release_events,
            KeyEventKind::Repeat => false,
        }
    }

    /// Map `key` to an action if it is the firing edge.
    pub fn filter(&self, key: KeyEvent) -> Option<GameAction> {
        if self.accept(key.kind) {
            handle_key_event(key)
        } else {
            None
        }
    }
}

impl Default for KeyTrigger {
    fn default() -> Self {
        Self::new(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Direction;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    fn key(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn release_mode_fires_on_release_only() {
        let t = KeyTrigger::new(true);
        assert_eq!(t.filter(key(KeyCode::Up, KeyEventKind::Press)), None);
        assert_eq!(t.filter(key(KeyCode::Up, KeyEventKind::Repeat)), None);
        assert_eq!(
            t.filter(key(KeyCode::Up, KeyEventKind::Release)),
            Some(GameAction::Move(Direction::Up))
        );
    }

    #[test]
    fn press_mode_fires_on_press_only() {
        let t = KeyTrigger::default();
        assert!(!t.release_events());
        assert_eq!(
            t.filter(key(KeyCode::Left, KeyEventKind::Press)),
            Some(GameAction::Move(Direction::Left))
        );
        assert_eq!(t.filter(key(KeyCode::Left, KeyEventKind::Repeat)), None);
        assert_eq!(t.filter(key(KeyCode::Left, KeyEventKind::Release)), None);
    }

    #[test]
    fn unmapped_keys_never_fire() {
        let t = KeyTrigger::new(true);
        assert_eq!(t.filter(key(KeyCode::Char('x'), KeyEventKind::Release)), None);
    }
}
