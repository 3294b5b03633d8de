//! Key mapping from terminal events to game actions.

use crate::types::{Direction, GameAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
///
/// Arrow keys and WASD turn the snake, space starts or pauses. Any key that
/// maps to an action is consumed by the game.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Movement
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(GameAction::Turn(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(GameAction::Turn(Direction::Down))
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(GameAction::Turn(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(GameAction::Turn(Direction::Right))
        }

        // Lifecycle
        KeyCode::Char(' ') => Some(GameAction::StartOrPause),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Reset),
        KeyCode::Char('m') | KeyCode::Char('M') => Some(GameAction::ToggleMode),

        _ => None,
    }
}

/// Spectator cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchStep {
    Next,
    Prev,
}

/// Tab / Shift-Tab cycle through the live players being watched.
pub fn handle_watch_key(key: KeyEvent) -> Option<WatchStep> {
    match key.code {
        KeyCode::Tab => Some(WatchStep::Next),
        KeyCode::BackTab => Some(WatchStep::Prev),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> Option<GameAction> {
        handle_key_event(KeyEvent::from(code))
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(key(KeyCode::Up), Some(GameAction::Turn(Direction::Up)));
        assert_eq!(key(KeyCode::Down), Some(GameAction::Turn(Direction::Down)));
        assert_eq!(key(KeyCode::Left), Some(GameAction::Turn(Direction::Left)));
        assert_eq!(key(KeyCode::Right), Some(GameAction::Turn(Direction::Right)));
    }

    #[test]
    fn test_wasd_either_case() {
        for (lower, upper, dir) in [
            ('w', 'W', Direction::Up),
            ('s', 'S', Direction::Down),
            ('a', 'A', Direction::Left),
            ('d', 'D', Direction::Right),
        ] {
            assert_eq!(key(KeyCode::Char(lower)), Some(GameAction::Turn(dir)));
            assert_eq!(key(KeyCode::Char(upper)), Some(GameAction::Turn(dir)));
        }
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(key(KeyCode::Char(' ')), Some(GameAction::StartOrPause));
        assert_eq!(key(KeyCode::Char('r')), Some(GameAction::Reset));
        assert_eq!(key(KeyCode::Char('M')), Some(GameAction::ToggleMode));
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(key(KeyCode::Char('x')), None);
        assert_eq!(key(KeyCode::Enter), None);
        assert_eq!(key(KeyCode::Tab), None);
    }

    #[test]
    fn test_watch_keys() {
        assert_eq!(
            handle_watch_key(KeyEvent::from(KeyCode::Tab)),
            Some(WatchStep::Next)
        );
        assert_eq!(
            handle_watch_key(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT)),
            Some(WatchStep::Prev)
        );
        assert_eq!(handle_watch_key(KeyEvent::from(KeyCode::Char(' '))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
