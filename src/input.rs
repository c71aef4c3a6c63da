//! Keyboard mapping for each screen.
//!
//! Raw `crossterm` key events are translated into small per-screen action
//! enums here so the screen loops never inspect key codes directly.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Actions available on the start menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Start,
    Exit,
}

/// Actions available on the game over screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverAction {
    Replay,
    Exit,
}

/// Whether this event is an initial key press. Terminal auto-repeat and
/// release events never drive the game.
pub fn is_press(key: &KeyEvent) -> bool {
    key.kind == KeyEventKind::Press
}

/// Ctrl+C quits from any screen, standing in for a window close.
pub fn is_force_quit(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// The one in-run control: flap.
pub fn is_flap(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char(' ') | KeyCode::Up)
}

pub fn menu_action(key: &KeyEvent) -> Option<MenuAction> {
    match key.code {
        KeyCode::Char(' ') => Some(MenuAction::Start),
        KeyCode::Esc | KeyCode::Char('q') => Some(MenuAction::Exit),
        _ => None,
    }
}

pub fn game_over_action(key: &KeyEvent) -> Option<GameOverAction> {
    match key.code {
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameOverAction::Replay),
        KeyCode::Esc => Some(GameOverAction::Exit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_menu_mapping() {
        assert_eq!(
            menu_action(&key(KeyCode::Char(' '))),
            Some(MenuAction::Start)
        );
        assert_eq!(menu_action(&key(KeyCode::Esc)), Some(MenuAction::Exit));
        assert_eq!(
            menu_action(&key(KeyCode::Char('q'))),
            Some(MenuAction::Exit)
        );
        assert_eq!(menu_action(&key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_game_over_mapping() {
        assert_eq!(
            game_over_action(&key(KeyCode::Char('r'))),
            Some(GameOverAction::Replay)
        );
        assert_eq!(
            game_over_action(&key(KeyCode::Char('R'))),
            Some(GameOverAction::Replay)
        );
        assert_eq!(
            game_over_action(&key(KeyCode::Esc)),
            Some(GameOverAction::Exit)
        );
        assert_eq!(game_over_action(&key(KeyCode::Enter)), None);
    }

    #[test]
    fn test_flap_keys() {
        assert!(is_flap(&key(KeyCode::Char(' '))));
        assert!(is_flap(&key(KeyCode::Up)));
        assert!(!is_flap(&key(KeyCode::Down)));
    }

    #[test]
    fn test_force_quit_requires_ctrl() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(is_force_quit(&ctrl_c));
        assert!(!is_force_quit(&key(KeyCode::Char('c'))));
    }

    #[test]
    fn test_release_events_filtered() {
        use crossterm::event::KeyEventState;
        let release = KeyEvent {
            code: KeyCode::Char(' '),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert!(!is_press(&release));
        assert!(is_press(&key(KeyCode::Char(' '))));
    }
}
