use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::snake::Direction;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    Pause,
    Quit,
}

impl Command {
    /// Maps a runtime key press to a command. Letters are case-insensitive.
    pub fn from_key(ev: &KeyEvent) -> Option<Command> {
        if is_ctrl_c(ev) {
            return Some(Command::Quit);
        }

        match ev.code {
            KeyCode::Up => Some(Command::Turn(Direction::Up)),
            KeyCode::Left => Some(Command::Turn(Direction::Left)),
            KeyCode::Down => Some(Command::Turn(Direction::Down)),
            KeyCode::Right => Some(Command::Turn(Direction::Right)),
            KeyCode::Esc => Some(Command::Pause),
            KeyCode::Char(c) => match c.to_ascii_lowercase() {
                'w' => Some(Command::Turn(Direction::Up)),
                'a' => Some(Command::Turn(Direction::Left)),
                's' => Some(Command::Turn(Direction::Down)),
                'd' => Some(Command::Turn(Direction::Right)),
                'p' => Some(Command::Pause),
                'x' => Some(Command::Quit),
                _ => None,
            },
            _ => None,
        }
    }
}

pub fn key_char(ev: &KeyEvent) -> Option<char> {
    match ev.code {
        KeyCode::Char(c) => Some(c),
        _ => None,
    }
}

pub fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL, .. })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_wasd_is_case_insensitive() {
        assert_eq!(Command::from_key(&key(KeyCode::Char('w'))), Some(Command::Turn(Direction::Up)));
        assert_eq!(Command::from_key(&key(KeyCode::Char('W'))), Some(Command::Turn(Direction::Up)));
        assert_eq!(Command::from_key(&key(KeyCode::Char('A'))), Some(Command::Turn(Direction::Left)));
        assert_eq!(Command::from_key(&key(KeyCode::Char('s'))), Some(Command::Turn(Direction::Down)));
        assert_eq!(Command::from_key(&key(KeyCode::Char('D'))), Some(Command::Turn(Direction::Right)));
    }

    #[test]
    fn test_arrow_keys_turn() {
        assert_eq!(Command::from_key(&key(KeyCode::Left)), Some(Command::Turn(Direction::Left)));
        assert_eq!(Command::from_key(&key(KeyCode::Down)), Some(Command::Turn(Direction::Down)));
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(Command::from_key(&key(KeyCode::Char('x'))), Some(Command::Quit));
        assert_eq!(Command::from_key(&key(KeyCode::Char('X'))), Some(Command::Quit));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(Command::from_key(&ctrl_c), Some(Command::Quit));
        assert_eq!(Command::from_key(&key(KeyCode::Char('c'))), None);
    }

    #[test]
    fn test_pause_and_unmapped_keys() {
        assert_eq!(Command::from_key(&key(KeyCode::Esc)), Some(Command::Pause));
        assert_eq!(Command::from_key(&key(KeyCode::Char('P'))), Some(Command::Pause));
        assert_eq!(Command::from_key(&key(KeyCode::Char('z'))), None);
        assert_eq!(Command::from_key(&key(KeyCode::Enter)), None);
    }
}
