use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Turn(Direction),
    /// Start a new round, whether or not the current one is over
    Restart,
    Quit,
    None,
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            KeyCode::Up => KeyAction::Turn(Direction::Up),
            KeyCode::Down => KeyAction::Turn(Direction::Down),
            KeyCode::Left => KeyAction::Turn(Direction::Left),
            KeyCode::Right => KeyAction::Turn(Direction::Right),

            KeyCode::Char(c) => match c.to_ascii_lowercase() {
                'w' => KeyAction::Turn(Direction::Up),
                's' => KeyAction::Turn(Direction::Down),
                'a' => KeyAction::Turn(Direction::Left),
                'd' => KeyAction::Turn(Direction::Right),
                'r' | ' ' => KeyAction::Restart,
                'q' => KeyAction::Quit,
                _ => KeyAction::None,
            },

            KeyCode::Enter => KeyAction::Restart,
            KeyCode::Esc => KeyAction::Quit,

            _ => KeyAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
