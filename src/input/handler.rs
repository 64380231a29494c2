use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::{Direction, InputAction};

pub struct KeyboardMapper;

impl KeyboardMapper {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> InputAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return InputAction::Quit;
        }

        match key.code {
            // Movement - Arrow keys
            KeyCode::Up => InputAction::Turn(Direction::Up),
            KeyCode::Down => InputAction::Turn(Direction::Down),
            KeyCode::Left => InputAction::Turn(Direction::Left),
            KeyCode::Right => InputAction::Turn(Direction::Right),

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => InputAction::Turn(Direction::Up),
            KeyCode::Char('s') | KeyCode::Char('S') => InputAction::Turn(Direction::Down),
            KeyCode::Char('a') | KeyCode::Char('A') => InputAction::Turn(Direction::Left),
            KeyCode::Char('d') | KeyCode::Char('D') => InputAction::Turn(Direction::Right),

            // Controls
            KeyCode::Char(' ') | KeyCode::Char('p') | KeyCode::Char('P') => {
                InputAction::TogglePause
            }
            KeyCode::Char('r') | KeyCode::Char('R') => InputAction::Reset,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => InputAction::Quit,

            _ => InputAction::None,
        }
    }
}

impl Default for KeyboardMapper {
    fn default() -> Self {
        Self::new()
    }
}
