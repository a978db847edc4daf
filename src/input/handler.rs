use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::{Action, InputSnapshot};

/// Maps terminal key events to game actions
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> Option<Action> {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Cancel);
        }

        match key.code {
            // Movement - Arrow keys
            KeyCode::Up => Some(Action::Up),
            KeyCode::Down => Some(Action::Down),
            KeyCode::Left => Some(Action::Left),
            KeyCode::Right => Some(Action::Right),

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => Some(Action::Up),
            KeyCode::Char('s') | KeyCode::Char('S') => Some(Action::Down),
            KeyCode::Char('a') | KeyCode::Char('A') => Some(Action::Left),
            KeyCode::Char('d') | KeyCode::Char('D') => Some(Action::Right),

            // Controls
            KeyCode::Enter => Some(Action::Confirm),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Cancel),

            _ => None,
        }
    }

    /// Record the key in the snapshot for the next tick
    pub fn record(&self, key: KeyEvent, snapshot: &mut InputSnapshot) {
        if let Some(action) = self.handle_key_event(key) {
            snapshot.press(action);
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
