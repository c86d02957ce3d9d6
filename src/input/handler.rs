use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::game::InputKey;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// A game key changed state; `true` means held
    Latch(InputKey, bool),
    Quit,
    None,
}

/// Translates terminal key events into latch writes
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        let pressed = key.kind != KeyEventKind::Release;

        let game_key = match key.code {
            // Movement - Arrow keys
            KeyCode::Up => InputKey::Up,
            KeyCode::Down => InputKey::Down,
            KeyCode::Left => InputKey::Left,
            KeyCode::Right => InputKey::Right,

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => InputKey::Up,
            KeyCode::Char('s') | KeyCode::Char('S') => InputKey::Down,
            KeyCode::Char('a') | KeyCode::Char('A') => InputKey::Left,
            KeyCode::Char('d') | KeyCode::Char('D') => InputKey::Right,

            // Controls
            KeyCode::Char(' ') | KeyCode::Char('r') | KeyCode::Char('R') => InputKey::Restart,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                return if pressed { KeyAction::Quit } else { KeyAction::None };
            }

            _ => return KeyAction::None,
        };

        KeyAction::Latch(game_key, pressed)
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
