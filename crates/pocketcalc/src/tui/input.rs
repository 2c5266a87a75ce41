//! Keyboard input handling

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::keypad::KeypadAction;

/// What a key event asks the app to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    /// Press a calculator key
    Press(KeypadAction),
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps key events to commands
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to a command
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyCommand {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyCommand::Quit,
                KeyCode::Char('l') => KeyCommand::Press(KeypadAction::Clear),
                _ => KeyCommand::None,
            };
        }

        match code {
            KeyCode::Char(c) => {
                KeypadAction::from_char(c).map_or(KeyCommand::None, KeyCommand::Press)
            }
            KeyCode::Enter => KeyCommand::Press(KeypadAction::Equals),
            KeyCode::Backspace | KeyCode::Delete => KeyCommand::Press(KeypadAction::Backspace),
            KeyCode::Esc => KeyCommand::Press(KeypadAction::Clear),
            _ => KeyCommand::None,
        }
    }
}
