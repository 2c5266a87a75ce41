//! Calculator facade: keypad actions in, display string and notices out

use crate::core::snapshot::{Snapshot, SnapshotError};
use crate::core::{CalcError, CalcResult, EngineState};
use crate::keypad::KeypadAction;

/// Outcome of one handled key press
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    /// Display string after the event
    pub display: String,
    /// Non-fatal condition the host should show to the user
    pub notice: Option<CalcError>,
}

/// Owns one engine and routes keypad actions to it
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    state: EngineState,
}

impl Calculator {
    /// Creates a calculator with a fresh engine
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a calculator around an existing state
    #[must_use]
    pub fn with_state(state: EngineState) -> Self {
        Self { state }
    }

    /// Restores a calculator from a saved snapshot
    pub fn from_snapshot(snapshot: &Snapshot) -> Result<Self, SnapshotError> {
        snapshot.restore().map(Self::with_state)
    }

    /// Captures the current state
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state)
    }

    /// Returns the engine state
    #[must_use]
    pub fn state(&self) -> &EngineState {
        &self.state
    }

    /// Returns the display string
    #[must_use]
    pub fn display(&self) -> String {
        self.state.render_display()
    }

    /// Handles one key press
    pub fn press(&mut self, action: KeypadAction) -> Transition {
        let notice = self.apply(action).err();
        Transition {
            display: self.state.render_display(),
            notice,
        }
    }

    /// Handles a key script such as `"12+3="`.
    ///
    /// Whitespace is skipped. Returns every notice raised along the way, or
    /// the first character that is not a key.
    pub fn press_keys(&mut self, keys: &str) -> Result<Vec<CalcError>, char> {
        let actions = keys
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| KeypadAction::from_char(c).ok_or(c))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(actions
            .into_iter()
            .filter_map(|action| self.press(action).notice)
            .collect())
    }

    /// Resets the engine
    pub fn clear(&mut self) {
        self.state.clear_all();
    }

    fn apply(&mut self, action: KeypadAction) -> CalcResult<()> {
        match action {
            KeypadAction::Digit(d) => {
                if let Some(c) = char::from_digit(u32::from(d), 10) {
                    self.state.append_digit(c);
                }
                Ok(())
            }
            KeypadAction::Decimal => {
                self.state.append_digit('.');
                Ok(())
            }
            KeypadAction::OpenParen => {
                self.state.append_parenthesis('(');
                Ok(())
            }
            KeypadAction::CloseParen => {
                self.state.append_parenthesis(')');
                Ok(())
            }
            KeypadAction::Operator(op) => self.state.on_operator(op),
            KeypadAction::Equals => self.state.on_equals(),
            KeypadAction::Clear => {
                self.state.clear_all();
                Ok(())
            }
            KeypadAction::Backspace => {
                self.state.backspace();
                Ok(())
            }
            KeypadAction::Square => {
                self.state.calculate_square();
                Ok(())
            }
            KeypadAction::SquareRoot => self.state.calculate_square_root(),
        }
    }
}
