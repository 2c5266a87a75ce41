//! TUI application state

use crate::calculator::Calculator;
use crate::core::snapshot::Snapshot;
use crate::core::CalcError;
use crate::keypad::{Keypad, KeypadAction};

/// Terminal calculator state: the calculator plus what the screen shows
/// around it
#[derive(Debug, Default)]
pub struct CalculatorApp {
    /// The calculator being driven
    calculator: Calculator,
    /// Keypad with the last pressed button highlighted
    keypad: Keypad,
    /// Notice raised by the most recent key press
    notice: Option<CalcError>,
    /// Whether the app should quit
    should_quit: bool,
}

impl CalculatorApp {
    /// Creates a new app with a fresh calculator
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an app around an existing calculator
    #[must_use]
    pub fn with_calculator(calculator: Calculator) -> Self {
        Self {
            calculator,
            ..Self::default()
        }
    }

    /// Handles one key press and highlights its button
    pub fn press(&mut self, action: KeypadAction) {
        self.keypad.highlight(action);
        self.notice = self.calculator.press(action).notice;
    }

    /// Returns the display string
    #[must_use]
    pub fn display(&self) -> String {
        self.calculator.display()
    }

    /// Returns the value line shown under the display.
    ///
    /// The display hides the input after a result; this line always shows it.
    #[must_use]
    pub fn value(&self) -> &str {
        let input = self.calculator.state().current_input();
        if input.is_empty() {
            "0"
        } else {
            input
        }
    }

    /// Returns the most recent notice
    #[must_use]
    pub fn notice(&self) -> Option<CalcError> {
        self.notice
    }

    /// Returns the status line text
    #[must_use]
    pub fn status(&self) -> String {
        match self.notice {
            Some(err) => format!("✗ {}", err.notice()),
            None => match self.calculator.state().pending_op() {
                Some(op) => format!("pending {op}"),
                None => "Ready".to_string(),
            },
        }
    }

    /// Returns the keypad
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns the calculator
    #[must_use]
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Captures the calculator state for persistence
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.calculator.snapshot()
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
