//! Keypad model shared by every front-end
//!
//! Buttons are plain data: an action plus a grid position. Front-ends decide
//! how to draw them and how to map clicks or key presses onto them.

use crate::core::Operator;

/// Actions that keypad buttons can perform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeypadAction {
    /// Insert a digit (0-9)
    Digit(u8),
    /// Insert a decimal point
    Decimal,
    /// Open parenthesis (display only)
    OpenParen,
    /// Close parenthesis (display only)
    CloseParen,
    /// Apply a binary operator
    Operator(Operator),
    /// Complete the pending operation
    Equals,
    /// Reset everything
    Clear,
    /// Remove the last input character
    Backspace,
    /// Square the input
    Square,
    /// Square root of the input
    SquareRoot,
}

impl KeypadAction {
    /// Maps a key character to an action.
    ///
    /// Besides the button labels this accepts the ASCII aliases used in key
    /// scripts: `*`/`x`, `/`, `c`, `<` for backspace, `s` for square and `r`
    /// for square root.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        if let Some(d) = c.to_digit(10) {
            return Some(Self::Digit(d as u8));
        }
        if let Some(op) = Operator::from_char(c) {
            return Some(Self::Operator(op));
        }
        match c {
            '.' => Some(Self::Decimal),
            '(' => Some(Self::OpenParen),
            ')' => Some(Self::CloseParen),
            '=' => Some(Self::Equals),
            'C' | 'c' => Some(Self::Clear),
            '<' | '⌫' => Some(Self::Backspace),
            's' | '²' => Some(Self::Square),
            'r' | '√' => Some(Self::SquareRoot),
            _ => None,
        }
    }

    /// Returns the button label for this action
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".to_string(),
            Self::OpenParen => "(".to_string(),
            Self::CloseParen => ")".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "C".to_string(),
            Self::Backspace => "⌫".to_string(),
            Self::Square => "x²".to_string(),
            Self::SquareRoot => "√".to_string(),
        }
    }
}

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// The action this button performs
    pub action: KeypadAction,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
    /// Whether the button is currently highlighted
    pub pressed: bool,
}

impl KeypadButton {
    /// Creates a released button
    #[must_use]
    pub fn new(action: KeypadAction, row: usize, col: usize) -> Self {
        Self {
            action,
            row,
            col,
            pressed: false,
        }
    }

    /// Returns the label shown on the button
    #[must_use]
    pub fn label(&self) -> String {
        self.action.label()
    }
}

/// The keypad layout
/// ```text
/// [ C ] [ ( ] [ ) ] [ ⌫ ]
/// [ 7 ] [ 8 ] [ 9 ] [ ÷ ]
/// [ 4 ] [ 5 ] [ 6 ] [ × ]
/// [ 1 ] [ 2 ] [ 3 ] [ - ]
/// [ 0 ] [ . ] [ = ] [ + ]
/// [ x²] [ √ ]
/// ```
#[derive(Debug, Clone)]
pub struct Keypad {
    /// Buttons in row-major order
    buttons: Vec<KeypadButton>,
    /// Number of columns
    cols: usize,
    /// Number of rows
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        use KeypadAction::{
            Backspace, Clear, CloseParen, Decimal, Digit, Equals, OpenParen, Square, SquareRoot,
        };
        use Operator::{Add, Divide, Multiply, Subtract};

        let layout: [&[KeypadAction]; 6] = [
            &[Clear, OpenParen, CloseParen, Backspace],
            &[Digit(7), Digit(8), Digit(9), KeypadAction::Operator(Divide)],
            &[Digit(4), Digit(5), Digit(6), KeypadAction::Operator(Multiply)],
            &[Digit(1), Digit(2), Digit(3), KeypadAction::Operator(Subtract)],
            &[Digit(0), Decimal, Equals, KeypadAction::Operator(Add)],
            &[Square, SquareRoot],
        ];

        let buttons = layout
            .iter()
            .enumerate()
            .flat_map(|(row, actions)| {
                actions
                    .iter()
                    .enumerate()
                    .map(move |(col, action)| KeypadButton::new(*action, row, col))
            })
            .collect();

        Self {
            buttons,
            cols: 4,
            rows: layout.len(),
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets a button by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Gets a button by row and column
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.row == row && b.col == col)
    }

    /// Finds the button performing an action
    #[must_use]
    pub fn find_button(&self, action: KeypadAction) -> Option<usize> {
        self.buttons.iter().position(|b| b.action == action)
    }

    /// Highlights the button for an action, releasing all others
    pub fn highlight(&mut self, action: KeypadAction) {
        self.release_all();
        if let Some(btn) = self.buttons.iter_mut().find(|b| b.action == action) {
            btn.pressed = true;
        }
    }

    /// Releases all buttons
    pub fn release_all(&mut self) {
        for btn in &mut self.buttons {
            btn.pressed = false;
        }
    }

    /// Returns the currently highlighted button, if any
    #[must_use]
    pub fn pressed(&self) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.pressed)
    }

    /// Returns all buttons
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButton] {
        &self.buttons
    }
}
