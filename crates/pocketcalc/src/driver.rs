//! Unified calculator driver
//!
//! Test logic is written once against [`CalculatorDriver`] and run against
//! every front-end: the bare [`Calculator`] and, with the `tui` feature, the
//! terminal app.

use crate::calculator::Calculator;
use crate::core::{CalcError, Operator};
use crate::keypad::KeypadAction;

/// Abstract driver for calculator interactions
///
/// # Example
///
/// ```rust
/// use pocketcalc::driver::{CalculatorDriver, EngineDriver};
///
/// let mut driver = EngineDriver::new();
/// driver.press_all("5+3=");
/// assert_eq!(driver.display(), "5 +  3 = 8.0");
/// ```
pub trait CalculatorDriver {
    /// Presses one key
    fn press(&mut self, action: KeypadAction);

    /// Gets the current display string
    fn display(&self) -> String;

    /// Gets the notice raised by the most recent key press
    fn last_notice(&self) -> Option<CalcError>;

    /// Clears the calculator state
    fn clear(&mut self);

    /// Presses every key of a script, ignoring unknown characters
    fn press_all(&mut self, keys: &str) {
        for action in keys.chars().filter_map(KeypadAction::from_char) {
            self.press(action);
        }
    }
}

/// Driver over the bare calculator
#[derive(Debug, Default)]
pub struct EngineDriver {
    calculator: Calculator,
    last_notice: Option<CalcError>,
}

impl EngineDriver {
    /// Creates a driver with a fresh calculator
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the underlying calculator
    #[must_use]
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }
}

impl CalculatorDriver for EngineDriver {
    fn press(&mut self, action: KeypadAction) {
        self.last_notice = self.calculator.press(action).notice;
    }

    fn display(&self) -> String {
        self.calculator.display()
    }

    fn last_notice(&self) -> Option<CalcError> {
        self.last_notice
    }

    fn clear(&mut self) {
        self.calculator.clear();
        self.last_notice = None;
    }
}

/// TUI driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::{CalcError, CalculatorDriver, KeypadAction};
    use crate::tui::CalculatorApp;

    /// Driver over the terminal app
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
    }

    impl TuiDriver {
        /// Creates a new TUI driver
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press(&mut self, action: KeypadAction) {
            self.app.press(action);
        }

        fn display(&self) -> String {
            self.app.display()
        }

        fn last_notice(&self) -> Option<CalcError> {
            self.app.notice()
        }

        fn clear(&mut self) {
            self.app.press(KeypadAction::Clear);
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Unified Behaviour Checks =====
// These work with ANY CalculatorDriver implementation

/// Verifies the four operators with left-to-right evaluation
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.press_all("5+3=");
    assert_eq!(driver.display(), "5 +  3 = 8.0");
    driver.clear();

    driver.press_all("10-4=");
    assert_eq!(driver.display(), "10 -  4 = 6.0");
    driver.clear();

    driver.press_all("6×7=");
    assert_eq!(driver.display(), "6 ×  7 = 42.0");
    driver.clear();

    driver.press_all("2+3×4=");
    assert_eq!(driver.display(), "2 + 3 ×  4 = 20.0");
    driver.clear();
}

/// Verifies input editing: decimal point, lone zero, backspace
pub fn verify_input_editing<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.press_all("0.5.");
    assert_eq!(driver.display(), ".5");

    driver.press(KeypadAction::Backspace);
    driver.press(KeypadAction::Backspace);
    driver.press(KeypadAction::Backspace);
    assert_eq!(driver.display(), "0");
    driver.clear();
}

/// Verifies operator replacement when pressed twice
pub fn verify_operator_replacement<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.press_all("8+");
    driver.press(KeypadAction::Operator(Operator::Divide));
    assert_eq!(driver.display(), "8 ÷ ");
    driver.press_all("2=");
    assert_eq!(driver.display(), "8 ÷  2 = 4.0");
    driver.clear();
}

/// Verifies square and square root
pub fn verify_unary_operations<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.press_all("9");
    driver.press(KeypadAction::Square);
    assert_eq!(driver.display(), "(9)² = ");
    driver.clear();

    driver.press_all("16");
    driver.press(KeypadAction::SquareRoot);
    assert_eq!(driver.display(), "√(16) = ");
    assert_eq!(driver.last_notice(), None);
    driver.clear();
}

/// Verifies both notices reach the host
pub fn verify_notices<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.press_all("4÷0=");
    assert_eq!(driver.last_notice(), Some(CalcError::DivisionByZero));
    assert_eq!(driver.display(), "4 ÷  0 = 4.0");
    driver.clear();

    driver.press_all("1-5=");
    let before = driver.display();
    driver.press(KeypadAction::SquareRoot);
    assert_eq!(
        driver.last_notice(),
        Some(CalcError::NegativeSquareRoot(-4.0))
    );
    assert_eq!(driver.display(), before);
    driver.clear();
    assert_eq!(driver.last_notice(), None);
}

/// Complete verification suite - runs every check
pub fn run_full_suite<D: CalculatorDriver>(driver: &mut D) {
    verify_basic_arithmetic(driver);
    verify_input_editing(driver);
    verify_operator_replacement(driver);
    verify_unary_operations(driver);
    verify_notices(driver);
}
