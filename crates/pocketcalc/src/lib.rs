//! pocketcalc - a pocket calculator's input/display state machine
//!
//! The engine turns discrete key presses (digits, operators, equals, clear,
//! backspace, square, square root) into a running left-to-right evaluation
//! and a display string. There is no operator precedence: `2 + 3 × 4` is
//! `20`. Parentheses are echoed into the display only.
//!
//! Error conditions (division by zero, square root of a negative) are
//! returned to the host as [`CalcError`](core::CalcError) notices rather than
//! shown by the engine itself.
//!
//! # Example
//!
//! ```rust
//! use pocketcalc::prelude::*;
//!
//! let mut calc = Calculator::new();
//! calc.press_keys("5+3=").unwrap();
//! assert_eq!(calc.display(), "5 +  3 = 8.0");
//!
//! let t = calc.press(KeypadAction::Clear);
//! assert_eq!(t.display, "0");
//!
//! let notices = calc.press_keys("4÷0=").unwrap();
//! assert_eq!(notices, vec![CalcError::DivisionByZero]);
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod calculator;
pub mod core;
pub mod driver;
pub mod keypad;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::calculator::{Calculator, Transition};
    pub use crate::core::format::{format_number, parse_number};
    pub use crate::core::snapshot::{Snapshot, SnapshotError};
    pub use crate::core::{perform_operation, CalcError, CalcResult, EngineState, Operator};
    pub use crate::driver::{CalculatorDriver, EngineDriver};
    pub use crate::keypad::{Keypad, KeypadAction, KeypadButton};

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;
}
