//! Calculator core: engine state, operators, number formatting and snapshots
//!
//! Everything in here is pure, synchronous state manipulation. Error
//! conditions are returned as values so the host decides how to surface them.

pub mod engine;
pub mod format;
mod operations;
pub mod snapshot;

pub use engine::EngineState;
pub use operations::{perform_operation, Operator};

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Non-fatal conditions the host must show to the user.
///
/// None of these abort the session: the engine either keeps a well-defined
/// fallback value or leaves its state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CalcError {
    /// Division by zero attempted; the left operand was kept
    #[error("Division by zero")]
    DivisionByZero,
    /// Square root of a negative number requested
    #[error("Square root of negative number: {0}")]
    NegativeSquareRoot(f64),
}

impl CalcError {
    /// Short user-facing message suitable for a status line or toast
    #[must_use]
    pub const fn notice(&self) -> &'static str {
        match self {
            Self::DivisionByZero => "Cannot divide by zero",
            Self::NegativeSquareRoot(_) => "Invalid input for square root",
        }
    }
}
