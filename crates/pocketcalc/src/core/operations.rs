//! Binary operators and their evaluation
//!
//! Type-safe operator enum: the host can only hand the engine one of the four
//! keys on the pad.

use std::fmt;
use std::str::FromStr;

use crate::core::{CalcError, CalcResult};

/// A binary operator key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (×)
    Multiply,
    /// Division (÷)
    Divide,
}

impl Operator {
    /// All operators in keypad order
    pub const ALL: [Self; 4] = [Self::Divide, Self::Multiply, Self::Subtract, Self::Add];

    /// Returns the operator symbol shown in the expression log
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Maps a key character to an operator, accepting ASCII aliases
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '×' | '*' | 'x' => Some(Self::Multiply),
            '÷' | '/' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Applies the operator to two operands
    pub fn apply(&self, a: f64, b: f64) -> CalcResult<f64> {
        match self {
            Self::Add => Ok(a + b),
            Self::Subtract => Ok(a - b),
            Self::Multiply => Ok(a * b),
            Self::Divide => {
                if b == 0.0 {
                    Err(CalcError::DivisionByZero)
                } else {
                    Ok(a / b)
                }
            }
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Error returned when a string is not an operator symbol
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown operator: {0:?}")]
pub struct UnknownOperator(pub String);

impl FromStr for Operator {
    type Err = UnknownOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c).ok_or_else(|| UnknownOperator(s.to_string())),
            _ => Err(UnknownOperator(s.to_string())),
        }
    }
}

/// Combines the running operand with a new value.
///
/// Division by zero does not divide: the error carries the signal and the
/// caller keeps `a`. With no pending operator the new value wins.
pub fn perform_operation(a: f64, b: f64, op: Option<Operator>) -> CalcResult<f64> {
    match op {
        Some(op) => op.apply(a, b),
        None => Ok(b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_operator_symbols() {
        assert_eq!(Operator::Add.symbol(), "+");
        assert_eq!(Operator::Subtract.symbol(), "-");
        assert_eq!(Operator::Multiply.symbol(), "×");
        assert_eq!(Operator::Divide.symbol(), "÷");
    }

    #[test]
    fn test_operator_display_matches_symbol() {
        for op in Operator::ALL {
            assert_eq!(op.to_string(), op.symbol());
        }
    }

    #[test]
    fn test_operator_from_char_aliases() {
        assert_eq!(Operator::from_char('*'), Some(Operator::Multiply));
        assert_eq!(Operator::from_char('x'), Some(Operator::Multiply));
        assert_eq!(Operator::from_char('/'), Some(Operator::Divide));
        assert_eq!(Operator::from_char('%'), None);
    }

    #[test]
    fn test_operator_from_str() {
        assert_eq!("÷".parse::<Operator>(), Ok(Operator::Divide));
        assert_eq!("-".parse::<Operator>(), Ok(Operator::Subtract));
        assert!("".parse::<Operator>().is_err());
        assert!("++".parse::<Operator>().is_err());
        assert!("^".parse::<Operator>().is_err());
    }

    #[test]
    fn test_apply_arithmetic() {
        assert_eq!(Operator::Add.apply(5.0, 3.0), Ok(8.0));
        assert_eq!(Operator::Subtract.apply(5.0, 3.0), Ok(2.0));
        assert_eq!(Operator::Multiply.apply(5.0, 3.0), Ok(15.0));
        assert_eq!(Operator::Divide.apply(6.0, 3.0), Ok(2.0));
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(
            Operator::Divide.apply(4.0, 0.0),
            Err(CalcError::DivisionByZero)
        );
        assert_eq!(
            Operator::Divide.apply(4.0, -0.0),
            Err(CalcError::DivisionByZero)
        );
    }

    #[test]
    fn test_perform_operation_without_operator_returns_b() {
        assert_eq!(perform_operation(1.0, 7.0, None), Ok(7.0));
    }

    #[test]
    fn test_perform_operation_subtract_to_negative() {
        assert_eq!(
            perform_operation(3.0, 5.0, Some(Operator::Subtract)),
            Ok(-2.0)
        );
    }

    proptest! {
        #[test]
        fn prop_division_by_zero_always_signals(a in any::<f64>()) {
            prop_assert_eq!(
                perform_operation(a, 0.0, Some(Operator::Divide)),
                Err(CalcError::DivisionByZero)
            );
        }

        #[test]
        fn prop_add_commutative(a in -1e9f64..1e9, b in -1e9f64..1e9) {
            prop_assert_eq!(
                perform_operation(a, b, Some(Operator::Add)),
                perform_operation(b, a, Some(Operator::Add))
            );
        }
    }
}
