//! Calculator engine: the input/display state machine
//!
//! Evaluation is strictly left to right with a single pending operator. The
//! expression log is display text only and is never parsed back.

use tracing::{debug, warn};

use crate::core::format::{format_number, parse_number};
use crate::core::{perform_operation, CalcError, CalcResult, Operator};

/// Transient evaluation state of one calculator session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EngineState {
    /// Digits, decimal point or parentheses being typed (unparsed)
    current_input: String,
    /// Log of prior operands and operators
    full_expression: String,
    /// Running left-hand value of the pending operation
    operand: Option<f64>,
    /// Operator awaiting its right-hand value
    pending_op: Option<Operator>,
    /// The next digit starts a fresh number
    reset_input: bool,
}

impl EngineState {
    /// Creates an empty engine
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a state from its five fields.
    ///
    /// Callers are responsible for the decimal-point invariant; the snapshot
    /// loader checks it before calling this.
    pub(crate) fn from_parts(
        current_input: String,
        full_expression: String,
        operand: Option<f64>,
        pending_op: Option<Operator>,
        reset_input: bool,
    ) -> Self {
        Self {
            current_input,
            full_expression,
            operand,
            pending_op,
            reset_input,
        }
    }

    /// Returns the input buffer
    #[must_use]
    pub fn current_input(&self) -> &str {
        &self.current_input
    }

    /// Returns the expression log
    #[must_use]
    pub fn full_expression(&self) -> &str {
        &self.full_expression
    }

    /// Returns the running operand, if an operator has been applied
    #[must_use]
    pub fn operand(&self) -> Option<f64> {
        self.operand
    }

    /// Returns the pending operator
    #[must_use]
    pub fn pending_op(&self) -> Option<Operator> {
        self.pending_op
    }

    /// Returns whether the next digit starts a fresh number
    #[must_use]
    pub fn reset_input(&self) -> bool {
        self.reset_input
    }

    /// Appends a digit (`0`-`9`) or the decimal point.
    ///
    /// A second decimal point is ignored and a lone `0` is replaced rather
    /// than prefixed. Any other character is ignored.
    pub fn append_digit(&mut self, d: char) {
        if !d.is_ascii_digit() && d != '.' {
            debug!(key = %d, "ignoring non-digit key");
            return;
        }
        self.begin_fresh_input();
        if d == '.' && self.current_input.contains('.') {
            return;
        }
        self.push_replacing_zero(d);
        debug!(input = %self.current_input, "digit appended");
    }

    /// Appends `(` or `)` to the input. Parentheses are display-only.
    pub fn append_parenthesis(&mut self, p: char) {
        if p != '(' && p != ')' {
            return;
        }
        self.begin_fresh_input();
        self.push_replacing_zero(p);
    }

    /// Applies an operator key.
    ///
    /// A freshly typed or computed value is logged and folded into the
    /// running operand. Pressing an operator again right after an operator
    /// swaps the trailing operator token instead. A division by zero keeps
    /// the operand and is reported through the returned error.
    pub fn on_operator(&mut self, op: Operator) -> CalcResult<()> {
        let mut outcome = Ok(());

        if !self.current_input.is_empty() && !self.operator_was_last() {
            if self.reset_input && self.pending_op.is_none() {
                // continuing from a finished result starts a new log
                self.full_expression.clear();
            }
            self.full_expression
                .push_str(&format!("{} {} ", self.current_input, op));

            if let Some(value) = parse_number(&self.current_input) {
                let next = match self.operand {
                    None => value,
                    Some(acc) => {
                        let (combined, result) = apply_or_keep(acc, value, self.pending_op);
                        outcome = result;
                        combined
                    }
                };
                self.operand = Some(next);
            }
            self.reset_input = true;
        } else if !self.full_expression.is_empty() && self.pending_op.is_some() {
            // operator tokens are written as " op ": one char plus a space each side
            drop_last_chars(&mut self.full_expression, 3);
            self.full_expression.push_str(&format!(" {op} "));
        }

        self.pending_op = Some(op);
        debug!(
            operator = %op,
            operand = ?self.operand,
            expression = %self.full_expression,
            "operator applied"
        );
        outcome
    }

    /// Completes the pending operation.
    ///
    /// No-op unless an operand is held and the input parses as a number.
    pub fn on_equals(&mut self) -> CalcResult<()> {
        let Some(acc) = self.operand else {
            return Ok(());
        };
        let Some(value) = parse_number(&self.current_input) else {
            return Ok(());
        };

        let (result, outcome) = apply_or_keep(acc, value, self.pending_op);
        let shown = format_number(result);
        self.full_expression
            .push_str(&format!(" {} = {}", self.current_input, shown));
        self.current_input = shown;
        self.operand = None;
        self.pending_op = None;
        self.reset_input = true;

        debug!(result, expression = %self.full_expression, "equals");
        outcome
    }

    /// Squares the current input
    pub fn calculate_square(&mut self) {
        let Some(value) = parse_number(&self.current_input) else {
            return;
        };
        self.full_expression = format!("({})² = ", self.current_input);
        self.current_input = format_number(value * value);
        self.reset_input = true;
    }

    /// Takes the square root of the current input.
    ///
    /// Negative values leave the state untouched.
    pub fn calculate_square_root(&mut self) -> CalcResult<()> {
        let Some(value) = parse_number(&self.current_input) else {
            return Ok(());
        };
        if value < 0.0 {
            warn!(value, "square root of negative number");
            return Err(CalcError::NegativeSquareRoot(value));
        }
        self.full_expression = format!("√({}) = ", self.current_input);
        self.current_input = format_number(value.sqrt());
        self.reset_input = true;
        Ok(())
    }

    /// Resets all five fields
    pub fn clear_all(&mut self) {
        *self = Self::default();
        debug!("cleared");
    }

    /// Removes the last input character, never leaving the input empty
    pub fn backspace(&mut self) {
        self.current_input.pop();
        if self.current_input.is_empty() {
            self.current_input.push('0');
        }
    }

    /// Builds the display string
    #[must_use]
    pub fn render_display(&self) -> String {
        if !self.full_expression.is_empty() {
            if self.reset_input {
                self.full_expression.clone()
            } else {
                format!("{}{}", self.full_expression, self.current_input)
            }
        } else if self.current_input.is_empty() {
            "0".to_string()
        } else {
            self.current_input.clone()
        }
    }

    /// The input was already folded by an operator and nothing has replaced
    /// it since: the log still ends with that operator's token.
    fn operator_was_last(&self) -> bool {
        self.reset_input
            && self
                .pending_op
                .is_some_and(|op| self.full_expression.ends_with(&format!(" {op} ")))
    }

    fn begin_fresh_input(&mut self) {
        if self.reset_input {
            self.current_input.clear();
            self.reset_input = false;
            if self.pending_op.is_none() {
                // a finished calculation is not continued by typing digits
                self.full_expression.clear();
            }
        }
    }

    fn push_replacing_zero(&mut self, c: char) {
        if self.current_input == "0" {
            self.current_input.clear();
        }
        self.current_input.push(c);
    }
}

/// Applies `op`, falling back to the left operand when the operation fails
fn apply_or_keep(a: f64, b: f64, op: Option<Operator>) -> (f64, CalcResult<()>) {
    match perform_operation(a, b, op) {
        Ok(value) => (value, Ok(())),
        Err(err) => {
            warn!(a, b, %err, "operation aborted, keeping left operand");
            (a, Err(err))
        }
    }
}

/// Removes up to `n` trailing characters (not bytes)
fn drop_last_chars(s: &mut String, n: usize) {
    let cut = s
        .char_indices()
        .rev()
        .nth(n.saturating_sub(1))
        .map_or(0, |(idx, _)| idx);
    s.truncate(cut);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_keys(state: &mut EngineState, keys: &str) {
        for c in keys.chars() {
            state.append_digit(c);
        }
    }

    // ===== Construction =====

    #[test]
    fn test_new_is_empty() {
        let state = EngineState::new();
        assert_eq!(state.current_input(), "");
        assert_eq!(state.full_expression(), "");
        assert_eq!(state.operand(), None);
        assert_eq!(state.pending_op(), None);
        assert!(!state.reset_input());
        assert_eq!(state.render_display(), "0");
    }

    // ===== append_digit =====

    #[test]
    fn test_append_digit_appends_in_order() {
        let mut state = EngineState::new();
        type_keys(&mut state, "123");
        assert_eq!(state.current_input(), "123");
    }

    #[test]
    fn test_append_digit_replaces_lone_zero() {
        let mut state = EngineState::new();
        type_keys(&mut state, "07");
        assert_eq!(state.current_input(), "7");
    }

    #[test]
    fn test_append_decimal_to_zero_replaces_it() {
        let mut state = EngineState::new();
        type_keys(&mut state, "0.");
        assert_eq!(state.current_input(), ".");
    }

    #[test]
    fn test_append_digit_rejects_second_decimal() {
        let mut state = EngineState::new();
        type_keys(&mut state, "1..5.");
        assert_eq!(state.current_input(), "1.5");
    }

    #[test]
    fn test_append_digit_ignores_other_chars() {
        let mut state = EngineState::new();
        state.append_digit('a');
        state.append_digit('+');
        assert_eq!(state.current_input(), "");
    }

    #[test]
    fn test_append_digit_after_reset_starts_fresh() {
        let mut state = EngineState::new();
        type_keys(&mut state, "5");
        state.on_operator(Operator::Add).unwrap();
        assert_eq!(state.current_input(), "5");
        type_keys(&mut state, "3");
        assert_eq!(state.current_input(), "3");
        assert!(!state.reset_input());
    }

    #[test]
    fn test_append_digit_after_equals_starts_new_calculation() {
        let mut state = EngineState::new();
        type_keys(&mut state, "5");
        state.on_operator(Operator::Add).unwrap();
        type_keys(&mut state, "3");
        state.on_equals().unwrap();
        type_keys(&mut state, "7");
        assert_eq!(state.current_input(), "7");
        assert_eq!(state.full_expression(), "");
        assert_eq!(state.render_display(), "7");
    }

    // ===== append_parenthesis =====

    #[test]
    fn test_parenthesis_is_textual() {
        let mut state = EngineState::new();
        state.append_parenthesis('(');
        type_keys(&mut state, "12");
        state.append_parenthesis(')');
        assert_eq!(state.current_input(), "(12)");
    }

    #[test]
    fn test_parenthesis_replaces_lone_zero() {
        let mut state = EngineState::new();
        state.backspace();
        assert_eq!(state.current_input(), "0");
        state.append_parenthesis('(');
        assert_eq!(state.current_input(), "(");
    }

    #[test]
    fn test_parenthesis_rejects_other_chars() {
        let mut state = EngineState::new();
        state.append_parenthesis('[');
        assert_eq!(state.current_input(), "");
    }

    // ===== on_operator =====

    #[test]
    fn test_first_operator_stores_operand() {
        let mut state = EngineState::new();
        type_keys(&mut state, "12");
        state.on_operator(Operator::Multiply).unwrap();
        assert_eq!(state.operand(), Some(12.0));
        assert_eq!(state.pending_op(), Some(Operator::Multiply));
        assert_eq!(state.full_expression(), "12 × ");
        assert!(state.reset_input());
        assert_eq!(state.render_display(), "12 × ");
    }

    #[test]
    fn test_chained_operators_evaluate_left_to_right() {
        let mut state = EngineState::new();
        type_keys(&mut state, "2");
        state.on_operator(Operator::Add).unwrap();
        type_keys(&mut state, "3");
        state.on_operator(Operator::Multiply).unwrap();
        // no precedence: (2 + 3) × ...
        assert_eq!(state.operand(), Some(5.0));
        assert_eq!(state.full_expression(), "2 + 3 × ");
        type_keys(&mut state, "4");
        state.on_equals().unwrap();
        assert_eq!(state.current_input(), "20.0");
    }

    #[test]
    fn test_operator_twice_replaces_token() {
        let mut state = EngineState::new();
        type_keys(&mut state, "5");
        state.on_operator(Operator::Add).unwrap();
        state.on_operator(Operator::Subtract).unwrap();
        assert_eq!(state.full_expression(), "5 - ");
        assert_eq!(state.operand(), Some(5.0));
        assert_eq!(state.pending_op(), Some(Operator::Subtract));
    }

    #[test]
    fn test_operator_replacement_handles_multibyte_symbols() {
        let mut state = EngineState::new();
        type_keys(&mut state, "5");
        state.on_operator(Operator::Divide).unwrap();
        state.on_operator(Operator::Multiply).unwrap();
        state.on_operator(Operator::Add).unwrap();
        assert_eq!(state.full_expression(), "5 + ");
    }

    #[test]
    fn test_operator_on_empty_state_only_sets_pending() {
        let mut state = EngineState::new();
        state.on_operator(Operator::Add).unwrap();
        assert_eq!(state.full_expression(), "");
        assert_eq!(state.operand(), None);
        assert_eq!(state.pending_op(), Some(Operator::Add));
    }

    #[test]
    fn test_operator_continues_from_result() {
        let mut state = EngineState::new();
        type_keys(&mut state, "5");
        state.on_operator(Operator::Add).unwrap();
        type_keys(&mut state, "3");
        state.on_equals().unwrap();
        state.on_operator(Operator::Multiply).unwrap();
        assert_eq!(state.operand(), Some(8.0));
        assert_eq!(state.full_expression(), "8.0 × ");
        type_keys(&mut state, "2");
        state.on_equals().unwrap();
        assert_eq!(state.current_input(), "16.0");
    }

    #[test]
    fn test_operator_division_by_zero_keeps_operand() {
        let mut state = EngineState::new();
        type_keys(&mut state, "9");
        state.on_operator(Operator::Divide).unwrap();
        type_keys(&mut state, "0");
        let result = state.on_operator(Operator::Add);
        assert_eq!(result, Err(CalcError::DivisionByZero));
        assert_eq!(state.operand(), Some(9.0));
        assert_eq!(state.pending_op(), Some(Operator::Add));
    }

    #[test]
    fn test_operator_with_unparsable_input_is_silent() {
        let mut state = EngineState::new();
        state.append_parenthesis('(');
        assert!(state.on_operator(Operator::Add).is_ok());
        assert_eq!(state.operand(), None);
        assert_eq!(state.full_expression(), "( + ");
    }

    #[test]
    fn test_operator_after_square_folds_squared_value() {
        let mut state = EngineState::new();
        type_keys(&mut state, "5");
        state.on_operator(Operator::Add).unwrap();
        type_keys(&mut state, "3");
        state.calculate_square();
        state.on_operator(Operator::Multiply).unwrap();
        assert_eq!(state.operand(), Some(14.0));
        assert_eq!(state.full_expression(), "(3)² = 9.0 × ");
        type_keys(&mut state, "2");
        state.on_equals().unwrap();
        assert_eq!(state.current_input(), "28.0");
    }

    #[test]
    fn test_operator_after_square_root_folds_root() {
        let mut state = EngineState::new();
        type_keys(&mut state, "5");
        state.on_operator(Operator::Add).unwrap();
        type_keys(&mut state, "16");
        state.calculate_square_root().unwrap();
        state.on_operator(Operator::Multiply).unwrap();
        assert_eq!(state.operand(), Some(9.0));
        type_keys(&mut state, "2");
        state.on_equals().unwrap();
        assert_eq!(state.current_input(), "18.0");
    }

    #[test]
    fn test_operator_after_edited_square_folds_edit() {
        let mut state = EngineState::new();
        type_keys(&mut state, "5");
        state.on_operator(Operator::Add).unwrap();
        type_keys(&mut state, "3");
        state.calculate_square();
        state.backspace();
        assert_eq!(state.current_input(), "9.");
        state.on_operator(Operator::Multiply).unwrap();
        assert_eq!(state.operand(), Some(14.0));
        type_keys(&mut state, "2");
        state.on_equals().unwrap();
        assert_eq!(state.current_input(), "28.0");
    }

    #[test]
    fn test_operator_after_square_without_pending_starts_new_log() {
        let mut state = EngineState::new();
        type_keys(&mut state, "4");
        state.calculate_square();
        state.on_operator(Operator::Subtract).unwrap();
        assert_eq!(state.full_expression(), "16.0 - ");
        assert_eq!(state.operand(), Some(16.0));
    }

    // ===== on_equals =====

    #[test]
    fn test_equals_scenario_spacing() {
        let mut state = EngineState::new();
        type_keys(&mut state, "5");
        state.on_operator(Operator::Add).unwrap();
        type_keys(&mut state, "3");
        state.on_equals().unwrap();
        assert_eq!(state.operand(), None);
        assert_eq!(state.pending_op(), None);
        assert_eq!(state.current_input(), "8.0");
        assert_eq!(state.full_expression(), "5 +  3 = 8.0");
        assert!(state.reset_input());
        assert_eq!(state.render_display(), "5 +  3 = 8.0");
    }

    #[test]
    fn test_equals_without_operand_is_noop() {
        let mut state = EngineState::new();
        type_keys(&mut state, "42");
        let before = state.clone();
        state.on_equals().unwrap();
        assert_eq!(state, before);
    }

    #[test]
    fn test_equals_with_unparsable_input_is_noop() {
        let mut state = EngineState::new();
        type_keys(&mut state, "1");
        state.on_operator(Operator::Add).unwrap();
        state.append_parenthesis('(');
        let before = state.clone();
        state.on_equals().unwrap();
        assert_eq!(state, before);
    }

    #[test]
    fn test_equals_division_by_zero_returns_left_operand() {
        let mut state = EngineState::new();
        type_keys(&mut state, "4");
        state.on_operator(Operator::Divide).unwrap();
        type_keys(&mut state, "0");
        assert_eq!(state.on_equals(), Err(CalcError::DivisionByZero));
        assert_eq!(state.current_input(), "4.0");
        assert_eq!(state.full_expression(), "4 ÷  0 = 4.0");
        assert_eq!(state.operand(), None);
    }

    #[test]
    fn test_equals_repeats_operand_when_no_new_digits() {
        let mut state = EngineState::new();
        type_keys(&mut state, "5");
        state.on_operator(Operator::Add).unwrap();
        state.on_equals().unwrap();
        assert_eq!(state.current_input(), "10.0");
    }

    // ===== square / square root =====

    #[test]
    fn test_square() {
        let mut state = EngineState::new();
        type_keys(&mut state, "9");
        state.calculate_square();
        assert_eq!(state.current_input(), "81.0");
        assert_eq!(state.full_expression(), "(9)² = ");
        assert!(state.reset_input());
    }

    #[test]
    fn test_square_on_empty_input_is_noop() {
        let mut state = EngineState::new();
        state.calculate_square();
        assert_eq!(state, EngineState::new());
    }

    #[test]
    fn test_square_root() {
        let mut state = EngineState::new();
        type_keys(&mut state, "16");
        state.calculate_square_root().unwrap();
        assert_eq!(state.current_input(), "4.0");
        assert_eq!(state.full_expression(), "√(16) = ");
        assert!(state.reset_input());
    }

    #[test]
    fn test_square_root_of_zero() {
        let mut state = EngineState::new();
        type_keys(&mut state, "0");
        state.calculate_square_root().unwrap();
        assert_eq!(state.current_input(), "0.0");
    }

    #[test]
    fn test_square_root_negative_leaves_state() {
        let mut state = EngineState::new();
        type_keys(&mut state, "5");
        state.on_operator(Operator::Subtract).unwrap();
        type_keys(&mut state, "9");
        state.on_equals().unwrap();
        assert_eq!(state.current_input(), "-4.0");
        let before = state.clone();
        assert_eq!(
            state.calculate_square_root(),
            Err(CalcError::NegativeSquareRoot(-4.0))
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_square_result_feeds_next_operator() {
        let mut state = EngineState::new();
        type_keys(&mut state, "3");
        state.calculate_square();
        state.on_operator(Operator::Add).unwrap();
        assert_eq!(state.operand(), Some(9.0));
        assert_eq!(state.full_expression(), "9.0 + ");
    }

    // ===== clear / backspace =====

    #[test]
    fn test_clear_all() {
        let mut state = EngineState::new();
        type_keys(&mut state, "7");
        state.on_operator(Operator::Multiply).unwrap();
        type_keys(&mut state, "6");
        state.clear_all();
        assert_eq!(state, EngineState::new());
    }

    #[test]
    fn test_backspace_drops_last_char() {
        let mut state = EngineState::new();
        type_keys(&mut state, "123");
        state.backspace();
        assert_eq!(state.current_input(), "12");
    }

    #[test]
    fn test_backspace_floor_is_zero() {
        let mut state = EngineState::new();
        type_keys(&mut state, "9");
        state.backspace();
        assert_eq!(state.current_input(), "0");
        state.backspace();
        assert_eq!(state.current_input(), "0");
    }

    #[test]
    fn test_backspace_on_empty_input() {
        let mut state = EngineState::new();
        state.backspace();
        assert_eq!(state.current_input(), "0");
    }

    // ===== render_display =====

    #[test]
    fn test_render_display_joins_expression_and_input() {
        let mut state = EngineState::new();
        type_keys(&mut state, "5");
        state.on_operator(Operator::Subtract).unwrap();
        type_keys(&mut state, "2");
        assert_eq!(state.render_display(), "5 - 2");
    }

    #[test]
    fn test_render_display_plain_input() {
        let mut state = EngineState::new();
        type_keys(&mut state, "3.14");
        assert_eq!(state.render_display(), "3.14");
    }

    // ===== helpers =====

    #[test]
    fn test_drop_last_chars() {
        let mut s = String::from("5 × ");
        drop_last_chars(&mut s, 3);
        assert_eq!(s, "5");

        let mut short = String::from("ab");
        drop_last_chars(&mut short, 3);
        assert_eq!(short, "");
    }
}
