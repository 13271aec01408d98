//! The key-press transition function.
//!
//! Each key press is interpreted against the current [`CalculatorState`]
//! in a fixed priority order: error/clear handling first, then digit entry,
//! then the pending-operation keys. Every transition completes before the
//! next key can arrive; nothing here suspends or blocks.

use tracing::{debug, warn};

use super::arithmetic::{Operator, format_number};
use super::state::{CalculatorState, ERROR_DISPLAY};
use crate::keypad::Key;

impl CalculatorState {
    /// Interpret one key press, returning the display to render.
    ///
    /// The transition is deterministic: the same state and key always yield
    /// the same next state. Division by zero never escapes as an error; it
    /// lands in the display as [`ERROR_DISPLAY`], which the next key press
    /// of any kind clears.
    pub fn handle_key(&mut self, key: Key) -> &str {
        debug!(key = %key, display = %self.display, "key pressed");

        // An error display or AC swallows the key entirely.
        if self.is_error() || key == Key::Clear {
            self.reset();
            return &self.display;
        }

        match key {
            Key::Digit(_) | Key::Decimal => self.enter(key),
            Key::Add | Key::Subtract | Key::Multiply | Key::Divide => {
                // The previously pending operator computes; the pressed key
                // only becomes pending for the next time.
                self.apply_pending();
                if let Some(next) = Operator::from_key(key) {
                    self.operator = next;
                }
                self.awaiting_new_operand = true;
            }
            Key::Equals => {
                self.apply_pending();
                self.clear_pending();
            }
            Key::Percent => {
                match self.display_value() {
                    Some(value) => self.display = format_number(value / 100.0),
                    None => self.enter_error(),
                }
                self.clear_pending();
            }
            Key::ToggleSign => self.toggle_sign(),
            Key::Clear => {} // handled above
        }

        &self.display
    }

    /// Digit or decimal-point entry.
    ///
    /// Appends verbatim: a second decimal point is not rejected here, so a
    /// display like `3..4` can be typed. It stops parsing as a number and
    /// turns into the error sentinel at the next operation that needs its
    /// value.
    fn enter(&mut self, key: Key) {
        let label = key.label();
        if self.display == "0" || self.awaiting_new_operand {
            self.display = label;
            self.awaiting_new_operand = false;
        } else {
            self.display.push_str(&label);
        }
    }

    /// Apply the pending operator to `operand1` and the displayed value,
    /// leaving the formatted result on the display and in `operand1`.
    fn apply_pending(&mut self) {
        let Some(operand2) = self.display_value() else {
            self.enter_error();
            return;
        };

        match self.operator.apply(self.operand1, operand2) {
            Ok(result) => {
                self.display = format_number(result);
                self.operand1 = result;
            }
            Err(error) => {
                debug!(%error, "computation failed");
                self.enter_error();
            }
        }
    }

    fn toggle_sign(&mut self) {
        match self.display_value() {
            // Prepend to the literal display text, so "3." becomes "-3.".
            Some(value) if value > 0.0 => self.display.insert(0, '-'),
            Some(value) if value < 0.0 => self.display = format_number(value.abs()),
            // Exactly zero stays untouched.
            Some(_) => {}
            None => self.enter_error(),
        }
    }

    fn enter_error(&mut self) {
        warn!(display = %self.display, "display value unreadable, showing error");
        self.display = ERROR_DISPLAY.to_string();
        self.operand1 = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Press a whitespace-separated sequence of key labels.
    fn press_all(state: &mut CalculatorState, sequence: &str) {
        for label in sequence.split_whitespace() {
            let key: Key = label.parse().unwrap();
            state.handle_key(key);
        }
    }

    fn after(sequence: &str) -> CalculatorState {
        let mut state = CalculatorState::new();
        press_all(&mut state, sequence);
        state
    }

    #[test]
    fn test_digits_concatenate() {
        let state = after("1 2 3");
        assert_eq!(state.display, "123");
        assert!(!state.awaiting_new_operand);
    }

    #[test]
    fn test_leading_zero_is_replaced() {
        assert_eq!(after("0 0 7").display, "7");
    }

    #[test]
    fn test_decimal_entry() {
        assert_eq!(after("3 . 5").display, "3.5");
        // A bare decimal point starts the number.
        assert_eq!(after(". 5").display, ".5");
    }

    #[test]
    fn test_clear_from_any_state() {
        let mut state = after("7 * 8");
        state.handle_key(Key::Clear);
        assert_eq!(state, CalculatorState::new());

        let mut mid_entry = after("9 . 1");
        mid_entry.handle_key(Key::Clear);
        assert_eq!(mid_entry, CalculatorState::new());
    }

    #[test]
    fn test_operator_applies_previous_operator() {
        // First press combines the implicit 0 with 4 under the default "+".
        let mut state = after("4 +");
        assert_eq!(state.display, "4");
        assert_eq!(state.operand1, 4.0);
        assert_eq!(state.operator, Operator::Add);
        assert!(state.awaiting_new_operand);

        press_all(&mut state, "5 +");
        assert_eq!(state.display, "9");
        assert_eq!(state.operand1, 9.0);

        press_all(&mut state, "6 =");
        assert_eq!(state.display, "15");
    }

    #[test]
    fn test_equals_keeps_display_but_clears_pending() {
        let state = after("8 - 3 =");
        assert_eq!(state.display, "5");
        assert_eq!(state.operand1, 0.0);
        assert_eq!(state.operator, Operator::Add);
        assert!(state.awaiting_new_operand);
    }

    #[test]
    fn test_new_number_replaces_result_after_equals() {
        let mut state = after("8 - 3 =");
        state.handle_key(Key::Digit(2));
        assert_eq!(state.display, "2");
    }

    #[test]
    fn test_division() {
        assert_eq!(after("5 / 2 =").display, "2.5");
        // Integral quotients never show a trailing ".0".
        assert_eq!(after("4 / 2 =").display, "2");
    }

    #[test]
    fn test_divide_by_zero_shows_error() {
        let state = after("5 / 0 =");
        assert_eq!(state.display, "Error");
        assert!(state.is_error());
        assert_eq!(state.operand1, 0.0);
    }

    #[test]
    fn test_divide_by_zero_via_operator_key() {
        let state = after("5 / 0 *");
        assert_eq!(state.display, "Error");
        assert_eq!(state.operand1, 0.0);
    }

    #[test]
    fn test_any_key_clears_the_error_state() {
        // The clearing press is swallowed; the digit is not entered too.
        let mut state = after("5 / 0 =");
        state.handle_key(Key::Digit(7));
        assert_eq!(state, CalculatorState::new());

        // The next press then lands normally.
        state.handle_key(Key::Digit(7));
        assert_eq!(state.display, "7");
    }

    #[test]
    fn test_percent() {
        assert_eq!(after("5 0 %").display, "0.5");

        // Percent results are formatted: 200% is "2", not "2.0".
        let state = after("2 0 0 %");
        assert_eq!(state.display, "2");
        assert!(state.awaiting_new_operand);
        assert_eq!(state.operand1, 0.0);
        assert_eq!(state.operator, Operator::Add);
    }

    #[test]
    fn test_toggle_sign() {
        let mut state = after("3");
        state.handle_key(Key::ToggleSign);
        assert_eq!(state.display, "-3");
        state.handle_key(Key::ToggleSign);
        assert_eq!(state.display, "3");
    }

    #[test]
    fn test_toggle_sign_on_zero_is_a_no_op() {
        let mut state = CalculatorState::new();
        state.handle_key(Key::ToggleSign);
        assert_eq!(state.display, "0");
    }

    #[test]
    fn test_toggle_sign_keeps_literal_entry_text() {
        let mut state = after("3 .");
        state.handle_key(Key::ToggleSign);
        assert_eq!(state.display, "-3.");
    }

    #[test]
    fn test_chained_operators_reuse_current_display() {
        // A second operator press with no digit in between recomputes with
        // the displayed value as both sides' source.
        let state = after("4 + +");
        assert_eq!(state.display, "8");
        assert_eq!(state.operand1, 8.0);
    }

    #[test]
    fn test_multiplication_chain() {
        assert_eq!(after("2 * 3 * 4 =").display, "24");
    }

    // Known edge case: nothing stops a second decimal point, so "3..4" can
    // be typed. The malformed number resolves to the error sentinel when an
    // operation needs its value, instead of the original's crash.
    #[test]
    fn test_double_decimal_point_is_not_rejected() {
        let state = after("3 . . 4");
        assert_eq!(state.display, "3..4");
        assert_eq!(state.display_value(), None);
    }

    #[test]
    fn test_double_decimal_point_errors_on_use() {
        let state = after("3 . . 4 +");
        assert_eq!(state.display, "Error");

        // And the error clears like any other.
        let mut state = state;
        state.handle_key(Key::Digit(1));
        assert_eq!(state, CalculatorState::new());
    }

    #[test]
    fn test_negative_results() {
        assert_eq!(after("3 - 5 =").display, "-2");
        let mut state = after("3 - 5 =");
        state.handle_key(Key::ToggleSign);
        assert_eq!(state.display, "2");
    }
}
