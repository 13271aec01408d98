//! The running arithmetic state.

use super::arithmetic::Operator;

/// The sentinel shown after a division by zero (or an unreadable display
/// value). Any key press while this is shown resets the calculator.
pub const ERROR_DISPLAY: &str = "Error";

/// All state a running calculator owns.
///
/// One value exists per calculator and is threaded through the key handler;
/// there is no ambient or shared state anywhere else.
#[derive(Clone, Debug, PartialEq)]
pub struct CalculatorState {
    /// The value currently shown: a number being typed, a computed result,
    /// or [`ERROR_DISPLAY`]. Never empty.
    pub display: String,
    /// Left-hand operand of the pending operation.
    pub operand1: f64,
    /// The pending operator, applied on the next operator or equals press.
    pub operator: Operator,
    /// When true, the next digit or decimal press starts a fresh number
    /// instead of extending the display.
    pub awaiting_new_operand: bool,
}

impl CalculatorState {
    /// A freshly powered-on calculator showing `0`.
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            operand1: 0.0,
            operator: Operator::Add,
            awaiting_new_operand: true,
        }
    }

    /// Clear the pending operation: operator back to `+`, first operand to
    /// zero, next digit starts a fresh number. The display is untouched.
    pub fn clear_pending(&mut self) {
        self.operator = Operator::Add;
        self.operand1 = 0.0;
        self.awaiting_new_operand = true;
    }

    /// Full reset to the power-on state.
    pub fn reset(&mut self) {
        self.display = "0".to_string();
        self.clear_pending();
    }

    /// Check if the error sentinel is currently shown.
    pub fn is_error(&self) -> bool {
        self.display == ERROR_DISPLAY
    }

    /// The numeric value of the display, if it parses as one.
    ///
    /// Returns `None` for the error sentinel and for malformed entries
    /// such as a number typed with two decimal points.
    pub fn display_value(&self) -> Option<f64> {
        self.display.parse::<f64>().ok().filter(|v| v.is_finite())
    }
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}
