//! Binary arithmetic and result formatting.

use std::fmt;

use thiserror::Error;

use crate::keypad::Key;

/// A pending binary operator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Addition. The initial pending operator, so the first computation
    /// combines the implicit operand 0 with the typed value.
    #[default]
    Add,
    /// Subtraction.
    Subtract,
    /// Multiplication.
    Multiply,
    /// Division.
    Divide,
}

impl Operator {
    /// The operator selected by an operator key, if `key` is one.
    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::Add => Some(Self::Add),
            Key::Subtract => Some(Self::Subtract),
            Key::Multiply => Some(Self::Multiply),
            Key::Divide => Some(Self::Divide),
            _ => None,
        }
    }

    /// Apply the operator to two operands.
    pub fn apply(self, a: f64, b: f64) -> Result<f64, ArithmeticError> {
        match self {
            Self::Add => Ok(a + b),
            Self::Subtract => Ok(a - b),
            Self::Multiply => Ok(a * b),
            Self::Divide => {
                if b == 0.0 {
                    Err(ArithmeticError::DivisionByZero)
                } else {
                    Ok(a / b)
                }
            }
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        };
        f.write_str(symbol)
    }
}

/// The only arithmetic failure the calculator can produce.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ArithmeticError {
    /// The right-hand operand of a division was zero.
    #[error("division by zero")]
    DivisionByZero,
}

/// Format a computed value for the display.
///
/// Integral results render as plain integers (no trailing `.0`); fractional
/// results keep their natural decimal representation. Only computed values
/// go through here, never digits the user is still typing.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
