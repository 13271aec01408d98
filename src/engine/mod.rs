//! The calculator state machine.
//!
//! This module provides functionality to:
//! - Apply one pending binary operation at a time
//! - Track the running state (display, pending operator, first operand)
//! - Interpret each key press as a deterministic state transition

mod arithmetic;
mod handler;
mod state;

pub use arithmetic::{ArithmeticError, Operator, format_number};
pub use state::{CalculatorState, ERROR_DISPLAY};
