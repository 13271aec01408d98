//! A keypad calculator core.
//!
//! The crate owns everything behind the glass of a pocket-calculator UI:
//! the running arithmetic state, the key-press state machine that mutates
//! it, and the keypad grid as plain data. Rendering is left to a toolkit
//! of the embedder's choice behind the [`DisplaySurface`] seam.
//!
//! ```
//! use calcpad::{BufferSurface, CalculatorWidget, Key};
//!
//! let mut calc = CalculatorWidget::new(BufferSurface::new());
//! calc.press_all([Key::Digit(4), Key::Add, Key::Digit(5), Key::Equals]);
//! assert_eq!(calc.display(), "9");
//! ```

pub mod display;
pub mod engine;
pub mod keypad;
pub mod widget;

pub use display::{BufferSurface, DisplaySurface};
pub use engine::{ArithmeticError, CalculatorState, ERROR_DISPLAY, Operator, format_number};
pub use keypad::{ButtonRole, Key, KeypadButton, UnknownKey, standard_layout};
pub use widget::CalculatorWidget;
