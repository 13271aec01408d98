//! The standard keypad grid, described as plain data.
//!
//! The rendering collaborator owns colors, fonts, and widget creation; this
//! crate only says which buttons exist, how they are grouped into rows, and
//! what role each one plays so the renderer can style it.

use serde::{Deserialize, Serialize};

use super::key::Key;

/// Rendering role of a keypad button.
///
/// Roles only drive presentation (the classic calculator color scheme);
/// the state machine never looks at them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonRole {
    /// A digit or decimal point button.
    Digit,
    /// An arithmetic operator or equals button.
    Operator,
    /// A utility button (clear, sign toggle, percent).
    Action,
}

/// One button cell in the keypad grid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KeypadButton {
    /// The key this button emits when pressed.
    pub key: Key,
    /// Rendering role for the button.
    pub role: ButtonRole,
    /// Relative width within the row. Most buttons are 1; the zero
    /// button spans two cells.
    pub expand: u8,
}

impl KeypadButton {
    /// A single-width button for the given key.
    pub fn new(key: Key) -> Self {
        Self {
            key,
            role: key.role(),
            expand: 1,
        }
    }

    /// A button spanning `expand` cells.
    pub fn wide(key: Key, expand: u8) -> Self {
        Self {
            key,
            role: key.role(),
            expand,
        }
    }
}

/// The standard five-row calculator grid.
///
/// Row order matches the classic layout: utility row on top, digits in
/// descending rows with an operator on the right, and a double-width zero
/// on the bottom row.
pub fn standard_layout() -> Vec<Vec<KeypadButton>> {
    vec![
        vec![
            KeypadButton::new(Key::Clear),
            KeypadButton::new(Key::ToggleSign),
            KeypadButton::new(Key::Percent),
            KeypadButton::new(Key::Divide),
        ],
        vec![
            KeypadButton::new(Key::Digit(7)),
            KeypadButton::new(Key::Digit(8)),
            KeypadButton::new(Key::Digit(9)),
            KeypadButton::new(Key::Multiply),
        ],
        vec![
            KeypadButton::new(Key::Digit(4)),
            KeypadButton::new(Key::Digit(5)),
            KeypadButton::new(Key::Digit(6)),
            KeypadButton::new(Key::Subtract),
        ],
        vec![
            KeypadButton::new(Key::Digit(1)),
            KeypadButton::new(Key::Digit(2)),
            KeypadButton::new(Key::Digit(3)),
            KeypadButton::new(Key::Add),
        ],
        vec![
            KeypadButton::wide(Key::Digit(0), 2),
            KeypadButton::new(Key::Decimal),
            KeypadButton::new(Key::Equals),
        ],
    ]
}
