//! The set of keys a calculator keypad can emit.
//!
//! Keys travel as values between the keypad surface and the state machine;
//! their on-button labels are the canonical wire form, so `Key` converts
//! to and from label strings and serializes as the label itself.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::layout::ButtonRole;

/// A single keypad key, identified by its on-button label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Key {
    /// A digit key `0`–`9`. The payload is always in `0..=9`; construct
    /// through [`Key::digit`] or label parsing to keep it that way.
    Digit(u8),
    /// The decimal point key `.`.
    Decimal,
    /// The `+` operator key.
    Add,
    /// The `-` operator key.
    Subtract,
    /// The `*` operator key.
    Multiply,
    /// The `/` operator key.
    Divide,
    /// The `=` key.
    Equals,
    /// The `AC` (all clear) key.
    Clear,
    /// The `+/-` sign toggle key.
    ToggleSign,
    /// The `%` key.
    Percent,
}

impl Key {
    /// Create a digit key, rejecting values outside `0..=9`.
    pub fn digit(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self::Digit(value))
    }

    /// The on-button label for this key.
    pub fn label(&self) -> String {
        self.to_string()
    }

    /// The rendering role of this key's button.
    pub fn role(&self) -> ButtonRole {
        match self {
            Self::Digit(_) | Self::Decimal => ButtonRole::Digit,
            Self::Add | Self::Subtract | Self::Multiply | Self::Divide | Self::Equals => {
                ButtonRole::Operator
            }
            Self::Clear | Self::ToggleSign | Self::Percent => ButtonRole::Action,
        }
    }

    /// Check if this key enters a character of the current number.
    pub fn is_entry(&self) -> bool {
        matches!(self, Self::Digit(_) | Self::Decimal)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(value) => write!(f, "{value}"),
            Self::Decimal => f.write_str("."),
            Self::Add => f.write_str("+"),
            Self::Subtract => f.write_str("-"),
            Self::Multiply => f.write_str("*"),
            Self::Divide => f.write_str("/"),
            Self::Equals => f.write_str("="),
            Self::Clear => f.write_str("AC"),
            Self::ToggleSign => f.write_str("+/-"),
            Self::Percent => f.write_str("%"),
        }
    }
}

/// A label that does not name any keypad key.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown key label: {0:?}")]
pub struct UnknownKey(pub String);

impl FromStr for Key {
    type Err = UnknownKey;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let key = match label {
            "." => Self::Decimal,
            "+" => Self::Add,
            "-" => Self::Subtract,
            "*" => Self::Multiply,
            "/" => Self::Divide,
            "=" => Self::Equals,
            "AC" => Self::Clear,
            "+/-" => Self::ToggleSign,
            "%" => Self::Percent,
            _ => {
                let digit = label
                    .parse::<u8>()
                    .ok()
                    .and_then(Self::digit)
                    .filter(|_| label.len() == 1);
                digit.ok_or_else(|| UnknownKey(label.to_string()))?
            }
        };
        Ok(key)
    }
}

impl From<Key> for String {
    fn from(key: Key) -> Self {
        key.label()
    }
}

impl TryFrom<String> for Key {
    type Error = UnknownKey;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        label.parse()
    }
}
