//! Keypad data model: the keys a calculator surface exposes and the
//! standard grid they are arranged in.
//!
//! This module provides functionality to:
//! - Name every legal key as a `Key` value
//! - Tag each key with its rendering role (digit, operator, action)
//! - Describe the standard five-row keypad grid as plain data

mod key;
mod layout;

pub use key::{Key, UnknownKey};
pub use layout::{ButtonRole, KeypadButton, standard_layout};
