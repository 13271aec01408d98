//! The calculator widget: state plus display surface, wired together.

use crate::display::DisplaySurface;
use crate::engine::CalculatorState;
use crate::keypad::Key;

/// A complete calculator: the running state bound to a display surface.
///
/// The keypad surface calls [`press`](Self::press) with each key; the widget
/// runs the transition and pushes the resulting display text to the surface.
/// One render per press, and one at construction for the initial `0`.
#[derive(Debug)]
pub struct CalculatorWidget<S: DisplaySurface> {
    state: CalculatorState,
    surface: S,
}

impl<S: DisplaySurface> CalculatorWidget<S> {
    /// Mount a fresh calculator on the given surface.
    pub fn new(mut surface: S) -> Self {
        let state = CalculatorState::new();
        surface.render(&state.display);
        Self { state, surface }
    }

    /// Handle one key press and re-render.
    pub fn press(&mut self, key: Key) {
        self.state.handle_key(key);
        self.surface.render(&self.state.display);
    }

    /// Handle a sequence of key presses, rendering after each one.
    pub fn press_all<I: IntoIterator<Item = Key>>(&mut self, keys: I) {
        for key in keys {
            self.press(key);
        }
    }

    /// The current display text.
    pub fn display(&self) -> &str {
        &self.state.display
    }

    /// The current state, for inspection.
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// The bound surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Unmount, returning the surface.
    pub fn into_surface(self) -> S {
        self.surface
    }
}
