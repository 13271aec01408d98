//! The render seam between the state machine and whatever draws it.
//!
//! The calculator pushes its display text through a [`DisplaySurface`]
//! exactly once per handled key press. A GUI binds this to its text widget;
//! tests and headless embeddings use [`BufferSurface`].

/// Receives the display text after every state transition.
pub trait DisplaySurface {
    /// Show the given display text.
    fn render(&mut self, display: &str);
}

/// A surface that records every rendered frame.
#[derive(Clone, Debug, Default)]
pub struct BufferSurface {
    frames: Vec<String>,
}

impl BufferSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently rendered display text.
    pub fn last(&self) -> Option<&str> {
        self.frames.last().map(String::as_str)
    }

    /// Every frame rendered so far, oldest first.
    pub fn frames(&self) -> &[String] {
        &self.frames
    }
}

impl DisplaySurface for BufferSurface {
    fn render(&mut self, display: &str) {
        self.frames.push(display.to_string());
    }
}

impl<S: DisplaySurface + ?Sized> DisplaySurface for &mut S {
    fn render(&mut self, display: &str) {
        (**self).render(display);
    }
}
