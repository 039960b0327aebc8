//! Viewer state and the page indicator binding
//!
//! The single source of truth for "current page" lives here, together with
//! the display seam the synchronizer writes through.

/// Authoritative page state for one embedded document session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewerState {
    /// Current 1-based page number. Never drops below 1; no upper bound is
    /// tracked locally because the renderer owns document length.
    pub current_page: u32,
}

impl ViewerState {
    /// Seed the state from the host-supplied starting page. Values below 1
    /// are floored to 1.
    pub fn new(initial_page: u32) -> Self {
        Self {
            current_page: initial_page.max(1),
        }
    }
}

/// On-screen target that textually reflects the current page.
///
/// Updated as a side effect of every state change; never read back as a
/// source of truth.
pub trait PageDisplay {
    fn show_page(&mut self, page: u32);
}

/// Plain-text page indicator rendering `Page {n}`.
#[derive(Debug, Default)]
pub struct TextDisplay {
    label: String,
}

impl TextDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently rendered indicator text.
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl PageDisplay for TextDisplay {
    fn show_page(&mut self, page: u32) {
        self.label = format!("Page {page}");
    }
}
