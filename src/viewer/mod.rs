//! The viewer controller
//!
//! One controller instance per embedded document session, no shared
//! globals. Split across three files: `state` (synchronizer and display
//! binding), `commands` (navigation/zoom dispatcher), `bridge` (frame
//! lifecycle and inbound sync).

mod bridge;
mod commands;
mod state;

pub use bridge::BindingState;
pub use state::{PageDisplay, TextDisplay, ViewerState};

use log::debug;

use crate::renderer::RendererFrame;

/// Controller for one embedded document viewer.
///
/// Owns the authoritative page state, the display binding, the embedding
/// frame, and (once bound) the renderer's control surface.
pub struct ViewerController<D: PageDisplay, F: RendererFrame> {
    pub(crate) state: ViewerState,
    pub(crate) display: D,
    pub(crate) frame: F,
    pub(crate) binding: BindingState,
    pub(crate) renderer: Option<F::Control>,
}

impl<D: PageDisplay, F: RendererFrame> ViewerController<D, F> {
    /// Create a controller seeded with the host-supplied starting page.
    /// The display reflects the seed immediately.
    pub fn new(initial_page: u32, mut display: D, frame: F) -> Self {
        let state = ViewerState::new(initial_page);
        display.show_page(state.current_page);
        Self {
            state,
            display,
            frame,
            binding: BindingState::Unbound,
            renderer: None,
        }
    }

    pub fn current_page(&self) -> u32 {
        self.state.current_page
    }

    pub fn binding(&self) -> BindingState {
        self.binding
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    /// Synchronizer: pin local state and the indicator to `page`.
    ///
    /// Values below 1 are ignored. Out-of-range-but-positive values are
    /// accepted here and left to the renderer to clamp; its corrective
    /// page-change notification re-synchronizes us.
    pub fn set_page(&mut self, page: u32) {
        if page < 1 {
            debug!("ignoring set_page({page}); pages are 1-based");
            return;
        }
        self.state.current_page = page;
        self.display.show_page(page);
    }
}
