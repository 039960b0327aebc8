//! Frame lifecycle and inbound synchronization
//!
//! The bridge half of the controller: reacts to the embedding frame's
//! load signal, acquires the renderer's control surface, and folds
//! page-change notifications back into the synchronizer. Binding is
//! best-effort; a renderer that never exposes its surface leaves the
//! controller degraded but alive.

use crossterm::event::KeyEvent;
use log::{debug, warn};

use crate::inputs;
use crate::renderer::{FrameEvent, RendererFrame};

use super::{PageDisplay, ViewerController};

/// Binding lifecycle for the embedded renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BindingState {
    /// Frame not loaded yet; dispatcher calls are inert.
    #[default]
    Unbound,
    /// Control surface acquired; commands and notifications both flow.
    Bound,
    /// Load completed but the control surface could not be acquired.
    /// Outbound navigation stays optimistic, inbound sync is off.
    Degraded,
}

impl<D: PageDisplay, F: RendererFrame> ViewerController<D, F> {
    /// Drain pending frame events. Called from the host loop; never blocks.
    pub fn pump_frame_events(&mut self) {
        while let Some(event) = self.frame.poll_event() {
            self.handle_frame_event(event);
        }
    }

    pub fn handle_frame_event(&mut self, event: FrameEvent) {
        match event {
            FrameEvent::Loaded => self.bind_renderer(),
            FrameEvent::PageChanged(page) => {
                if self.binding == BindingState::Bound {
                    debug!("renderer page change -> {page}");
                    self.set_page(page);
                } else {
                    debug!("dropping page change {page} while {:?}", self.binding);
                }
            }
        }
    }

    /// Keyboard surface. The host installs this once at construction; the
    /// bindings themselves are fixed, see [`crate::inputs`].
    pub fn handle_key(&mut self, key: KeyEvent) {
        if let Some(command) = inputs::command_for_key(&key) {
            self.apply(command);
        }
    }

    fn bind_renderer(&mut self) {
        match self.frame.acquire() {
            Ok(control) => {
                self.renderer = Some(control);
                self.binding = BindingState::Bound;
                debug!("renderer control surface bound");
            }
            Err(err) => {
                // Not fatal: outbound navigation keeps working.
                warn!("renderer binding failed: {err}");
                self.renderer = None;
                self.binding = BindingState::Degraded;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyCode;

    use crate::renderer::FrameEvent;
    use crate::sim::{self, ScriptedFrame};
    use crate::viewer::{BindingState, TextDisplay, ViewerController};

    #[test]
    fn test_starts_unbound_and_inert() {
        let frame = ScriptedFrame::new([]);
        let renderer = frame.renderer();
        let mut viewer = ViewerController::new(1, TextDisplay::new(), frame);
        viewer.pump_frame_events();

        viewer.handle_key(sim::key(KeyCode::Right));
        viewer.handle_key(sim::key(KeyCode::Char('+')));
        viewer.handle_key(sim::key(KeyCode::Char('-')));

        assert_eq!(viewer.binding(), BindingState::Unbound);
        assert_eq!(viewer.current_page(), 1);
        assert!(renderer.calls().is_empty(), "no calls may reach the renderer before load");
    }

    #[test]
    fn test_load_signal_binds_renderer() {
        let frame = ScriptedFrame::new([FrameEvent::Loaded]);
        let mut viewer = ViewerController::new(1, TextDisplay::new(), frame);
        viewer.pump_frame_events();
        assert_eq!(viewer.binding(), BindingState::Bound);
    }

    #[test]
    fn test_failed_acquisition_degrades() {
        let frame = ScriptedFrame::new([FrameEvent::Loaded]).without_control();
        let renderer = frame.renderer();
        let mut viewer = ViewerController::new(1, TextDisplay::new(), frame);
        viewer.pump_frame_events();

        assert_eq!(viewer.binding(), BindingState::Degraded);

        // zoom is silent and touches nothing
        viewer.zoom_in();
        assert_eq!(viewer.display().label(), "Page 1");
        assert!(renderer.calls().is_empty());

        // navigation stays optimistic: local state and display move on
        viewer.next_page();
        assert_eq!(viewer.current_page(), 2);
        assert_eq!(viewer.display().label(), "Page 2");
        assert!(renderer.calls().is_empty());
    }

    #[test]
    fn test_inbound_notification_overrides_local_state() {
        let frame = ScriptedFrame::new([FrameEvent::Loaded]);
        let mut viewer = ViewerController::new(1, TextDisplay::new(), frame);
        viewer.pump_frame_events();
        viewer.next_page();
        assert_eq!(viewer.current_page(), 2);

        viewer.handle_frame_event(FrameEvent::PageChanged(7));
        assert_eq!(viewer.current_page(), 7);
        assert_eq!(viewer.display().label(), "Page 7");
    }

    #[test]
    fn test_notifications_dropped_while_degraded() {
        let frame = ScriptedFrame::new([FrameEvent::Loaded, FrameEvent::PageChanged(9)])
            .without_control();
        let mut viewer = ViewerController::new(2, TextDisplay::new(), frame);
        viewer.pump_frame_events();
        assert_eq!(viewer.binding(), BindingState::Degraded);
        assert_eq!(viewer.current_page(), 2);
        assert_eq!(viewer.display().label(), "Page 2");
    }

    #[test]
    fn test_notification_before_load_is_dropped() {
        let frame = ScriptedFrame::new([FrameEvent::PageChanged(5), FrameEvent::Loaded]);
        let mut viewer = ViewerController::new(1, TextDisplay::new(), frame);
        viewer.pump_frame_events();
        assert_eq!(viewer.binding(), BindingState::Bound);
        assert_eq!(viewer.current_page(), 1);
    }

    #[test]
    fn test_zero_page_notification_ignored() {
        let frame = ScriptedFrame::new([FrameEvent::Loaded, FrameEvent::PageChanged(0)]);
        let mut viewer = ViewerController::new(3, TextDisplay::new(), frame);
        viewer.pump_frame_events();
        assert_eq!(viewer.current_page(), 3);
        assert_eq!(viewer.display().label(), "Page 3");
    }
}
