//! Command dispatcher: navigation and zoom operations
//!
//! Every operation is a no-throw side effect. Before the frame has loaded
//! the dispatcher is inert; with a missing control surface the navigation
//! half keeps updating local state optimistically while renderer pushes
//! are dropped. A key pressed during load is not an error.

use log::debug;

use crate::inputs::ViewerCommand;
use crate::renderer::{RendererControl, RendererFrame};

use super::{BindingState, PageDisplay, ViewerController};

impl<D: PageDisplay, F: RendererFrame> ViewerController<D, F> {
    /// Dispatch a single viewer command.
    pub fn apply(&mut self, command: ViewerCommand) {
        match command {
            ViewerCommand::PreviousPage => self.previous_page(),
            ViewerCommand::NextPage => self.next_page(),
            ViewerCommand::ZoomIn => self.zoom_in(),
            ViewerCommand::ZoomOut => self.zoom_out(),
            ViewerCommand::FitToPage => self.fit_to_page(),
        }
    }

    /// Go back one page. Inert at page 1.
    pub fn previous_page(&mut self) {
        if self.binding == BindingState::Unbound {
            debug!("previous_page before frame load; ignored");
            return;
        }
        if self.state.current_page <= 1 {
            return;
        }
        let page = self.state.current_page - 1;
        self.set_page(page);
        self.push_page(page);
    }

    /// Advance one page.
    ///
    /// No upper bound is checked: the controller has no independent
    /// knowledge of document length, so the ceiling stays with the
    /// renderer's clamping.
    pub fn next_page(&mut self) {
        if self.binding == BindingState::Unbound {
            debug!("next_page before frame load; ignored");
            return;
        }
        let page = self.state.current_page.saturating_add(1);
        self.set_page(page);
        self.push_page(page);
    }

    pub fn zoom_in(&mut self) {
        match self.renderer.as_mut() {
            Some(renderer) => renderer.zoom_in(),
            None => debug!("zoom_in with no renderer handle; ignored"),
        }
    }

    pub fn zoom_out(&mut self) {
        match self.renderer.as_mut() {
            Some(renderer) => renderer.zoom_out(),
            None => debug!("zoom_out with no renderer handle; ignored"),
        }
    }

    /// Ask the renderer to fit the page to its container. Zoom and scale
    /// mode are renderer-owned; no local state tracks them.
    pub fn fit_to_page(&mut self) {
        match self.renderer.as_mut() {
            Some(renderer) => renderer.fit_to_container(),
            None => debug!("fit_to_page with no renderer handle; ignored"),
        }
    }

    fn push_page(&mut self, page: u32) {
        if let Some(renderer) = self.renderer.as_mut() {
            renderer.set_page(page);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::channel_frame::RendererCommand;
    use crate::inputs::ViewerCommand;
    use crate::renderer::FrameEvent;
    use crate::sim::{RecordingRenderer, ScriptedFrame};
    use crate::viewer::{TextDisplay, ViewerController};

    fn bound_viewer(
        initial_page: u32,
    ) -> (ViewerController<TextDisplay, ScriptedFrame>, RecordingRenderer) {
        let frame = ScriptedFrame::new([FrameEvent::Loaded]);
        let renderer = frame.renderer();
        let mut viewer = ViewerController::new(initial_page, TextDisplay::new(), frame);
        viewer.pump_frame_events();
        (viewer, renderer)
    }

    #[test]
    fn test_previous_page_is_noop_at_floor() {
        let (mut viewer, renderer) = bound_viewer(1);
        viewer.previous_page();
        viewer.previous_page();
        assert_eq!(viewer.current_page(), 1);
        assert_eq!(viewer.display().label(), "Page 1");
        assert!(renderer.calls().is_empty());
    }

    #[test]
    fn test_page_never_drops_below_one() {
        let (mut viewer, _renderer) = bound_viewer(1);
        for _ in 0..3 {
            viewer.next_page();
        }
        for _ in 0..10 {
            viewer.previous_page();
            assert!(viewer.current_page() >= 1);
        }
        assert_eq!(viewer.current_page(), 1);
    }

    #[test]
    fn test_next_page_has_no_local_ceiling() {
        let (mut viewer, renderer) = bound_viewer(1);
        for _ in 0..100 {
            viewer.next_page();
        }
        // the renderer would clamp; locally we trust it
        assert_eq!(viewer.current_page(), 101);
        assert_eq!(renderer.calls().len(), 100);
    }

    #[test]
    fn test_navigation_pushes_to_renderer() {
        let (mut viewer, renderer) = bound_viewer(4);
        viewer.next_page();
        viewer.previous_page();
        viewer.previous_page();
        assert_eq!(
            renderer.calls(),
            vec![
                RendererCommand::SetPage(5),
                RendererCommand::SetPage(4),
                RendererCommand::SetPage(3),
            ]
        );
    }

    #[test]
    fn test_zoom_delegates_without_local_state() {
        let (mut viewer, renderer) = bound_viewer(2);
        viewer.apply(ViewerCommand::ZoomIn);
        viewer.apply(ViewerCommand::ZoomOut);
        viewer.apply(ViewerCommand::FitToPage);
        assert_eq!(
            renderer.calls(),
            vec![
                RendererCommand::ZoomIn,
                RendererCommand::ZoomOut,
                RendererCommand::FitToContainer,
            ]
        );
        assert_eq!(viewer.current_page(), 2);
        assert_eq!(viewer.display().label(), "Page 2");
    }
}
