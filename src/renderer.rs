//! Renderer adapter seam
//!
//! The embedded document renderer is a third party. The controller never
//! reaches into its internals; everything it needs is the narrow surface
//! defined here: a control surface for outbound commands, a frame that
//! reports lifecycle and page-change events, and a named error kind for
//! the one failure that matters (binding).

use thiserror::Error;

/// Control surface the embedded renderer exposes for external driving.
///
/// All calls are fire and forget. The renderer is the authority on document
/// length and zoom range; out-of-range requests are its to clamp or ignore.
pub trait RendererControl {
    /// Move the renderer to the given 1-based page.
    fn set_page(&mut self, page: u32);

    /// Step the renderer's zoom level in by one notch.
    fn zoom_in(&mut self);

    /// Step the renderer's zoom level out by one notch.
    fn zoom_out(&mut self);

    /// Switch the renderer's scale mode to fit the surrounding container.
    fn fit_to_container(&mut self);
}

/// Events the embedding frame delivers to the host side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameEvent {
    /// The frame finished loading its document session.
    Loaded,
    /// The renderer moved to a new 1-based page, regardless of cause
    /// (host command, scrolling inside the frame, internal link).
    PageChanged(u32),
}

/// The embedding frame hosting the renderer.
///
/// The frame is isolated from the host except through this interface: it
/// reports events and hands out the control surface once loading completed.
pub trait RendererFrame {
    type Control: RendererControl;

    /// Non-blocking poll for the next pending frame event.
    fn poll_event(&mut self) -> Option<FrameEvent>;

    /// Acquire the renderer's control surface.
    ///
    /// Only meaningful after the frame reported [`FrameEvent::Loaded`], and
    /// can still fail afterwards when the renderer does not expose the
    /// surface the host expects.
    fn acquire(&mut self) -> Result<Self::Control, BindError>;
}

/// Binding the renderer's control surface failed after load.
///
/// Always recoverable: the viewer keeps running in degraded mode.
#[derive(Debug, Error)]
pub enum BindError {
    /// The renderer does not expose the control surface the host expects
    /// (incompatible renderer version, restricted cross-frame access).
    #[error("renderer exposes no control surface")]
    ControlSurfaceUnavailable,

    /// The bridging channel to the frame is gone.
    #[error("frame bridge disconnected")]
    FrameDisconnected,
}
