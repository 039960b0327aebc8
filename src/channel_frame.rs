//! Frame bridge over flume channels
//!
//! Concrete embedding for renderers that run on their own thread and talk
//! over an explicit channel pair: commands out, lifecycle and page events
//! back. The host side never blocks on the bridge.

use flume::{Receiver, Sender};
use log::debug;

use crate::renderer::{BindError, FrameEvent, RendererControl, RendererFrame};

/// Wire commands the host pushes at the embedded renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RendererCommand {
    SetPage(u32),
    ZoomIn,
    ZoomOut,
    FitToContainer,
}

/// Renderer-side endpoints of a bridge, handed to whatever loop hosts the
/// actual renderer.
pub struct FrameEndpoints {
    pub events: Sender<FrameEvent>,
    pub commands: Receiver<RendererCommand>,
}

/// Host side of the bridge.
pub struct ChannelFrame {
    events: Receiver<FrameEvent>,
    commands: Sender<RendererCommand>,
}

impl ChannelFrame {
    pub fn new(events: Receiver<FrameEvent>, commands: Sender<RendererCommand>) -> Self {
        Self { events, commands }
    }

    /// Build a frame plus the matching renderer-side endpoints.
    pub fn pair() -> (Self, FrameEndpoints) {
        let (event_tx, event_rx) = flume::unbounded();
        let (command_tx, command_rx) = flume::unbounded();
        (
            Self::new(event_rx, command_tx),
            FrameEndpoints {
                events: event_tx,
                commands: command_rx,
            },
        )
    }
}

impl RendererFrame for ChannelFrame {
    type Control = ChannelRenderer;

    fn poll_event(&mut self) -> Option<FrameEvent> {
        self.events.try_recv().ok()
    }

    fn acquire(&mut self) -> Result<ChannelRenderer, BindError> {
        // A renderer that dropped its command receiver loaded fine but
        // exposes nothing we can drive.
        if self.commands.is_disconnected() {
            return Err(BindError::ControlSurfaceUnavailable);
        }
        // Command side alive but the event stream is gone: torn bridge.
        if self.events.is_disconnected() {
            return Err(BindError::FrameDisconnected);
        }
        Ok(ChannelRenderer {
            commands: self.commands.clone(),
        })
    }
}

/// Control surface forwarding over the command channel. Sends are fire
/// and forget; a renderer that went away swallows them.
pub struct ChannelRenderer {
    commands: Sender<RendererCommand>,
}

impl ChannelRenderer {
    fn send(&self, command: RendererCommand) {
        if self.commands.send(command).is_err() {
            debug!("renderer gone; dropped {command:?}");
        }
    }
}

impl RendererControl for ChannelRenderer {
    fn set_page(&mut self, page: u32) {
        self.send(RendererCommand::SetPage(page));
    }

    fn zoom_in(&mut self) {
        self.send(RendererCommand::ZoomIn);
    }

    fn zoom_out(&mut self) {
        self.send(RendererCommand::ZoomOut);
    }

    fn fit_to_container(&mut self) {
        self.send(RendererCommand::FitToContainer);
    }
}
