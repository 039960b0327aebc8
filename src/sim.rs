//! Simulated collaborators for demos and tests
//!
//! Two stand-ins for a real embedded renderer: [`ScriptedFrame`], a fully
//! in-memory frame driven by a queue of events, and [`SimulatedDocument`],
//! a paged document that runs on its own thread behind a [`ChannelFrame`]
//! and behaves like a real renderer would (clamps pages, corrects the host
//! with page-change notifications).

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::debug;

use crate::channel_frame::{ChannelFrame, FrameEndpoints, RendererCommand};
use crate::renderer::{BindError, FrameEvent, RendererControl, RendererFrame};

/// Build a key press event.
pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

/// Control surface that records every call for later assertions.
#[derive(Clone, Default)]
pub struct RecordingRenderer {
    calls: Arc<Mutex<Vec<RendererCommand>>>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<RendererCommand> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: RendererCommand) {
        self.calls.lock().unwrap().push(call);
    }
}

impl RendererControl for RecordingRenderer {
    fn set_page(&mut self, page: u32) {
        self.record(RendererCommand::SetPage(page));
    }

    fn zoom_in(&mut self) {
        self.record(RendererCommand::ZoomIn);
    }

    fn zoom_out(&mut self) {
        self.record(RendererCommand::ZoomOut);
    }

    fn fit_to_container(&mut self) {
        self.record(RendererCommand::FitToContainer);
    }
}

/// Scripted in-memory frame: hands out queued events and a recording
/// control surface.
pub struct ScriptedFrame {
    events: VecDeque<FrameEvent>,
    renderer: RecordingRenderer,
    expose_control: bool,
}

impl ScriptedFrame {
    pub fn new(events: impl IntoIterator<Item = FrameEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
            renderer: RecordingRenderer::new(),
            expose_control: true,
        }
    }

    /// Refuse to hand out the control surface, the way a renderer behind a
    /// cross-origin boundary would.
    pub fn without_control(mut self) -> Self {
        self.expose_control = false;
        self
    }

    pub fn push_event(&mut self, event: FrameEvent) {
        self.events.push_back(event);
    }

    /// Handle onto the recording renderer, for assertions.
    pub fn renderer(&self) -> RecordingRenderer {
        self.renderer.clone()
    }
}

impl RendererFrame for ScriptedFrame {
    type Control = RecordingRenderer;

    fn poll_event(&mut self) -> Option<FrameEvent> {
        self.events.pop_front()
    }

    fn acquire(&mut self) -> Result<RecordingRenderer, BindError> {
        if self.expose_control {
            Ok(self.renderer.clone())
        } else {
            Err(BindError::ControlSurfaceUnavailable)
        }
    }
}

/// Zoom step per notch, multiplicative.
const ZOOM_STEP: f32 = 1.1;
/// Smallest zoom factor the simulated document accepts.
const MIN_ZOOM: f32 = 0.1;

/// A simulated paged document session, launched on its own thread.
#[derive(Debug, Clone)]
pub struct SimulatedDocument {
    pages: u32,
    initial_page: u32,
    load_delay: Duration,
    withhold_control: bool,
}

impl SimulatedDocument {
    pub fn new(pages: u32) -> Self {
        Self {
            pages: pages.max(1),
            initial_page: 1,
            load_delay: Duration::ZERO,
            withhold_control: false,
        }
    }

    /// Delay before the frame reports load completion.
    pub fn load_delay(mut self, delay: Duration) -> Self {
        self.load_delay = delay;
        self
    }

    pub fn starting_at(mut self, page: u32) -> Self {
        self.initial_page = page;
        self
    }

    /// Load, but never expose the control surface (degraded-mode demo).
    pub fn withhold_control(mut self) -> Self {
        self.withhold_control = true;
        self
    }

    /// Spawn the document loop on its own thread and return the host-side
    /// frame. The thread exits when the host drops the frame.
    pub fn launch(self) -> ChannelFrame {
        let (frame, endpoints) = ChannelFrame::pair();
        std::thread::spawn(move || document_loop(self, endpoints));
        frame
    }
}

fn document_loop(doc: SimulatedDocument, endpoints: FrameEndpoints) {
    let FrameEndpoints { events, commands } = endpoints;

    if !doc.load_delay.is_zero() {
        std::thread::sleep(doc.load_delay);
    }

    if doc.withhold_control {
        drop(commands);
        let _ = events.send(FrameEvent::Loaded);
        return;
    }

    let mut page = clamp_page(doc.initial_page, doc.pages);
    let mut zoom = 1.0f32;

    let _ = events.send(FrameEvent::Loaded);

    while let Ok(command) = commands.recv() {
        match command {
            RendererCommand::SetPage(requested) => {
                let effective = clamp_page(requested, doc.pages);
                // Notify on any actual move, and also when a request was
                // clamped so the host can re-synchronize.
                if effective != page || effective != requested {
                    page = effective;
                    let _ = events.send(FrameEvent::PageChanged(page));
                }
            }
            RendererCommand::ZoomIn => {
                zoom *= ZOOM_STEP;
                debug!("sim zoom in -> {zoom:.2}");
            }
            RendererCommand::ZoomOut => {
                zoom = (zoom / ZOOM_STEP).max(MIN_ZOOM);
                debug!("sim zoom out -> {zoom:.2}");
            }
            RendererCommand::FitToContainer => {
                zoom = 1.0;
                debug!("sim scale mode -> fit");
            }
        }
    }
}

/// Clamp a 1-based page request into the document.
fn clamp_page(requested: u32, pages: u32) -> u32 {
    requested.clamp(1, pages.max(1))
}
