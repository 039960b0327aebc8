// Export modules for use in tests
pub mod channel_frame;
pub mod inputs;
pub mod renderer;
pub mod sim;
pub mod viewer;

// Re-export the controller surface
pub use renderer::{BindError, FrameEvent, RendererControl, RendererFrame};
pub use viewer::{BindingState, PageDisplay, TextDisplay, ViewerController, ViewerState};
