/// Example demonstrating a full viewer session against a simulated renderer
/// Run with: cargo run --example scripted_session
use std::time::{Duration, Instant};

use crossterm::event::KeyCode;
use pagebridge::sim::{self, SimulatedDocument};
use pagebridge::viewer::{BindingState, TextDisplay, ViewerController};

fn main() -> anyhow::Result<()> {
    // A 12-page document that takes a moment to load
    let frame = SimulatedDocument::new(12)
        .load_delay(Duration::from_millis(100))
        .launch();
    let mut viewer = ViewerController::new(1, TextDisplay::new(), frame);

    // Keys pressed during load are dropped on the floor
    viewer.handle_key(sim::key(KeyCode::Right));
    println!("before load: {}", viewer.display().label());

    // Wait for the frame's load signal
    let deadline = Instant::now() + Duration::from_secs(2);
    while viewer.binding() == BindingState::Unbound && Instant::now() < deadline {
        viewer.pump_frame_events();
        std::thread::sleep(Duration::from_millis(5));
    }
    println!("binding: {:?}", viewer.binding());

    // Navigate forward past the end; the renderer clamps and corrects us
    for _ in 0..15 {
        viewer.handle_key(sim::key(KeyCode::Right));
    }
    println!("optimistic local state: {}", viewer.display().label());

    let deadline = Instant::now() + Duration::from_secs(2);
    while viewer.current_page() != 12 && Instant::now() < deadline {
        viewer.pump_frame_events();
        std::thread::sleep(Duration::from_millis(5));
    }
    println!("after renderer correction: {}", viewer.display().label());

    viewer.handle_key(sim::key(KeyCode::Left));
    viewer.handle_key(sim::key(KeyCode::Char('+')));
    viewer.fit_to_page();
    println!("final: {}", viewer.display().label());

    Ok(())
}
