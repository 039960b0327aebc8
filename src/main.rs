//! Terminal host embedding a simulated document renderer.
//!
//! The host is deliberately thin: it owns the terminal, the quit key, and
//! the layout; everything page-related goes through the viewer controller.

use std::fs::File;
use std::io::stdout;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{error, info};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use simplelog::{Config, LevelFilter, WriteLogger};

use pagebridge::channel_frame::ChannelFrame;
use pagebridge::sim::SimulatedDocument;
use pagebridge::viewer::{BindingState, TextDisplay, ViewerController};

#[derive(Parser)]
#[command(name = "pagebridge", version, about = "Host shell around an embedded document renderer")]
struct Cli {
    /// Page to open the document at
    #[arg(long, default_value_t = 1)]
    page: u32,

    /// Page count of the simulated document
    #[arg(long, default_value_t = 42)]
    pages: u32,

    /// Delay before the embedded frame reports load completion, in ms
    #[arg(long, default_value_t = 300)]
    load_delay_ms: u64,

    /// Let the frame load but withhold its control surface
    #[arg(long)]
    withhold_control: bool,

    /// Log file path
    #[arg(long, default_value = "pagebridge.log")]
    log_file: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    WriteLogger::init(
        LevelFilter::Debug,
        Config::default(),
        File::create(&cli.log_file)?,
    )?;
    info!("starting pagebridge host");

    let mut document = SimulatedDocument::new(cli.pages)
        .starting_at(cli.page)
        .load_delay(Duration::from_millis(cli.load_delay_ms));
    if cli.withhold_control {
        document = document.withhold_control();
    }
    let frame = document.launch();
    let mut viewer = ViewerController::new(cli.page, TextDisplay::new(), frame);

    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;

    let res = run_host(&mut terminal, &mut viewer);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!("host error: {err:?}");
        println!("{err:?}");
    }

    info!("shutting down pagebridge host");
    Ok(())
}

fn run_host<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    viewer: &mut ViewerController<TextDisplay, ChannelFrame>,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let tick_rate = Duration::from_millis(50);

    loop {
        viewer.pump_frame_events();
        terminal.draw(|f| draw(f, viewer))?;

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') => return Ok(()),
                    // fit-to-page has no controller-level binding; the host
                    // invokes the exposed command like a toolbar button would
                    KeyCode::Char('f') => viewer.fit_to_page(),
                    _ => viewer.handle_key(key),
                }
            }
        }
    }
}

fn draw(f: &mut ratatui::Frame, viewer: &ViewerController<TextDisplay, ChannelFrame>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(f.area());

    let status = match viewer.binding() {
        BindingState::Unbound => " (loading)",
        BindingState::Bound => "",
        BindingState::Degraded => " (renderer control unavailable)",
    };
    let indicator = Paragraph::new(format!("{}{status}", viewer.display().label()))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("pagebridge"));
    f.render_widget(indicator, chunks[0]);

    let help = Paragraph::new("←/→: Page | +/-: Zoom | f: Fit | q: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[1]);
}
