//! FIX Dashboard - Terminal UI for a FIX trading session server
//!
//! Connects the event channel, renders the three log panels and the
//! connection badge, and posts terminal commands to the server.

use std::io;

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;

use fix_dashboard::application::ui;
use fix_dashboard::infrastructure::init_tracing;
use fix_dashboard::{
    App, ChannelClient, CommandEmitter, DashboardConfig, DashboardContext, HttpCommandSink,
};
use fix_terminal::bin_common::resolve_config_path;

fn main() -> Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    let config_path = resolve_config_path(std::env::args().skip(1));
    let config = DashboardConfig::load(&config_path)?;

    // Logs go to a file; stdout belongs to the alternate screen
    init_tracing(&config.log_level, &config.log_file)?;
    info!(
        "Starting dashboard with {} (server {}, mode {:?})",
        config_path.display(),
        config.server_url,
        config.market_data_mode
    );

    let endpoints = config.endpoints()?;

    // Create tokio runtime
    let runtime = tokio::runtime::Runtime::new()?;

    let channel = ChannelClient::new(endpoints.channel)
        .reconnect(config.reconnect)
        .spawn(runtime.handle());
    let sink = HttpCommandSink::new(endpoints.command, runtime.handle().clone());
    info!("Commands are posted to {}", sink.endpoint());

    let mut app = App::new(
        DashboardContext::new(config.market_data_mode),
        CommandEmitter::new(sink),
        channel.signals(),
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the main loop
    let result = run_app(&mut terminal, &mut app, &config);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    channel.request_shutdown();
    let stats = app.stats();
    info!(
        "Dashboard stopped: {} routed, {} dropped, {} commands submitted",
        stats.routed,
        stats.dropped(),
        app.emitter.submitted()
    );

    if let Err(e) = result {
        eprintln!("Error: {}", e);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    config: &DashboardConfig,
) -> Result<()> {
    let tick = config.tick();

    loop {
        app.drain_signals();

        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(tick)? {
            if let Event::Key(key) = event::read()? {
                app.on_key(key);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
