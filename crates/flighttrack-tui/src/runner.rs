//! Main TUI runner - entry point and event loop

use flighttrack_app::config::Settings;
use flighttrack_app::Engine;
use flighttrack_core::prelude::*;

use super::{event, render, terminal};

/// Run the TUI.
///
/// `initial_flight` pre-fills the input and submits it immediately, as if
/// typed and confirmed with Enter.
///
/// Must be called from within a tokio runtime: lookups and signal handling
/// are spawned onto it.
pub fn run(settings: Settings, initial_flight: Option<String>) -> Result<()> {
    info!("═══════════════════════════════════════════════════════");
    info!("Flight Tracker starting");
    info!(
        "Lookup delay {}ms, icons {}",
        settings.lookup.delay_ms, settings.ui.icons
    );
    info!("═══════════════════════════════════════════════════════");

    terminal::install_panic_hook();

    let mut engine = Engine::new(settings);
    if let Some(flight) = initial_flight {
        engine.submit_input(&flight);
    }

    let mut term = ratatui::try_init()
        .inspect_err(|_| ratatui::restore())
        .map_err(|e| Error::terminal(format!("Failed to initialize terminal: {}", e)))?;
    let result = run_loop(&mut term, &mut engine);

    engine.shutdown();
    ratatui::restore();

    info!("Flight Tracker exiting");
    result
}

/// Main event loop
fn run_loop(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine) -> Result<()> {
    while !engine.should_quit() {
        // Lookup completions and signals
        engine.drain_pending_messages();

        terminal
            .draw(|frame| render::view(frame, &engine.state))
            .context("Failed to draw frame")?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }

    Ok(())
}
