use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use std::time::Duration;
use tracing::info;

use crate::app::{handle_input, App};
use crate::terminal::Tui;
use crate::ui;

// Also the redraw interval for the ticker and word cloud reveal
const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(50);

/// Run the main application event loop
pub fn run(terminal: &mut Tui, app: &mut App) -> Result<()> {
    info!(records = app.dashboard.records().len(), "dashboard started");

    while app.running {
        app.update();

        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        if !matches!(event::poll(EVENT_POLL_TIMEOUT), Ok(true)) {
            continue;
        }

        match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                handle_input(app, key.code);
            }
            Ok(Event::Resize(_, _)) => {
                app.on_resize();
            }
            Ok(_) | Err(_) => {
                // Mouse, focus, paste and key releases are ignored
            }
        }
    }

    info!("dashboard closed");
    Ok(())
}
