//! Terminal front-end for the Nexus LLM client.
//!
//! Collects a prompt and generation parameters, dispatches the request
//! through [`nexus_client::NexusClient`], normalizes the response with
//! [`nexus_client::extract_display_text`], and renders the result. One
//! request is in flight at a time: the event loop waits for the dispatcher
//! to finish (success or final failure) before accepting further input.

mod app;
mod ui;

pub use app::{App, AppFocus};
pub use ui::draw;

use crossterm::{
    event::{Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use nexus_client::{NexusClient, extract_display_text};
use nexus_error::TuiError;
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{debug, info, instrument};

/// Runs the interactive session until the user quits.
#[instrument(skip_all)]
pub async fn run(client: NexusClient) -> Result<(), TuiError> {
    enable_raw_mode().map_err(|e| TuiError::new(e.to_string()))?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| TuiError::new(e.to_string()))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| TuiError::new(e.to_string()))?;

    let result = event_loop(&mut terminal, client).await;

    disable_raw_mode().map_err(|e| TuiError::new(e.to_string()))?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .map_err(|e| TuiError::new(e.to_string()))?;

    result
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    client: NexusClient,
) -> Result<(), TuiError> {
    let mut app = App::new();

    loop {
        terminal
            .draw(|f| ui::draw(f, &app))
            .map_err(|e| TuiError::new(e.to_string()))?;

        if app.should_quit {
            info!(requests = app.request_count, "Session finished");
            return Ok(());
        }

        let event = crossterm::event::read().map_err(|e| TuiError::new(e.to_string()))?;
        if let Event::Key(key) = event
            && key.kind == KeyEventKind::Press
            && app.handle_key(key)
        {
            // Redraw once so the status line shows progress while the
            // dispatcher blocks the loop.
            app.status_message = "Calling endpoint...".to_string();
            terminal
                .draw(|f| ui::draw(f, &app))
                .map_err(|e| TuiError::new(e.to_string()))?;

            generate(&client, &mut app).await;
        }
    }
}

/// One generate action: dispatch, normalize, record.
#[instrument(skip_all)]
async fn generate(client: &NexusClient, app: &mut App) {
    match app.build_request() {
        Ok(request) => {
            debug!(max_tokens = app.max_tokens, "Dispatching request");
            match client.generate(&request).await {
                Ok(raw) => app.record_success(extract_display_text(&raw)),
                Err(err) => app.record_failure(format!("{}", err)),
            }
        }
        Err(message) => app.record_failure(message),
    }
}
