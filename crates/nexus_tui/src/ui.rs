//! UI rendering for the terminal front-end.

use crate::app::{App, AppFocus};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Draw the main UI.
#[tracing::instrument(skip_all)]
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(6), // Prompt editor
            Constraint::Length(3), // Parameter fields
            Constraint::Min(0),    // Response
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    draw_header(f, chunks[0]);
    draw_prompt(f, app, chunks[1]);
    draw_parameters(f, app, chunks[2]);
    draw_response(f, app, chunks[3]);
    draw_status_bar(f, app, chunks[4]);
}

/// Border style for a field, highlighted when focused.
fn field_style(app: &App, field: AppFocus) -> Style {
    if app.focus == field {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

/// Draw the header.
#[tracing::instrument(skip_all)]
fn draw_header(f: &mut Frame, area: ratatui::layout::Rect) {
    let header = Paragraph::new("Nexus AI: Worldwide Edition")
        .block(Block::default().borders(Borders::ALL))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    f.render_widget(header, area);
}

/// Draw the prompt editor.
#[tracing::instrument(skip_all)]
fn draw_prompt(f: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let prompt = Paragraph::new(app.prompt.as_str())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Prompt")
                .border_style(field_style(app, AppFocus::Prompt)),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(prompt, area);
}

/// Draw the parameter fields side by side.
#[tracing::instrument(skip_all)]
fn draw_parameters(f: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let max_tokens = Paragraph::new(app.max_tokens.to_string()).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Max tokens (50-1000)")
            .border_style(field_style(app, AppFocus::MaxTokens)),
    );
    f.render_widget(max_tokens, chunks[0]);

    let temperature = Paragraph::new(format!("{:.2}", app.temperature)).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Temperature (0.0-1.0)")
            .border_style(field_style(app, AppFocus::Temperature)),
    );
    f.render_widget(temperature, chunks[1]);
}

/// Draw the response pane.
#[tracing::instrument(skip_all)]
fn draw_response(f: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let text = app.response.as_deref().unwrap_or("");
    let response = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Response"))
        .wrap(Wrap { trim: false });
    f.render_widget(response, area);
}

/// Draw the status bar with help text.
#[tracing::instrument(skip_all)]
fn draw_status_bar(f: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let help_text = match app.focus {
        AppFocus::Prompt => "Type to edit | Tab: Next field | Enter: Generate | Esc: Quit",
        AppFocus::MaxTokens | AppFocus::Temperature => {
            "↑↓: Adjust | Tab: Next field | Enter: Generate | Esc: Quit"
        }
    };

    let status_text = format!(
        "{} | Requests: {} | {}",
        app.status_message, app.request_count, help_text
    );
    let status = Paragraph::new(status_text)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Gray));
    f.render_widget(status, area);
}
