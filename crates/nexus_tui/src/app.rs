//! Application state for the terminal front-end.

use crossterm::event::{KeyCode, KeyEvent};
use nexus_core::{
    GenerationRequest, MAX_TOKENS_CEILING, MAX_TOKENS_FLOOR, TEMPERATURE_CEILING,
    TEMPERATURE_FLOOR,
};

/// Step applied to max_tokens per arrow press.
const MAX_TOKENS_STEP: u32 = 50;
/// Step applied to temperature per arrow press.
const TEMPERATURE_STEP: f32 = 0.05;

/// Which input field receives key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppFocus {
    /// The prompt editor
    Prompt,
    /// The max-tokens parameter field
    MaxTokens,
    /// The temperature parameter field
    Temperature,
}

/// State for the terminal front-end.
///
/// Owns the editable request fields and the per-session request counter;
/// the counter is explicit caller state, incremented once per completed
/// successful call.
#[derive(Debug)]
pub struct App {
    /// The prompt under edit
    pub prompt: String,
    /// Maximum tokens to request
    pub max_tokens: u32,
    /// Sampling temperature to request
    pub temperature: f32,
    /// Currently focused field
    pub focus: AppFocus,
    /// Normalized text of the last successful response
    pub response: Option<String>,
    /// Status line content
    pub status_message: String,
    /// Successful requests this session
    pub request_count: u32,
    /// Set when the user asks to leave
    pub should_quit: bool,
}

impl App {
    /// Creates the initial application state.
    pub fn new() -> Self {
        Self {
            prompt: "Write a friendly greeting in Hindi".to_string(),
            max_tokens: 200,
            temperature: 0.2,
            focus: AppFocus::Prompt,
            response: None,
            status_message: "Ready".to_string(),
            request_count: 0,
            should_quit: false,
        }
    }

    /// Handles a key press. Returns true when a generation was requested.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab => self.next_focus(),
            KeyCode::Enter => return true,
            KeyCode::Char(c) if self.focus == AppFocus::Prompt => self.prompt.push(c),
            KeyCode::Backspace if self.focus == AppFocus::Prompt => {
                self.prompt.pop();
            }
            KeyCode::Up | KeyCode::Right => self.step_focused(true),
            KeyCode::Down | KeyCode::Left => self.step_focused(false),
            _ => {}
        }

        false
    }

    /// Moves focus to the next input field.
    pub fn next_focus(&mut self) {
        self.focus = match self.focus {
            AppFocus::Prompt => AppFocus::MaxTokens,
            AppFocus::MaxTokens => AppFocus::Temperature,
            AppFocus::Temperature => AppFocus::Prompt,
        };
    }

    fn step_focused(&mut self, up: bool) {
        match self.focus {
            AppFocus::Prompt => {}
            AppFocus::MaxTokens => {
                self.max_tokens = if up {
                    (self.max_tokens + MAX_TOKENS_STEP).min(MAX_TOKENS_CEILING)
                } else {
                    self.max_tokens
                        .saturating_sub(MAX_TOKENS_STEP)
                        .max(MAX_TOKENS_FLOOR)
                };
            }
            AppFocus::Temperature => {
                let stepped = if up {
                    self.temperature + TEMPERATURE_STEP
                } else {
                    self.temperature - TEMPERATURE_STEP
                };
                self.temperature = stepped.clamp(TEMPERATURE_FLOOR, TEMPERATURE_CEILING);
            }
        }
    }

    /// Builds a fresh request from the current field values.
    pub fn build_request(&self) -> Result<GenerationRequest, String> {
        GenerationRequest::builder()
            .prompt(self.prompt.clone())
            .max_tokens(self.max_tokens)
            .temperature(self.temperature)
            .build()
            .map_err(|e| format!("Invalid request: {}", e))
    }

    /// Records a completed successful call.
    pub fn record_success(&mut self, text: String) {
        self.response = Some(text);
        self.request_count += 1;
        self.status_message = format!("Done ({} this session)", self.request_count);
    }

    /// Records a failed call. The previous response stays on screen; the
    /// error is reported only through the status line.
    pub fn record_failure(&mut self, message: String) {
        self.status_message = message;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
