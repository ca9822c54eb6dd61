//! Typeahead input widget
//!
//! A single-line text input with a suggestion dropdown. Keystrokes are
//! debounced before a request goes to the fetch worker; the dropdown is
//! navigated with the arrow keys and confirmed with Enter or a click.

mod debouncer;
mod typeahead_events;
pub mod typeahead_render;
mod typeahead_state;

use std::time::Instant;

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders};
use tui_textarea::{CursorMove, TextArea};

pub use debouncer::Debouncer;
pub use typeahead_events::KeyOutcome;
pub use typeahead_state::{FetchRequest, Phase, TypeaheadState};

use crate::config::WidgetConfig;
use crate::fetch::FetchWorker;
use crate::suggestion::Suggestion;

/// Callback invoked with the full record whenever an entry is selected
pub type OnSelect = Box<dyn FnMut(&Suggestion)>;

pub struct Typeahead {
    pub textarea: TextArea<'static>,
    pub state: TypeaheadState,
    worker: Option<FetchWorker>,
    on_select: Option<OnSelect>,
}

impl Typeahead {
    pub fn new(config: &WidgetConfig) -> Self {
        let mut textarea = TextArea::default();
        // Remove default underline from cursor line
        textarea.set_cursor_line_style(Style::default());
        textarea.set_placeholder_text("Start typing to search");

        let mut typeahead = Self {
            textarea,
            state: TypeaheadState::new(config.debounce(), config.blur_grace()),
            worker: None,
            on_select: None,
        };
        typeahead.update_block();
        typeahead
    }

    pub fn with_worker(mut self, worker: FetchWorker) -> Self {
        self.worker = Some(worker);
        self
    }

    pub fn with_on_select(mut self, on_select: impl FnMut(&Suggestion) + 'static) -> Self {
        self.on_select = Some(Box::new(on_select));
        self
    }

    /// Get the current query text
    pub fn query(&self) -> &str {
        self.textarea.lines()[0].as_ref()
    }

    /// Handle a key press while the input has focus
    ///
    /// Returns false when the key was left for the host (Enter or Esc with
    /// no dropdown to act on).
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        match self.state.handle_key(key, now) {
            KeyOutcome::Selected(selected) => {
                self.commit_selection(&selected);
                true
            }
            KeyOutcome::Handled => {
                self.update_block();
                true
            }
            KeyOutcome::Ignored => match key.code {
                // Single-line input: never insert a newline
                KeyCode::Enter | KeyCode::Esc => false,
                // TextArea maps Ctrl+M to a line break
                KeyCode::Char('m') if key.modifiers.contains(KeyModifiers::CONTROL) => true,
                _ => {
                    if self.textarea.input(key) {
                        let text = self.query().to_string();
                        self.state.set_query(&text, now);
                    }
                    true
                }
            },
        }
    }

    /// Insert text at the cursor as one edit; only the first line is kept
    pub fn insert_text(&mut self, text: &str, now: Instant) {
        let line = text.lines().next().unwrap_or_default();
        if line.is_empty() {
            return;
        }
        self.textarea.insert_str(line);
        let query = self.query().to_string();
        self.state.set_query(&query, now);
    }

    /// Select the entry at `index` with the pointer
    pub fn click_entry(&mut self, index: usize, now: Instant) -> Option<Suggestion> {
        let selected = self.state.select(index, now)?;
        self.commit_selection(&selected);
        Some(selected)
    }

    pub fn focus(&mut self) {
        self.state.focus();
        self.update_block();
    }

    /// Close the dropdown and drop focus without a grace period
    pub fn close(&mut self) {
        self.state.close();
        self.update_block();
    }

    pub fn blur(&mut self, now: Instant) {
        self.state.blur(now);
    }

    /// Drive timers and exchange messages with the fetch worker
    pub fn poll(&mut self, now: Instant) {
        let was_focused = self.state.is_focused();

        if let Some(request) = self.state.tick(now) {
            let id = request.id;
            match &self.worker {
                Some(worker) => {
                    if !worker.send(request) {
                        self.state.apply_failure("fetch worker stopped");
                    }
                }
                None => {
                    log::debug!("No fetch worker; dropping request {}", id);
                    self.state.apply_failure("no fetch worker");
                }
            }
        }

        if let Some(worker) = &self.worker {
            while let Some(response) = worker.try_recv() {
                match response.outcome {
                    Ok(results) => {
                        log::debug!(
                            "Request {} ({:?}) returned {} suggestions",
                            response.id,
                            response.query,
                            results.len()
                        );
                        self.state.apply_response(results);
                    }
                    Err(e) => self.state.apply_failure(&e.to_string()),
                }
            }
        }

        if was_focused != self.state.is_focused() {
            self.update_block();
        }
    }

    /// Cancel timers and stop the worker
    pub fn dispose(&mut self) {
        self.state.dispose();
        if let Some(worker) = self.worker.as_mut() {
            worker.shutdown();
        }
    }

    fn commit_selection(&mut self, selected: &Suggestion) {
        self.textarea.move_cursor(CursorMove::End);
        self.textarea.delete_line_by_head();
        self.textarea.insert_str(&selected.value);
        self.update_block();

        if let Some(on_select) = self.on_select.as_mut() {
            on_select(selected);
        }
    }

    fn update_block(&mut self) {
        let border_color = if self.state.is_focused() {
            Color::Cyan
        } else {
            Color::DarkGray
        };
        self.textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search ")
                .border_style(Style::default().fg(border_color)),
        );
    }
}
