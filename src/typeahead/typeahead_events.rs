//! Keyboard handling for the typeahead dropdown

use std::time::Instant;

use ratatui::crossterm::event::{KeyCode, KeyEvent};

use super::typeahead_state::TypeaheadState;
use crate::suggestion::Suggestion;

/// Result of offering a key to the dropdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Not a navigation key, or nothing to navigate; the text input gets it
    Ignored,
    /// Consumed by the dropdown
    Handled,
    /// Consumed, and an entry was selected
    Selected(Suggestion),
}

impl TypeaheadState {
    /// Handle navigation keys
    ///
    /// Only active while there is query text and at least one result.
    /// Every key handled here is swallowed so the text input never sees it.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> KeyOutcome {
        if !self.has_query() || !self.has_results() {
            return KeyOutcome::Ignored;
        }

        match key.code {
            KeyCode::Down => {
                self.highlight_next();
                KeyOutcome::Handled
            }
            KeyCode::Up => {
                self.highlight_previous();
                KeyOutcome::Handled
            }
            // The list is hidden behind the loading line until the response lands
            KeyCode::Enter if self.is_loading() => KeyOutcome::Handled,
            KeyCode::Enter => match self.select_highlighted(now) {
                Some(selected) => KeyOutcome::Selected(selected),
                None => KeyOutcome::Handled,
            },
            KeyCode::Esc => {
                self.close();
                KeyOutcome::Handled
            }
            _ => KeyOutcome::Ignored,
        }
    }
}

#[cfg(test)]
#[path = "typeahead_events_tests.rs"]
mod typeahead_events_tests;
