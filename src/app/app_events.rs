use std::time::Instant;

use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};

use super::app_state::App;
use super::mouse_click::handle_click;

impl App {
    /// Handle one terminal event
    pub fn handle_event(&mut self, event: Event, now: Instant) {
        match event {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                self.handle_key_event(key, now);
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                handle_click(self, mouse.column, mouse.row, now);
            }
            Event::Paste(text) => self.handle_paste_event(text, now),
            _ => {}
        }
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        // Ctrl+C: Exit application
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.typeahead.state.is_focused() {
            self.handle_input_key(key, now);
        } else {
            self.handle_unfocused_key(key);
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent, now: Instant) {
        // Tab: leave the input
        if key.code == KeyCode::Tab {
            self.typeahead.blur(now);
            return;
        }

        if self.typeahead.handle_key(key, now) {
            return;
        }

        // Esc with no dropdown to close drops focus immediately
        if key.code == KeyCode::Esc {
            self.typeahead.close();
        }
    }

    fn handle_unfocused_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab | KeyCode::Char('/') | KeyCode::Char('i') => self.typeahead.focus(),
            KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    /// Paste text into the input as if typed
    pub fn handle_paste_event(&mut self, text: String, now: Instant) {
        if !self.typeahead.state.is_focused() {
            self.typeahead.focus();
        }
        self.typeahead.insert_text(&text, now);
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
