//! Mouse click handling
//!
//! Routes left clicks to the input, a dropdown entry, or outside both.

use std::time::Instant;

use super::app_state::App;
use crate::typeahead::typeahead_render::entry_at;

pub fn handle_click(app: &mut App, column: u16, row: u16, now: Instant) {
    if let Some(dropdown) = app.layout_regions.dropdown {
        if let Some(index) = entry_at(&app.typeahead.state, dropdown, column, row) {
            app.typeahead.click_entry(index, now);
            return;
        }
        if contains(dropdown, column, row) {
            // Border or loading line: keep the dropdown as is
            return;
        }
    }

    let on_input = app
        .layout_regions
        .input
        .is_some_and(|input| contains(input, column, row));

    if on_input {
        app.typeahead.focus();
    } else {
        app.typeahead.blur(now);
    }
}

fn contains(area: ratatui::layout::Rect, column: u16, row: u16) -> bool {
    column >= area.x && column < area.right() && row >= area.y && row < area.bottom()
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
