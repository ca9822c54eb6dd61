//! Typeahead rendering
//!
//! Draws the input box and, when visible, the suggestion dropdown
//! directly beneath it.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use unicode_width::UnicodeWidthStr;

use super::{Typeahead, TypeaheadState};
use crate::widgets::popup;

const MIN_POPUP_WIDTH: usize = 20;
const POPUP_BORDER_HEIGHT: u16 = 2;
const POPUP_PADDING: u16 = 4;
const POPUP_OFFSET_X: u16 = 1;
const HIGHLIGHT_MARKER: &str = "► ";
const PLAIN_MARKER: &str = "  ";
const LOADING_TEXT: &str = "Loading…";

/// Render the input box into `area`
pub fn render_input(typeahead: &Typeahead, frame: &mut Frame, area: Rect) {
    frame.render_widget(&typeahead.textarea, area);
}

/// Text of each dropdown row, in display order
///
/// While a request is outstanding the list is replaced by a single
/// loading line.
pub fn dropdown_rows(state: &TypeaheadState) -> Vec<String> {
    if state.is_loading() {
        return vec![LOADING_TEXT.to_string()];
    }

    state
        .results()
        .unwrap_or_default()
        .iter()
        .enumerate()
        .map(|(i, suggestion)| {
            let marker = if state.highlighted() == Some(i) {
                HIGHLIGHT_MARKER
            } else {
                PLAIN_MARKER
            };
            format!("{}{}", marker, suggestion.value)
        })
        .collect()
}

/// Render the dropdown below `input_area`
///
/// Returns the area drawn, for mouse hit-testing, or None when hidden.
pub fn render_dropdown(state: &TypeaheadState, frame: &mut Frame, input_area: Rect) -> Option<Rect> {
    if !state.is_visible() {
        return None;
    }

    let rows = dropdown_rows(state);
    let max_text_width = rows
        .iter()
        .map(|row| row.width())
        .max()
        .unwrap_or(0)
        .max(MIN_POPUP_WIDTH);
    let popup_width = (max_text_width as u16) + POPUP_PADDING;
    let popup_height = (rows.len() as u16) + POPUP_BORDER_HEIGHT;

    let popup_area = popup::popup_below_anchor(
        input_area,
        frame.area(),
        popup_width,
        popup_height,
        POPUP_OFFSET_X,
    );
    if popup_area.height <= POPUP_BORDER_HEIGHT {
        return None;
    }

    let items: Vec<ListItem> = rows
        .into_iter()
        .enumerate()
        .map(|(i, row)| {
            let style = if state.is_loading() {
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC)
            } else if state.highlighted() == Some(i) {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White).bg(Color::Black)
            };
            ListItem::new(Line::from(Span::styled(row, style)))
        })
        .collect();

    // Clear the background area to prevent transparency
    popup::clear_area(frame, popup_area);

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Suggestions ")
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black)),
    );
    frame.render_widget(list, popup_area);

    Some(popup_area)
}

/// Index of the dropdown entry under the given screen position
pub fn entry_at(state: &TypeaheadState, dropdown: Rect, column: u16, row: u16) -> Option<usize> {
    if state.is_loading() {
        return None;
    }

    let inner = popup::inset_rect(dropdown, 1, 1);
    let inside = column >= inner.x
        && column < inner.x + inner.width
        && row >= inner.y
        && row < inner.y + inner.height;
    if !inside {
        return None;
    }

    let index = usize::from(row - inner.y);
    (index < state.results().map_or(0, <[_]>::len)).then_some(index)
}

#[cfg(test)]
#[path = "typeahead_render_tests.rs"]
mod typeahead_render_tests;
