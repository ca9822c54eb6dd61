//! Tests for app rendering

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use std::time::Instant;

use crate::app::App;
use crate::test_utils::test_helpers::{app_with_results, fruits, key, test_app};
use ratatui::crossterm::event::KeyCode;

fn render_to_string(app: &mut App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(60, 16)).unwrap();
    terminal.draw(|f| app.render(f)).unwrap();
    terminal.backend().to_string()
}

#[test]
fn test_initial_render() {
    let mut app = test_app();
    let output = render_to_string(&mut app);

    assert!(output.contains("typeahead"));
    assert!(output.contains("Search"));
    assert!(output.contains("Nothing selected yet"));
    assert!(output.contains("[idle]"));
    assert!(app.layout_regions.input.is_some());
    assert!(app.layout_regions.dropdown.is_none());
}

#[test]
fn test_render_with_dropdown_records_region() {
    let mut app = app_with_results("ap", fruits(3));
    let output = render_to_string(&mut app);

    assert!(output.contains("Suggestions"));
    assert!(output.contains("Apricot"));
    assert!(output.contains("[open]"));
    assert!(app.layout_regions.dropdown.is_some());
}

#[test]
fn test_render_shows_selection() {
    let mut app = app_with_results("ap", fruits(3));
    app.handle_key_event(key(KeyCode::Enter), Instant::now());

    let output = render_to_string(&mut app);

    assert!(output.contains("value: Apple"));
    assert!(output.contains("id:    apple"));
    assert!(app.layout_regions.dropdown.is_none());
}
