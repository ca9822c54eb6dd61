//! Tests for TypeaheadState

use super::*;
use crate::test_utils::test_helpers::{fruits, open_state};

const DEBOUNCE: Duration = Duration::from_millis(300);
const GRACE: Duration = Duration::from_millis(200);

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn new_state() -> TypeaheadState {
    TypeaheadState::new(DEBOUNCE, GRACE)
}

#[test]
fn test_new_state_is_idle() {
    let state = new_state();
    assert_eq!(state.phase(), Phase::Idle);
    assert!(state.results().is_none());
    assert!(state.highlighted().is_none());
    assert!(!state.is_visible());
}

#[test]
fn test_keystroke_schedules_fetch_after_debounce() {
    let start = Instant::now();
    let mut state = new_state();
    state.set_query("ap", start);

    assert_eq!(state.phase(), Phase::Pending);
    assert!(state.tick(start + ms(299)).is_none());

    let request = state.tick(start + DEBOUNCE).unwrap();
    assert_eq!(request.query, "ap");
    assert!(state.is_loading());
}

#[test]
fn test_rapid_keystrokes_issue_one_request_for_final_text() {
    let start = Instant::now();
    let mut state = new_state();
    let mut issued = Vec::new();

    for (i, text) in ["p", "pa", "pap", "papa"].iter().enumerate() {
        let at = start + ms(100 * i as u64);
        state.set_query(text, at);
        issued.extend(state.tick(at + ms(50)));
    }
    issued.extend(state.tick(start + ms(1000)));
    issued.extend(state.tick(start + ms(2000)));

    assert_eq!(issued.len(), 1);
    assert_eq!(issued[0].query, "papa");
}

#[test]
fn test_request_ids_increase() {
    let start = Instant::now();
    let mut state = new_state();

    state.set_query("a", start);
    let first = state.tick(start + DEBOUNCE).unwrap();
    state.set_query("ap", start + ms(400));
    let second = state.tick(start + ms(800)).unwrap();

    assert!(second.id > first.id);
}

#[test]
fn test_unchanged_text_does_not_restart_timer() {
    let start = Instant::now();
    let mut state = new_state();
    state.set_query("ap", start);
    state.set_query("ap", start + ms(250));

    assert!(state.tick(start + DEBOUNCE).is_some());
}

#[test]
fn test_blank_query_clears_results_and_suppresses_request() {
    let start = Instant::now();
    let mut state = open_state("ap", fruits(3));
    state.highlight_next();

    state.set_query("a", start);
    state.set_query("  ", start + ms(10));

    assert!(state.results().is_none());
    assert!(state.highlighted().is_none());
    assert!(!state.is_loading());
    assert!(state.tick(start + ms(1000)).is_none());
    assert_eq!(state.phase(), Phase::Idle);
}

#[test]
fn test_response_replaces_results_and_resets_highlight() {
    let mut state = open_state("ap", fruits(3));
    state.highlight_next();
    state.highlight_next();
    assert_eq!(state.highlighted(), Some(1));

    state.apply_response(fruits(2));

    assert_eq!(state.results().map(<[Suggestion]>::len), Some(2));
    assert!(state.highlighted().is_none());
    assert!(!state.is_loading());
}

#[test]
fn test_out_of_order_response_last_writer_wins() {
    let start = Instant::now();
    let mut state = new_state();
    state.focus();
    state.set_query("a", start);
    state.tick(start + DEBOUNCE).unwrap();
    state.set_query("ap", start + ms(400));
    state.tick(start + ms(700)).unwrap();

    // Response for "ap" lands first, the older "a" response after it
    state.apply_response(fruits(1));
    state.apply_response(fruits(3));

    assert_eq!(state.results().map(<[Suggestion]>::len), Some(3));
}

#[test]
fn test_response_after_blur_is_stored_but_hidden() {
    let start = Instant::now();
    let mut state = new_state();
    state.focus();
    state.set_query("ap", start);
    state.tick(start + DEBOUNCE).unwrap();
    state.blur(start + ms(310));
    state.tick(start + ms(600));

    state.apply_response(fruits(2));

    assert!(state.has_results());
    assert!(!state.is_visible());
    assert_eq!(state.phase(), Phase::Closed);
}

#[test]
fn test_response_after_query_emptied_is_stored_but_hidden() {
    let start = Instant::now();
    let mut state = new_state();
    state.focus();
    state.set_query("ap", start);
    state.tick(start + DEBOUNCE).unwrap();
    state.set_query("", start + ms(320));

    state.apply_response(fruits(2));

    assert!(state.has_results());
    assert!(!state.is_visible());
}

#[test]
fn test_failure_leaves_nothing_to_show() {
    let mut state = open_state("ap", fruits(3));
    state.apply_failure("connection refused");

    assert!(!state.has_results());
    assert!(!state.is_visible());
    assert!(!state.is_loading());
}

#[test]
fn test_visible_requires_focus_query_and_results() {
    let state = open_state("ap", fruits(2));
    assert!(state.is_visible());
    assert_eq!(state.phase(), Phase::Open);

    let empty = open_state("ap", Vec::new());
    assert!(!empty.is_visible());

    let mut unfocused = open_state("ap", fruits(2));
    unfocused.close();
    assert!(!unfocused.is_visible());
}

#[test]
fn test_blur_waits_for_grace_period() {
    let start = Instant::now();
    let mut state = open_state("ap", fruits(2));

    state.blur(start);
    state.tick(start + ms(199));
    assert!(state.is_visible());

    state.tick(start + GRACE);
    assert!(!state.is_focused());
    assert!(!state.is_visible());
}

#[test]
fn test_click_during_grace_period_selects() {
    let start = Instant::now();
    let mut state = open_state("ap", fruits(3));

    state.blur(start);
    let selected = state.select(1, start + ms(50));

    assert_eq!(selected, Some(fruits(3)[1].clone()));
}

#[test]
fn test_focus_cancels_pending_blur() {
    let start = Instant::now();
    let mut state = open_state("ap", fruits(2));

    state.blur(start);
    state.focus();
    state.tick(start + ms(1000));

    assert!(state.is_focused());
    assert!(state.is_visible());
}

#[test]
fn test_highlight_down_from_none_starts_at_first() {
    let mut state = open_state("ap", fruits(3));
    state.highlight_next();
    assert_eq!(state.highlighted(), Some(0));
}

#[test]
fn test_highlight_down_clamps_at_last() {
    let mut state = open_state("ap", fruits(3));
    for _ in 0..5 {
        state.highlight_next();
    }
    assert_eq!(state.highlighted(), Some(2));
}

#[test]
fn test_highlight_up_clamps_at_first() {
    let mut state = open_state("ap", fruits(3));
    state.highlight_next();
    state.highlight_next();
    state.highlight_previous();
    state.highlight_previous();
    state.highlight_previous();
    assert_eq!(state.highlighted(), Some(0));
}

#[test]
fn test_highlight_up_from_none_stays_none() {
    let mut state = open_state("ap", fruits(3));
    state.highlight_previous();
    assert_eq!(state.highlighted(), None);
}

#[test]
fn test_select_sets_query_and_returns_exact_record() {
    let start = Instant::now();
    let results = fruits(3);
    let mut state = open_state("ap", results.clone());

    for (i, expected) in results.iter().enumerate() {
        let mut state = open_state("ap", results.clone());
        let selected = state.select(i, start).unwrap();
        assert_eq!(&selected, expected);
        assert_eq!(state.query(), expected.value);
        assert!(!state.is_open());
        assert!(state.highlighted().is_none());
    }

    assert!(state.select(3, start).is_none());
    assert_eq!(state.query(), "ap");
}

#[test]
fn test_select_refreshes_results_for_new_text() {
    let start = Instant::now();
    let mut state = open_state("ap", fruits(3));
    state.select(0, start).unwrap();

    let request = state.tick(start + DEBOUNCE).unwrap();
    assert_eq!(request.query, fruits(3)[0].value);
}

#[test]
fn test_select_highlighted_defaults_to_first() {
    let start = Instant::now();
    let mut state = open_state("ap", fruits(2));
    let selected = state.select_highlighted(start).unwrap();

    assert_eq!(selected, fruits(2)[0]);
    assert!(!state.is_focused());
}

#[test]
fn test_next_deadline_tracks_nearest_timer() {
    let start = Instant::now();
    let mut state = open_state("ap", fruits(2));
    assert_eq!(state.next_deadline(start), None);

    state.set_query("app", start);
    state.blur(start);
    assert_eq!(state.next_deadline(start), Some(GRACE));
}

#[test]
fn test_dispose_cancels_timers() {
    let start = Instant::now();
    let mut state = open_state("ap", fruits(2));
    state.set_query("app", start);
    state.blur(start);

    state.dispose();

    assert!(state.tick(start + ms(5000)).is_none());
    assert!(state.is_focused());
    assert_eq!(state.next_deadline(start), None);
}
