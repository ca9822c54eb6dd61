//! Typeahead query state
//!
//! Owns everything one input session needs: the query text, the last
//! received results, keyboard highlight, focus and the debounce timer.
//! All time-dependent operations take `now` explicitly; the host event
//! loop supplies the clock.

use std::time::{Duration, Instant};

use super::debouncer::Debouncer;
use crate::suggestion::Suggestion;

/// Coarse lifecycle of the widget, derived from the state fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No query text
    Idle,
    /// Query text present, waiting on the debounce timer or a response
    Pending,
    /// Dropdown is visible
    Open,
    /// Query text present but the dropdown is hidden
    Closed,
}

/// A suggestion request the host should send to the fetch worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub id: u64,
    pub query: String,
}

pub struct TypeaheadState {
    query: String,
    results: Option<Vec<Suggestion>>,
    highlighted: Option<usize>,
    is_open: bool,
    focused: bool,
    loading: bool,
    debouncer: Debouncer,
    blur_grace: Duration,
    blur_deadline: Option<Instant>,
    request_id: u64,
}

impl TypeaheadState {
    pub fn new(debounce: Duration, blur_grace: Duration) -> Self {
        Self {
            query: String::new(),
            results: None,
            highlighted: None,
            is_open: false,
            focused: false,
            loading: false,
            debouncer: Debouncer::new(debounce),
            blur_grace,
            blur_deadline: None,
            request_id: 0,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> Option<&[Suggestion]> {
        self.results.as_deref()
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_debounce_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    pub fn has_query(&self) -> bool {
        !self.query.trim().is_empty()
    }

    pub fn has_results(&self) -> bool {
        self.results.as_ref().is_some_and(|r| !r.is_empty())
    }

    /// Whether the dropdown should be drawn
    ///
    /// Depends only on current focus, query text and stored results, not on
    /// which request produced those results.
    pub fn is_visible(&self) -> bool {
        self.is_open && self.focused && self.has_query() && self.has_results()
    }

    pub fn phase(&self) -> Phase {
        if !self.has_query() {
            Phase::Idle
        } else if self.debouncer.is_pending() || self.loading {
            Phase::Pending
        } else if self.is_visible() {
            Phase::Open
        } else {
            Phase::Closed
        }
    }

    /// Record a keystroke that changed the query text
    ///
    /// Blank text clears results immediately and suppresses any scheduled
    /// request. Otherwise the debounce timer restarts from `now`.
    pub fn set_query(&mut self, text: &str, now: Instant) {
        if text == self.query {
            return;
        }
        self.query = text.to_string();
        self.is_open = true;

        if self.has_query() {
            self.debouncer.schedule(now);
        } else {
            self.debouncer.cancel();
            self.results = None;
            self.highlighted = None;
            self.loading = false;
        }
    }

    /// Advance timers
    ///
    /// Completes a blur whose grace period has run out, then returns the
    /// request to issue if the debounce deadline has passed.
    pub fn tick(&mut self, now: Instant) -> Option<FetchRequest> {
        if self.blur_deadline.is_some_and(|deadline| now >= deadline) {
            self.blur_deadline = None;
            self.focused = false;
            self.is_open = false;
        }

        if !self.debouncer.fire(now) || !self.has_query() {
            return None;
        }

        self.request_id = self.request_id.wrapping_add(1);
        self.loading = true;
        Some(FetchRequest {
            id: self.request_id,
            query: self.query.clone(),
        })
    }

    /// Earliest instant at which [`tick`](Self::tick) has work to do
    pub fn next_deadline(&self, now: Instant) -> Option<Duration> {
        let debounce = self.debouncer.remaining(now);
        let blur = self
            .blur_deadline
            .map(|deadline| deadline.saturating_duration_since(now));
        match (debounce, blur) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Store a response, last writer wins
    pub fn apply_response(&mut self, results: Vec<Suggestion>) {
        self.results = Some(results);
        self.highlighted = None;
        self.loading = false;
    }

    /// A request failed; leave nothing to show
    pub fn apply_failure(&mut self, reason: &str) {
        log::warn!("Suggestion request failed: {}", reason);
        self.apply_response(Vec::new());
    }

    pub fn focus(&mut self) {
        self.focused = true;
        self.is_open = true;
        self.blur_deadline = None;
    }

    /// Start losing focus
    ///
    /// The dropdown stays up for the grace period so a click on one of
    /// its entries can still land.
    pub fn blur(&mut self, now: Instant) {
        if self.focused && self.blur_deadline.is_none() {
            self.blur_deadline = Some(now + self.blur_grace);
        }
    }

    fn blur_now(&mut self) {
        self.focused = false;
        self.blur_deadline = None;
    }

    pub fn close(&mut self) {
        self.is_open = false;
        self.highlighted = None;
        self.blur_now();
    }

    pub fn highlight_next(&mut self) {
        let Some(len) = self.results.as_ref().map(Vec::len).filter(|len| *len > 0) else {
            return;
        };
        self.highlighted = Some(match self.highlighted {
            None => 0,
            Some(i) => (i + 1).min(len - 1),
        });
    }

    pub fn highlight_previous(&mut self) {
        self.highlighted = self.highlighted.map(|i| i.saturating_sub(1));
    }

    /// Select the entry at `index` of the current results
    ///
    /// Puts the entry's value in the query, closes the dropdown and
    /// returns the record for the host's callback. The new query text is
    /// debounced like any other edit.
    pub fn select(&mut self, index: usize, now: Instant) -> Option<Suggestion> {
        let selected = self.results.as_ref()?.get(index)?.clone();

        self.query = selected.value.clone();
        self.is_open = false;
        self.highlighted = None;
        self.debouncer.schedule(now);

        log::debug!("Selected suggestion {}", selected.id);
        Some(selected)
    }

    /// Select the highlighted entry, or the first one when nothing is highlighted
    pub fn select_highlighted(&mut self, now: Instant) -> Option<Suggestion> {
        let index = self.highlighted.unwrap_or(0);
        let selected = self.select(index, now)?;
        self.blur_now();
        Some(selected)
    }

    /// Cancel timers so nothing fires after teardown
    pub fn dispose(&mut self) {
        self.debouncer.cancel();
        self.blur_deadline = None;
        self.loading = false;
    }
}

#[cfg(test)]
#[path = "typeahead_state_tests.rs"]
mod typeahead_state_tests;
