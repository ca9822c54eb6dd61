use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use ratatui::layout::Rect;

use crate::config::Config;
use crate::fetch::FetchWorker;
use crate::suggestion::Suggestion;
use crate::typeahead::Typeahead;

/// Longest the event loop waits for input before polling the fetch worker
const MAX_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Screen areas from the last render, for mouse hit-testing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutRegions {
    pub input: Option<Rect>,
    pub dropdown: Option<Rect>,
}

/// Host application embedding one typeahead
pub struct App {
    pub typeahead: Typeahead,
    pub selected: Rc<RefCell<Option<Suggestion>>>,
    pub layout_regions: LayoutRegions,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &Config, worker: Option<FetchWorker>) -> Self {
        let selected = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&selected);

        let mut typeahead = Typeahead::new(&config.widget).with_on_select(move |s: &Suggestion| {
            *sink.borrow_mut() = Some(s.clone());
        });
        if let Some(worker) = worker {
            typeahead = typeahead.with_worker(worker);
        }
        // Start with the input focused
        typeahead.focus();

        Self {
            typeahead,
            selected,
            layout_regions: LayoutRegions::default(),
            should_quit: false,
        }
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Get the current query text
    pub fn query(&self) -> &str {
        self.typeahead.query()
    }

    /// Most recent selection, if any
    pub fn selection(&self) -> Option<Suggestion> {
        self.selected.borrow().clone()
    }

    /// Advance widget timers and collect finished requests
    pub fn tick(&mut self, now: Instant) {
        self.typeahead.poll(now);
    }

    /// How long the event loop may block waiting for input
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.typeahead
            .state
            .next_deadline(now)
            .map_or(MAX_POLL_INTERVAL, |d| d.min(MAX_POLL_INTERVAL))
    }

    /// Tear down the widget before exit
    pub fn shutdown(&mut self) {
        self.typeahead.dispose();
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
