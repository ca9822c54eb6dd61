//! Suggestion records and the fixed source list they are drawn from

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::TypeaheadError;

/// One selectable autocomplete option
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Suggestion {
    /// Stable lowercase identifier, unique within a source list
    pub id: String,
    /// Human-readable display string
    pub value: String,
}

impl Suggestion {
    pub fn new(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
        }
    }
}

/// Built-in entries used when the config file does not provide its own list
const DEFAULT_ENTRIES: &[(&str, &str)] = &[
    ("apple", "Apple"),
    ("apricot", "Apricot"),
    ("avocado", "Avocado"),
    ("banana", "Banana"),
    ("blackberry", "Blackberry"),
    ("blueberry", "Blueberry"),
    ("cherry", "Cherry"),
    ("coconut", "Coconut"),
    ("cranberry", "Cranberry"),
    ("date", "Date"),
    ("dragonfruit", "Dragon Fruit"),
    ("fig", "Fig"),
    ("grape", "Grape"),
    ("grapefruit", "Grapefruit"),
    ("guava", "Guava"),
    ("kiwi", "Kiwi"),
    ("lemon", "Lemon"),
    ("lime", "Lime"),
    ("lychee", "Lychee"),
    ("mango", "Mango"),
    ("nectarine", "Nectarine"),
    ("orange", "Orange"),
    ("papaya", "Papaya"),
    ("passionfruit", "Passion Fruit"),
    ("peach", "Peach"),
    ("pear", "Pear"),
    ("pineapple", "Pineapple"),
    ("plum", "Plum"),
    ("pomegranate", "Pomegranate"),
    ("raspberry", "Raspberry"),
    ("strawberry", "Strawberry"),
    ("tangerine", "Tangerine"),
    ("watermelon", "Watermelon"),
];

/// Fixed, ordered list of suggestions
///
/// Built once at startup and never mutated afterwards. Construction
/// checks that every id is lowercase and unique and that no value is blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceList {
    entries: Vec<Suggestion>,
}

impl SourceList {
    /// Validate and wrap the given entries, keeping their order
    pub fn new(entries: Vec<Suggestion>) -> Result<Self, TypeaheadError> {
        let mut seen = HashSet::with_capacity(entries.len());

        for entry in &entries {
            if entry.id.is_empty() || entry.id != entry.id.to_lowercase() {
                return Err(TypeaheadError::InvalidId(entry.id.clone()));
            }
            if entry.value.trim().is_empty() {
                return Err(TypeaheadError::EmptyValue(entry.id.clone()));
            }
            if !seen.insert(entry.id.as_str()) {
                return Err(TypeaheadError::DuplicateId(entry.id.clone()));
            }
        }

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[Suggestion] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SourceList {
    fn default() -> Self {
        // The built-in table satisfies every invariant checked in new()
        Self {
            entries: DEFAULT_ENTRIES
                .iter()
                .map(|(id, value)| Suggestion::new(*id, *value))
                .collect(),
        }
    }
}

#[cfg(test)]
#[path = "suggestion_tests.rs"]
mod suggestion_tests;
