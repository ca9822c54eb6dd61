//! Substring lookup over the source list
//!
//! The service is a pure read of static data: the same query always
//! yields the same answer, and no input is treated as an error.

use std::sync::Arc;

use crate::suggestion::{SourceList, Suggestion};

/// Maximum number of suggestions returned for one query
pub const MAX_RESULTS: usize = 10;

#[derive(Debug, Clone, Default)]
pub struct QueryService {
    source: Arc<SourceList>,
}

impl QueryService {
    pub fn new(source: SourceList) -> Self {
        Self {
            source: Arc::new(source),
        }
    }

    pub fn source(&self) -> &SourceList {
        &self.source
    }

    /// Return up to [`MAX_RESULTS`] entries whose value contains the query
    ///
    /// Matching is case-insensitive on the trimmed query. A missing or
    /// blank query yields an empty list without scanning. Results keep
    /// the relative order of the source list.
    pub fn search(&self, query: Option<&str>) -> Vec<Suggestion> {
        let needle = normalize_query(query.unwrap_or_default());
        if needle.is_empty() {
            return Vec::new();
        }

        self.source
            .entries()
            .iter()
            .filter(|s| s.value.to_lowercase().contains(&needle))
            .take(MAX_RESULTS)
            .cloned()
            .collect()
    }
}

fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod service_tests;
