use thiserror::Error;

/// Custom error types for typeahead
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TypeaheadError {
    #[error("Duplicate suggestion id: {0}")]
    DuplicateId(String),

    #[error("Suggestion '{0}' has an empty value")]
    EmptyValue(String),

    #[error("Invalid suggestion id '{0}': ids must be non-empty and lowercase")]
    InvalidId(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("IO error: {0}")]
    Io(String),
}

impl From<std::io::Error> for TypeaheadError {
    fn from(err: std::io::Error) -> Self {
        TypeaheadError::Io(err.to_string())
    }
}

impl From<reqwest::Error> for TypeaheadError {
    fn from(err: reqwest::Error) -> Self {
        TypeaheadError::Http(err.to_string())
    }
}

impl From<toml::de::Error> for TypeaheadError {
    fn from(err: toml::de::Error) -> Self {
        TypeaheadError::Config(err.to_string())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
