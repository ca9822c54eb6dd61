pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod logging;
pub mod query;
pub mod server;
pub mod suggestion;
pub mod typeahead;
pub mod widgets;
