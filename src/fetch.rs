//! Suggestion fetching off the UI thread

mod backend;
mod worker;

pub use backend::Backend;
pub use worker::{FetchResponse, FetchWorker, spawn_worker};
