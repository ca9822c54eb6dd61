pub mod service;

// Re-export public types
pub use service::{MAX_RESULTS, QueryService};
