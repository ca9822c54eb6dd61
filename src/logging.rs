//! Logger setup
//!
//! The interactive picker owns the terminal, so it logs to a file;
//! every other command logs to stderr. `RUST_LOG` sets the level.

use std::fs::{self, File};
use std::path::PathBuf;

use env_logger::{Env, Target};

const LOG_DIR: &str = "typeahead";
const LOG_FILE: &str = "typeahead.log";

pub fn log_file_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|p| p.join(LOG_DIR).join(LOG_FILE))
}

pub fn init_stderr() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Stderr)
        .try_init();
}

/// Log to the cache-dir log file; logging is disabled if it cannot be opened
pub fn init_file() {
    let Some(path) = log_file_path() else {
        return;
    };
    if let Some(parent) = path.parent() {
        if fs::create_dir_all(parent).is_err() {
            return;
        }
    }
    let Ok(file) = File::create(&path) else {
        return;
    };

    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .target(Target::Pipe(Box::new(file)))
        .try_init();
}
