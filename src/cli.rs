//! Command-line interface

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "typeahead", version, about = "Debounced typeahead search over a fixed suggestion list")]
pub struct Cli {
    /// Config file (defaults to ~/.config/typeahead/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP query endpoint
    Serve {
        /// Address to bind, e.g. 127.0.0.1:3000
        #[arg(long)]
        addr: Option<String>,
    },
    /// Run one search and print the matches as JSON
    Query {
        /// Text to search for; omitted means an empty query
        text: Option<String>,
    },
    /// Open the interactive typeahead and print the selection as JSON
    Pick {
        /// Search endpoint URL; searches in-process when omitted
        #[arg(long)]
        endpoint: Option<String>,
    },
}
