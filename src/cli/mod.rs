//! CLI module
//!
//! Command-line interface for browsing a collection.
//!
//! # Commands
//!
//! - `list` - Print the first page (or a page further on)
//! - `browse` - Interactive forward/back navigation and record creation
//! - `create` - Submit one record

mod commands;
mod runner;

pub use commands::{BrowseCommand, Cli, Commands};
pub use runner::Runner;
