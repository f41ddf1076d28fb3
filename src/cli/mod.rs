//! CLI module
//!
//! Command-line interface for exporting listings to CSV.
//!
//! # Commands
//!
//! - `media` - Export media sources, optionally filtered by name and tags
//! - `feeds` - Export the feeds of one media source
//! - `tags` - Export the tags of one tag set
//! - `tag-sets` - Show the configured tag-set identifiers

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat, SortKey};
pub use runner::Runner;
