//! CLI commands and argument parsing

use crate::api::{MediaSort, TagGroup};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Export media sources, feeds and tags from the listing API to CSV
#[derive(Parser, Debug)]
#[command(name = "mediapager")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML or JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// API base URL (overrides the config file)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Environment variable holding the API key
    #[arg(long, global = true)]
    pub api_key_env: Option<String>,

    /// Records requested per page
    #[arg(long, global = true)]
    pub page_size: Option<u32>,

    /// Stop after this many records
    #[arg(long, global = true)]
    pub max_records: Option<usize>,

    /// Summary output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export media sources
    Media {
        /// Case-insensitive name substring
        #[arg(long)]
        name: Option<String>,

        /// Comma-separated tag ids, any of which must match; repeat to AND groups
        #[arg(long = "tags", value_name = "TAG_IDS")]
        tags: Vec<TagGroup>,

        /// Sort order
        #[arg(long, value_enum)]
        sort: Option<SortKey>,

        /// Output CSV path (default: <output_dir>/media.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export the feeds of one media source
    Feeds {
        /// Owning media source
        #[arg(long)]
        media_id: u64,

        /// Output CSV path (default: <output_dir>/feeds-<media_id>.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export the tags of one tag set
    Tags {
        /// Owning tag set
        #[arg(long)]
        tag_sets_id: u64,

        /// Output CSV path (default: <output_dir>/tags-<tag_sets_id>.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the configured tag-set identifiers
    TagSets,
}

/// Media sort order
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SortKey {
    /// Ascending media id
    Id,
    /// Most stories first
    NumStories,
}

impl From<SortKey> for MediaSort {
    fn from(key: SortKey) -> Self {
        match key {
            SortKey::Id => MediaSort::Id,
            SortKey::NumStories => MediaSort::NumStories,
        }
    }
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one message per line)
    Json,
    /// Human-readable output
    Pretty,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_media_with_tag_groups() {
        let cli = Cli::try_parse_from([
            "mediapager",
            "--page-size",
            "50",
            "media",
            "--name",
            "times",
            "--tags",
            "1,2",
            "--tags",
            "9",
            "--sort",
            "num-stories",
        ])
        .unwrap();

        assert_eq!(cli.page_size, Some(50));
        match cli.command {
            Commands::Media {
                name, tags, sort, ..
            } => {
                assert_eq!(name.as_deref(), Some("times"));
                assert_eq!(tags, vec![TagGroup(vec![1, 2]), TagGroup(vec![9])]);
                assert_eq!(sort.map(MediaSort::from), Some(MediaSort::NumStories));
            }
            other => panic!("Expected media command, got {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "mediapager",
            "feeds",
            "--media-id",
            "1",
            "--max-records",
            "10",
            "-v",
        ])
        .unwrap();

        assert!(cli.verbose);
        assert_eq!(cli.max_records, Some(10));
        assert!(matches!(cli.command, Commands::Feeds { media_id: 1, .. }));
    }

    #[test]
    fn test_bad_tag_id_rejected() {
        assert!(Cli::try_parse_from(["mediapager", "media", "--tags", "1,x"]).is_err());
    }

    #[test]
    fn test_feeds_requires_media_id() {
        assert!(Cli::try_parse_from(["mediapager", "feeds"]).is_err());
    }
}
