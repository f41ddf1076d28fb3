// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]

//! # mediapager
//!
//! Cursor-paged export of media sources, feeds and tags from a
//! media-indexing listing API to CSV.
//!
//! ## Features
//!
//! - **Generic cursor pagination**: one driver for every listing endpoint,
//!   strictly sequential, stopping on the first empty page
//! - **Typed endpoint bindings**: media, feed and tag listings with their
//!   filter parameters
//! - **CSV export**: ordered column specs with nested lookups flattened
//!   into plain cells
//! - **Injected configuration**: base URL, credential variable, page size
//!   and tag-set ids all come from config, never globals
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use mediapager::api::{ApiClient, FeedListParams};
//! use mediapager::config::ExportConfig;
//! use mediapager::output::{write_rows_to_path, FieldSpec};
//! use mediapager::pagination::CursorPaginator;
//!
//! #[tokio::main]
//! async fn main() -> mediapager::Result<()> {
//!     let config = ExportConfig::default();
//!     let api = ApiClient::from_config(&config)?;
//!
//!     let feeds = api.feeds();
//!     let records = CursorPaginator::for_operation(&feeds, config.page_size()?)
//!         .fetch_all(&feeds, &FeedListParams { media_id: 1 })
//!         .await?;
//!
//!     write_rows_to_path("feeds-1.csv", &records, &FieldSpec::feeds(), None)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                  CLI (media / feeds / tags)                  │
//! └──────────────────────────────────────────────────────────────┘
//!                               │
//! ┌──────────┬───────────┬──────┴────────┬───────────┬───────────┐
//! │  Config  │   API     │   Paginate    │   Output  │   HTTP    │
//! ├──────────┼───────────┼───────────────┼───────────┼───────────┤
//! │ YAML     │ Media     │ Cursor        │ FieldSpec │ Auth      │
//! │ Env key  │ Feeds     │ Early stop    │ CSV       │ Rate limit│
//! │ Tag sets │ Tags      │ Max records   │           │ Retry     │
//! └──────────┴───────────┴───────────────┴───────────┴───────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Authentication
pub mod auth;

/// HTTP client with optional retry and rate limiting
pub mod http;

/// Cursor pagination
pub mod pagination;

/// Field specs and CSV output
pub mod output;

/// Listing endpoint bindings
pub mod api;

/// Export configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use api::{ApiClient, Listing};
pub use config::ExportConfig;
pub use output::{write_rows, write_rows_to_path, Field, FieldSpec};
pub use pagination::{CursorPaginator, ListOperation};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
