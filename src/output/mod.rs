//! Output module
//!
//! Flattens records into rows and writes them as CSV.
//!
//! # Overview
//!
//! This module provides:
//! - [`Field`] descriptors, either copied directly from a record or derived
//!   from a nested path with a default
//! - [`FieldSpec`] ordered column lists, with presets for media, feed and
//!   tag exports
//! - [`CsvWriter`] and the [`write_rows`] / [`write_rows_to_path`] helpers
//!
//! Flattening never fails: missing keys, explicit nulls and non-object
//! intermediates all resolve to the field's default (or an empty cell).

mod fields;
mod writer;

pub use fields::{render_value, Field, FieldSpec};
pub use writer::{write_rows, write_rows_to_path, CsvWriter, CsvWriterConfig};
