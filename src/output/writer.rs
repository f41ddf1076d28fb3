//! CSV file writer
//!
//! Writes flattened records as delimited text with a header row.

use super::fields::FieldSpec;
use crate::error::{Error, Result};
use crate::types::Record;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

/// Configuration for the CSV writer
#[derive(Debug, Clone)]
pub struct CsvWriterConfig {
    delimiter: u8,
    quote_all: bool,
}

impl Default for CsvWriterConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote_all: false,
        }
    }
}

impl CsvWriterConfig {
    /// Create a new config with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field delimiter
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Quote every cell instead of only those that need it
    #[must_use]
    pub fn quote_all(mut self, enabled: bool) -> Self {
        self.quote_all = enabled;
        self
    }

    /// Get the delimiter
    #[must_use]
    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }
}

/// Row-at-a-time CSV writer bound to a field spec
pub struct CsvWriter<'s, W: Write> {
    writer: csv::Writer<W>,
    spec: &'s FieldSpec,
    rows_written: usize,
}

impl<'s, W: Write> CsvWriter<'s, W> {
    /// Create a writer and emit the header row
    pub fn new(destination: W, spec: &'s FieldSpec, config: &CsvWriterConfig) -> Result<Self> {
        let quote_style = if config.quote_all {
            QuoteStyle::Always
        } else {
            QuoteStyle::Necessary
        };

        let mut writer = WriterBuilder::new()
            .delimiter(config.delimiter)
            .quote_style(quote_style)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(destination);

        writer
            .write_record(spec.header())
            .map_err(|e| Error::write(format!("Failed to write header: {e}")))?;

        Ok(Self {
            writer,
            spec,
            rows_written: 0,
        })
    }

    /// Write one record as a row
    pub fn write(&mut self, record: &Record) -> Result<()> {
        self.writer
            .write_record(self.spec.row(record))
            .map_err(|e| {
                Error::write(format!("Failed to write row {}: {e}", self.rows_written + 1))
            })?;

        self.rows_written += 1;
        Ok(())
    }

    /// Get the number of data rows written so far
    #[must_use]
    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Flush buffered rows, returning the data row count
    pub fn close(mut self) -> Result<usize> {
        self.writer
            .flush()
            .map_err(|e| Error::write(format!("Failed to flush CSV output: {e}")))?;
        Ok(self.rows_written)
    }
}

/// Write a header and one row per record to any sink.
///
/// Empty cells are written bare, except when a row consists of a single
/// empty cell: the `csv` crate writes that as `""` so the line is not read
/// back as a blank record.
pub fn write_rows<W: Write>(
    records: &[Record],
    spec: &FieldSpec,
    destination: W,
    config: Option<&CsvWriterConfig>,
) -> Result<usize> {
    let default_config = CsvWriterConfig::default();
    let config = config.unwrap_or(&default_config);

    let mut writer = CsvWriter::new(destination, spec, config)?;
    for record in records {
        writer.write(record)?;
    }
    writer.close()
}

/// Write records to a CSV file, creating parent directories.
///
/// The file is opened, written and closed within this call. A failure part
/// way through leaves the rows written so far in place.
pub fn write_rows_to_path(
    path: impl AsRef<Path>,
    records: &[Record],
    spec: &FieldSpec,
    config: Option<&CsvWriterConfig>,
) -> Result<usize> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            Error::write(format!("Failed to create directory {}: {e}", parent.display()))
        })?;
    }

    let file = File::create(path)
        .map_err(|e| Error::write(format!("Failed to create {}: {e}", path.display())))?;

    debug!(path = %path.display(), records = records.len(), "Writing CSV");
    let rows = write_rows(records, spec, file, config)?;
    info!(path = %path.display(), rows, "Export written");
    Ok(rows)
}
