//! Pagination types and traits
//!
//! Defines the listing abstraction and the state tracked during traversal.

use crate::error::Result;
use crate::types::{Cursor, Page};
use async_trait::async_trait;
use std::num::NonZeroU32;

/// Tracks pagination state during iteration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationState {
    /// Cursor for the next request (`None` before the first page)
    pub cursor: Option<Cursor>,
    /// Number of listing calls made, including the final empty one
    pub requests: u32,
    /// Total records fetched so far
    pub total_fetched: u64,
    /// Is pagination complete?
    pub done: bool,
}

impl PaginationState {
    /// Create a new pagination state
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that a listing call was made
    pub fn record_request(&mut self) {
        self.requests += 1;
    }

    /// Move past a non-empty page
    pub fn advance(&mut self, cursor: Cursor, count: usize) {
        self.cursor = Some(cursor);
        self.total_fetched += count as u64;
    }

    /// Mark pagination as complete
    pub fn mark_done(&mut self) {
        self.done = true;
    }
}

/// A cursor-paged listing endpoint.
///
/// Implementations must return records in a stable order for a fixed cursor
/// and parameters, with at most `rows` records per call. Failures propagate
/// to the paginator's caller unchanged.
#[async_trait]
pub trait ListOperation: Send + Sync {
    /// Filter parameters bound to each call
    type Params: Send + Sync;

    /// Record field whose value resumes the listing
    fn cursor_field(&self) -> &str;

    /// Fetch the page that follows `cursor`
    async fn list(
        &self,
        cursor: Option<&Cursor>,
        rows: NonZeroU32,
        params: &Self::Params,
    ) -> Result<Page>;
}
