//! Cursor pagination driver

use super::types::{ListOperation, PaginationState};
use crate::error::{Error, Result};
use crate::types::{Cursor, Page, Record};
use std::future::Future;
use std::num::NonZeroU32;
use std::ops::ControlFlow;
use tracing::debug;

/// Default number of records requested per call
pub const DEFAULT_PAGE_SIZE: NonZeroU32 = match NonZeroU32::new(100) {
    Some(size) => size,
    None => NonZeroU32::MIN,
};

/// Cursor-based pagination (e.g. `?last_media_id=1234&rows=100`)
///
/// Requests are strictly sequential: a page is fully received before the
/// next one is asked for, and each request after the first carries the
/// identifier of the previous page's last record.
#[derive(Debug, Clone)]
pub struct CursorPaginator {
    /// Record field holding the identifier used as the cursor
    pub cursor_field: String,
    /// Maximum records per listing call
    pub page_size: NonZeroU32,
    /// Stop once this many records are collected
    pub max_records: Option<usize>,
}

impl CursorPaginator {
    /// Create a new cursor paginator
    pub fn new(cursor_field: impl Into<String>, page_size: NonZeroU32) -> Self {
        Self {
            cursor_field: cursor_field.into(),
            page_size,
            max_records: None,
        }
    }

    /// Create a paginator for a listing operation's cursor field
    pub fn for_operation<L: ListOperation + ?Sized>(operation: &L, page_size: NonZeroU32) -> Self {
        Self::new(operation.cursor_field(), page_size)
    }

    /// Cap the number of records collected
    #[must_use]
    pub fn with_max_records(mut self, max_records: Option<usize>) -> Self {
        self.max_records = max_records;
        self
    }

    /// Fetch every record reachable from an operation with bound parameters
    pub async fn fetch_all<L>(&self, operation: &L, params: &L::Params) -> Result<Vec<Record>>
    where
        L: ListOperation + ?Sized,
    {
        self.fetch_all_with(move |cursor: Option<Cursor>, rows| async move {
            operation.list(cursor.as_ref(), rows, params).await
        })
        .await
    }

    /// Fetch every record using a listing closure.
    ///
    /// The closure receives the current cursor (absent on the first call) and
    /// the page size. Records come back in server order. A record cap of zero
    /// returns without calling the closure.
    pub async fn fetch_all_with<F, Fut>(&self, list_fn: F) -> Result<Vec<Record>>
    where
        F: FnMut(Option<Cursor>, NonZeroU32) -> Fut,
        Fut: Future<Output = Result<Page>>,
    {
        let mut records = Vec::new();
        let max_records = self.max_records;
        if max_records == Some(0) {
            debug!(cursor_field = %self.cursor_field, "Record cap is zero, nothing to fetch");
            return Ok(records);
        }

        self.for_each_page(list_fn, |page| {
            records.extend(page);
            match max_records {
                Some(max) if records.len() >= max => {
                    records.truncate(max);
                    ControlFlow::Break(())
                }
                _ => ControlFlow::Continue(()),
            }
        })
        .await?;

        Ok(records)
    }

    /// Drive the listing, handing each non-empty page to `visit`.
    ///
    /// Returning `ControlFlow::Break` from `visit` stops before the next
    /// request. The final state is returned; `done` is only set when an empty
    /// page ended the traversal.
    pub async fn for_each_page<F, Fut, V>(
        &self,
        mut list_fn: F,
        mut visit: V,
    ) -> Result<PaginationState>
    where
        F: FnMut(Option<Cursor>, NonZeroU32) -> Fut,
        Fut: Future<Output = Result<Page>>,
        V: FnMut(Page) -> ControlFlow<()>,
    {
        let mut state = PaginationState::new();

        loop {
            state.record_request();
            let page = list_fn(state.cursor.clone(), self.page_size).await?;

            if page.is_empty() {
                debug!(
                    cursor_field = %self.cursor_field,
                    requests = state.requests,
                    total = state.total_fetched,
                    "Empty page, pagination complete"
                );
                state.mark_done();
                return Ok(state);
            }

            let next = page
                .last()
                .and_then(|record| record.cursor(&self.cursor_field))
                .ok_or_else(|| Error::malformed_page(&self.cursor_field, state.requests))?;

            debug!(
                cursor_field = %self.cursor_field,
                page = state.requests,
                records = page.len(),
                next_cursor = %next,
                "Fetched page"
            );
            state.advance(next, page.len());

            if visit(page).is_break() {
                debug!(
                    total = state.total_fetched,
                    "Pagination stopped early by caller"
                );
                return Ok(state);
            }
        }
    }
}
