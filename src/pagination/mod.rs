//! Pagination module
//!
//! Cursor pagination over listing endpoints that resume from the identifier
//! of the last record seen.
//!
//! # Overview
//!
//! A listing call takes an optional cursor and a page size and returns one
//! page of records. The [`CursorPaginator`] starts with no cursor, feeds the
//! identifier of each page's last record into the next call, and stops at
//! the first empty page. Listing calls are either a [`ListOperation`]
//! implementation or a plain closure that already captures its filters.

mod cursor;
mod types;

pub use cursor::{CursorPaginator, DEFAULT_PAGE_SIZE};
pub use types::{ListOperation, PaginationState};
