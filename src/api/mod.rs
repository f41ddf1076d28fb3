//! Listing API bindings
//!
//! Binds the media, feed and tag listing endpoints to the paginator.
//!
//! Each endpoint is described by an [`Endpoint`]: its path, the query
//! parameter that carries the cursor, and the record field the cursor is
//! read from. [`ApiClient::media`], [`ApiClient::feeds`] and
//! [`ApiClient::tags`] return [`Listing`] values implementing
//! [`ListOperation`](crate::pagination::ListOperation).

mod client;
mod params;

pub use client::{ApiClient, Endpoint, Listing, FEEDS, MEDIA, TAGS};
pub use params::{FeedListParams, ListParams, MediaListParams, MediaSort, TagGroup, TagListParams};
