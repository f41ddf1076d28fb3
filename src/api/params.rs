//! Filter parameters for the listing endpoints

use crate::http::RequestConfig;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Filter parameters that can be bound to a listing call
pub trait ListParams: Send + Sync {
    /// Add this filter's query parameters to a request
    fn apply(&self, request: RequestConfig) -> RequestConfig;
}

impl ListParams for () {
    fn apply(&self, request: RequestConfig) -> RequestConfig {
        request
    }
}

/// Sort order for media listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaSort {
    /// Ascending identifier (the cursor order)
    #[default]
    Id,
    /// Most stories first
    NumStories,
}

impl MediaSort {
    /// Query parameter value
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::NumStories => "num_stories",
        }
    }
}

/// A set of tag ids of which a media source must carry at least one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagGroup(pub Vec<u64>);

impl TagGroup {
    /// Render as a search clause, `None` for an empty group
    fn clause(&self) -> Option<String> {
        if self.0.is_empty() {
            return None;
        }
        let ids: Vec<String> = self.0.iter().map(u64::to_string).collect();
        Some(format!("tags_id_media:({})", ids.join(" OR ")))
    }
}

impl FromStr for TagGroup {
    type Err = String;

    /// Parse a comma-separated list of tag ids, e.g. `34412118,34412282`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.parse::<u64>()
                    .map_err(|e| format!("invalid tag id '{part}': {e}"))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(TagGroup)
    }
}

impl fmt::Display for TagGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ids: Vec<String> = self.0.iter().map(u64::to_string).collect();
        f.write_str(&ids.join(","))
    }
}

/// Filters for the media listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaListParams {
    /// Case-insensitive substring of the source name
    pub name: Option<String>,
    /// Tag groups: a source must match every group, and any tag within one
    pub tag_groups: Vec<TagGroup>,
    /// Sort order
    pub sort: Option<MediaSort>,
}

impl MediaListParams {
    /// Filter by name substring
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Require at least one of the given tags
    #[must_use]
    pub fn any_of_tags(mut self, tags_ids: impl IntoIterator<Item = u64>) -> Self {
        self.tag_groups.push(TagGroup(tags_ids.into_iter().collect()));
        self
    }

    /// Set the sort order
    #[must_use]
    pub fn sort(mut self, sort: MediaSort) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Search clause combining the tag groups, `None` without tag filters
    pub fn tags_query(&self) -> Option<String> {
        let clauses: Vec<String> = self.tag_groups.iter().filter_map(TagGroup::clause).collect();
        if clauses.is_empty() {
            None
        } else {
            Some(clauses.join(" AND "))
        }
    }
}

impl ListParams for MediaListParams {
    fn apply(&self, request: RequestConfig) -> RequestConfig {
        request
            .query_opt("name", self.name.as_deref())
            .query_opt("q", self.tags_query())
            .query_opt("sort", self.sort.map(MediaSort::as_str))
    }
}

/// Filters for the feed listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedListParams {
    /// Owning media source
    pub media_id: u64,
}

impl ListParams for FeedListParams {
    fn apply(&self, request: RequestConfig) -> RequestConfig {
        request.query("media_id", self.media_id.to_string())
    }
}

/// Filters for the tag listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagListParams {
    /// Owning tag set
    pub tag_sets_id: u64,
}

impl ListParams for TagListParams {
    fn apply(&self, request: RequestConfig) -> RequestConfig {
        request.query("tag_sets_id", self.tag_sets_id.to_string())
    }
}
