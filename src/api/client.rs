//! Listing API client

use super::params::{FeedListParams, ListParams, MediaListParams, TagListParams};
use crate::auth::AuthConfig;
use crate::config::ExportConfig;
use crate::error::{Error, Result};
use crate::http::{HttpClient, RequestConfig};
use crate::pagination::ListOperation;
use crate::types::{Cursor, JsonValue, OptionStringExt, Page, Record};
use async_trait::async_trait;
use std::marker::PhantomData;
use std::num::NonZeroU32;
use tracing::{debug, warn};

/// Query parameter bounding the page size
const ROWS_PARAM: &str = "rows";

/// A cursor-paged listing endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    /// Path relative to the API base URL
    pub path: &'static str,
    /// Query parameter carrying the cursor
    pub cursor_param: &'static str,
    /// Record field the cursor is read from
    pub cursor_field: &'static str,
}

/// Media source listing
pub const MEDIA: Endpoint = Endpoint {
    path: "api/v2/media/list",
    cursor_param: "last_media_id",
    cursor_field: "media_id",
};

/// Feed listing
pub const FEEDS: Endpoint = Endpoint {
    path: "api/v2/feeds/list",
    cursor_param: "last_feeds_id",
    cursor_field: "feeds_id",
};

/// Tag listing
pub const TAGS: Endpoint = Endpoint {
    path: "api/v2/tags/list",
    cursor_param: "last_tags_id",
    cursor_field: "tags_id",
};

/// Client for the listing endpoints
#[derive(Debug)]
pub struct ApiClient {
    http: HttpClient,
    records_path: Vec<String>,
}

impl ApiClient {
    /// Wrap an HTTP client whose base URL points at the API
    pub fn new(http: HttpClient) -> Self {
        Self {
            http,
            records_path: Vec::new(),
        }
    }

    /// Build a client from configuration, reading the credential from the
    /// configured environment variable
    pub fn from_config(config: &ExportConfig) -> Result<Self> {
        let auth = AuthConfig::from_env(&config.api_key_env, config.auth_location);
        if !auth.has_credential() {
            warn!(
                variable = %config.api_key_env,
                "No API credential set, requests will fail authentication"
            );
        }

        let http = HttpClient::with_auth(config.http_config(), auth)?;
        let client = Self::new(http);
        Ok(match config.records_path.clone().none_if_empty() {
            Some(path) => client.with_records_path(&path),
            None => client,
        })
    }

    /// Read records from a dotted path inside an object response
    /// (e.g. `data.results`) instead of a bare array
    #[must_use]
    pub fn with_records_path(mut self, path: &str) -> Self {
        self.records_path = path
            .split('.')
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();
        self
    }

    /// Media source listing
    pub fn media(&self) -> Listing<'_, MediaListParams> {
        Listing::new(self, MEDIA)
    }

    /// Feed listing
    pub fn feeds(&self) -> Listing<'_, FeedListParams> {
        Listing::new(self, FEEDS)
    }

    /// Tag listing
    pub fn tags(&self) -> Listing<'_, TagListParams> {
        Listing::new(self, TAGS)
    }

    /// Fetch one page from an endpoint
    pub async fn list_page(
        &self,
        endpoint: &Endpoint,
        cursor: Option<&Cursor>,
        rows: NonZeroU32,
        filters: &dyn ListParams,
    ) -> Result<Page> {
        let request = filters
            .apply(RequestConfig::new())
            .query(ROWS_PARAM, rows.to_string())
            .query_opt(endpoint.cursor_param, cursor.map(Cursor::as_str));

        debug!(
            endpoint = endpoint.path,
            cursor = cursor.map_or("", Cursor::as_str),
            rows = rows.get(),
            "Listing page"
        );

        let body: JsonValue = self.http.get_json_with_config(endpoint.path, request).await?;
        self.decode_page(body)
    }

    /// Turn a response body into a page of records
    pub fn decode_page(&self, body: JsonValue) -> Result<Page> {
        let mut items = body;
        for key in &self.records_path {
            items = match items {
                JsonValue::Object(mut map) => map.remove(key).ok_or_else(|| {
                    Error::decode(format!("response has no '{key}' field"))
                })?,
                _ => {
                    return Err(Error::decode(format!(
                        "cannot read '{key}' from a non-object response"
                    )))
                }
            };
        }

        match items {
            JsonValue::Array(values) => values.into_iter().map(Record::try_from).collect(),
            JsonValue::Null => Ok(Page::new()),
            _ => Err(Error::decode("expected a JSON array of records")),
        }
    }
}

/// A listing endpoint bound to a client
#[derive(Debug)]
pub struct Listing<'a, P> {
    client: &'a ApiClient,
    endpoint: Endpoint,
    _params: PhantomData<fn(&P)>,
}

impl<'a, P> Listing<'a, P> {
    fn new(client: &'a ApiClient, endpoint: Endpoint) -> Self {
        Self {
            client,
            endpoint,
            _params: PhantomData,
        }
    }

    /// The endpoint this listing calls
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }
}

#[async_trait]
impl<'a, P: ListParams> ListOperation for Listing<'a, P> {
    type Params = P;

    fn cursor_field(&self) -> &str {
        self.endpoint.cursor_field
    }

    async fn list(&self, cursor: Option<&Cursor>, rows: NonZeroU32, params: &P) -> Result<Page> {
        self.client
            .list_page(&self.endpoint, cursor, rows, params)
            .await
    }
}
