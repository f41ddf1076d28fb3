//! Export configuration
//!
//! Everything the exporter needs from the outside world: where the API
//! lives, which environment variable holds the credential, how requests are
//! paced, where files go, and the well-known tag-set identifiers. Loaded
//! from YAML (JSON also parses) with every field defaulted; CLI flags
//! override file values.

use crate::auth::Location;
use crate::error::{Error, Result, ResultExt};
use crate::http::{HttpClientConfig, RateLimiterConfig};
use crate::types::BackoffType;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ============================================================================
// Top-Level Config
// ============================================================================

/// Complete export configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExportConfig {
    /// Base URL for API requests
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Environment variable holding the API credential
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// Where the credential is placed on each request
    #[serde(default)]
    pub auth_location: Location,

    /// Records requested per listing call
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Dotted path to the record array in object responses
    #[serde(default)]
    pub records_path: Option<String>,

    /// HTTP client configuration
    #[serde(default)]
    pub http: HttpConfig,

    /// Directory for exports when no explicit output path is given
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Well-known tag-set identifiers
    #[serde(default)]
    pub tag_sets: TagSets,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key_env: default_api_key_env(),
            auth_location: Location::default(),
            page_size: default_page_size(),
            records_path: None,
            http: HttpConfig::default(),
            output_dir: default_output_dir(),
            tag_sets: TagSets::default(),
        }
    }
}

fn default_base_url() -> String {
    "https://api.mediacloud.org".to_string()
}

fn default_api_key_env() -> String {
    "MC_API_KEY".to_string()
}

fn default_page_size() -> u32 {
    100
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

impl ExportConfig {
    /// Load configuration from a YAML or JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml_str(&content)
    }

    /// Parse configuration from a YAML string
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that serde cannot
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(Error::missing_field("base_url"));
        }
        url::Url::parse(&self.base_url)?;
        if self.api_key_env.trim().is_empty() {
            return Err(Error::missing_field("api_key_env"));
        }
        self.page_size()?;
        Ok(())
    }

    /// Page size as a positive integer
    pub fn page_size(&self) -> Result<NonZeroU32> {
        NonZeroU32::new(self.page_size)
            .ok_or_else(|| Error::config("page_size must be a positive integer"))
    }

    /// Build the HTTP client configuration
    pub fn http_config(&self) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder()
            .base_url(&self.base_url)
            .timeout(Duration::from_secs(self.http.timeout_seconds))
            .max_retries(self.http.max_retries)
            .backoff(
                self.http.backoff,
                Duration::from_millis(self.http.initial_backoff_ms),
                Duration::from_millis(self.http.max_backoff_ms),
            )
            .header("Accept", "application/json");

        if let Some(rps) = self.http.requests_per_second {
            builder = builder.rate_limit(RateLimiterConfig::per_second(rps));
        }

        builder.build()
    }
}

// ============================================================================
// HTTP Config
// ============================================================================

/// HTTP client settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HttpConfig {
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// Retries per request; 0 surfaces the first failure
    #[serde(default)]
    pub max_retries: u32,

    /// Backoff strategy between retries
    #[serde(default)]
    pub backoff: BackoffType,

    /// First retry delay in milliseconds
    #[serde(default = "default_initial_backoff_ms")]
    pub initial_backoff_ms: u64,

    /// Longest retry delay in milliseconds
    #[serde(default = "default_max_backoff_ms")]
    pub max_backoff_ms: u64,

    /// Client-side request pacing
    #[serde(default)]
    pub requests_per_second: Option<u32>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout(),
            max_retries: 0,
            backoff: BackoffType::default(),
            initial_backoff_ms: default_initial_backoff_ms(),
            max_backoff_ms: default_max_backoff_ms(),
            requests_per_second: None,
        }
    }
}

fn default_timeout() -> u64 {
    30
}

fn default_initial_backoff_ms() -> u64 {
    500
}

fn default_max_backoff_ms() -> u64 {
    60_000
}

// ============================================================================
// Tag Sets
// ============================================================================

/// Identifiers of the tag sets used to classify media sources
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TagSets {
    /// Curated collections of sources
    pub collections: u64,
    /// Country of publication
    pub pub_country: u64,
    /// State or province of publication
    pub pub_state: u64,
    /// Primary language
    pub primary_language: u64,
    /// Country the source mostly covers
    pub country_of_focus: u64,
    /// Media format (print, web, broadcast ...)
    pub media_format: u64,
}

impl Default for TagSets {
    fn default() -> Self {
        Self {
            collections: 5,
            pub_country: 1935,
            pub_state: 1962,
            primary_language: 1969,
            country_of_focus: 1970,
            media_format: 1972,
        }
    }
}

impl TagSets {
    /// Tag sets as `(name, id)` pairs in a stable order
    pub fn entries(&self) -> [(&'static str, u64); 6] {
        [
            ("collections", self.collections),
            ("pub_country", self.pub_country),
            ("pub_state", self.pub_state),
            ("primary_language", self.primary_language),
            ("country_of_focus", self.country_of_focus),
            ("media_format", self.media_format),
        ]
    }

    /// Look up a tag set id by name
    pub fn by_name(&self, name: &str) -> Option<u64> {
        self.entries()
            .into_iter()
            .find(|(entry, _)| *entry == name)
            .map(|(_, id)| id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_config_uses_defaults() {
        let config = ExportConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, ExportConfig::default());
        assert_eq!(config.base_url, "https://api.mediacloud.org");
        assert_eq!(config.api_key_env, "MC_API_KEY");
        assert_eq!(config.page_size().unwrap().get(), 100);
        assert_eq!(config.http.max_retries, 0);
    }

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
base_url: "http://localhost:8080"
api_key_env: MY_KEY
auth_location: query
page_size: 20
records_path: data.results
output_dir: exports
http:
  timeout_seconds: 5
  max_retries: 2
  backoff: constant
  requests_per_second: 4
tag_sets:
  collections: 6
"#;

        let config = ExportConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.api_key_env, "MY_KEY");
        assert_eq!(config.auth_location, Location::Query);
        assert_eq!(config.page_size, 20);
        assert_eq!(config.records_path.as_deref(), Some("data.results"));
        assert_eq!(config.output_dir, PathBuf::from("exports"));
        assert_eq!(config.http.backoff, BackoffType::Constant);
        assert_eq!(config.http.initial_backoff_ms, 500);
        assert_eq!(config.tag_sets.collections, 6);
        assert_eq!(config.tag_sets.pub_country, 1935);
    }

    #[test]
    fn test_json_config_parses() {
        let config = ExportConfig::from_yaml_str(r#"{"page_size": 7}"#).unwrap();
        assert_eq!(config.page_size, 7);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let err = ExportConfig::from_yaml_str("page_size: 0").unwrap_err();
        assert!(err.to_string().contains("page_size"));
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let err = ExportConfig::from_yaml_str("base_url: 'not a url'").unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)));
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(ExportConfig::from_yaml_str("page_sise: 10").is_err());
    }

    #[test]
    fn test_http_config_conversion() {
        let mut config = ExportConfig::default();
        config.http.max_retries = 3;
        config.http.requests_per_second = Some(2);
        config.http.timeout_seconds = 9;

        let http = config.http_config();
        assert_eq!(http.base_url.as_deref(), Some("https://api.mediacloud.org"));
        assert_eq!(http.max_retries, 3);
        assert_eq!(http.timeout, Duration::from_secs(9));
        assert_eq!(http.rate_limit, Some(RateLimiterConfig::new(2, 1)));
        assert_eq!(
            http.default_headers.get("Accept").map(String::as_str),
            Some("application/json")
        );
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mediapager.yaml");
        std::fs::write(&path, "page_size: 50\n").unwrap();

        let config = ExportConfig::load(&path).unwrap();
        assert_eq!(config.page_size, 50);

        let missing = ExportConfig::load(dir.path().join("nope.yaml")).unwrap_err();
        assert!(missing.to_string().starts_with("Failed to read config file"));
    }

    #[test]
    fn test_tag_sets_lookup() {
        let tag_sets = TagSets::default();
        assert_eq!(tag_sets.by_name("primary_language"), Some(1969));
        assert_eq!(tag_sets.by_name("unknown"), None);
        assert_eq!(tag_sets.entries().len(), 6);
    }
}
