//! Auth configuration types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Location for API key placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    /// Place in the `Authorization` header as a bearer token
    #[default]
    Header,
    /// Place in a query parameter
    Query,
}

/// Default query parameter carrying the API key
pub const DEFAULT_KEY_PARAM: &str = "key";

/// Authentication configuration
#[derive(Clone, Default)]
pub enum AuthConfig {
    /// No authentication required
    #[default]
    None,

    /// API key sent as a query parameter
    ApiKey {
        /// Query parameter name
        query_param: String,
        /// The API key value
        value: String,
    },

    /// Bearer token authentication
    Bearer {
        /// The bearer token
        token: String,
    },

    /// A credential was required but could not be found
    Missing {
        /// Where the credential was looked up
        source: String,
    },
}

impl AuthConfig {
    /// Create bearer auth
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Bearer {
            token: token.into(),
        }
    }

    /// Create query parameter auth
    pub fn query_key(param: impl Into<String>, value: impl Into<String>) -> Self {
        Self::ApiKey {
            query_param: param.into(),
            value: value.into(),
        }
    }

    /// Build auth from an environment variable.
    ///
    /// An unset or blank variable yields [`AuthConfig::Missing`].
    pub fn from_env(var: &str, location: Location) -> Self {
        match std::env::var(var) {
            Ok(value) if !value.trim().is_empty() => {
                Self::from_credential(value.trim(), location)
            }
            _ => Self::Missing {
                source: format!("environment variable {var}"),
            },
        }
    }

    /// Build auth from a credential and its placement
    pub fn from_credential(value: impl Into<String>, location: Location) -> Self {
        match location {
            Location::Header => Self::bearer(value),
            Location::Query => Self::query_key(DEFAULT_KEY_PARAM, value),
        }
    }

    /// Whether a credential is configured
    pub fn has_credential(&self) -> bool {
        matches!(self, Self::ApiKey { .. } | Self::Bearer { .. })
    }
}

// Credentials never reach logs.
impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::ApiKey { query_param, .. } => f
                .debug_struct("ApiKey")
                .field("query_param", query_param)
                .field("value", &"<redacted>")
                .finish(),
            Self::Bearer { .. } => f
                .debug_struct("Bearer")
                .field("token", &"<redacted>")
                .finish(),
            Self::Missing { source } => f.debug_struct("Missing").field("source", source).finish(),
        }
    }
}

#[cfg(test)]
mod type_tests {
    use super::*;

    #[test]
    fn test_auth_config_default() {
        let config = AuthConfig::default();
        assert!(matches!(config, AuthConfig::None));
        assert!(!config.has_credential());
    }

    #[test]
    fn test_from_credential_placement() {
        assert!(matches!(
            AuthConfig::from_credential("k", Location::Header),
            AuthConfig::Bearer { .. }
        ));
        match AuthConfig::from_credential("k", Location::Query) {
            AuthConfig::ApiKey { query_param, value } => {
                assert_eq!(query_param, "key");
                assert_eq!(value, "k");
            }
            other => panic!("Expected ApiKey, got {other:?}"),
        }
    }

    #[test]
    fn test_from_env_missing() {
        let config = AuthConfig::from_env("MEDIAPAGER_TEST_UNSET_VARIABLE", Location::Header);
        assert!(matches!(config, AuthConfig::Missing { .. }));
        assert!(!config.has_credential());
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let rendered = format!("{:?}", AuthConfig::bearer("super-secret"));
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("redacted"));

        let rendered = format!("{:?}", AuthConfig::query_key("key", "another-secret"));
        assert!(!rendered.contains("another-secret"));
    }
}
