//! Tests for the auth module

use super::*;
use crate::error::Error;

#[test]
fn test_no_auth() {
    let auth = Authenticator::new(AuthConfig::None);
    let client = reqwest::Client::new();
    let req = client.get("https://example.com/api");

    let built = auth.apply(req).unwrap().build().unwrap();
    assert!(built.headers().get("Authorization").is_none());
    assert!(built.url().query().is_none());
}

#[test]
fn test_bearer_auth() {
    let auth = Authenticator::new(AuthConfig::bearer("my-token"));

    let client = reqwest::Client::new();
    let req = client.get("https://example.com/api");
    let built = auth.apply(req).unwrap().build().unwrap();

    assert_eq!(
        built.headers().get("Authorization").unwrap(),
        "Bearer my-token"
    );
}

#[test]
fn test_header_placement_is_bearer() {
    let auth = Authenticator::new(AuthConfig::from_credential("abc", Location::Header));

    let client = reqwest::Client::new();
    let req = client.get("https://example.com/api");
    let built = auth.apply(req).unwrap().build().unwrap();

    assert_eq!(built.headers().get("Authorization").unwrap(), "Bearer abc");
    assert!(built.url().query().is_none());
}

#[test]
fn test_query_placement_uses_key_param() {
    let auth = Authenticator::new(AuthConfig::from_credential("abc", Location::Query));

    let client = reqwest::Client::new();
    let req = client.get("https://example.com/api");
    let built = auth.apply(req).unwrap().build().unwrap();

    assert_eq!(built.url().query(), Some("key=abc"));
    assert!(built.headers().get("Authorization").is_none());
}

#[test]
fn test_api_key_query() {
    let auth = Authenticator::new(AuthConfig::query_key("key", "secret123"));

    let client = reqwest::Client::new();
    let req = client.get("https://example.com/api/v2/media/list?rows=10");
    let built = auth.apply(req).unwrap().build().unwrap();

    let query = built.url().query().unwrap();
    assert!(query.contains("key=secret123"));
    assert!(query.contains("rows=10"));
}

#[test]
fn test_missing_credential_fails_request() {
    let auth = Authenticator::new(AuthConfig::Missing {
        source: "environment variable MC_API_KEY".to_string(),
    });

    let client = reqwest::Client::new();
    let req = client.get("https://example.com/api");
    let err = auth.apply(req).unwrap_err();

    assert!(matches!(err, Error::Auth { .. }));
    assert!(err.to_string().contains("MC_API_KEY"));
}
