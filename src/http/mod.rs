//! HTTP client module
//!
//! Provides the HTTP client used by the listing API bindings.
//!
//! # Features
//!
//! - **Fail Fast**: errors surface on the first failure unless retries are enabled
//! - **Optional Retries**: constant, linear and exponential backoff
//! - **Rate Limiting**: token bucket rate limiter using governor
//! - **Authentication**: integration with the auth module

mod client;
mod rate_limit;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig};
pub use rate_limit::{RateLimiter, RateLimiterConfig};
