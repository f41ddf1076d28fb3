//! Authentication module
//!
//! Supports: API Key (header or query parameter) and Bearer tokens.
//!
//! The listing API takes a single credential. It is read from the process
//! environment once, when the client is built; a missing credential is kept
//! as [`AuthConfig::Missing`] so that the first remote call fails with an
//! auth error instead of the client refusing to build.

mod authenticator;
mod types;

pub use authenticator::Authenticator;
pub use types::{AuthConfig, Location};

#[cfg(test)]
mod tests;
