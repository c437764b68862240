//! Configuration types for the Blink invoice SDK.
//!
//! This module provides the configuration object that is passed explicitly
//! into the credential resolver and the GraphQL client. The SDK never reads
//! process environment on its own; callers (such as the bundled CLI) map
//! environment variables into the builder.
//!
//! # Overview
//!
//! - [`BlinkConfig`]: The main configuration struct holding all SDK settings
//! - [`BlinkConfigBuilder`]: A builder for constructing [`BlinkConfig`] instances
//! - [`ApiKey`]: A validated API key newtype with masked debug output
//! - [`ApiEndpoint`]: A validated GraphQL endpoint URL
//!
//! # Credential Precedence
//!
//! 1. The explicit `api_key` override, used verbatim when non-empty
//! 2. A `BLINK_API_KEY=...` assignment in the fallback profile file
//!
//! # Example
//!
//! ```rust
//! use blink_invoice::{ApiEndpoint, BlinkConfig};
//!
//! let config = BlinkConfig::builder()
//!     .api_key("blink_abc123")
//!     .endpoint(ApiEndpoint::new("https://api.staging.blink.sv/graphql").unwrap())
//!     .build();
//!
//! assert_eq!(config.endpoint().host_name(), "api.staging.blink.sv");
//! ```

mod newtypes;

pub use newtypes::{ApiEndpoint, ApiKey};

use std::path::{Path, PathBuf};
use std::time::Duration;

/// Name of the profile file searched for a fallback credential.
pub const PROFILE_FILE_NAME: &str = ".profile";

/// Configuration for the Blink invoice SDK.
///
/// # Thread Safety
///
/// `BlinkConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct BlinkConfig {
    api_key: Option<String>,
    endpoint: ApiEndpoint,
    profile_path: Option<PathBuf>,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl BlinkConfig {
    /// Creates a new builder for constructing a `BlinkConfig`.
    #[must_use]
    pub fn builder() -> BlinkConfigBuilder {
        BlinkConfigBuilder::new()
    }

    /// Returns the explicit credential override, if any.
    ///
    /// An empty override counts as absent.
    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|key| !key.is_empty())
    }

    /// Returns the GraphQL endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &ApiEndpoint {
        &self.endpoint
    }

    /// Returns the fallback profile path, if one could be determined.
    #[must_use]
    pub fn profile_path(&self) -> Option<&Path> {
        self.profile_path.as_deref()
    }

    /// Returns the per-request timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

impl Default for BlinkConfig {
    fn default() -> Self {
        BlinkConfigBuilder::new().build()
    }
}

// Verify BlinkConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<BlinkConfig>();
};

/// Builder for constructing [`BlinkConfig`] instances.
///
/// # Defaults
///
/// - `api_key`: `None`
/// - `endpoint`: [`ApiEndpoint::DEFAULT`]
/// - `profile_path`: `~/.profile` (or `None` without a home directory)
/// - `timeout`: `None` (transport default)
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct BlinkConfigBuilder {
    api_key: Option<String>,
    endpoint: Option<ApiEndpoint>,
    profile_path: Option<Option<PathBuf>>,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl BlinkConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the explicit credential override.
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Sets the GraphQL endpoint.
    #[must_use]
    pub fn endpoint(mut self, endpoint: ApiEndpoint) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Overrides the fallback profile file.
    #[must_use]
    pub fn profile_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.profile_path = Some(Some(path.into()));
        self
    }

    /// Disables the fallback profile lookup entirely.
    #[must_use]
    pub fn without_profile(mut self) -> Self {
        self.profile_path = Some(None);
        self
    }

    /// Sets a timeout applied to each HTTP round trip.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`BlinkConfig`].
    ///
    /// Every field has a default, so building cannot fail; value validation
    /// happens in the newtypes passed to the builder.
    #[must_use]
    pub fn build(self) -> BlinkConfig {
        let profile_path = self
            .profile_path
            .unwrap_or_else(|| dirs::home_dir().map(|home| home.join(PROFILE_FILE_NAME)));

        BlinkConfig {
            api_key: self.api_key,
            endpoint: self.endpoint.unwrap_or_default(),
            profile_path,
            timeout: self.timeout,
            user_agent_prefix: self.user_agent_prefix,
        }
    }
}
