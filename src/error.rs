//! Error types for the Blink invoice SDK.
//!
//! This module contains error types used throughout the SDK for configuration
//! and credential validation errors.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. A missing credential is a configuration error, not a
//! retryable condition.
//!
//! # Example
//!
//! ```rust
//! use blink_invoice::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration and credential resolution.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API key cannot be empty.
    #[error("API key cannot be empty. Please provide a valid Blink API key.")]
    EmptyApiKey,

    /// API key does not have the expected shape.
    #[error("Invalid API key: {reason}. Expected format: 'blink_' followed by letters, digits or underscores.")]
    InvalidApiKey {
        /// Why the key was rejected.
        reason: &'static str,
    },

    /// No credential was found in either source.
    #[error("BLINK_API_KEY not found. Set it in the environment or in {profile}.")]
    CredentialNotFound {
        /// Display form of the fallback profile path that was searched.
        profile: String,
    },

    /// Endpoint URL is invalid.
    #[error("Invalid API endpoint '{url}'. Please provide an http(s) URL (e.g., 'https://api.blink.sv/graphql').")]
    InvalidEndpoint {
        /// The invalid URL that was provided.
        url: String,
    },
}
