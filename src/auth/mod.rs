//! Authentication for the Blink invoice SDK.
//!
//! Blink authenticates API calls with a static API key sent in the
//! `X-API-KEY` header. This module resolves that key; the HTTP client
//! attaches it.
//!
//! # Overview
//!
//! - [`CredentialResolver`]: Resolves an [`ApiKey`](crate::ApiKey) from an
//!   explicit override or a fallback profile file
//! - [`extract_profile_key`]: The profile-file pattern match on its own

mod credentials;

pub use credentials::{extract_profile_key, CredentialResolver, API_KEY_VAR};
