//! Credential resolution for Blink API calls.
//!
//! This module provides the [`CredentialResolver`], which produces a validated
//! [`ApiKey`] from an explicit override or from a `BLINK_API_KEY=...`
//! assignment in a fallback profile file.
//!
//! # Caching
//!
//! Results are not cached. Every call to [`CredentialResolver::resolve`]
//! re-reads its sources, so a client resolving once per request reads the
//! profile file once per request.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;

use crate::config::{ApiKey, BlinkConfig};
use crate::error::ConfigError;

/// Name of the credential variable, both in the environment and the profile.
pub const API_KEY_VAR: &str = "BLINK_API_KEY";

const PROFILE_PATTERN: &str = r#"BLINK_API_KEY=["']?([a-zA-Z0-9_]+)["']?"#;

fn profile_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(PROFILE_PATTERN).ok()).as_ref()
}

/// Resolves the API key from an override or a fallback profile file.
///
/// # Example
///
/// ```rust
/// use blink_invoice::{BlinkConfig, CredentialResolver};
///
/// let config = BlinkConfig::builder()
///     .api_key("blink_abc123")
///     .without_profile()
///     .build();
///
/// let key = CredentialResolver::new(&config).resolve().unwrap();
/// assert_eq!(key.as_ref(), "blink_abc123");
/// ```
#[derive(Clone, Debug)]
pub struct CredentialResolver {
    override_key: Option<String>,
    profile_path: Option<PathBuf>,
}

impl CredentialResolver {
    /// Creates a resolver from the sources named in `config`.
    #[must_use]
    pub fn new(config: &BlinkConfig) -> Self {
        Self {
            override_key: config.api_key().map(str::to_string),
            profile_path: config.profile_path().map(Path::to_path_buf),
        }
    }

    /// Resolves the credential.
    ///
    /// The override wins when present and non-empty. Otherwise the profile
    /// file is searched; a missing or unreadable file counts as "no match".
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::CredentialNotFound`] when neither source
    /// yields a key, or [`ConfigError::InvalidApiKey`] when the found key does
    /// not have the expected shape.
    pub fn resolve(&self) -> Result<ApiKey, ConfigError> {
        if let Some(key) = self.override_key.as_deref().filter(|k| !k.is_empty()) {
            tracing::debug!("Using {} from explicit override", API_KEY_VAR);
            return ApiKey::new(key);
        }

        if let Some(key) = self.profile_path.as_deref().and_then(read_profile_key) {
            return ApiKey::new(key);
        }

        Err(ConfigError::CredentialNotFound {
            profile: self
                .profile_path
                .as_deref()
                .map_or_else(|| "~/.profile".to_string(), |p| p.display().to_string()),
        })
    }
}

fn read_profile_key(path: &Path) -> Option<String> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("Profile {} does not exist", path.display());
            return None;
        }
        Err(e) => {
            tracing::warn!("Could not read profile {}: {}", path.display(), e);
            return None;
        }
    };

    let key = extract_profile_key(&contents);
    if key.is_some() {
        tracing::debug!("Using {} from {}", API_KEY_VAR, path.display());
    }
    key
}

/// Extracts the first `BLINK_API_KEY=value` assignment from profile contents.
///
/// Surrounding single or double quotes are stripped and `export` prefixes
/// are tolerated.
#[must_use]
pub fn extract_profile_key(contents: &str) -> Option<String> {
    profile_pattern()?
        .captures(contents)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_profile(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_extract_plain_assignment() {
        assert_eq!(
            extract_profile_key("BLINK_API_KEY=blink_abc\n"),
            Some("blink_abc".to_string())
        );
    }

    #[test]
    fn test_extract_quoted_export_assignment() {
        let contents = "# shell setup\nexport PATH=$PATH:/opt/bin\nexport BLINK_API_KEY=\"blink_q1\"\n";
        assert_eq!(extract_profile_key(contents), Some("blink_q1".to_string()));

        let contents = "export BLINK_API_KEY='blink_q2'";
        assert_eq!(extract_profile_key(contents), Some("blink_q2".to_string()));
    }

    #[test]
    fn test_extract_first_match_wins() {
        let contents = "BLINK_API_KEY=blink_first\nBLINK_API_KEY=blink_second\n";
        assert_eq!(extract_profile_key(contents), Some("blink_first".to_string()));
    }

    #[test]
    fn test_extract_returns_none_without_assignment() {
        assert_eq!(extract_profile_key("export OTHER=1\n"), None);
        assert_eq!(extract_profile_key("BLINK_API_KEY=\n"), None);
    }

    #[test]
    fn test_override_wins_over_profile() {
        let profile = write_profile("BLINK_API_KEY=blink_fromprofile\n");
        let config = BlinkConfig::builder()
            .api_key("blink_fromoverride")
            .profile_path(profile.path())
            .build();

        let key = CredentialResolver::new(&config).resolve().unwrap();
        assert_eq!(key.as_ref(), "blink_fromoverride");
    }

    #[test]
    fn test_empty_override_falls_back_to_profile() {
        let profile = write_profile("export BLINK_API_KEY=blink_fromprofile\n");
        let config = BlinkConfig::builder()
            .api_key("")
            .profile_path(profile.path())
            .build();

        let key = CredentialResolver::new(&config).resolve().unwrap();
        assert_eq!(key.as_ref(), "blink_fromprofile");
    }

    #[test]
    fn test_missing_profile_is_not_an_error_until_both_sources_fail() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("no-such-profile");
        let config = BlinkConfig::builder().profile_path(&missing).build();

        let err = CredentialResolver::new(&config).resolve().unwrap_err();
        match err {
            ConfigError::CredentialNotFound { profile } => {
                assert!(profile.contains("no-such-profile"));
            }
            other => panic!("Expected CredentialNotFound, got: {other:?}"),
        }
    }

    #[test]
    fn test_malformed_override_is_rejected() {
        let config = BlinkConfig::builder()
            .api_key("not-a-blink-key")
            .without_profile()
            .build();

        assert!(matches!(
            CredentialResolver::new(&config).resolve(),
            Err(ConfigError::InvalidApiKey { .. })
        ));
    }

    #[test]
    fn test_resolve_rereads_profile_each_call() {
        let profile = write_profile("BLINK_API_KEY=blink_one\n");
        let config = BlinkConfig::builder().profile_path(profile.path()).build();
        let resolver = CredentialResolver::new(&config);

        assert_eq!(resolver.resolve().unwrap().as_ref(), "blink_one");

        std::fs::write(profile.path(), "BLINK_API_KEY=blink_two\n").unwrap();

        assert_eq!(resolver.resolve().unwrap().as_ref(), "blink_two");
    }
}
