//! The GraphQL response envelope.

use serde::{Deserialize, Serialize};

/// A single GraphQL error entry.
///
/// Used both for top-level `errors` and for the application-level error
/// lists Blink embeds in mutation payloads (`{ code, message, path }`).
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct GraphqlErrorEntry {
    /// Human-readable message.
    pub message: String,
    /// Machine-readable code, when the server supplies one at the top level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Path to the field that failed. Segments are strings or list indices.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<serde_json::Value>>,
    /// Extension data, where most GraphQL servers place `code`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<serde_json::Value>,
}

impl GraphqlErrorEntry {
    /// Creates an entry carrying only a message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
            path: None,
            extensions: None,
        }
    }

    /// Returns the error code from `code` or, failing that, `extensions.code`.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref().or_else(|| {
            self.extensions
                .as_ref()
                .and_then(|ext| ext.get("code"))
                .and_then(serde_json::Value::as_str)
        })
    }
}

/// The `{ data, errors }` envelope of every GraphQL response.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct GraphqlResponse {
    /// The operation result; `None` when absent or `null`.
    #[serde(default)]
    pub data: Option<serde_json::Value>,
    /// Top-level errors; `None` when absent or `null`.
    #[serde(default)]
    pub errors: Option<Vec<GraphqlErrorEntry>>,
}

impl GraphqlResponse {
    /// Returns the top-level errors, or an empty slice.
    #[must_use]
    pub fn errors(&self) -> &[GraphqlErrorEntry] {
        self.errors.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_code_prefers_top_level_then_extensions() {
        let entry: GraphqlErrorEntry = serde_json::from_value(json!({
            "message": "Not authorized",
            "extensions": { "code": "NOT_AUTHORIZED" }
        }))
        .unwrap();
        assert_eq!(entry.code(), Some("NOT_AUTHORIZED"));

        let entry: GraphqlErrorEntry = serde_json::from_value(json!({
            "message": "Invalid amount",
            "code": "INVALID_INPUT",
            "path": ["input", "amount"]
        }))
        .unwrap();
        assert_eq!(entry.code(), Some("INVALID_INPUT"));
        assert_eq!(entry.path, Some(vec![json!("input"), json!("amount")]));
    }

    #[test]
    fn test_envelope_tolerates_null_fields() {
        let response: GraphqlResponse =
            serde_json::from_value(json!({ "data": null, "errors": null })).unwrap();
        assert!(response.data.is_none());
        assert!(response.errors().is_empty());

        let response: GraphqlResponse = serde_json::from_value(json!({})).unwrap();
        assert!(response.data.is_none());
        assert!(response.errors().is_empty());
    }

    #[test]
    fn test_envelope_keeps_data_alongside_errors() {
        let response: GraphqlResponse = serde_json::from_value(json!({
            "data": { "me": null },
            "errors": [{ "message": "boom", "path": ["me", 0] }]
        }))
        .unwrap();
        assert!(response.data.is_some());
        assert_eq!(response.errors().len(), 1);
        assert_eq!(response.errors()[0].message, "boom");
    }
}
