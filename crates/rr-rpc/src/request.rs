//! Incoming request payload.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A decoded launcher request.
///
/// All fields may be omitted on the wire; a bare `{}` decodes to an empty
/// method with no parameters, which dispatch then rejects by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginRequest {
    /// Method name; only `query` is implemented.
    #[serde(default)]
    pub method: String,
    /// Positional parameters; the query text is the first entry.
    #[serde(default)]
    pub parameters: Vec<Value>,
    /// User settings overrides keyed by setting name.
    #[serde(default)]
    pub settings: Map<String, Value>,
}

impl PluginRequest {
    /// Build a `query` request.
    pub fn query(text: &str, settings: Map<String, Value>) -> Self {
        Self {
            method: "query".to_string(),
            parameters: vec![Value::String(text.to_string())],
            settings,
        }
    }

    /// The query text: the first parameter rendered as a string.
    ///
    /// A missing or non-string first parameter reads as the empty query,
    /// which performs the configured default roll.
    pub fn query_text(&self) -> &str {
        self.parameters
            .first()
            .and_then(Value::as_str)
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decode_full_request() {
        let raw = r#"{"method":"query","parameters":["5 10"],"settings":{"default_to":20}}"#;
        let request: PluginRequest = serde_json::from_str(raw).unwrap();
        assert_eq!(request.method, "query");
        assert_eq!(request.query_text(), "5 10");
        assert_eq!(request.settings.get("default_to"), Some(&json!(20)));
    }

    #[test]
    fn omitted_fields_default() {
        let request: PluginRequest = serde_json::from_str(r#"{"method":"query"}"#).unwrap();
        assert!(request.parameters.is_empty());
        assert!(request.settings.is_empty());
        assert_eq!(request.query_text(), "");
    }

    #[test]
    fn non_string_parameter_reads_as_empty_query() {
        let request: PluginRequest =
            serde_json::from_str(r#"{"method":"query","parameters":[42]}"#).unwrap();
        assert_eq!(request.query_text(), "");
    }

    #[test]
    fn query_constructor_round_trips() {
        let request = PluginRequest::query("20", Map::new());
        let raw = serde_json::to_string(&request).unwrap();
        let back: PluginRequest = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, request);
        assert_eq!(back.query_text(), "20");
    }
}
