//! Outgoing response documents in the launcher's result format.

use serde::{Deserialize, Serialize};

use rr_core::RollOutcome;

/// Icon shipped with the plugin package; resolving it is the host's concern.
pub const ICON_PATH: &str = "icon.png";

/// Callback the launcher invokes when the user accepts a result row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonRpcAction {
    /// Plugin method to call back into.
    pub method: String,
    /// Arguments for the callback.
    pub parameters: Vec<String>,
}

/// One row of the launcher result list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultItem {
    /// Headline shown in the launcher.
    #[serde(rename = "Title")]
    pub title: String,
    /// Second line shown under the title.
    #[serde(rename = "SubTitle")]
    pub subtitle: String,
    /// Icon path relative to the plugin directory.
    #[serde(rename = "IcoPath")]
    pub ico_path: String,
    /// Present only when the row is directly actionable.
    #[serde(rename = "JsonRPCAction", skip_serializing_if = "Option::is_none", default)]
    pub action: Option<JsonRpcAction>,
}

impl From<RollOutcome> for ResultItem {
    fn from(outcome: RollOutcome) -> Self {
        Self {
            title: outcome.title,
            subtitle: outcome.subtitle,
            ico_path: ICON_PATH.to_string(),
            action: outcome.action.map(|action| JsonRpcAction {
                method: action.method,
                parameters: action.parameters,
            }),
        }
    }
}

/// The top-level response document: a result list or a single error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PluginResponse {
    /// Successful query.
    Success {
        /// Result rows, exactly one in normal operation.
        result: Vec<ResultItem>,
    },
    /// Transport or protocol failure.
    Failure {
        /// Human-readable error description.
        error: String,
    },
}

impl PluginResponse {
    /// Wrap outcomes as a success document.
    pub fn success(outcomes: Vec<RollOutcome>) -> Self {
        Self::Success {
            result: outcomes.into_iter().map(ResultItem::from).collect(),
        }
    }

    /// Wrap a message as an error document.
    pub fn error(message: impl std::fmt::Display) -> Self {
        Self::Failure {
            error: message.to_string(),
        }
    }

    /// Encode to the single JSON document the transport emits.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| r#"{"error":"failed to encode response"}"#.to_string())
    }
}
