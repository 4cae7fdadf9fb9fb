//! Roll outcomes and the usage card.

use serde::{Deserialize, Serialize};

/// Title of the usage card shown for invalid or underspecified input.
pub const USAGE_TITLE: &str = "Random Roll Usage";

/// Fixed four-line syntax summary shown on the usage card.
pub const USAGE_SYNTAX: &str = "\
* roll: Random yes/no
* roll N: Random number 1 to N
* roll A B: Random number A to B
* roll a b c: Random pick among labels";

/// Follow-up action the launcher runs when the user accepts an outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeAction {
    /// Plugin method the launcher calls back into.
    pub method: String,
    /// Arguments for the callback.
    pub parameters: Vec<String>,
}

/// The result of interpreting one query.
///
/// An outcome with an action is directly usable (accepting it copies the
/// rolled text); one without is an informational prompt or the usage card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollOutcome {
    /// Headline of the result row.
    pub title: String,
    /// Supporting line under the title.
    pub subtitle: String,
    /// Present when the result is directly actionable.
    pub action: Option<OutcomeAction>,
}

impl RollOutcome {
    /// An actionable outcome: accepting it copies the title to the clipboard.
    pub fn actionable(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        let title = title.into();
        let action = OutcomeAction {
            method: "copy_to_clipboard".to_string(),
            parameters: vec![title.clone()],
        };
        Self {
            title,
            subtitle: subtitle.into(),
            action: Some(action),
        }
    }

    /// A non-actionable prompt describing a pending roll.
    pub fn prompt(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            action: None,
        }
    }

    /// The usage card, optionally prefixed with an error message.
    pub fn usage(error: Option<&str>) -> Self {
        let subtitle = match error {
            Some(message) => format!("{message}\n\n{USAGE_SYNTAX}"),
            None => USAGE_SYNTAX.to_string(),
        };
        Self {
            title: USAGE_TITLE.to_string(),
            subtitle,
            action: None,
        }
    }

    /// Whether accepting this outcome triggers an action.
    pub fn is_actionable(&self) -> bool {
        self.action.is_some()
    }
}
