//! Effective roll settings and the overlay resolver.
//!
//! The launcher delivers user configuration as a loose JSON map. Resolution
//! overlays that map onto built-in defaults: unknown keys are ignored and a
//! value of the wrong shape falls back to the default for that key, so a
//! damaged settings store can never fail a query.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Which roll an empty query performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RollType {
    /// Roll a number in the configured default range.
    #[default]
    Number,
    /// Answer yes or no.
    YesNo,
    /// Pick one of the configured custom labels.
    CustomLabel,
}

impl RollType {
    /// Parse a roll type from a user-supplied string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().replace(['-', '_', '/'], " ").trim() {
            "number" => Some(Self::Number),
            "yes no" | "yesno" => Some(Self::YesNo),
            "custom" | "custom label" | "custom labels" | "labels" => Some(Self::CustomLabel),
            _ => None,
        }
    }
}

impl std::fmt::Display for RollType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number => write!(f, "Number"),
            Self::YesNo => write!(f, "Yes/No"),
            Self::CustomLabel => write!(f, "Custom Label"),
        }
    }
}

/// Whether a roll executes immediately or waits for an explicit trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RollMode {
    /// Draw immediately; the result row is directly actionable.
    #[default]
    Instant,
    /// Show a prompt describing the pending roll; the draw happens on a
    /// later trigger outside this crate.
    ClickToRoll,
}

impl RollMode {
    /// Parse a roll mode from a user-supplied string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().replace(['-', '_'], " ").trim() {
            "instant" => Some(Self::Instant),
            "click" | "click to roll" => Some(Self::ClickToRoll),
            _ => None,
        }
    }
}

impl std::fmt::Display for RollMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Instant => write!(f, "Instant"),
            Self::ClickToRoll => write!(f, "Click to Roll"),
        }
    }
}

/// The complete configuration a query is interpreted against.
///
/// Every field is present once resolved; there is no partial state. A
/// settings value lives for one request and is never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollSettings {
    /// Roll performed when the query is empty.
    pub default_roll_type: RollType,
    /// Lower bound of the default number roll.
    pub default_from: i64,
    /// Upper bound of the default number roll.
    pub default_to: i64,
    /// Label shown for an affirmative yes/no answer.
    pub yes_label: String,
    /// Label shown for a negative yes/no answer.
    pub no_label: String,
    /// Whitespace-separated labels for the custom-label roll.
    pub custom_labels: String,
    /// Instant roll or click-to-roll prompt.
    pub roll_mode: RollMode,
}

impl Default for RollSettings {
    fn default() -> Self {
        Self {
            default_roll_type: RollType::Number,
            default_from: 1,
            default_to: 6,
            yes_label: "Yes".to_string(),
            no_label: "No".to_string(),
            custom_labels: String::new(),
            roll_mode: RollMode::Instant,
        }
    }
}

impl RollSettings {
    /// Overlay caller-supplied overrides on the built-in defaults.
    ///
    /// Unknown keys are ignored. Integer settings also accept numeric
    /// strings, since the settings store round-trips through JSON edited
    /// by hand.
    pub fn resolve(overrides: &Map<String, Value>) -> Self {
        let mut settings = Self::default();

        if let Some(roll_type) = overrides
            .get("default_roll_type")
            .and_then(Value::as_str)
            .and_then(RollType::parse)
        {
            settings.default_roll_type = roll_type;
        }
        if let Some(from) = overrides.get("default_from").and_then(as_integer) {
            settings.default_from = from;
        }
        if let Some(to) = overrides.get("default_to").and_then(as_integer) {
            settings.default_to = to;
        }
        if let Some(yes) = overrides.get("yes_label").and_then(Value::as_str) {
            settings.yes_label = yes.to_string();
        }
        if let Some(no) = overrides.get("no_label").and_then(Value::as_str) {
            settings.no_label = no.to_string();
        }
        if let Some(labels) = overrides.get("custom_labels").and_then(Value::as_str) {
            settings.custom_labels = labels.to_string();
        }
        if let Some(mode) = overrides
            .get("roll_mode")
            .and_then(Value::as_str)
            .and_then(RollMode::parse)
        {
            settings.roll_mode = mode;
        }

        settings
    }

    /// The configured custom labels as a list.
    pub fn custom_label_list(&self) -> Vec<String> {
        self.custom_labels
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }

    /// Set the roll an empty query performs.
    pub fn with_roll_type(mut self, roll_type: RollType) -> Self {
        self.default_roll_type = roll_type;
        self
    }

    /// Set the default number range.
    pub fn with_range(mut self, from: i64, to: i64) -> Self {
        self.default_from = from;
        self.default_to = to;
        self
    }

    /// Set the yes/no answer labels.
    pub fn with_yes_no(mut self, yes: impl Into<String>, no: impl Into<String>) -> Self {
        self.yes_label = yes.into();
        self.no_label = no.into();
        self
    }

    /// Set the whitespace-separated custom labels.
    pub fn with_custom_labels(mut self, labels: impl Into<String>) -> Self {
        self.custom_labels = labels.into();
        self
    }

    /// Set the roll mode.
    pub fn with_roll_mode(mut self, mode: RollMode) -> Self {
        self.roll_mode = mode;
        self
    }
}

/// Integer settings sometimes arrive as JSON strings; accept both shapes.
fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
