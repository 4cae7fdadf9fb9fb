//! Settings overlay file.
//!
//! The launcher persists user settings next to the plugin as a JSON
//! object. The core never reads disk; this loader turns that file into the
//! override map `RollSettings::resolve` consumes. A missing file is an
//! empty overlay; a malformed one is a real error, since a human invoking
//! `rr roll --settings` wants to hear about a broken file rather than
//! silently rolling with defaults.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};
use thiserror::Error;

/// Errors loading the settings overlay file.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The file exists but could not be read.
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    /// The file content is not a JSON object.
    #[error("settings file is not a JSON object: {0}")]
    Malformed(String),
}

/// Load setting overrides from `path`.
pub fn load_overrides(path: &Path) -> Result<Map<String, Value>, StoreError> {
    if !path.exists() {
        return Ok(Map::new());
    }

    let content = fs::read_to_string(path)?;
    match serde_json::from_str::<Value>(&content) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(StoreError::Malformed(format!(
            "expected an object, got {other}"
        ))),
        Err(e) => Err(StoreError::Malformed(e.to_string())),
    }
}
