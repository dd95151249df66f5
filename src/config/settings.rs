//! Process-wide settings.
//!
//! Settings are read from the `settings` block of a configuration file
//! and published with [`Settings::apply`]. The only setting,
//! `track_performance`, gates the start/finish events emitted by
//! [`crate::graph::PerformanceLog`]. Algorithm results never depend on it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::atomic::{AtomicBool, Ordering};

use crate::graph::{GraphError, GraphResult};

/// Every attribute a settings block may set.
pub const SETTINGS_ATTRIBUTES: [&str; 1] = ["track_performance"];

static TRACK_PERFORMANCE: AtomicBool = AtomicBool::new(false);

/// Returns the current process-wide `track_performance` flag.
pub fn track_performance() -> bool {
    TRACK_PERFORMANCE.load(Ordering::Relaxed)
}

/// Sets the process-wide `track_performance` flag.
pub fn set_track_performance(enabled: bool) {
    TRACK_PERFORMANCE.store(enabled, Ordering::Relaxed);
}

/// Settings block of a configuration file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Emit start/finish events around every algorithm run
    #[serde(default)]
    pub track_performance: bool,
}

impl Settings {
    /// Parses a settings block, rejecting attributes outside the whitelist.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graphcheck::config::Settings;
    /// use serde_json::json;
    ///
    /// let block = json!({ "track_performance": true });
    /// let settings = Settings::from_block(block.as_object().unwrap()).unwrap();
    /// assert!(settings.track_performance);
    ///
    /// let block = json!({ "verbose": true });
    /// assert!(Settings::from_block(block.as_object().unwrap()).is_err());
    /// ```
    pub fn from_block(block: &Map<String, Value>) -> GraphResult<Self> {
        let unexpected: Vec<&String> = block
            .keys()
            .filter(|key| !SETTINGS_ATTRIBUTES.contains(&key.as_str()))
            .collect();
        if !unexpected.is_empty() {
            return Err(GraphError::unexpected_attributes(unexpected.into_iter().cloned()));
        }

        serde_json::from_value(Value::Object(block.clone()))
            .map_err(|e| GraphError::invalid(format!("settings: {}", e)))
    }

    /// Publishes these settings as the process-wide values.
    pub fn apply(&self) {
        set_track_performance(self.track_performance);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_block_defaults() {
        let settings = Settings::from_block(&Map::new()).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(!settings.track_performance);
    }

    #[test]
    fn test_unknown_setting_is_rejected() {
        let block = json!({ "track_performance": false, "color": "red", "debug": true });
        let err = Settings::from_block(block.as_object().unwrap()).unwrap_err();
        match err {
            GraphError::UnexpectedAttribute { attributes } => {
                assert_eq!(attributes, vec!["color", "debug"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_ill_typed_setting() {
        let block = json!({ "track_performance": "yes" });
        let err = Settings::from_block(block.as_object().unwrap()).unwrap_err();
        assert!(err.is_invalid_configuration());
        assert!(err.to_string().contains("settings"));
    }
}
