//! Loader for JSON configuration files.
//!
//! A configuration file holds an optional `settings` block and a list of
//! graph blocks:
//!
//! ```json
//! {
//!   "settings": { "track_performance": true },
//!   "graphs": [
//!     { "id": "topo_sort", "algorithm": "topological_sort", "node_count": 2, "edges": [[1, 0]] }
//!   ]
//! }
//! ```

use serde::Deserialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

use super::registry::GraphRegistry;
use super::settings::Settings;
use crate::graph::GraphResult;

/// Raw file layout before whitelist validation.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    settings: Map<String, Value>,
    #[serde(default)]
    graphs: Vec<Value>,
}

/// A parsed and validated configuration file.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Process-wide settings; not applied until [`Settings::apply`] is called
    pub settings: Settings,
    /// Every graph block, keyed by id
    pub registry: GraphRegistry,
}

/// Parses a configuration file from a file path.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use graphcheck::config::parse_file;
///
/// let config = parse_file(Path::new("configs/sample.json")).unwrap();
/// println!("{} graphs configured", config.registry.len());
/// ```
pub fn parse_file(path: &Path) -> GraphResult<Config> {
    let content = fs::read_to_string(path)?;
    parse_str(&content)
}

/// Parses a configuration file from a string.
///
/// # Example
///
/// ```
/// use graphcheck::config::parse_str;
///
/// let json = r#"{"graphs": [{"id": "empty", "node_count": 0, "edges": [], "algorithm": "has_cycle"}]}"#;
/// let config = parse_str(json).unwrap();
/// assert!(config.registry.contains("empty"));
/// assert!(!config.settings.track_performance);
/// ```
pub fn parse_str(content: &str) -> GraphResult<Config> {
    let raw: RawConfig = serde_json::from_str(content)?;

    let settings = Settings::from_block(&raw.settings)?;
    let mut registry = GraphRegistry::new();
    for block in raw.graphs {
        registry.register_value(block)?;
    }

    Ok(Config { settings, registry })
}
