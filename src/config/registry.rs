//! Registry of named graph configuration blocks.
//!
//! A block is a JSON object whose keys are graph attributes. Blocks are
//! validated against [`super::GRAPH_ATTRIBUTES`] when registered, and overrides
//! are validated the same way before they are merged in at build time.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::collections::HashMap;

use super::types::{is_graph_attribute, Algorithm, AlgorithmOutput};
use crate::graph::{Edge, Graph, GraphError, GraphResult};

/// Attribute values merged over a stored block at build time.
pub type Overrides = Map<String, Value>;

/// Named graph configuration blocks, kept in registration order.
///
/// # Example
///
/// ```rust
/// use graphcheck::config::{AlgorithmOutput, GraphRegistry, Overrides};
/// use serde_json::json;
///
/// let mut registry = GraphRegistry::new();
/// registry
///     .register_value(json!({
///         "id": "triangle",
///         "directed": false,
///         "algorithm": "has_cycle",
///         "node_count": 3,
///         "edges": [[0, 1], [1, 2], [2, 0]],
///         "expected_result": true
///     }))
///     .unwrap();
///
/// let graph = registry.build("triangle", &Overrides::new()).unwrap();
/// assert_eq!(graph.run_algorithm().unwrap(), AlgorithmOutput::Bool(true));
/// ```
#[derive(Debug, Clone, Default)]
pub struct GraphRegistry {
    blocks: Vec<Map<String, Value>>,
    /// Maps graph ids to their position in `blocks`
    index: HashMap<String, usize>,
}

impl GraphRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a configuration block under its `id`.
    ///
    /// Fails if the block sets attributes outside the whitelist or has no
    /// string `id`. Registering an id again replaces the earlier block but
    /// keeps its original position.
    ///
    /// # Returns
    ///
    /// The id the block was registered under.
    pub fn register(&mut self, block: Map<String, Value>) -> GraphResult<String> {
        check_whitelist(&block)?;
        let id = match block.get("id") {
            Some(Value::String(id)) => id.clone(),
            _ => {
                return Err(GraphError::invalid(
                    "configuration block needs a string 'id'",
                ))
            }
        };

        match self.index.get(&id) {
            Some(&position) => {
                tracing::debug!(graph = %id, "replacing configuration block");
                self.blocks[position] = block;
            }
            None => {
                tracing::debug!(graph = %id, "registering configuration block");
                self.index.insert(id.clone(), self.blocks.len());
                self.blocks.push(block);
            }
        }
        Ok(id)
    }

    /// Registers a block given as any JSON value; non-objects are rejected.
    pub fn register_value(&mut self, block: Value) -> GraphResult<String> {
        match block {
            Value::Object(block) => self.register(block),
            other => Err(GraphError::invalid(format!(
                "configuration block must be a JSON object, found {}",
                other
            ))),
        }
    }

    /// Gets the stored block for `id`.
    pub fn get(&self, id: &str) -> Option<&Map<String, Value>> {
        self.index.get(id).map(|&position| &self.blocks[position])
    }

    /// Returns true if a block is registered under `id`.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Returns registered ids in registration order.
    pub fn ids(&self) -> Vec<&str> {
        self.blocks
            .iter()
            .filter_map(|block| block.get("id").and_then(Value::as_str))
            .collect()
    }

    /// Returns the number of registered blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Builds a fresh [`Graph`] from the block registered under `id`, with
    /// `overrides` merged over it.
    ///
    /// Attributes not mentioned keep the [`Graph::new`] defaults. A JSON
    /// `null` leaves an attribute absent.
    pub fn build(&self, id: &str, overrides: &Overrides) -> GraphResult<Graph> {
        let block = self.get(id).ok_or_else(|| GraphError::UnknownGraph { id: id.to_string() })?;
        check_whitelist(overrides)?;

        let mut merged = block.clone();
        for (name, value) in overrides {
            merged.insert(name.clone(), value.clone());
        }

        let mut graph = Graph::new();
        for (name, value) in &merged {
            apply_attribute(&mut graph, name, value)?;
        }

        tracing::debug!(graph = id, overrides = overrides.len(), "built graph");
        Ok(graph)
    }

    /// Builds the graphs for `ids` in the given order, stopping at the
    /// first failure.
    pub fn build_ids<S: AsRef<str>>(&self, ids: &[S], overrides: &Overrides) -> GraphResult<Vec<Graph>> {
        ids.iter()
            .map(|id| self.build(id.as_ref(), overrides))
            .collect()
    }

    /// Builds every registered graph in registration order.
    pub fn build_all(&self, overrides: &Overrides) -> GraphResult<Vec<Graph>> {
        self.build_ids(&self.ids(), overrides)
    }
}

fn check_whitelist(block: &Map<String, Value>) -> GraphResult<()> {
    let unexpected: Vec<&String> = block.keys().filter(|key| !is_graph_attribute(key)).collect();
    if unexpected.is_empty() {
        Ok(())
    } else {
        Err(GraphError::unexpected_attributes(unexpected.into_iter().cloned()))
    }
}

/// Deserializes one attribute value; `null` means absent.
fn typed<T: DeserializeOwned>(name: &str, value: &Value) -> GraphResult<Option<T>> {
    if value.is_null() {
        return Ok(None);
    }
    serde_json::from_value(value.clone())
        .map(Some)
        .map_err(|e| GraphError::invalid(format!("attribute '{}': {}", name, e)))
}

fn apply_attribute(graph: &mut Graph, name: &str, value: &Value) -> GraphResult<()> {
    match name {
        "id" => graph.set_id(typed::<String>(name, value)?),
        "node_count" => graph.set_node_count(typed::<usize>(name, value)?),
        "edges" => graph.set_edges(typed::<Vec<Edge>>(name, value)?),
        "directed" => graph.set_directed(typed::<bool>(name, value)?),
        "algorithm" => {
            let algorithm = typed::<String>(name, value)?
                .map(|s| s.parse::<Algorithm>())
                .transpose()?;
            graph.set_algorithm(algorithm);
        }
        "expected_result" => graph.set_expected_result(typed::<AlgorithmOutput>(name, value)?),
        _ => return Err(GraphError::unexpected_attributes([name])),
    }
    Ok(())
}
