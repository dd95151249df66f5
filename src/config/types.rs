//! Shared types for graph configuration.
//!
//! Defines the attribute whitelist, the algorithms a graph can run and
//! the values those algorithms produce.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::graph::GraphError;

/// Every attribute a graph configuration block may set.
pub const GRAPH_ATTRIBUTES: [&str; 6] = [
    "id",
    "node_count",
    "edges",
    "directed",
    "algorithm",
    "expected_result",
];

/// Attributes that must be present before a graph can run.
pub const REQUIRED_ATTRIBUTES: [&str; 5] = ["id", "node_count", "edges", "directed", "algorithm"];

/// Returns true if `name` is a whitelisted graph attribute.
pub fn is_graph_attribute(name: &str) -> bool {
    GRAPH_ATTRIBUTES.contains(&name)
}

/// An algorithm a graph can be configured to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Cycle detection, producing [`AlgorithmOutput::Bool`].
    #[serde(alias = "hasCycle", alias = "has_cycle?")]
    HasCycle,
    /// Topological sort, producing [`AlgorithmOutput::Order`].
    /// Only valid on directed graphs.
    #[serde(alias = "topologicalSort")]
    TopologicalSort,
}

impl Algorithm {
    /// All supported algorithms.
    pub const ALL: [Algorithm; 2] = [Algorithm::HasCycle, Algorithm::TopologicalSort];

    /// Returns the canonical configuration name.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::HasCycle => "has_cycle",
            Algorithm::TopologicalSort => "topological_sort",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "has_cycle" | "hasCycle" | "has_cycle?" => Ok(Algorithm::HasCycle),
            "topological_sort" | "topologicalSort" => Ok(Algorithm::TopologicalSort),
            _ => Err(GraphError::invalid(format!(
                "Unknown algorithm: '{}'. Valid algorithms: {}",
                s,
                Algorithm::ALL.map(|a| a.name()).join(", ")
            ))),
        }
    }
}

/// The value produced by an algorithm, also used for expected results.
///
/// Serialized untagged, so `true` is a [`AlgorithmOutput::Bool`] and
/// `[1, 0]` is an [`AlgorithmOutput::Order`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AlgorithmOutput {
    /// Result of a yes/no algorithm such as cycle detection
    Bool(bool),
    /// Ordered vertex sequence such as a topological order
    Order(Vec<usize>),
}

impl AlgorithmOutput {
    /// Returns the vertex order, if this is an ordering result.
    pub fn as_order(&self) -> Option<&[usize]> {
        match self {
            AlgorithmOutput::Bool(_) => None,
            AlgorithmOutput::Order(order) => Some(order),
        }
    }
}

impl From<bool> for AlgorithmOutput {
    fn from(value: bool) -> Self {
        AlgorithmOutput::Bool(value)
    }
}

impl From<Vec<usize>> for AlgorithmOutput {
    fn from(order: Vec<usize>) -> Self {
        AlgorithmOutput::Order(order)
    }
}

impl fmt::Display for AlgorithmOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlgorithmOutput::Bool(value) => write!(f, "{}", value),
            AlgorithmOutput::Order(order) => write!(f, "{:?}", order),
        }
    }
}
