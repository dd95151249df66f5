//! The configurable graph entity.
//!
//! A [`Graph`] holds its configuration attributes, builds its adjacency
//! list on first use and runs the configured algorithm, validating the
//! result against an optional expected value.

use std::cell::OnceCell;
use std::fmt;
use std::time::Instant;

use super::adjacency::{AdjacencyList, Edge};
use super::cycle::{self, CycleScan};
use super::error::{GraphError, GraphResult};
use super::observer::{PerformanceLog, RunObserver};
use super::topo;
use crate::config::{Algorithm, AlgorithmOutput, GRAPH_ATTRIBUTES, REQUIRED_ATTRIBUTES};

/// A graph over the vertices `0..node_count` with a configured algorithm.
///
/// Every attribute starts absent except `directed`, which defaults to
/// `true`. `expected_result` is the only attribute that may remain absent
/// when the graph runs; absence means no expectation is checked, which
/// is distinct from expecting `false` or an empty ordering.
///
/// # Example
///
/// ```rust
/// use graphcheck::config::{Algorithm, AlgorithmOutput};
/// use graphcheck::graph::Graph;
///
/// let graph = Graph::new()
///     .with_id("diamond")
///     .with_node_count(4)
///     .with_edges(vec![(0, 1), (0, 2), (1, 3), (2, 3)])
///     .with_algorithm(Algorithm::HasCycle)
///     .with_expected_result(false);
///
/// assert_eq!(graph.run_algorithm().unwrap(), AlgorithmOutput::Bool(false));
/// assert_eq!(graph.to_string(), "Graph(diamond): 4 nodes");
/// ```
#[derive(Debug, Clone)]
pub struct Graph {
    id: Option<String>,
    node_count: Option<usize>,
    edges: Option<Vec<Edge>>,
    directed: Option<bool>,
    algorithm: Option<Algorithm>,
    expected_result: Option<AlgorithmOutput>,
    cycle_scan: CycleScan,
    /// Built on first use; cleared when node_count, edges or directed change
    adjacency: OnceCell<AdjacencyList>,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph {
    /// Creates a graph with `directed = true` and every other attribute absent.
    pub fn new() -> Self {
        Self {
            id: None,
            node_count: None,
            edges: None,
            directed: Some(true),
            algorithm: None,
            expected_result: None,
            cycle_scan: CycleScan::default(),
            adjacency: OnceCell::new(),
        }
    }

    /// Sets the graph identifier.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.set_id(Some(id.into()));
        self
    }

    /// Sets the number of vertices.
    pub fn with_node_count(mut self, node_count: usize) -> Self {
        self.set_node_count(Some(node_count));
        self
    }

    /// Sets the edge list.
    pub fn with_edges(mut self, edges: Vec<Edge>) -> Self {
        self.set_edges(Some(edges));
        self
    }

    /// Sets whether edges are directed.
    pub fn with_directed(mut self, directed: bool) -> Self {
        self.set_directed(Some(directed));
        self
    }

    /// Sets the algorithm run by [`Graph::run_algorithm`].
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.set_algorithm(Some(algorithm));
        self
    }

    /// Sets the result [`Graph::run_algorithm`] must produce.
    pub fn with_expected_result(mut self, expected: impl Into<AlgorithmOutput>) -> Self {
        self.set_expected_result(Some(expected.into()));
        self
    }

    /// Selects the roots used by cycle detection.
    pub fn with_cycle_scan(mut self, scan: CycleScan) -> Self {
        self.cycle_scan = scan;
        self
    }

    /// Replaces the graph identifier.
    pub fn set_id(&mut self, id: Option<String>) {
        self.id = id;
    }

    /// Replaces the vertex count and clears the cached adjacency list.
    pub fn set_node_count(&mut self, node_count: Option<usize>) {
        self.node_count = node_count;
        self.adjacency = OnceCell::new();
    }

    /// Replaces the edge list and clears the cached adjacency list.
    pub fn set_edges(&mut self, edges: Option<Vec<Edge>>) {
        self.edges = edges;
        self.adjacency = OnceCell::new();
    }

    /// Replaces the directedness and clears the cached adjacency list.
    pub fn set_directed(&mut self, directed: Option<bool>) {
        self.directed = directed;
        self.adjacency = OnceCell::new();
    }

    /// Replaces the configured algorithm.
    pub fn set_algorithm(&mut self, algorithm: Option<Algorithm>) {
        self.algorithm = algorithm;
    }

    /// Replaces the expected result; `None` disables the check.
    pub fn set_expected_result(&mut self, expected: Option<AlgorithmOutput>) {
        self.expected_result = expected;
    }

    /// Gets the graph identifier.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Gets the number of vertices.
    pub fn node_count(&self) -> Option<usize> {
        self.node_count
    }

    /// Gets the edge list.
    pub fn edges(&self) -> Option<&[Edge]> {
        self.edges.as_deref()
    }

    /// Gets whether edges are directed.
    pub fn directed(&self) -> Option<bool> {
        self.directed
    }

    /// Gets the configured algorithm.
    pub fn algorithm(&self) -> Option<Algorithm> {
        self.algorithm
    }

    /// Gets the expected result, if one is configured.
    pub fn expected_result(&self) -> Option<&AlgorithmOutput> {
        self.expected_result.as_ref()
    }

    /// Gets the root selection used by cycle detection.
    pub fn cycle_scan(&self) -> CycleScan {
        self.cycle_scan
    }

    /// Returns the required attributes that are currently absent.
    pub fn missing_attributes(&self) -> Vec<&'static str> {
        let present = [
            self.id.is_some(),
            self.node_count.is_some(),
            self.edges.is_some(),
            self.directed.is_some(),
            self.algorithm.is_some(),
        ];
        REQUIRED_ATTRIBUTES
            .iter()
            .zip(present)
            .filter(|(_, present)| !present)
            .map(|(name, _)| *name)
            .collect()
    }

    /// Returns the adjacency list, building it on first use.
    ///
    /// Fails if `node_count`, `edges` or `directed` is absent, or if an
    /// edge references a vertex outside `0..node_count`.
    pub fn adjacency(&self) -> GraphResult<&AdjacencyList> {
        if let Some(adj) = self.adjacency.get() {
            return Ok(adj);
        }

        let (node_count, edges, directed) = self.topology()?;
        if let Some(&(src, dest)) = edges
            .iter()
            .find(|&&(src, dest)| src >= node_count || dest >= node_count)
        {
            return Err(GraphError::invalid(format!(
                "edge ({}, {}) references a vertex outside 0..{}",
                src, dest, node_count
            )));
        }

        Ok(self.adjacency.get_or_init(|| {
            tracing::debug!(
                graph = self.id().unwrap_or_default(),
                edges = edges.len(),
                directed,
                "building adjacency list"
            );
            AdjacencyList::from_edges(edges, directed)
        }))
    }

    /// Returns true if the graph contains a cycle.
    ///
    /// Uses the directed or undirected detector according to `directed`,
    /// with roots selected by the graph's [`CycleScan`]. Does not check
    /// `id`, `algorithm` or the expected result. A `node_count` too large
    /// to allocate traversal state for is an invalid configuration.
    pub fn has_cycle(&self) -> GraphResult<bool> {
        let adj = self.adjacency()?;
        let (node_count, _, directed) = self.topology()?;
        cycle::has_cycle(adj, node_count, directed, self.cycle_scan)
    }

    /// Returns a topological ordering of the vertices.
    ///
    /// Fails with an invalid configuration error on an undirected graph.
    /// The ordering is only meaningful for acyclic graphs; see
    /// [`topo::topological_sort`].
    pub fn topological_sort(&self) -> GraphResult<Vec<usize>> {
        if self.directed == Some(false) {
            return Err(GraphError::invalid(format!(
                "{} requires a directed graph",
                Algorithm::TopologicalSort
            )));
        }
        let adj = self.adjacency()?;
        let (node_count, _, _) = self.topology()?;
        topo::topological_sort(adj, node_count)
    }

    /// Validates the required attributes, runs the configured algorithm
    /// and checks the result against the expected result, if present.
    ///
    /// Start/finish events are logged through [`PerformanceLog`].
    pub fn run_algorithm(&self) -> GraphResult<AlgorithmOutput> {
        self.run_algorithm_with(&PerformanceLog)
    }

    /// Like [`Graph::run_algorithm`], reporting dispatch to `observer`.
    pub fn run_algorithm_with(&self, observer: &dyn RunObserver) -> GraphResult<AlgorithmOutput> {
        let (Some(_), Some(_), Some(_), Some(_), Some(algorithm)) = (
            self.id.as_ref(),
            self.node_count,
            self.edges.as_ref(),
            self.directed,
            self.algorithm,
        ) else {
            return Err(GraphError::invalid(format!(
                "Found absent attribute(s) {:?}; configure all of {:?}",
                self.missing_attributes(),
                GRAPH_ATTRIBUTES
            )));
        };

        observer.before_dispatch(self, algorithm);
        let started = Instant::now();
        let outcome = self.dispatch(algorithm);
        observer.after_dispatch(self, algorithm, &outcome, started.elapsed());

        let result = outcome?;
        match &self.expected_result {
            Some(expected) if *expected != result => Err(GraphError::ResultMismatch {
                algorithm: algorithm.to_string(),
                expected: expected.clone(),
                actual: result,
            }),
            _ => Ok(result),
        }
    }

    fn dispatch(&self, algorithm: Algorithm) -> GraphResult<AlgorithmOutput> {
        match algorithm {
            Algorithm::HasCycle => self.has_cycle().map(AlgorithmOutput::Bool),
            Algorithm::TopologicalSort => self.topological_sort().map(AlgorithmOutput::Order),
        }
    }

    fn topology(&self) -> GraphResult<(usize, &[Edge], bool)> {
        match (self.node_count, self.edges.as_deref(), self.directed) {
            (Some(node_count), Some(edges), Some(directed)) => Ok((node_count, edges, directed)),
            _ => Err(GraphError::invalid(format!(
                "node_count, edges and directed must be configured; found absent {:?}",
                self.missing_attributes()
            ))),
        }
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nodes = self
            .node_count
            .map_or_else(|| "?".to_string(), |n| n.to_string());
        write!(f, "Graph({}): {} nodes", self.id().unwrap_or("?"), nodes)
    }
}
