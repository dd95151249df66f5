//! Graph module: adjacency construction, cycle detection, topological
//! sorting and the configurable [`Graph`] entity that ties them together.
//!
//! # Example
//!
//! ```rust
//! use graphcheck::config::{Algorithm, AlgorithmOutput};
//! use graphcheck::graph::Graph;
//!
//! let graph = Graph::new()
//!     .with_id("chain")
//!     .with_node_count(3)
//!     .with_edges(vec![(0, 1), (1, 2)])
//!     .with_algorithm(Algorithm::TopologicalSort);
//!
//! assert_eq!(graph.run_algorithm().unwrap(), AlgorithmOutput::Order(vec![0, 1, 2]));
//! assert!(!graph.has_cycle().unwrap());
//! ```

mod adjacency;
pub mod cycle;
mod entity;
mod error;
mod observer;
pub mod topo;

pub use adjacency::{AdjacencyList, Edge};
pub use cycle::CycleScan;
pub use entity::Graph;
pub use error::{GraphError, GraphResult};
pub use observer::{NoopObserver, PerformanceLog, RunObserver};
