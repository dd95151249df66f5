//! Configuration module for graphcheck.
//!
//! Turns named configuration blocks into [`crate::graph::Graph`] values:
//! attribute whitelisting, override merging, batch construction and the
//! process-wide settings.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use graphcheck::config::{parse_file, Overrides};
//!
//! let config = parse_file(Path::new("configs/sample.json")).unwrap();
//! config.settings.apply();
//!
//! for graph in config.registry.build_all(&Overrides::new()).unwrap() {
//!     println!("{} -> {}", graph, graph.run_algorithm().unwrap());
//! }
//! ```

pub mod file;
pub mod registry;
pub mod settings;
pub mod types;

pub use file::{parse_file, parse_str, Config};
pub use registry::{GraphRegistry, Overrides};
pub use settings::{track_performance, Settings};
pub use types::{Algorithm, AlgorithmOutput, GRAPH_ATTRIBUTES, REQUIRED_ATTRIBUTES};
