//! graphcheck - Declarative graph algorithm runner with expected-result validation
//!
//! This crate builds graphs from named configuration blocks, runs cycle
//! detection or topological sorting on them, and checks each result
//! against an optional expected value.

pub mod config;
pub mod graph;
