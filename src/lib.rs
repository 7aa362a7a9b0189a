//! PathBench - latency benchmarks for Dijkstra and Bellman-Ford over
//! complete weighted graphs.
//!
//! This crate provides the graph representation, both shortest-path engines,
//! the statistics aggregator, and the harness that sweeps a series of graph
//! sizes and reports per-engine timing summaries.

pub mod algorithm;
pub mod bench;
pub mod config;
pub mod core;
pub mod graph;
pub mod report;
pub mod stats;
pub mod utils;
