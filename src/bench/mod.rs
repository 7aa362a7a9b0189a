//! Benchmark harness.
//!
//! Drives the size sweep: builds one complete graph per configured size,
//! runs the configured number of randomized trials against both engines on
//! identical `(start, end)` pairs, and reduces each engine's wall-clock
//! samples to a summary record.
//!
//! Trials within a size always run strictly sequentially so the latency
//! samples are not perturbed by scheduler noise. Independent sizes may fan
//! out on the rayon pool when the config asks for it; records are collected
//! positionally, so the output stays ordered by the configured sizes either
//! way.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::algorithm::{BellmanFord, Dijkstra, PathResult};
use crate::config::BenchConfig;
use crate::core::BenchResult;
use crate::graph::Graph;
use crate::stats::{self, StatsSummary};

/// One summary record per sweep size.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepRecord {
    pub size: usize,
    pub dijkstra: StatsSummary,
    pub bellman_ford: StatsSummary,
}

/// Run the full sweep described by `config`.
///
/// Engine errors are fatal: they indicate a harness bug, not a transient
/// condition, so the sweep aborts instead of retrying.
pub fn run_sweep(config: &BenchConfig) -> BenchResult<Vec<SweepRecord>> {
    config.validate()?;

    let master_seed = match config.seed {
        Some(seed) => seed,
        None => rand::random(),
    };
    log::info!(
        "starting sweep over {:?} with {} iterations per size (seed {})",
        config.sizes,
        config.iterations,
        master_seed
    );

    let records = if config.parallel {
        config
            .sizes
            .par_iter()
            .enumerate()
            .map(|(index, &size)| run_size(config, size, index, master_seed))
            .collect::<BenchResult<Vec<_>>>()?
    } else {
        config
            .sizes
            .iter()
            .enumerate()
            .map(|(index, &size)| run_size(config, size, index, master_seed))
            .collect::<BenchResult<Vec<_>>>()?
    };

    Ok(records)
}

/// Run all trials for a single graph size.
///
/// Each size derives its own RNG from the master seed, so sequential and
/// parallel sweeps produce identical graphs and trial pairs.
fn run_size(
    config: &BenchConfig,
    size: usize,
    index: usize,
    master_seed: u64,
) -> BenchResult<SweepRecord> {
    let mut rng = StdRng::seed_from_u64(master_seed.wrapping_add(index as u64));

    let mut graph = Graph::complete(size, config.weights, &mut rng);
    log::info!(
        "graph size: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    // Attach the auxiliary node attribute; neither engine reads it.
    for node in 0..size {
        graph.set_value(node, rng.gen_range(1..=20u8))?;
    }

    let mut dijkstra_times = Vec::with_capacity(config.iterations);
    let mut bellman_ford_times = Vec::with_capacity(config.iterations);

    for _ in 0..config.iterations {
        // Self-pairs are legal and measured like any other trial.
        let start = rng.gen_range(0..size);
        let end = rng.gen_range(0..size);

        dijkstra_times.push(timed_trial("dijkstra", size, start, end, || {
            Dijkstra::shortest_path(&graph, start, end)
        })?);
        bellman_ford_times.push(timed_trial("bellman-ford", size, start, end, || {
            BellmanFord::shortest_path(&graph, start, end)
        })?);
    }

    Ok(SweepRecord {
        size,
        dijkstra: stats::summarize(&dijkstra_times)?,
        bellman_ford: stats::summarize(&bellman_ford_times)?,
    })
}

/// Time one engine invocation, in fractional milliseconds.
///
/// A `NoPath` outcome still counts: the engine did real work to discover it.
fn timed_trial<F>(
    engine: &str,
    size: usize,
    start: usize,
    end: usize,
    query: F,
) -> BenchResult<f64>
where
    F: FnOnce() -> BenchResult<PathResult>,
{
    let clock = Instant::now();
    let outcome = query();
    let elapsed_ms = clock.elapsed().as_secs_f64() * 1000.0;

    match outcome {
        Ok(_) => Ok(elapsed_ms),
        Err(err) => {
            log::error!("{engine} failed at size {size} on pair ({start}, {end}): {err}");
            Err(err)
        }
    }
}
