//! Bellman-Ford shortest-path engine.
//!
//! Iterative edge relaxation, at most `V - 1` full passes with early
//! termination once a pass makes no improvement. A further pass that still
//! relaxes an edge proves a negative cycle reachable from the start; in an
//! undirected graph any negative edge forms such a cycle on its own.

use crate::algorithm::PathResult;
use crate::core::{BenchError, BenchResult};
use crate::graph::Graph;

/// Bellman-Ford engine
pub struct BellmanFord;

impl BellmanFord {
    /// Find a shortest path from `start` to `end`.
    ///
    /// Tolerates negative edge weights; fails with `NegativeCycle` if a
    /// negative cycle is reachable from `start`, and with `InvalidNode` on
    /// out-of-range endpoints.
    pub fn shortest_path(graph: &Graph, start: usize, end: usize) -> BenchResult<PathResult> {
        graph.check_node(start)?;
        graph.check_node(end)?;

        if start == end {
            return Ok(PathResult::Path {
                nodes: vec![start],
                cost: 0.0,
            });
        }

        let n = graph.node_count();
        let mut distances = vec![f64::INFINITY; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        distances[start] = 0.0;

        // Relax every edge in both directions, up to n - 1 passes
        for _ in 1..n {
            let mut updated = false;
            for (u, v, weight) in graph.edges() {
                updated |= relax(&mut distances, &mut predecessors, u, v, weight);
                updated |= relax(&mut distances, &mut predecessors, v, u, weight);
            }
            if !updated {
                break;
            }
        }

        // Detection pass: any remaining improvement means a negative cycle
        for (u, v, weight) in graph.edges() {
            if would_relax(&distances, u, v, weight) || would_relax(&distances, v, u, weight) {
                return Err(BenchError::NegativeCycle { start });
            }
        }

        if distances[end].is_infinite() {
            return Ok(PathResult::NoPath);
        }

        Ok(PathResult::Path {
            nodes: reconstruct_path(&predecessors, start, end),
            cost: distances[end],
        })
    }
}

fn relax(
    distances: &mut [f64],
    predecessors: &mut [Option<usize>],
    from: usize,
    to: usize,
    weight: f64,
) -> bool {
    if distances[from].is_finite() {
        let candidate = distances[from] + weight;
        if candidate < distances[to] {
            distances[to] = candidate;
            predecessors[to] = Some(from);
            return true;
        }
    }
    false
}

fn would_relax(distances: &[f64], from: usize, to: usize, weight: f64) -> bool {
    distances[from].is_finite() && distances[from] + weight < distances[to]
}

fn reconstruct_path(predecessors: &[Option<usize>], start: usize, end: usize) -> Vec<usize> {
    let mut path = vec![end];
    let mut current = end;
    while current != start {
        match predecessors[current] {
            Some(predecessor) => {
                path.push(predecessor);
                current = predecessor;
            }
            None => break,
        }
    }
    path.reverse();
    path
}
