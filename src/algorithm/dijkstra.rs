//! Dijkstra shortest-path engine.
//!
//! Priority-driven greedy relaxation with a binary-heap frontier. Requires
//! non-negative edge weights; the check runs before any search work so a
//! bad graph never yields a partial answer.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::algorithm::PathResult;
use crate::core::{BenchError, BenchResult};
use crate::graph::Graph;

/// Dijkstra engine
pub struct Dijkstra;

/// Frontier entry ordered as a min-heap on distance.
///
/// Ties break on node id so extraction order is deterministic within a run.
#[derive(Debug, Clone, PartialEq)]
struct NodeDistance {
    node: usize,
    distance: f64,
}

impl Eq for NodeDistance {}

impl Ord for NodeDistance {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for NodeDistance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Dijkstra {
    /// Find a shortest path from `start` to `end`.
    ///
    /// Fails with `InvalidNode` on out-of-range endpoints and with
    /// `NegativeWeight` if the graph carries any negative edge.
    pub fn shortest_path(graph: &Graph, start: usize, end: usize) -> BenchResult<PathResult> {
        graph.check_node(start)?;
        graph.check_node(end)?;

        if let Some((u, v, weight)) = graph.negative_edge() {
            return Err(BenchError::NegativeWeight { u, v, weight });
        }

        if start == end {
            return Ok(PathResult::Path {
                nodes: vec![start],
                cost: 0.0,
            });
        }

        let n = graph.node_count();
        let mut distances = vec![f64::INFINITY; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        let mut visited = vec![false; n];
        let mut frontier = BinaryHeap::new();

        distances[start] = 0.0;
        frontier.push(NodeDistance {
            node: start,
            distance: 0.0,
        });

        while let Some(NodeDistance { node, distance }) = frontier.pop() {
            if node == end {
                return Ok(PathResult::Path {
                    nodes: reconstruct_path(&predecessors, start, end),
                    cost: distance,
                });
            }

            if visited[node] {
                continue;
            }
            visited[node] = true;

            for &(neighbor, weight) in graph.neighbors(node)? {
                let candidate = distance + weight;
                if candidate < distances[neighbor] {
                    distances[neighbor] = candidate;
                    predecessors[neighbor] = Some(node);
                    frontier.push(NodeDistance {
                        node: neighbor,
                        distance: candidate,
                    });
                }
            }
        }

        Ok(PathResult::NoPath)
    }
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
