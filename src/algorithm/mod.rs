//! Shortest-path algorithm implementations
//!
//! Both engines share the same contract: borrow the graph read-only, validate
//! their endpoints, and return an explicit `PathResult`. An unreachable
//! target is a normal outcome, not an error.

pub mod bellman_ford;
pub mod dijkstra;

pub use bellman_ford::BellmanFord;
pub use dijkstra::Dijkstra;

/// Outcome of a shortest-path query.
#[derive(Debug, Clone, PartialEq)]
pub enum PathResult {
    /// A shortest path from start to end, start first, with its total weight
    Path { nodes: Vec<usize>, cost: f64 },
    /// No path connects start and end
    NoPath,
}

impl PathResult {
    /// Total weight of the path, or `None` for `NoPath`.
    pub fn cost(&self) -> Option<f64> {
        match self {
            PathResult::Path { cost, .. } => Some(*cost),
            PathResult::NoPath => None,
        }
    }

    /// Number of edges on the path, or `None` for `NoPath`.
    pub fn hops(&self) -> Option<usize> {
        match self {
            PathResult::Path { nodes, .. } => Some(nodes.len().saturating_sub(1)),
            PathResult::NoPath => None,
        }
    }

    pub fn is_path(&self) -> bool {
        matches!(self, PathResult::Path { .. })
    }
}
