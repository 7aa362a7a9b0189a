//! Complete weighted graph representation.
//!
//! The benchmark only ever runs over complete graphs, so the adjacency lists
//! are dense by construction: every node is adjacent to every other node.
//! Invariants: undirected, simple (no self-loops, no parallel edges).

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::{BenchError, BenchResult};

/// Edge weight assignment policy for generated graphs.
///
/// The default gives every edge weight 1.0, which matches a complete graph
/// with no explicit weights: both engines then measure pure traversal cost.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "kebab-case")]
pub enum WeightPolicy {
    /// Every edge has weight 1.0
    Unit,
    /// Uniform random integer weights in [min, max], drawn from the run's RNG
    UniformInt { min: u32, max: u32 },
}

impl Default for WeightPolicy {
    fn default() -> Self {
        WeightPolicy::Unit
    }
}

/// Undirected weighted graph over nodes `0..n`.
#[derive(Debug, Clone)]
pub struct Graph {
    adjacency: Vec<Vec<(usize, f64)>>,
    values: Vec<Option<u8>>,
    edge_count: usize,
    negative_edge: Option<(usize, usize, f64)>,
}

impl Graph {
    /// Build a complete graph over nodes `0..n` with weights drawn per `policy`.
    pub fn complete<R: Rng>(n: usize, policy: WeightPolicy, rng: &mut R) -> Self {
        let mut graph = Self::empty(n);
        for u in 0..n {
            for v in (u + 1)..n {
                let weight = match policy {
                    WeightPolicy::Unit => 1.0,
                    WeightPolicy::UniformInt { min, max } => {
                        f64::from(rng.gen_range(min..=max))
                    }
                };
                graph.add_edge(u, v, weight);
            }
        }
        graph
    }

    /// Build a graph from an explicit undirected edge list.
    ///
    /// Fails with `InvalidNode` if an endpoint is outside `[0, n)`. The list
    /// must describe a simple graph: no self-loops, each pair at most once.
    /// Used by callers that need non-complete or negative-weight graphs.
    pub fn from_edges(n: usize, edges: &[(usize, usize, f64)]) -> BenchResult<Self> {
        let mut graph = Self::empty(n);
        for &(u, v, weight) in edges {
            graph.check_node(u)?;
            graph.check_node(v)?;
            graph.add_edge(u, v, weight);
        }
        Ok(graph)
    }

    fn empty(n: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); n],
            values: vec![None; n],
            edge_count: 0,
            negative_edge: None,
        }
    }

    fn add_edge(&mut self, u: usize, v: usize, weight: f64) {
        self.adjacency[u].push((v, weight));
        self.adjacency[v].push((u, weight));
        self.edge_count += 1;
        if weight < 0.0 && self.negative_edge.is_none() {
            self.negative_edge = Some((u, v, weight));
        }
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// The `(neighbor, weight)` pairs adjacent to `node`.
    pub fn neighbors(&self, node: usize) -> BenchResult<&[(usize, f64)]> {
        self.check_node(node)?;
        Ok(&self.adjacency[node])
    }

    /// Every undirected edge exactly once, as `(u, v, weight)` with `u < v`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(u, neighbors)| {
            neighbors
                .iter()
                .filter_map(move |&(v, weight)| (u < v).then_some((u, v, weight)))
        })
    }

    /// Attach the auxiliary integer attribute to a node.
    ///
    /// Neither shortest-path engine reads this attribute; it exists for
    /// interface compatibility with callers that annotate nodes after
    /// construction.
    pub fn set_value(&mut self, node: usize, value: u8) -> BenchResult<()> {
        self.check_node(node)?;
        self.values[node] = Some(value);
        Ok(())
    }

    /// Read a node's auxiliary attribute, if one was attached.
    pub fn value(&self, node: usize) -> BenchResult<Option<u8>> {
        self.check_node(node)?;
        Ok(self.values[node])
    }

    /// First negative edge recorded at construction, if any.
    pub fn negative_edge(&self) -> Option<(usize, usize, f64)> {
        self.negative_edge
    }

    /// Validate a node id against `[0, node_count)`.
    pub fn check_node(&self, node: usize) -> BenchResult<()> {
        if node < self.adjacency.len() {
            Ok(())
        } else {
            Err(BenchError::InvalidNode {
                node,
                bound: self.adjacency.len(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_complete_graph_counts() {
        let mut rng = StdRng::seed_from_u64(1);
        let graph = Graph::complete(4, WeightPolicy::Unit, &mut rng);

        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 6); // 4 * 3 / 2

        for node in 0..4 {
            let neighbors = graph.neighbors(node).expect("Node should be valid");
            assert_eq!(neighbors.len(), 3);
            assert!(neighbors.iter().all(|&(v, _)| v != node));
        }
    }

    #[test]
    fn test_unit_weights() {
        let mut rng = StdRng::seed_from_u64(1);
        let graph = Graph::complete(5, WeightPolicy::Unit, &mut rng);

        for (_, _, weight) in graph.edges() {
            assert_eq!(weight, 1.0);
        }
        assert!(graph.negative_edge().is_none());
    }

    #[test]
    fn test_uniform_int_weights_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let graph = Graph::complete(6, WeightPolicy::UniformInt { min: 1, max: 9 }, &mut rng);

        for (_, _, weight) in graph.edges() {
            assert!((1.0..=9.0).contains(&weight));
            assert_eq!(weight.fract(), 0.0);
        }
    }

    #[test]
    fn test_uniform_int_weights_reproducible() {
        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);
        let policy = WeightPolicy::UniformInt { min: 1, max: 20 };

        let graph_a = Graph::complete(8, policy, &mut rng_a);
        let graph_b = Graph::complete(8, policy, &mut rng_b);

        let edges_a: Vec<_> = graph_a.edges().collect();
        let edges_b: Vec<_> = graph_b.edges().collect();
        assert_eq!(edges_a, edges_b);
    }

    #[test]
    fn test_edges_iterates_each_pair_once() {
        let mut rng = StdRng::seed_from_u64(1);
        let graph = Graph::complete(5, WeightPolicy::Unit, &mut rng);

        let edges: Vec<_> = graph.edges().collect();
        assert_eq!(edges.len(), graph.edge_count());
        assert!(edges.iter().all(|&(u, v, _)| u < v));
    }

    #[test]
    fn test_node_values() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut graph = Graph::complete(3, WeightPolicy::Unit, &mut rng);

        assert_eq!(graph.value(1).expect("Node should be valid"), None);
        graph.set_value(1, 17).expect("Node should be valid");
        assert_eq!(graph.value(1).expect("Node should be valid"), Some(17));
    }

    #[test]
    fn test_set_value_invalid_node() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut graph = Graph::complete(3, WeightPolicy::Unit, &mut rng);

        let err = graph.set_value(3, 1).expect_err("Node 3 should be out of range");
        assert!(matches!(err, BenchError::InvalidNode { node: 3, bound: 3 }));
    }

    #[test]
    fn test_from_edges_rejects_out_of_range() {
        let result = Graph::from_edges(2, &[(0, 5, 1.0)]);
        assert!(matches!(
            result,
            Err(BenchError::InvalidNode { node: 5, bound: 2 })
        ));
    }

    #[test]
    fn test_negative_edge_tracking() {
        let graph = Graph::from_edges(3, &[(0, 1, 2.0), (1, 2, -5.0)])
            .expect("Edge list should be valid");
        assert_eq!(graph.negative_edge(), Some((1, 2, -5.0)));
    }

    #[test]
    fn test_empty_graph() {
        let mut rng = StdRng::seed_from_u64(1);
        let graph = Graph::complete(0, WeightPolicy::Unit, &mut rng);
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }
}
