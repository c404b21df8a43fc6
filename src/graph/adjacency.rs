//! Undirected weighted adjacency graph
//!
//! Each node maps to its neighbors and the weight of the connecting edge.
//! Construction symmetrizes the edge list so every declared edge is stored
//! in both directions with the same weight; the graph is read-only afterwards.

use crate::core::error::GraphError;
use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;
use tracing::debug;

/// An immutable, undirected, weighted graph over an opaque node token.
///
/// `Ord` on the token gives the search a reproducible tie-break order and
/// `Display` feeds error messages.
#[derive(Debug, Clone)]
pub struct Graph<N> {
    adjacency: HashMap<N, HashMap<N, f64>>,
    edge_count: usize,
}

impl<N> Graph<N>
where
    N: Clone + Eq + Hash + Ord + Display,
{
    /// Build a graph from a node set and a (possibly one-directional) edge list.
    ///
    /// Every node receives an adjacency entry, even when no edge touches it.
    /// Fails when an edge references a node outside the node set, connects a
    /// node to itself, carries a negative or non-finite weight, or re-declares
    /// an existing edge with a different weight. Declaring the same weight in
    /// both directions is accepted.
    pub fn build<I, E>(nodes: I, edges: E) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = N>,
        E: IntoIterator<Item = (N, N, f64)>,
    {
        let mut adjacency: HashMap<N, HashMap<N, f64>> = nodes
            .into_iter()
            .map(|node| (node, HashMap::new()))
            .collect();

        let mut edge_count = 0;
        for (a, b, weight) in edges {
            if !adjacency.contains_key(&a) {
                return Err(GraphError::unknown_node(&a));
            }
            if !adjacency.contains_key(&b) {
                return Err(GraphError::unknown_node(&b));
            }
            if a == b {
                return Err(GraphError::SelfLoop { id: a.to_string() });
            }
            if !(weight.is_finite() && weight >= 0.0) {
                return Err(GraphError::InvalidWeight {
                    a: a.to_string(),
                    b: b.to_string(),
                    weight,
                });
            }

            match adjacency.get(&a).and_then(|edges| edges.get(&b)).copied() {
                Some(existing) if existing != weight => {
                    return Err(GraphError::ConflictingWeight {
                        a: a.to_string(),
                        b: b.to_string(),
                        first: existing,
                        second: weight,
                    });
                }
                Some(_) => continue,
                None => {}
            }

            if let Some(edges) = adjacency.get_mut(&a) {
                edges.insert(b.clone(), weight);
            }
            if let Some(edges) = adjacency.get_mut(&b) {
                edges.insert(a.clone(), weight);
            }
            edge_count += 1;
        }

        debug!(nodes = adjacency.len(), edges = edge_count, "graph built");

        Ok(Self {
            adjacency,
            edge_count,
        })
    }

    /// Every node reachable via one edge from `node`
    pub fn neighbors(&self, node: &N) -> Result<impl Iterator<Item = &N>, GraphError> {
        self.adjacency
            .get(node)
            .map(|edges| edges.keys())
            .ok_or_else(|| GraphError::unknown_node(node))
    }

    /// The stored weight between two adjacent nodes
    pub fn weight(&self, a: &N, b: &N) -> Result<f64, GraphError> {
        let edges = self
            .adjacency
            .get(a)
            .ok_or_else(|| GraphError::unknown_node(a))?;
        if !self.adjacency.contains_key(b) {
            return Err(GraphError::unknown_node(b));
        }

        edges.get(b).copied().ok_or_else(|| GraphError::NoSuchEdge {
            a: a.to_string(),
            b: b.to_string(),
        })
    }

    /// Iterate over every node in the graph
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.adjacency.keys()
    }

    /// Whether `node` is part of the graph
    pub fn contains(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Number of nodes
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Adjacency entries for `node`, empty when the node is unknown.
    pub(crate) fn edges_from(&self, node: &N) -> impl Iterator<Item = (&N, f64)> {
        self.adjacency
            .get(node)
            .into_iter()
            .flat_map(|edges| edges.iter().map(|(neighbor, &weight)| (neighbor, weight)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted_neighbors<'a>(graph: &'a Graph<&'static str>, node: &&'static str) -> Vec<&'a str> {
        let mut neighbors: Vec<&str> = graph.neighbors(node).unwrap().copied().collect();
        neighbors.sort_unstable();
        neighbors
    }

    #[test]
    fn test_one_directional_edge_is_mirrored() {
        let graph = Graph::build(["A", "B", "C"], [("A", "B", 5.0)]).unwrap();

        assert_eq!(sorted_neighbors(&graph, &"A"), vec!["B"]);
        assert_eq!(sorted_neighbors(&graph, &"B"), vec!["A"]);
        assert_eq!(graph.weight(&"A", &"B").unwrap(), 5.0);
        assert_eq!(graph.weight(&"B", &"A").unwrap(), 5.0);
    }

    #[test]
    fn test_every_node_gets_an_entry() {
        let graph = Graph::build(["A", "B"], Vec::<(&str, &str, f64)>::new()).unwrap();

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.neighbors(&"A").unwrap().count(), 0);
    }

    #[test]
    fn test_dangling_edge_endpoint_rejected() {
        let result = Graph::build(["A", "B"], [("A", "Z", 1.0)]);
        assert_eq!(
            result.unwrap_err(),
            GraphError::UnknownNode { id: "Z".to_string() }
        );
    }

    #[test]
    fn test_self_loop_rejected() {
        let result = Graph::build(["A"], [("A", "A", 1.0)]);
        assert!(matches!(result.unwrap_err(), GraphError::SelfLoop { .. }));
    }

    #[test]
    fn test_negative_and_non_finite_weights_rejected() {
        let negative = Graph::build(["A", "B"], [("A", "B", -1.0)]);
        assert!(matches!(
            negative.unwrap_err(),
            GraphError::InvalidWeight { .. }
        ));

        let nan = Graph::build(["A", "B"], [("A", "B", f64::NAN)]);
        assert!(matches!(nan.unwrap_err(), GraphError::InvalidWeight { .. }));
    }

    #[test]
    fn test_conflicting_bidirectional_weights_rejected() {
        let result = Graph::build(["A", "B"], [("A", "B", 2.0), ("B", "A", 3.0)]);
        assert!(matches!(
            result.unwrap_err(),
            GraphError::ConflictingWeight { .. }
        ));
    }

    #[test]
    fn test_matching_bidirectional_weights_accepted() {
        let graph = Graph::build(["A", "B"], [("A", "B", 2.0), ("B", "A", 2.0)]).unwrap();
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.weight(&"A", &"B").unwrap(), 2.0);
    }

    #[test]
    fn test_weight_requires_adjacency() {
        let graph = Graph::build(["A", "B", "C"], [("A", "B", 1.0)]).unwrap();
        assert_eq!(
            graph.weight(&"A", &"C").unwrap_err(),
            GraphError::NoSuchEdge {
                a: "A".to_string(),
                b: "C".to_string()
            }
        );
    }

    #[test]
    fn test_lookups_on_unknown_nodes_fail() {
        let graph = Graph::build(["A"], Vec::<(&str, &str, f64)>::new()).unwrap();

        assert!(graph.neighbors(&"Z").is_err());
        assert!(graph.weight(&"Z", &"A").is_err());
        assert!(graph.weight(&"A", &"Z").is_err());
        assert!(!graph.contains(&"Z"));
    }
}
