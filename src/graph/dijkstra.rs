//! Single-source shortest paths via selection-based Dijkstra
//!
//! The search keeps a distance table seeded at infinity, repeatedly settles
//! the unsettled node with the smallest distance, and relaxes its neighbors.
//! At atlas scale a linear minimum scan beats maintaining a priority queue.
//! Equal-distance ties resolve toward the smaller node identifier, so runs
//! are reproducible.

use crate::core::error::GraphError;
use crate::graph::Graph;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;
use tracing::{debug, trace};

/// A reconstructed route: the visited nodes in order plus the summed weight
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route<N> {
    /// Nodes from source to destination, inclusive
    pub path: Vec<N>,

    /// Total cost of the route
    pub total: f64,
}

/// Distance and predecessor tables computed from a single source node
#[derive(Debug, Clone)]
pub struct ShortestPaths<N> {
    source: N,
    distance: HashMap<N, f64>,
    predecessor: HashMap<N, N>,
}

impl<N> ShortestPaths<N>
where
    N: Clone + Eq + Hash + Ord + Display,
{
    /// Run the search to completion, settling every reachable node
    pub fn from_source(graph: &Graph<N>, source: N) -> Result<Self, GraphError> {
        Self::compute(graph, source, None)
    }

    /// Run the search only until `target` settles.
    ///
    /// The settled portion of the tables is identical to a full run.
    pub fn from_source_to(graph: &Graph<N>, source: N, target: &N) -> Result<Self, GraphError> {
        if !graph.contains(target) {
            return Err(GraphError::unknown_node(target));
        }
        Self::compute(graph, source, Some(target))
    }

    fn compute(graph: &Graph<N>, source: N, target: Option<&N>) -> Result<Self, GraphError> {
        if !graph.contains(&source) {
            return Err(GraphError::unknown_node(&source));
        }

        // Unvisited nodes sit at infinity until a path reaches them.
        let mut distance: HashMap<N, f64> = graph
            .nodes()
            .map(|node| (node.clone(), f64::INFINITY))
            .collect();
        distance.insert(source.clone(), 0.0);

        let mut predecessor: HashMap<N, N> = HashMap::new();

        // Ascending node order makes the equal-distance tie-break total.
        let mut unsettled: Vec<&N> = graph.nodes().collect();
        unsettled.sort_unstable();

        let mut settled = 0usize;
        while !unsettled.is_empty() {
            let mut min_idx = 0;
            for idx in 1..unsettled.len() {
                if distance[unsettled[idx]] < distance[unsettled[min_idx]] {
                    min_idx = idx;
                }
            }
            let current = unsettled.remove(min_idx);
            let current_distance = distance[current];

            if current_distance.is_infinite() {
                // Everything left is unreachable from the source.
                break;
            }
            settled += 1;

            for (neighbor, weight) in graph.edges_from(current) {
                let candidate = current_distance + weight;
                if candidate < distance[neighbor] {
                    trace!(%current, %neighbor, candidate, "relaxed edge");
                    distance.insert(neighbor.clone(), candidate);
                    predecessor.insert(neighbor.clone(), current.clone());
                }
            }

            if target == Some(current) {
                break;
            }
        }

        debug!(%source, settled, "shortest-path search finished");

        Ok(Self {
            source,
            distance,
            predecessor,
        })
    }

    /// The source node of this computation
    pub fn source(&self) -> &N {
        &self.source
    }

    /// Shortest distance from the source.
    ///
    /// `None` when the node is not part of the graph or no path reaches it.
    pub fn distance(&self, node: &N) -> Option<f64> {
        self.distance.get(node).copied().filter(|d| d.is_finite())
    }

    /// The node immediately preceding `node` on its shortest path
    pub fn predecessor(&self, node: &N) -> Option<&N> {
        self.predecessor.get(node)
    }

    /// Walk the predecessor table backward from `destination` and return the
    /// path in source-to-destination order.
    ///
    /// Fails with `Unreachable` when no path exists. When the destination is
    /// the source itself the path is the single-element `[source]`.
    pub fn reconstruct(&self, destination: &N) -> Result<Vec<N>, GraphError> {
        if !self.distance.contains_key(destination) {
            return Err(GraphError::unknown_node(destination));
        }
        if self.distance(destination).is_none() {
            return Err(self.unreachable(destination));
        }

        let mut path = vec![destination.clone()];
        let mut node = destination;
        // A finite distance guarantees a predecessor chain back to the source.
        while *node != self.source {
            match self.predecessor.get(node) {
                Some(previous) => {
                    path.push(previous.clone());
                    node = previous;
                }
                None => return Err(self.unreachable(destination)),
            }
        }
        path.reverse();

        Ok(path)
    }

    /// Reconstruct the path to `destination` and pair it with its total cost
    pub fn route(&self, destination: &N) -> Result<Route<N>, GraphError> {
        let path = self.reconstruct(destination)?;
        let total = self.distance(destination).unwrap_or(0.0);
        Ok(Route { path, total })
    }

    fn unreachable(&self, destination: &N) -> GraphError {
        GraphError::Unreachable {
            from: self.source.to_string(),
            to: destination.to_string(),
        }
    }
}

/// Compute the cheapest route between two nodes of `graph`.
///
/// Fails with `UnknownNode` when either endpoint is absent and with
/// `Unreachable` when the endpoints lie in disconnected components. The
/// search stops as soon as the destination settles.
pub fn shortest_path<N>(graph: &Graph<N>, source: &N, destination: &N) -> Result<Route<N>, GraphError>
where
    N: Clone + Eq + Hash + Ord + Display,
{
    let paths = ShortestPaths::from_source_to(graph, source.clone(), destination)?;
    paths.route(destination)
}
