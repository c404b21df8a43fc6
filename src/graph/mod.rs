//! Graph construction and shortest-path search

pub mod adjacency;
pub mod dijkstra;

// Re-export main graph types
pub use adjacency::Graph;
pub use dijkstra::{shortest_path, Route, ShortestPaths};
