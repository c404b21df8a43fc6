//! Error types and handling for routeatlas
//!
//! This module defines all error types used throughout the crate. Graph
//! construction and search failures are deterministic and never retried;
//! they propagate straight to the caller.

use thiserror::Error;

/// Main result type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for routeatlas
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Atlas loading errors
    #[error("Atlas error: {0}")]
    Atlas(String),

    /// Graph construction and search errors
    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    /// I/O errors from std
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Graph construction and search errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// A referenced node is not part of the graph
    #[error("Unknown node: {id}")]
    UnknownNode {
        /// Identifier of the missing node
        id: String,
    },

    /// Two nodes are not adjacent. The public contract only asks for weights
    /// after confirming adjacency, so seeing this indicates a construction bug
    #[error("No edge between {a} and {b}")]
    NoSuchEdge {
        /// One endpoint
        a: String,
        /// The other endpoint
        b: String,
    },

    /// No path connects the two endpoints. A legitimate outcome for
    /// disconnected inputs, not a bug
    #[error("No route from {from} to {to}")]
    Unreachable {
        /// The source node
        from: String,
        /// The destination node
        to: String,
    },

    /// An edge was declared in both directions with different weights
    #[error("Conflicting weights for edge {a} - {b}: {first} and {second}")]
    ConflictingWeight {
        /// One endpoint
        a: String,
        /// The other endpoint
        b: String,
        /// Weight declared first
        first: f64,
        /// Weight declared second
        second: f64,
    },

    /// An edge connects a node to itself
    #[error("Self-loop on node {id}")]
    SelfLoop {
        /// The offending node
        id: String,
    },

    /// An edge weight is negative or non-finite
    #[error("Invalid weight {weight} on edge {a} - {b}")]
    InvalidWeight {
        /// One endpoint
        a: String,
        /// The other endpoint
        b: String,
        /// The rejected weight
        weight: f64,
    },
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an atlas error
    pub fn atlas(msg: impl Into<String>) -> Self {
        Self::Atlas(msg.into())
    }
}

impl GraphError {
    /// Create an unknown-node error from any displayable identifier
    pub fn unknown_node(id: &impl std::fmt::Display) -> Self {
        Self::UnknownNode { id: id.to_string() }
    }
}
