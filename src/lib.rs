//! routeatlas — shortest-path routing over a fixed atlas of world cities
//!
//! The heart of the crate is an undirected, weighted [`Graph`] and a
//! selection-based Dijkstra search that computes distances from one source
//! node to every other node and reconstructs the cheapest route to a chosen
//! destination. A built-in atlas of forty world cities (the [`atlas`] module)
//! provides the node set and route weights; custom atlases load from TOML.
#![warn(missing_docs)]

// Core foundational modules
pub mod core;

// Main functional modules
pub mod atlas;
pub mod graph;

// Re-export commonly used items for convenience
pub use crate::core::{Config, Error, GraphError, Result};
pub use graph::{shortest_path, Graph, Route, ShortestPaths};

/// Crate version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Initialize tracing with the configured level and format.
///
/// `RUST_LOG` takes precedence over the configured level when set.
pub fn init_tracing(logging: &crate::core::config::LoggingConfig) -> Result<()> {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .map_err(|e| Error::config(format!("Invalid log filter: {}", e)))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match logging.format.as_str() {
        "compact" => builder.compact().init(),
        _ => builder.init(),
    }

    Ok(())
}
