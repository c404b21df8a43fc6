//! User-supplied atlases loaded from TOML
//!
//! An atlas file lists cities with Cartesian positions and the routes
//! connecting them. Route weights default to the chord distance between the
//! endpoint positions, matching the built-in atlas.

use crate::atlas::cities::chord_distance;
use crate::core::error::{Error, GraphError, Result};
use crate::graph::Graph;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// A TOML atlas: a list of cities and the routes connecting them
#[derive(Debug, Clone, Deserialize)]
pub struct AtlasFile {
    /// Cities, in menu order
    pub cities: Vec<CityEntry>,

    /// Declared routes, one direction each
    #[serde(default)]
    pub routes: Vec<RouteEntry>,
}

/// A city entry in a TOML atlas
#[derive(Debug, Clone, Deserialize)]
pub struct CityEntry {
    /// City name
    pub name: String,

    /// Cartesian position in kilometers, used to derive route weights
    pub position: [f64; 3],
}

/// A route entry in a TOML atlas
#[derive(Debug, Clone, Deserialize)]
pub struct RouteEntry {
    /// Name of one endpoint
    pub from: String,

    /// Name of the other endpoint
    pub to: String,

    /// Explicit weight; defaults to the chord distance between the endpoints
    pub weight: Option<f64>,
}

impl AtlasFile {
    /// Load an atlas from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::atlas(format!("Failed to read {}: {}", path.display(), e)))?;

        let atlas: AtlasFile = toml::from_str(&contents)
            .map_err(|e| Error::atlas(format!("Failed to parse {}: {}", path.display(), e)))?;

        debug!(
            cities = atlas.cities.len(),
            routes = atlas.routes.len(),
            "atlas loaded"
        );
        Ok(atlas)
    }

    /// City names in file order
    pub fn menu(&self) -> Vec<String> {
        self.cities.iter().map(|city| city.name.clone()).collect()
    }

    /// Build the symmetrized graph described by this atlas
    pub fn into_graph(self) -> Result<Graph<String>> {
        let positions: HashMap<&str, [f64; 3]> = self
            .cities
            .iter()
            .map(|city| (city.name.as_str(), city.position))
            .collect();

        let mut edges = Vec::with_capacity(self.routes.len());
        for route in &self.routes {
            let weight = match route.weight {
                Some(weight) => weight,
                None => {
                    let from = positions
                        .get(route.from.as_str())
                        .ok_or_else(|| GraphError::unknown_node(&route.from))?;
                    let to = positions
                        .get(route.to.as_str())
                        .ok_or_else(|| GraphError::unknown_node(&route.to))?;
                    chord_distance(*from, *to)
                }
            };
            edges.push((route.from.clone(), route.to.clone(), weight));
        }

        let graph = Graph::build(self.cities.iter().map(|city| city.name.clone()), edges)?;
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        [[cities]]
        name = "A"
        position = [0.0, 0.0, 0.0]

        [[cities]]
        name = "B"
        position = [3.0, 4.0, 0.0]

        [[cities]]
        name = "C"
        position = [6.0, 8.0, 0.0]

        [[routes]]
        from = "A"
        to = "B"

        [[routes]]
        from = "B"
        to = "C"
        weight = 12.5
    "#;

    #[test]
    fn test_parse_and_build() {
        let atlas: AtlasFile = toml::from_str(SAMPLE).unwrap();
        assert_eq!(atlas.menu(), vec!["A", "B", "C"]);

        let graph = atlas.into_graph().unwrap();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);

        // A-B falls back to the chord distance, B-C keeps its explicit weight.
        let a = "A".to_string();
        let b = "B".to_string();
        let c = "C".to_string();
        assert_eq!(graph.weight(&a, &b).unwrap(), 5.0);
        assert_eq!(graph.weight(&b, &c).unwrap(), 12.5);
    }

    #[test]
    fn test_route_to_unlisted_city_rejected() {
        let atlas: AtlasFile = toml::from_str(
            r#"
            [[cities]]
            name = "A"
            position = [0.0, 0.0, 0.0]

            [[routes]]
            from = "A"
            to = "Z"
        "#,
        )
        .unwrap();

        assert!(atlas.into_graph().is_err());
    }
}
