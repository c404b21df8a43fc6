//! The fixed world-city atlas and user-supplied atlas files

pub mod cities;
pub mod file;

// Re-export main atlas types
pub use cities::{chord_distance, route_edges, world_graph, City, CITIES, MENU};
pub use file::AtlasFile;
