//! The built-in world-city atlas
//!
//! Forty of the world's most populous cities with their geographic
//! coordinates and Earth-centered Cartesian positions (kilometers). Route
//! weights are the straight-line chord distances between positions. The
//! route list declares each connection once; graph construction mirrors it.

use crate::graph::Graph;
use once_cell::sync::Lazy;

/// A city in the built-in atlas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct City {
    /// Display name, "City, Country"
    pub name: &'static str,

    /// Latitude in decimal degrees
    pub lat: f64,

    /// Longitude in decimal degrees
    pub lon: f64,

    /// Earth-centered Cartesian position in kilometers
    pub position: [f64; 3],
}

const fn city(name: &'static str, lat: f64, lon: f64, position: [f64; 3]) -> City {
    City {
        name,
        lat,
        lon,
        position,
    }
}

/// The forty built-in cities, in menu order
pub const CITIES: [City; 40] = [
    city("Tokyo, Japan", 35.689722, 139.692222, [-3950.33, 3351.05, 3720.95]),
    city("Delhi, India", 28.61, 77.23, [1237.67, 5460.83, 3054.12]),
    city("Shanghai, China", 31.228611, 121.474722, [-2847.63, 4651.51, 3306.75]),
    city("São Paulo, Brazil", -23.55, -46.633333, [4014.85, -4250.53, -2548.36]),
    city("Mexico City, Mexico", 19.433333, -99.133333, [-954.73, -5938.48, 2122.06]),
    city("Cairo, Egypt", 30.044444, 31.235833, [4720.78, 2863.04, 3193.33]),
    city("Mumbai, India", 19.076111, 72.8775, [1774.69, 5760.68, 2084.51]),
    city("Beijing, China", 39.906667, 116.3975, [-2175.22, 4382.44, 4091.80]),
    city("Dhaka, Bangladesh", 23.763889, 90.388889, [-39.62, 5837.19, 2570.17]),
    city("Osaka, Japan", 34.693889, 135.502222, [-3740.50, 3675.50, 3630.36]),
    city("New York, USA", 40.712778, -74.006111, [1332.08, -4647.39, 4160.23]),
    city("Karachi, Pakistan", 24.86, 67.01, [2260.27, 5327.44, 2681.37]),
    city("Buenos Aires, Argentina", -34.603333, -58.381667, [2752.27, -4470.55, -3622.07]),
    city("Chongqing, China", 29.5637, 106.5504, [-1580.31, 5317.88, 3146.90]),
    city("Istanbul, Turkey", 41.013611, 28.955, [4211.04, 2329.90, 4185.55]),
    city("Kolkata, India", 22.5675, 88.37, [167.53, 5887.33, 2447.73]),
    city("Manila, Philippines", 14.5958, 120.9772, [-3176.84, 5291.93, 1607.27]),
    city("Lagos, Nigeria", 6.455027, 3.384082, [6326.61, 374.11, 717.05]),
    city("Rio de Janeiro, Brazil", -22.911366, -43.205916, [4282.22, -4022.10, -2483.04]),
    city("Tianjin, China", 39.1336, 117.2054, [-2261.83, 4400.04, 4025.41]),
    city("Kinshasa, DR Congo", -4.325, 15.322222, [6133.87, 1680.59, -481.00]),
    city("Guangzhou, China", 23.13, 113.26, [-2316.27, 5388.68, 2505.44]),
    city("Los Angeles, USA", 34.05, -118.25, [-2501.29, -4655.13, 3571.20]),
    city("Moscow, Russia", 55.755833, 37.617222, [2842.94, 2190.72, 5272.44]),
    city("Shenzhen, China", 22.5415, 114.0596, [-2401.61, 5379.04, 2445.06]),
    city("Lahore, Pakistan", 31.549722, 74.343611, [1466.82, 5233.67, 3337.27]),
    city("Bangalore, India", 12.978889, 77.591667, [1335.50, 6069.98, 1432.47]),
    city("Paris, France", 48.856613, 2.352222, [4192.91, 172.23, 4803.13]),
    city("Bogotá, Colombia", 4.711111, -74.072222, [1744.40, -6112.51, 523.84]),
    city("Jakarta, Indonesia", -6.175, 106.8275, [-1835.69, 6069.57, -686.06]),
    city("Chennai, India", 13.082694, 80.270694, [1049.88, 6123.20, 1443.73]),
    city("Lima, Peru", -12.06, -77.0375, [1399.12, -6078.39, -1332.61]),
    city("Bangkok, Thailand", 13.7525, 100.494167, [-1128.37, 6091.63, 1516.25]),
    city("Seoul, South Korea", 37.56, 126.99, [-3042.08, 4038.45, 3888.04]),
    city("Nagoya, Japan", 35.183333, 136.9, [-3806.26, 3561.84, 3675.03]),
    city("Hyderabad, India", 17.361667, 78.474722, [1216.29, 5964.77, 1903.24]),
    city("London, United Kingdom", 51.507222, -0.1275, [3969.82, -8.83, 4992.05]),
    city("Tehran, Iran", 35.689167, 51.388889, [3232.64, 4047.85, 3720.90]),
    city("Chicago, USA", 41.881944, -87.627778, [196.55, -4744.57, 4258.01]),
    city("Chengdu, China", 30.66, 104.063333, [-1333.18, 5322.05, 3252.46]),
];

// Declared routes as index pairs into CITIES, one direction each.
const ROUTES: [(usize, usize); 54] = [
    (0, 9),
    (0, 34),
    (0, 33),
    (1, 11),
    (1, 15),
    (1, 35),
    (2, 33),
    (2, 13),
    (2, 7),
    (2, 19),
    (2, 21),
    (3, 18),
    (3, 12),
    (3, 28),
    (4, 28),
    (4, 22),
    (5, 14),
    (5, 37),
    (5, 17),
    (5, 20),
    (6, 11),
    (6, 35),
    (6, 26),
    (7, 19),
    (8, 15),
    (8, 39),
    (8, 13),
    (8, 32),
    (9, 34),
    (10, 38),
    (10, 36),
    (11, 25),
    (11, 37),
    (12, 18),
    (12, 31),
    (13, 39),
    (13, 21),
    (14, 23),
    (14, 27),
    (15, 30),
    (15, 35),
    (16, 29),
    (16, 32),
    (16, 24),
    (17, 20),
    (21, 24),
    (22, 38),
    (23, 27),
    (26, 30),
    (26, 35),
    (27, 36),
    (28, 31),
    (29, 32),
    (30, 35),
];

/// City names in menu order
pub static MENU: Lazy<Vec<String>> =
    Lazy::new(|| CITIES.iter().map(|city| city.name.to_string()).collect());

/// Straight-line (chord) distance in kilometers between two Cartesian positions
pub fn chord_distance(a: [f64; 3], b: [f64; 3]) -> f64 {
    let dx = b[0] - a[0];
    let dy = b[1] - a[1];
    let dz = b[2] - a[2];
    (dx * dx + dy * dy + dz * dz).sqrt()
}

/// The declared city connections with chord-distance weights
pub fn route_edges() -> impl Iterator<Item = (&'static str, &'static str, f64)> {
    ROUTES.iter().map(|&(a, b)| {
        let (from, to) = (&CITIES[a], &CITIES[b]);
        (from.name, to.name, chord_distance(from.position, to.position))
    })
}

/// Build the symmetrized world-city graph
pub fn world_graph() -> Graph<String> {
    Graph::build(
        CITIES.iter().map(|city| city.name.to_string()),
        route_edges().map(|(a, b, w)| (a.to_string(), b.to_string(), w)),
    )
    .expect("built-in atlas is consistent")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_city_names_are_unique() {
        let names: HashSet<&str> = CITIES.iter().map(|city| city.name).collect();
        assert_eq!(names.len(), CITIES.len());
    }

    #[test]
    fn test_routes_reference_valid_cities() {
        for &(a, b) in &ROUTES {
            assert!(a < CITIES.len());
            assert!(b < CITIES.len());
            assert_ne!(a, b);
        }
    }

    #[test]
    fn test_routes_declared_once_per_pair() {
        let pairs: HashSet<(usize, usize)> = ROUTES
            .iter()
            .map(|&(a, b)| (a.min(b), a.max(b)))
            .collect();
        assert_eq!(pairs.len(), ROUTES.len());
    }

    #[test]
    fn test_chord_distance() {
        let d = chord_distance([0.0, 0.0, 0.0], [3.0, 4.0, 0.0]);
        assert_eq!(d, 5.0);
    }

    #[test]
    fn test_world_graph_shape() {
        let graph = world_graph();
        assert_eq!(graph.node_count(), 40);
        assert_eq!(graph.edge_count(), 54);
    }

    #[test]
    fn test_world_graph_is_symmetric() {
        let graph = world_graph();
        let tokyo = "Tokyo, Japan".to_string();
        let osaka = "Osaka, Japan".to_string();

        assert_eq!(
            graph.weight(&tokyo, &osaka).unwrap(),
            graph.weight(&osaka, &tokyo).unwrap()
        );
    }

    #[test]
    fn test_menu_matches_city_order() {
        assert_eq!(MENU.len(), 40);
        assert_eq!(MENU[0], "Tokyo, Japan");
        assert_eq!(MENU[39], "Chengdu, China");
    }
}
