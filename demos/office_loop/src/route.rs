//! The sales-office loop the demo animates.
//!
//! Five regional offices visited in order, returning to the start.

use ra_core::Coordinate;

/// `(lon, lat)` of each stop, in travel order.  The last stop closes the loop.
const STOPS: [(&str, f64, f64); 6] = [
    ("Denver",       -104.9903, 39.7392),
    ("Chicago",       -87.6298, 41.8781),
    ("Philadelphia",  -75.1652, 39.9526),
    ("Richmond",      -77.4360, 37.5407),
    ("Atlanta",       -84.3880, 33.7490),
    ("Denver",       -104.9903, 39.7392),
];

/// Vertices of the office loop.
pub fn office_loop() -> Vec<Coordinate> {
    STOPS.iter().map(|&(_, lon, lat)| Coordinate::new(lon, lat)).collect()
}

/// Stop names in the same order as [`office_loop`].
pub fn stop_names() -> impl Iterator<Item = &'static str> {
    STOPS.iter().map(|&(name, _, _)| name)
}
