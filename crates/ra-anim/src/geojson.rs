//! GeoJSON rendering of the path and marker artifacts.
//!
//! Map hosts typically feed these straight into a line source and a symbol
//! source.  The marker carries its heading as a `bearing` property so an
//! icon layer can rotate by it.

use geojson::{Feature, FeatureCollection, Geometry, Value};
use ra_core::Coordinate;

use crate::HeadingSample;

fn position(c: Coordinate) -> Vec<f64> {
    vec![c.lon, c.lat]
}

fn single(feature: Feature) -> FeatureCollection {
    FeatureCollection {
        bbox:            None,
        features:        vec![feature],
        foreign_members: None,
    }
}

/// Revealed path as a one-feature collection holding a `LineString`.
pub fn path_feature_collection(path: &[Coordinate]) -> FeatureCollection {
    let line = path.iter().copied().map(position).collect();
    single(Feature {
        bbox:            None,
        geometry:        Some(Geometry::new(Value::LineString(line))),
        id:              None,
        properties:      None,
        foreign_members: None,
    })
}

/// Marker as a one-feature collection holding a `Point` with a `bearing`
/// property in degrees.
pub fn marker_feature_collection(marker: &HeadingSample) -> FeatureCollection {
    let mut feature = Feature {
        bbox:            None,
        geometry:        Some(Geometry::new(Value::Point(position(marker.position)))),
        id:              None,
        properties:      None,
        foreign_members: None,
    };
    feature.set_property("bearing", marker.bearing_degrees);
    single(feature)
}
