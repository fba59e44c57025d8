//! The immutable route polyline.
//!
//! # Data layout
//!
//! Alongside the vertices, `RouteModel` caches the cumulative great-circle
//! arc (radians) from the first vertex to each vertex:
//!
//! ```text
//! cumulative[0] = 0
//! cumulative[k] = cumulative[k-1] + central_angle(coords[k-1], coords[k])
//! ```
//!
//! so locating the segment that straddles a query arc is a binary search
//! over a monotonic slice, and the total length is `cumulative[n-1]`.
//! Arcs are unit-free; lengths in a `DistanceUnit` are derived on demand.

use ra_core::geo::{central_angle, interpolate};
use ra_core::{Coordinate, DistanceUnit};
use tracing::debug;

use crate::{RouteError, RouteResult};

/// An ordered polyline of at least two coordinates.
///
/// Construct with [`RouteModel::new`]; there is no way to mutate a route
/// afterwards, so the cached lengths always agree with the vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteModel {
    coords:     Vec<Coordinate>,
    cumulative: Vec<f64>,
}

impl RouteModel {
    /// Validate `coords` and cache its arc lengths.
    ///
    /// # Errors
    ///
    /// - [`RouteError::InvalidRoute`] for fewer than two coordinates.
    /// - [`RouteError::NonFiniteVertex`] if any component is NaN or infinite.
    pub fn new(coords: Vec<Coordinate>) -> RouteResult<Self> {
        if coords.len() < 2 {
            return Err(RouteError::InvalidRoute { points: coords.len() });
        }
        if let Some((index, &coord)) = coords.iter().enumerate().find(|(_, c)| !c.is_finite()) {
            return Err(RouteError::NonFiniteVertex { index, coord });
        }

        let mut cumulative = Vec::with_capacity(coords.len());
        let mut total = 0.0;
        cumulative.push(total);
        for w in coords.windows(2) {
            total += central_angle(w[0], w[1]);
            cumulative.push(total);
        }

        debug!(vertices = coords.len(), arc_rad = total, "route model built");
        Ok(Self { coords, cumulative })
    }

    /// Build from `(lon, lat)` pairs.
    pub fn from_lon_lat(pairs: &[(f64, f64)]) -> RouteResult<Self> {
        Self::new(pairs.iter().copied().map(Coordinate::from).collect())
    }

    // ── Geometry ──────────────────────────────────────────────────────────

    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coords
    }

    pub fn vertex_count(&self) -> usize {
        self.coords.len()
    }

    #[inline]
    pub fn start(&self) -> Coordinate {
        self.coords[0]
    }

    #[inline]
    pub fn end(&self) -> Coordinate {
        self.coords[self.coords.len() - 1]
    }

    /// Total great-circle arc of the polyline, in radians.
    #[inline]
    pub fn total_arc(&self) -> f64 {
        self.cumulative[self.cumulative.len() - 1]
    }

    /// Total length of the polyline in `unit`.
    pub fn length(&self, unit: DistanceUnit) -> f64 {
        unit.from_radians(self.total_arc())
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    /// Point located `arc` radians along the route.
    ///
    /// Non-positive (and NaN) arcs return the start vertex; arcs at or beyond
    /// the total return the end vertex exactly.  Zero-length segments are
    /// never selected, so there is no division by zero.
    pub fn point_at_arc(&self, arc: f64) -> Coordinate {
        if arc.is_nan() || arc <= 0.0 {
            return self.start();
        }
        if arc >= self.total_arc() {
            return self.end();
        }

        // First vertex strictly beyond `arc`.  cumulative[0] == 0 < arc and
        // cumulative[last] > arc, so 1 <= hi <= last.
        let hi = self.cumulative.partition_point(|&c| c <= arc);
        let lo = hi - 1;

        let seg_start = self.cumulative[lo];
        let seg_len   = self.cumulative[hi] - seg_start;
        interpolate(self.coords[lo], self.coords[hi], (arc - seg_start) / seg_len)
    }

    /// Point located `distance` (in `unit`) along the route, clamped to the
    /// route's ends.
    pub fn point_along(&self, distance: f64, unit: DistanceUnit) -> Coordinate {
        self.point_at_arc(unit.to_radians(distance))
    }
}
