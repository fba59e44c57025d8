//! Geographic coordinate type and great-circle primitives.
//!
//! Everything here is a pure function of its inputs.  The Earth is modelled
//! as a sphere; angles are returned in radians of arc and converted to a
//! length by [`DistanceUnit`][crate::DistanceUnit].
//!
//! `Coordinate` uses `f64`: sampled sequences are compared bit-for-bit across
//! repeated runs, and single precision loses ~1 m at continental scale.

/// A WGS-84 position, `(longitude, latitude)` in degrees.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub lon: f64,
    pub lat: f64,
}

impl Coordinate {
    #[inline]
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// `true` when both components are finite numbers.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.lon.is_finite() && self.lat.is_finite()
    }

    /// `[lon, lat]`, the axis order GeoJSON and most map hosts expect.
    #[inline]
    pub fn to_array(self) -> [f64; 2] {
        [self.lon, self.lat]
    }

    /// Great-circle distance to `other` in `unit`.
    pub fn distance_to(self, other: Coordinate, unit: crate::DistanceUnit) -> f64 {
        unit.from_radians(central_angle(self, other))
    }
}

impl From<(f64, f64)> for Coordinate {
    /// Interprets the tuple as `(lon, lat)`.
    fn from((lon, lat): (f64, f64)) -> Self {
        Self { lon, lat }
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from([lon, lat]: [f64; 2]) -> Self {
        Self { lon, lat }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lon, self.lat)
    }
}

// ── Great-circle primitives ───────────────────────────────────────────────────

/// Haversine central angle between two coordinates, in radians.
pub fn central_angle(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();

    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();

    let h = (d_lat * 0.5).sin().powi(2)
        + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

    2.0 * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Summed central angle along a polyline, in radians.
///
/// Returns `0.0` for fewer than two points.
pub fn path_angle(points: &[Coordinate]) -> f64 {
    points.windows(2).map(|w| central_angle(w[0], w[1])).sum()
}

/// Initial bearing from `from` toward `to`, in degrees within `[-180, 180]`.
///
/// `0` is due north and `90` due east.  Not commutative: off the equator
/// `bearing(b, a)` is not simply `bearing(a, b)` turned 180°.  Identical
/// points yield `0`.
pub fn bearing(from: Coordinate, to: Coordinate) -> f64 {
    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();
    let d_lon = (to.lon - from.lon).to_radians();

    let east  = d_lon.sin() * lat2.cos();
    let north = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();

    east.atan2(north).to_degrees()
}

/// Point at `fraction ∈ [0, 1]` of the way from `a` to `b` along the great
/// circle joining them.
///
/// Fractions outside `[0, 1]` are clamped, so the endpoints are returned
/// exactly.  Antipodal pairs have no unique great circle; they snap to the
/// nearer endpoint.
pub fn interpolate(a: Coordinate, b: Coordinate, fraction: f64) -> Coordinate {
    if fraction <= 0.0 {
        return a;
    }
    if fraction >= 1.0 {
        return b;
    }

    let delta = central_angle(a, b);
    let sin_delta = delta.sin();
    if delta == 0.0 {
        return a;
    }
    if sin_delta.abs() < 1e-12 {
        return if fraction < 0.5 { a } else { b };
    }

    let wa = ((1.0 - fraction) * delta).sin() / sin_delta;
    let wb = (fraction * delta).sin() / sin_delta;

    let (lat1, lon1) = (a.lat.to_radians(), a.lon.to_radians());
    let (lat2, lon2) = (b.lat.to_radians(), b.lon.to_radians());

    let x = wa * lat1.cos() * lon1.cos() + wb * lat2.cos() * lon2.cos();
    let y = wa * lat1.cos() * lon1.sin() + wb * lat2.cos() * lon2.sin();
    let z = wa * lat1.sin() + wb * lat2.sin();

    let lat = z.atan2((x * x + y * y).sqrt());
    let lon = y.atan2(x);
    Coordinate::new(lon.to_degrees(), lat.to_degrees())
}
