//! Distance units shared by the sampler and the route model.
//!
//! Great-circle math in [`crate::geo`] works in radians of arc.  A unit is
//! just a choice of Earth radius that turns an arc into a length.

/// Mean Earth radius in metres.
pub const EARTH_RADIUS_M: f64 = 6_371_008.8;

const METRES_PER_MILE: f64 = 1_609.344;

/// The unit in which route lengths and distance-traveled values are expressed.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DistanceUnit {
    /// Statute miles (default).
    #[default]
    Miles,
    Kilometers,
    Meters,
}

impl DistanceUnit {
    /// Earth radius expressed in this unit.
    #[inline]
    pub fn earth_radius(self) -> f64 {
        match self {
            DistanceUnit::Miles      => EARTH_RADIUS_M / METRES_PER_MILE,
            DistanceUnit::Kilometers => EARTH_RADIUS_M / 1_000.0,
            DistanceUnit::Meters     => EARTH_RADIUS_M,
        }
    }

    /// Convert a length in this unit to radians of arc.
    #[inline]
    pub fn to_radians(self, distance: f64) -> f64 {
        distance / self.earth_radius()
    }

    /// Convert radians of arc to a length in this unit.
    #[inline]
    pub fn from_radians(self, radians: f64) -> f64 {
        radians * self.earth_radius()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DistanceUnit::Miles      => "mi",
            DistanceUnit::Kilometers => "km",
            DistanceUnit::Meters     => "m",
        }
    }
}

impl std::fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
