//! Heading lookup over a point sequence.
//!
//! The heading at index `i` looks one point ahead, `(i, i + 1)`.  The last
//! index has nothing ahead, so it reuses the previous pair `(i - 1, i)` and
//! the marker keeps pointing the way it arrived.

use ra_core::geo::bearing;
use ra_core::Coordinate;

/// The index pair whose bearing defines the heading at `index` in a sequence
/// of `len` points.
///
/// Indices past the end are treated as the last index.  Returns `None` when
/// `len < 2`, since a single point has no heading.  The returned indices are
/// always `< len`.
#[inline]
pub fn heading_pair(len: usize, index: usize) -> Option<(usize, usize)> {
    if len < 2 {
        return None;
    }
    let i = index.min(len - 1);
    if i + 1 < len {
        Some((i, i + 1))
    } else {
        Some((i - 1, i))
    }
}

/// Bearing in degrees (`[-180, 180]`) at `index` of `points`.
pub fn heading_at(points: &[Coordinate], index: usize) -> Option<f64> {
    heading_pair(points.len(), index).map(|(a, b)| bearing(points[a], points[b]))
}
