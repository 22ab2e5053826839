use super::IntersectionPoint;
use crate::math::{Point, Real};

/// An ordered polyline of intersection points.
///
/// Consecutive points lie on a common face. A closed contour repeats its first point at the
/// end, so `points.first() == points.last()`. An open contour starts and ends on boundary
/// edges.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Contour {
    /// The points of this contour, in order.
    pub points: Vec<IntersectionPoint>,
    /// Whether the last point is a repetition of the first one.
    pub closed: bool,
}

impl Contour {
    /// The number of points of this contour, including the repeated first point of a closed
    /// contour.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Does this contour have no points?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The positions of the points of this contour, in order.
    pub fn positions(&self) -> impl ExactSizeIterator<Item = Point<Real>> + '_ {
        self.points.iter().map(|p| p.point)
    }

    /// The number of distinct vertices of this contour.
    ///
    /// This is [`Self::len`] minus one for a closed contour.
    pub fn num_vertices(&self) -> usize {
        if self.closed && !self.points.is_empty() {
            self.points.len() - 1
        } else {
            self.points.len()
        }
    }

    /// The segments of this contour, as pairs of vertex indices.
    ///
    /// The repeated last point of a closed contour is not a vertex: its closing segment goes
    /// from the last vertex back to vertex 0.
    pub fn segments(&self) -> impl Iterator<Item = [u32; 2]> + '_ {
        let n = self.num_vertices() as u32;
        let num_segments = if self.closed && n > 2 {
            n
        } else {
            n.saturating_sub(1)
        };
        (0..num_segments).map(move |i| [i, (i + 1) % n])
    }

    /// Converts this contour into vertex and segment index buffers.
    pub fn to_polyline(&self) -> (Vec<Point<Real>>, Vec<[u32; 2]>) {
        (
            self.positions().take(self.num_vertices()).collect(),
            self.segments().collect(),
        )
    }
}
