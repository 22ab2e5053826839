//! Axis Aligned Bounding Box.

use crate::bounding_volume::BoundingVolume;
use crate::math::{Point, Real, Vector, DIM};

/// An Axis-Aligned Bounding Box (AABB).
///
/// Defined by its minimum and maximum corners. Every node of a
/// [`BoundingVolumeTree`](crate::partitioning::BoundingVolumeTree) stores one of these.
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "f32")] {
/// use crosscut3d::bounding_volume::Aabb;
/// use nalgebra::Point3;
///
/// let aabb = Aabb::from_points([
///     Point3::new(1.0, 2.0, 3.0),
///     Point3::new(-1.0, 4.0, 2.0),
///     Point3::new(0.0, 0.0, 5.0),
/// ]);
///
/// assert_eq!(aabb.mins, Point3::new(-1.0, 0.0, 2.0));
/// assert_eq!(aabb.maxs, Point3::new(1.0, 4.0, 5.0));
/// assert!(aabb.is_below_plane(2, 6.0));
/// # }
/// ```
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct Aabb {
    /// The point with minimum coordinates.
    pub mins: Point<Real>,
    /// The point with maximum coordinates.
    pub maxs: Point<Real>,
}

impl Aabb {
    /// Creates a new AABB from its two corners.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Creates an invalid AABB with inverted bounds.
    ///
    /// Merging anything into it yields that thing's bounds, which makes it the
    /// neutral starting value of a merge fold.
    #[inline]
    pub fn new_invalid() -> Self {
        Self::new(
            Vector::repeat(Real::MAX).into(),
            Vector::repeat(-Real::MAX).into(),
        )
    }

    /// Creates the smallest AABB enclosing all the given points.
    ///
    /// Returns [`Aabb::new_invalid`] if the iterator is empty.
    pub fn from_points<I>(pts: I) -> Self
    where
        I: IntoIterator<Item = Point<Real>>,
    {
        let mut result = Self::new_invalid();
        for pt in pts {
            result.take_point(pt);
        }
        result
    }

    /// The extents of this AABB along each axis.
    #[inline]
    pub fn extents(&self) -> Vector<Real> {
        self.maxs - self.mins
    }

    /// Enlarges this AABB so it also contains the point `pt`.
    pub fn take_point(&mut self, pt: Point<Real>) {
        self.mins = self.mins.coords.inf(&pt.coords).into();
        self.maxs = self.maxs.coords.sup(&pt.coords).into();
    }

    /// Translates this AABB by the given translation.
    #[inline]
    pub fn translated(mut self, translation: &Vector<Real>) -> Self {
        self.mins += translation;
        self.maxs += translation;
        self
    }

    /// The index of the axis along which this AABB is the longest.
    ///
    /// Ties are resolved toward the lowest axis index, so a degenerate AABB
    /// (all extents equal) returns `0`.
    pub fn longest_axis(&self) -> usize {
        let extents = self.extents();
        let mut best = 0;
        for i in 1..DIM {
            if extents[i] > extents[best] {
                best = i;
            }
        }
        best
    }

    /// Is this AABB strictly above the plane orthogonal to `axis` located at `position`?
    #[inline]
    pub fn is_above_plane(&self, axis: usize, position: Real) -> bool {
        self.mins[axis] > position
    }

    /// Is this AABB strictly below the plane orthogonal to `axis` located at `position`?
    #[inline]
    pub fn is_below_plane(&self, axis: usize, position: Real) -> bool {
        self.maxs[axis] < position
    }

    /// Does the plane orthogonal to `axis` located at `position` touch this AABB?
    #[inline]
    pub fn intersects_orthogonal_plane(&self, axis: usize, position: Real) -> bool {
        !self.is_above_plane(axis, position) && !self.is_below_plane(axis, position)
    }
}

impl BoundingVolume for Aabb {
    #[inline]
    fn intersects(&self, other: &Aabb) -> bool {
        na::partial_le(&self.mins, &other.maxs) && na::partial_ge(&self.maxs, &other.mins)
    }

    #[inline]
    fn contains(&self, other: &Aabb) -> bool {
        na::partial_le(&self.mins, &other.mins) && na::partial_ge(&self.maxs, &other.maxs)
    }

    #[inline]
    fn merged(&self, other: &Aabb) -> Aabb {
        Aabb {
            mins: self.mins.inf(&other.mins),
            maxs: self.maxs.sup(&other.maxs),
        }
    }
}
