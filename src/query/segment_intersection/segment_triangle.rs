use crate::math::{Point, Real, Vector};

/// Computes the intersection between the segment `[p0, p1]` and a triangle.
///
/// If `restrict_to_triangle` is `false`, the triangle is treated as its supporting plane and
/// only hits outside of the segment are rejected. Returns `None` for zero-length segments and
/// for segments parallel to the triangle's plane.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use crosscut3d::query::segment_triangle;
/// use nalgebra::Point3;
///
/// let (a, b, c) = (
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// );
/// let hit = segment_triangle(
///     &a, &b, &c,
///     &Point3::new(0.25, 0.25, -1.0),
///     &Point3::new(0.25, 0.25, 1.0),
///     true,
/// );
/// assert_eq!(hit, Some(Point3::new(0.25, 0.25, 0.0)));
/// # }
/// ```
pub fn segment_triangle(
    a: &Point<Real>,
    b: &Point<Real>,
    c: &Point<Real>,
    p0: &Point<Real>,
    p1: &Point<Real>,
    restrict_to_triangle: bool,
) -> Option<Point<Real>> {
    let (pt, _, bcoords) = local_segment_intersection_with_triangle(a, b, c, p0, p1)?;

    if restrict_to_triangle && bcoords.iter().any(|w| *w < 0.0) {
        return None;
    }

    Some(pt)
}

/// Computes the intersection between the segment `[p0, p1]` and the plane of a triangle.
///
/// If an intersection is found, returns the intersection point, its parameter along the
/// segment (0 at `p0`, 1 at `p1`), and its barycentric coordinates wrt. the triangle. The
/// barycentric coordinates may be negative if the point is outside of the triangle.
pub fn local_segment_intersection_with_triangle(
    a: &Point<Real>,
    b: &Point<Real>,
    c: &Point<Real>,
    p0: &Point<Real>,
    p1: &Point<Real>,
) -> Option<(Point<Real>, Real, Vector<Real>)> {
    let dir = *p1 - *p0;
    let sq_len = dir.norm_squared();

    if sq_len == 0.0 {
        return None;
    }

    let ab = *b - *a;
    let ac = *c - *a;
    let pvec = dir.cross(&ac);
    let det = ab.dot(&pvec);

    // the segment and the triangle plane are parallel
    if det == 0.0 {
        return None;
    }

    let inv_det = 1.0 / det;
    let ap = *p0 - *a;
    let qvec = ap.cross(&ab);
    let t = ac.dot(&qvec) * inv_det;

    if t < 0.0 || t > 1.0 {
        return None;
    }

    let v = ap.dot(&pvec) * inv_det;
    let w = dir.dot(&qvec) * inv_det;
    let pt = *p0 + dir * t;

    if (pt - *p0).norm_squared() > sq_len {
        return None;
    }

    Some((pt, t, Vector::new(1.0 - v - w, v, w)))
}
