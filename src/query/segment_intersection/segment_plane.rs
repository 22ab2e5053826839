use crate::math::{Point, Real, Vector};

/// Computes the intersection between the segment `[p0, p1]` and a plane.
///
/// The plane passes through `plane_point` and is orthogonal to `plane_normal` (which doesn’t
/// need to be normalized). Returns `None` if both endpoints lie strictly on the same side of
/// the plane, or if the segment has zero length. A segment lying in the plane returns `p0`.
pub fn segment_plane(
    p0: &Point<Real>,
    p1: &Point<Real>,
    plane_point: &Point<Real>,
    plane_normal: &Vector<Real>,
) -> Option<Point<Real>> {
    let dir = *p1 - *p0;
    let sq_len = dir.norm_squared();

    if sq_len == 0.0 {
        return None;
    }

    let d0 = plane_normal.dot(&(*p0 - *plane_point));
    let d1 = plane_normal.dot(&(*p1 - *plane_point));

    if (d0 > 0.0 && d1 > 0.0) || (d0 < 0.0 && d1 < 0.0) {
        return None;
    }

    let denom = plane_normal.dot(&dir);

    if denom == 0.0 {
        // Parallel: either coincident or apart.
        return (d0 == 0.0).then_some(*p0);
    }

    let pt = *p0 + dir * (-d0 / denom);

    if (pt - *p0).norm_squared() > sq_len {
        return None;
    }

    Some(pt)
}

/// Computes the intersection between the segment `[p0, p1]` and the plane orthogonal to
/// the `axis`-th coordinate axis located at `position` along that axis.
pub fn segment_orthogonal_plane(
    p0: &Point<Real>,
    p1: &Point<Real>,
    axis: usize,
    position: Real,
) -> Option<Point<Real>> {
    let normal = Vector::ith(axis, 1.0);
    let plane_point = Point::from(normal * position);
    segment_plane(p0, p1, &plane_point, &normal)
}
