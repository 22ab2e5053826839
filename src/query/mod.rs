//! Non-persistent geometric queries.
//!
//! The functions of this module intersect finite segments (mesh edges) with the two kinds of
//! cutting surfaces supported by the contour computations: triangles and planes.

pub use self::segment_intersection::{
    local_segment_intersection_with_triangle, segment_orthogonal_plane, segment_plane,
    segment_triangle,
};

mod segment_intersection;
