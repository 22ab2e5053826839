pub use self::segment_plane::{segment_orthogonal_plane, segment_plane};
pub use self::segment_triangle::{local_segment_intersection_with_triangle, segment_triangle};

mod segment_plane;
mod segment_triangle;
