//! Intersection contours between triangle meshes and cutting surfaces.
//!
//! An [`Intersector`] computes every crossing point between the edges of the input meshes and
//! the cutting surface, then stitches them into ordered [`Contour`]s by walking the face/edge
//! adjacency of the meshes.

pub use self::contour::Contour;
pub use self::intersection_point::{Counterpart, IntersectionKey, IntersectionPoint, MeshSide};
pub use self::intersector::Intersector;

mod contour;
mod intersection_point;
mod intersector;
mod stitching;
