//! Transformation of meshes into derived geometry.

pub mod contour;
