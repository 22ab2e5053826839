/*!
crosscut
========

**crosscut** computes the intersection curves between a triangle mesh and a
cutting surface (another triangle mesh or an axis-aligned slice plane), fast
enough to be refreshed while the mesh is being edited.

The pipeline is:
1. A [`shape::SurfaceMesh`] is built once from vertex positions and triangles.
2. A [`partitioning::BoundingVolumeTree`] is built over its faces and refit
   whenever the vertex positions change.
3. A [`transformation::contour::Intersector`] prunes face pairs with the
   trees, intersects the surviving edges, and stitches the resulting points
   into ordered [`transformation::contour::Contour`]s.

The [`session::ContourSession`] wraps these steps for the usual setup of one
edited mesh observed through three orthogonal slice planes.
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![deny(unused_qualifications)]

#[cfg(all(feature = "f32", feature = "f64"))]
std::compile_error!("The `f32` and `f64` features are mutually exclusive.");

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[cfg_attr(test, macro_use)]
extern crate approx;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod error;
pub mod partitioning;
pub mod query;
pub mod session;
pub mod shape;
pub mod transformation;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Point3, Vector3};

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;
}
