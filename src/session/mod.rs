//! Interactive refresh of the contours of one edited mesh.
//!
//! A [`ContourSession`] owns a [`SurfaceMesh`](crate::shape::SurfaceMesh), its
//! [`BoundingVolumeTree`](crate::partitioning::BoundingVolumeTree) and up to three orthogonal
//! [`SlicePlane`]s. The host pushes vertex positions and plane moves into it, then calls
//! [`ContourSession::refresh`] which only recomputes what changed.

pub use self::contour_session::{ContourSession, RefreshFlags};
pub use self::session_config::SessionConfig;
pub use self::slice_plane::{Orientation, SlicePlane};
pub use self::slice_stack::SliceStack;

mod contour_session;
mod session_config;
mod slice_plane;
mod slice_stack;
