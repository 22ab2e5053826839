use crate::math::Real;
use crate::session::{Orientation, SliceStack};

/// Parameters of a [`ContourSession`](crate::session::ContourSession).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct SessionConfig {
    /// Initial position of the plane of each orientation, indexed by axis.
    ///
    /// `None` disables the plane of that orientation.
    pub plane_positions: [Option<Real>; 3],
    /// If set, the tree is built with every level split along this axis.
    ///
    /// Useful when the mesh is mostly sliced by planes orthogonal to this axis.
    pub tree_axis: Option<usize>,
    /// The layout of the image stacks behind the planes, if any.
    pub slice_stack: Option<SliceStack>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            plane_positions: [Some(0.0); 3],
            tree_axis: None,
            slice_stack: None,
        }
    }
}

impl SessionConfig {
    /// A configuration with a single plane.
    pub fn single_plane(orientation: Orientation, position: Real) -> Self {
        let mut plane_positions = [None; 3];
        plane_positions[orientation.axis()] = Some(position);
        Self {
            plane_positions,
            ..Default::default()
        }
    }
}
