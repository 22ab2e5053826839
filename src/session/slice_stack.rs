use crate::math::{Point, Real, Vector};
use crate::session::Orientation;

/// The layout of the image stacks displayed on the slice planes.
///
/// Along each axis, `counts[axis]` images of thickness `spacing[axis]` are laid out
/// contiguously and centered on `center[axis]`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct SliceStack {
    /// The center of the stacks.
    pub center: Point<Real>,
    /// The thickness of one image along each axis.
    pub spacing: Vector<Real>,
    /// The number of images along each axis.
    pub counts: [usize; 3],
}

impl SliceStack {
    /// Creates a new stack layout.
    pub fn new(center: Point<Real>, spacing: Vector<Real>, counts: [usize; 3]) -> Self {
        Self {
            center,
            spacing,
            counts,
        }
    }

    /// The index of the image shown by a plane with the given orientation at `position`.
    ///
    /// Positions outside of the stack map to its first or last image. Coronal and axial
    /// images are indexed backward from the first one, wrapping around: the image `k` along
    /// the axis has index `(count - k) % count`. Returns `None` if the stack for this
    /// orientation is empty.
    pub fn slice_index_at(&self, orientation: Orientation, position: Real) -> Option<usize> {
        let axis = orientation.axis();
        let count = self.counts[axis];

        if count == 0 {
            return None;
        }

        let spacing = self.spacing[axis];
        let start = self.center[axis] - count as Real * spacing / 2.0;
        let offset = ((position - start) / spacing).floor();
        let idx = if offset.is_nan() || offset < 0.0 {
            0
        } else {
            (offset as usize).min(count - 1)
        };

        if orientation == Orientation::Sagittal {
            Some(idx)
        } else {
            Some((count - idx) % count)
        }
    }
}
