use super::{BoundingVolumeTree, BvhNode};
use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::error::PreconditionError;
use crate::math::{Real, DIM};

impl BoundingVolumeTree {
    /// Iterates through all the leaves with an AABB intersecting the given `aabb`.
    pub fn intersect_aabb<'a>(&'a self, aabb: &'a Aabb) -> impl Iterator<Item = u32> + 'a {
        self.leaves(|node: &BvhNode| node.aabb().intersects(aabb))
    }

    /// Collects the faces whose AABB touches the plane orthogonal to `axis` at `position`.
    ///
    /// Subtrees lying entirely above or below the plane are pruned.
    pub fn collides_with_orthogonal_plane(
        &self,
        axis: usize,
        position: Real,
    ) -> Result<Vec<u32>, PreconditionError> {
        if axis >= DIM {
            return Err(PreconditionError::InvalidAxis(axis));
        }

        if self.is_empty() {
            return Err(PreconditionError::EmptyTree);
        }

        Ok(self
            .leaves(|node: &BvhNode| node.aabb().intersects_orthogonal_plane(axis, position))
            .collect())
    }
}
