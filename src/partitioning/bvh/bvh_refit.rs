use super::BoundingVolumeTree;
use crate::bounding_volume::BoundingVolume;
use crate::error::PreconditionError;
use crate::shape::SurfaceMesh;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

impl BoundingVolumeTree {
    /// Updates every node AABB after the vertices of `mesh` moved.
    ///
    /// Leaves are recomputed from the current positions of their face, then internal nodes
    /// from their two children, bottom-up. The topology of the tree is left untouched, so the
    /// result may bound the faces less tightly than a fresh build but is always valid.
    pub fn refit(&mut self, mesh: &SurfaceMesh) -> Result<(), PreconditionError> {
        self.check_built_for(mesh)?;

        #[cfg(not(feature = "parallel"))]
        for node in self.nodes.iter_mut().filter(|n| n.is_leaf()) {
            node.set_aabb(mesh.face_aabb(node.children));
        }

        #[cfg(feature = "parallel")]
        self.nodes
            .par_iter_mut()
            .filter(|n| n.is_leaf())
            .for_each(|node| node.set_aabb(mesh.face_aabb(node.children)));

        self.refit_internal_nodes();
        Ok(())
    }

    /// Recomputes the AABB of every internal node from its children.
    ///
    /// Children are always stored after their parent, so a reverse sweep sees every child
    /// before its parent.
    pub(super) fn refit_internal_nodes(&mut self) {
        for i in (0..self.nodes.len()).rev() {
            let node = self.nodes[i];

            if !node.is_leaf() {
                let left = self.nodes[node.children as usize].aabb();
                let right = self.nodes[node.children as usize + 1].aabb();
                self.nodes[i].set_aabb(left.merged(&right));
            }
        }
    }
}
