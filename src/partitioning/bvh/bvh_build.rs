use super::{BoundingVolumeTree, BvhNode};
use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::error::{ConstructionError, ContourError, PreconditionError};
use crate::math::DIM;
use crate::shape::SurfaceMesh;
use ordered_float::OrderedFloat;

impl BoundingVolumeTree {
    /// Builds a tree over every face of `mesh`.
    ///
    /// At each level, the faces are sorted by their minimum coordinate along the axis where
    /// their union is the longest, then split in two halves of `len / 2` and `len - len / 2`
    /// faces.
    pub fn from_mesh(mesh: &SurfaceMesh) -> Result<Self, ConstructionError> {
        let faces: Vec<u32> = (0..mesh.num_faces() as u32).collect();
        Self::build(mesh, &faces, None)
    }

    /// Builds a tree over a subset of the faces of `mesh`.
    ///
    /// If `forced_axis` is set, the faces are assumed to already be sorted along that axis:
    /// no sorting takes place and every level is split along `forced_axis`.
    ///
    /// Every face id must exist in `mesh` and appear at most once. A tree built over a strict
    /// subset of the faces can be queried and refit, but the contour computations reject it.
    pub fn from_faces(
        mesh: &SurfaceMesh,
        faces: &[u32],
        forced_axis: Option<usize>,
    ) -> Result<Self, ContourError> {
        if let Some(axis) = forced_axis {
            if axis >= DIM {
                return Err(PreconditionError::InvalidAxis(axis).into());
            }
        }

        let mut seen = vec![false; mesh.num_faces()];

        for fid in faces {
            let Some(seen) = seen.get_mut(*fid as usize) else {
                return Err(ConstructionError::FaceIndexOutOfBounds {
                    face: *fid,
                    num_faces: mesh.num_faces(),
                }
                .into());
            };

            if std::mem::replace(seen, true) {
                return Err(ConstructionError::DuplicateFace(*fid).into());
            }
        }

        Ok(Self::build(mesh, faces, forced_axis)?)
    }

    /// Builds a tree over every face of `mesh`, all levels split along `axis`.
    ///
    /// The faces are sorted once by their minimum coordinate along `axis`. Such a tree
    /// tends to prune well against planes orthogonal to `axis`.
    pub fn directional(mesh: &SurfaceMesh, axis: usize) -> Result<Self, ContourError> {
        if axis >= DIM {
            return Err(PreconditionError::InvalidAxis(axis).into());
        }

        let mut faces: Vec<(u32, Aabb)> = (0..mesh.num_faces() as u32)
            .map(|fid| (fid, mesh.face_aabb(fid)))
            .collect();
        faces.sort_by_key(|(_, aabb)| OrderedFloat(aabb.mins[axis]));
        let faces: Vec<u32> = faces.into_iter().map(|(fid, _)| fid).collect();

        Ok(Self::build(mesh, &faces, Some(axis))?)
    }

    fn build(
        mesh: &SurfaceMesh,
        faces: &[u32],
        forced_axis: Option<usize>,
    ) -> Result<Self, ConstructionError> {
        if faces.is_empty() {
            return Err(ConstructionError::EmptyFaceList);
        }

        let mut leaves: Vec<(u32, Aabb)> = faces
            .iter()
            .map(|fid| (*fid, mesh.face_aabb(*fid)))
            .collect();
        let mut nodes = Vec::with_capacity(leaves.len() * 2 - 1);
        nodes.push(BvhNode::zeros());

        // (node id, start, end) ranges of `leaves` still to be split.
        let mut stack = vec![(0usize, 0usize, leaves.len())];

        while let Some((id, start, end)) = stack.pop() {
            let range = &mut leaves[start..end];

            if range.len() == 1 {
                nodes[id] = BvhNode::leaf(range[0].1, range[0].0);
                continue;
            }

            if forced_axis.is_none() {
                let union = range
                    .iter()
                    .fold(Aabb::new_invalid(), |acc, (_, aabb)| acc.merged(aabb));
                let axis = union.longest_axis();
                // Stable, so equal keys keep their input order.
                range.sort_by_key(|(_, aabb)| OrderedFloat(aabb.mins[axis]));
            }

            let mid = start + range.len() / 2;
            let left = nodes.len();
            nodes.push(BvhNode::zeros());
            nodes.push(BvhNode::zeros());

            nodes[id].children = left as u32;
            nodes[id].leaf_count = (end - start) as u32;

            stack.push((left + 1, mid, end));
            stack.push((left, start, mid));
        }

        let mut result = Self {
            nodes,
            mesh_faces: mesh.num_faces(),
            forced_axis,
        };
        result.refit_internal_nodes();

        log::debug!(
            "Built bounding volume tree: {} leaves, {} nodes, depth {}.",
            result.leaf_count(),
            result.nodes.len(),
            result.depth()
        );

        Ok(result)
    }
}
