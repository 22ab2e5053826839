use crate::bounding_volume::Aabb;
use crate::error::PreconditionError;
use crate::math::{Point, Real};
use crate::shape::SurfaceMesh;

/// A node (internal or leaf) of a [`BoundingVolumeTree`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct BvhNode {
    /// Mins coordinates of the node’s bounding volume.
    pub(super) mins: Point<Real>,
    /// Maxs coordinates of this node’s bounding volume.
    pub(super) maxs: Point<Real>,
    /// The face index if this node is a leaf, or the index of its first child otherwise.
    ///
    /// The two children of an internal node are stored next to each other, at
    /// `children` and `children + 1`.
    pub(super) children: u32,
    /// Number of leaves in the subtree rooted at this node.
    pub(super) leaf_count: u32,
}

impl BvhNode {
    #[inline(always)]
    pub(super) fn zeros() -> Self {
        Self {
            mins: Point::origin(),
            maxs: Point::origin(),
            children: 0,
            leaf_count: 0,
        }
    }

    /// Initializes a leaf.
    #[inline(always)]
    pub fn leaf(aabb: Aabb, face: u32) -> BvhNode {
        Self {
            mins: aabb.mins,
            maxs: aabb.maxs,
            children: face,
            leaf_count: 1,
        }
    }

    /// If this node is a leaf, returns the index of the face it bounds.
    #[inline(always)]
    pub fn leaf_data(&self) -> Option<u32> {
        self.is_leaf().then_some(self.children)
    }

    /// Is this node a leaf?
    #[inline(always)]
    pub fn is_leaf(&self) -> bool {
        self.leaf_count == 1
    }

    /// The number of leaves below this node (1 for a leaf).
    #[inline(always)]
    pub fn leaf_count(&self) -> u32 {
        self.leaf_count
    }

    /// The min corner of this node’s AABB.
    #[inline]
    pub fn mins(&self) -> Point<Real> {
        self.mins
    }

    /// The max corner of this node’s AABB.
    #[inline]
    pub fn maxs(&self) -> Point<Real> {
        self.maxs
    }

    /// This node’s AABB.
    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb {
            mins: self.mins,
            maxs: self.maxs,
        }
    }

    #[inline(always)]
    pub(super) fn set_aabb(&mut self, aabb: Aabb) {
        self.mins = aabb.mins;
        self.maxs = aabb.maxs;
    }

    /// Checks if the AABB of `self` intersects the `other` node’s AABB.
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        na::partial_le(&self.mins, &other.maxs) && na::partial_ge(&self.maxs, &other.mins)
    }

    /// Checks if the AABB of `self` fully encloses the `other` node’s AABB.
    #[inline]
    pub fn contains(&self, other: &Self) -> bool {
        na::partial_le(&self.mins, &other.mins) && na::partial_ge(&self.maxs, &other.maxs)
    }
}

/// A binary AABB tree over the faces of a [`SurfaceMesh`].
///
/// Nodes are stored in a flat arena. The root is at index 0 and every internal node has
/// exactly two children stored at consecutive indices greater than its own. Each leaf bounds
/// exactly one face, so a tree built over `n` faces has `n` leaves and `2n - 1` nodes.
///
/// The tree keeps the face count of the mesh it was built from, and rejects meshes with a
/// different face count in [`Self::refit`] and in the contour computations. The contour
/// computations also reject trees built over a subset of the faces.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct BoundingVolumeTree {
    pub(super) nodes: Vec<BvhNode>,
    pub(super) mesh_faces: usize,
    pub(super) forced_axis: Option<usize>,
}

impl BoundingVolumeTree {
    /// An empty tree.
    ///
    /// Every query on an empty tree fails with [`PreconditionError::EmptyTree`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Does this tree contain no node at all?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The nodes of this tree, root first.
    #[inline]
    pub fn nodes(&self) -> &[BvhNode] {
        &self.nodes
    }

    /// The root node of this tree.
    #[inline]
    pub fn root(&self) -> Option<&BvhNode> {
        self.nodes.first()
    }

    /// The AABB enclosing everything in this tree.
    pub fn root_aabb(&self) -> Option<Aabb> {
        self.root().map(BvhNode::aabb)
    }

    /// The number of leaves (faces) of this tree.
    #[inline]
    pub fn leaf_count(&self) -> u32 {
        self.root().map(|n| n.leaf_count).unwrap_or(0)
    }

    /// The axis every level of this tree was split along, if it was built directionally.
    #[inline]
    pub fn forced_axis(&self) -> Option<usize> {
        self.forced_axis
    }

    /// The number of faces of the mesh this tree was built for.
    #[inline]
    pub fn mesh_face_count(&self) -> usize {
        self.mesh_faces
    }

    /// Returns an error unless this tree is non-empty and was built for a mesh with as many
    /// faces as `mesh`.
    ///
    /// Trees built over a subset of the faces pass this check, so they can be refit.
    pub fn check_built_for(&self, mesh: &SurfaceMesh) -> Result<(), PreconditionError> {
        if self.is_empty() {
            Err(PreconditionError::EmptyTree)
        } else if self.mesh_faces != mesh.num_faces() {
            Err(PreconditionError::TreeMeshMismatch {
                tree_faces: self.mesh_faces,
                mesh_faces: mesh.num_faces(),
            })
        } else {
            Ok(())
        }
    }

    /// Same as [`Self::check_built_for`], and also requires every face of `mesh` to have a leaf.
    ///
    /// Contour computations walk from face to face, so they need a tree over the whole mesh.
    pub fn check_matches(&self, mesh: &SurfaceMesh) -> Result<(), PreconditionError> {
        self.check_built_for(mesh)?;

        if self.leaf_count() as usize != mesh.num_faces() {
            return Err(PreconditionError::PartialTree {
                tree_faces: self.leaf_count() as usize,
                mesh_faces: mesh.num_faces(),
            });
        }

        Ok(())
    }

    /// The length of the longest path from the root to a leaf (1 for a single leaf).
    pub fn depth(&self) -> u32 {
        if self.nodes.is_empty() {
            return 0;
        }

        let mut max_depth = 0;
        let mut stack = vec![(0u32, 1u32)];

        while let Some((id, depth)) = stack.pop() {
            let node = &self.nodes[id as usize];
            max_depth = max_depth.max(depth);

            if !node.is_leaf() {
                stack.push((node.children, depth + 1));
                stack.push((node.children + 1, depth + 1));
            }
        }

        max_depth
    }
}
