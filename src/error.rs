//! Errors raised while building or querying the contour pipeline.

/// Error raised while building a [`SurfaceMesh`](crate::shape::SurfaceMesh) or a
/// [`BoundingVolumeTree`](crate::partitioning::BoundingVolumeTree).
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConstructionError {
    /// An edge would be shared by more than two triangles.
    #[error("the edge ({0}, {1}) already has two incident faces, cannot add face {2}")]
    NonManifoldEdge(u32, u32, u32),
    /// A tree was requested over an empty set of faces.
    #[error("cannot build a bounding volume tree over zero faces")]
    EmptyFaceList,
    /// A triangle references the same vertex more than once.
    #[error("the triangle {0} references the same vertex more than once")]
    BadTriangle(u32),
    /// A tree was requested over a face that does not exist.
    #[error("cannot index face {face}, the mesh only has {num_faces} faces")]
    FaceIndexOutOfBounds {
        /// The out-of-bounds face index.
        face: u32,
        /// The number of faces of the mesh.
        num_faces: usize,
    },
    /// A tree was requested over a face list containing the same face twice.
    #[error("the face {0} is listed more than once")]
    DuplicateFace(u32),
    /// A triangle references a vertex that does not exist.
    #[error("the triangle {triangle} references vertex {vertex} but only {num_vertices} vertices exist")]
    VertexIndexOutOfBounds {
        /// The offending triangle.
        triangle: u32,
        /// The out-of-bounds vertex index.
        vertex: u32,
        /// The number of vertices of the mesh.
        num_vertices: usize,
    },
}

/// Error raised when contour stitching finds the topology and the intersection
/// points inconsistent.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum IntegrityError {
    /// No continuation was found for a contour on an edge with two incident faces.
    #[error("no next intersection point found after edge {edge} in face {face}")]
    DanglingContour {
        /// The edge the contour stopped at.
        edge: u32,
        /// The face the walk was entering.
        face: u32,
    },
}

/// Error raised when an operation is called on inputs of the wrong shape.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum PreconditionError {
    /// The tree was built for a mesh with a different number of faces.
    #[error("the tree indexes {tree_faces} faces but the mesh has {mesh_faces}")]
    TreeMeshMismatch {
        /// Number of leaves of the tree.
        tree_faces: usize,
        /// Number of faces of the mesh.
        mesh_faces: usize,
    },
    /// The tree only indexes some of the faces of the mesh.
    #[error("the tree indexes {tree_faces} of the {mesh_faces} faces of the mesh")]
    PartialTree {
        /// Number of leaves of the tree.
        tree_faces: usize,
        /// Number of faces of the mesh.
        mesh_faces: usize,
    },
    /// The tree has no nodes.
    #[error("the bounding volume tree is empty")]
    EmptyTree,
    /// The axis index is not 0, 1, or 2.
    #[error("invalid axis {0}, expected 0, 1, or 2")]
    InvalidAxis(usize),
    /// The new vertex buffer does not match the mesh's vertex count.
    #[error("expected {expected} vertex positions, got {found}")]
    VertexCountMismatch {
        /// The number of vertices of the mesh.
        expected: usize,
        /// The number of positions provided.
        found: usize,
    },
}

/// Any error raised by this crate.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum ContourError {
    /// See [`ConstructionError`].
    #[error(transparent)]
    Construction(#[from] ConstructionError),
    /// See [`IntegrityError`].
    #[error(transparent)]
    Integrity(#[from] IntegrityError),
    /// See [`PreconditionError`].
    #[error(transparent)]
    Precondition(#[from] PreconditionError),
}
