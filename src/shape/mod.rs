//! Shapes supported by crosscut.

pub use self::surface_mesh::SurfaceMesh;
pub use self::surface_mesh_topology::{MeshEdge, MeshFace, INVALID_INDEX};

mod surface_mesh;
mod surface_mesh_topology;
