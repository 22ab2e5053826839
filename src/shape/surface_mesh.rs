use crate::bounding_volume::Aabb;
use crate::error::{ConstructionError, PreconditionError};
use crate::math::{Point, Real};
use crate::shape::{MeshEdge, MeshFace, INVALID_INDEX};
use crate::utils::hashmap::{Entry, HashMap};
use crate::utils::SortedPair;

/// A triangle mesh with explicit edges and face/edge adjacency.
///
/// The topology (faces, edges and their links) is computed once by [`SurfaceMesh::new`] and
/// never changes afterward. Only the vertex positions may be updated, with
/// [`SurfaceMesh::set_vertex_positions`].
///
/// Every edge is shared by at most two faces. Edges are identified by their unordered pair of
/// endpoints, so `lookup(u, v) == lookup(v, u)`.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct SurfaceMesh {
    vertices: Vec<Point<Real>>,
    faces: Vec<MeshFace>,
    edges: Vec<MeshEdge>,
    edge_map: HashMap<SortedPair<u32>, u32>,
}

impl SurfaceMesh {
    /// Builds the mesh and its topology from vertex positions and triangles.
    ///
    /// Edge `k` of each triangle joins its vertices `k` and `(k + 1) % 3`. The first triangle
    /// visiting an edge creates it, the second one is registered as its second face, and a
    /// third one is rejected with [`ConstructionError::NonManifoldEdge`].
    pub fn new(
        vertices: Vec<Point<Real>>,
        triangles: Vec<[u32; 3]>,
    ) -> Result<Self, ConstructionError> {
        let mut faces = Vec::with_capacity(triangles.len());
        let mut edges: Vec<MeshEdge> = Vec::with_capacity(triangles.len() * 3 / 2 + 1);
        let mut edge_map = HashMap::default();

        for (fid, idx) in triangles.iter().enumerate() {
            let fid = fid as u32;

            for vid in idx {
                if *vid as usize >= vertices.len() {
                    return Err(ConstructionError::VertexIndexOutOfBounds {
                        triangle: fid,
                        vertex: *vid,
                        num_vertices: vertices.len(),
                    });
                }
            }

            if idx[0] == idx[1] || idx[0] == idx[2] || idx[1] == idx[2] {
                return Err(ConstructionError::BadTriangle(fid));
            }

            let mut face_edges = [INVALID_INDEX; 3];
            // Which adjacency slot of each edge this face occupies.
            let mut slots = [0; 3];

            for k in 0..3 {
                let (a, b) = (idx[k], idx[(k + 1) % 3]);

                match edge_map.entry(SortedPair::new(a, b)) {
                    Entry::Vacant(entry) => {
                        let eid = edges.len() as u32;
                        edges.push(MeshEdge::new(a, b, fid));
                        let _ = entry.insert(eid);
                        face_edges[k] = eid;
                    }
                    Entry::Occupied(entry) => {
                        let eid = *entry.get();
                        let edge = &mut edges[eid as usize];

                        if edge.faces[1] != INVALID_INDEX {
                            return Err(ConstructionError::NonManifoldEdge(a, b, fid));
                        }

                        edge.faces[1] = fid;
                        face_edges[k] = eid;
                        slots[k] = 1;
                    }
                }
            }

            for k in 0..3 {
                let edge = &mut edges[face_edges[k] as usize];
                edge.next[slots[k]] = face_edges[(k + 1) % 3];
                edge.prev[slots[k]] = face_edges[(k + 2) % 3];
            }

            faces.push(MeshFace {
                vertices: *idx,
                edges: face_edges,
            });
        }

        log::debug!(
            "Built surface mesh: {} vertices, {} faces, {} edges.",
            vertices.len(),
            faces.len(),
            edges.len()
        );

        Ok(Self {
            vertices,
            faces,
            edges,
            edge_map,
        })
    }

    /// The vertex positions of this mesh.
    #[inline]
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// The faces of this mesh.
    #[inline]
    pub fn faces(&self) -> &[MeshFace] {
        &self.faces
    }

    /// The edges of this mesh.
    #[inline]
    pub fn edges(&self) -> &[MeshEdge] {
        &self.edges
    }

    /// The number of vertices of this mesh.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// The number of faces of this mesh.
    #[inline]
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// The number of edges of this mesh.
    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// The face with index `i`.
    #[inline]
    pub fn face(&self, i: u32) -> &MeshFace {
        &self.faces[i as usize]
    }

    /// The edge with index `i`.
    #[inline]
    pub fn edge(&self, i: u32) -> &MeshEdge {
        &self.edges[i as usize]
    }

    /// Finds the edge joining the vertices `u` and `v`, in any order.
    pub fn lookup(&self, u: u32, v: u32) -> Option<u32> {
        self.edge_map.get(&SortedPair::new(u, v)).copied()
    }

    /// Replaces every vertex position of this mesh.
    ///
    /// The topology is unaffected. The positions must be given in the same order, and in the
    /// same number, as the vertices this mesh was built with.
    pub fn set_vertex_positions(
        &mut self,
        positions: &[Point<Real>],
    ) -> Result<(), PreconditionError> {
        if positions.len() != self.vertices.len() {
            return Err(PreconditionError::VertexCountMismatch {
                expected: self.vertices.len(),
                found: positions.len(),
            });
        }

        self.vertices.copy_from_slice(positions);
        Ok(())
    }

    /// The three current vertex positions of the face `i`.
    #[inline]
    pub fn face_points(&self, i: u32) -> [Point<Real>; 3] {
        let idx = self.faces[i as usize].vertices;
        [
            self.vertices[idx[0] as usize],
            self.vertices[idx[1] as usize],
            self.vertices[idx[2] as usize],
        ]
    }

    /// The current endpoints of the edge `i`, from its origin to its destination.
    #[inline]
    pub fn edge_segment(&self, i: u32) -> (Point<Real>, Point<Real>) {
        let edge = &self.edges[i as usize];
        (
            self.vertices[edge.origin as usize],
            self.vertices[edge.destination as usize],
        )
    }

    /// The AABB of the face `i` at its current vertex positions.
    #[inline]
    pub fn face_aabb(&self, i: u32) -> Aabb {
        Aabb::from_points(self.face_points(i))
    }

    /// The AABB of the whole mesh.
    pub fn local_aabb(&self) -> Aabb {
        Aabb::from_points(self.vertices.iter().copied())
    }

    /// Iterates through the indices of the edges with a single incident face.
    pub fn boundary_edges(&self) -> impl Iterator<Item = u32> + '_ {
        self.edges
            .iter()
            .enumerate()
            .filter(|(_, e)| e.is_boundary())
            .map(|(i, _)| i as u32)
    }

    /// Is every edge of this mesh shared by exactly two faces?
    pub fn is_closed(&self) -> bool {
        self.edges.iter().all(|e| !e.is_boundary())
    }

    /// Panics if the topology of this mesh is inconsistent.
    ///
    /// Checks that every face's edges point back to it, that the edge map agrees with the
    /// edge list, and that the next/prev links of each incident face follow its winding order.
    pub fn assert_topology_is_valid(&self) {
        assert_eq!(self.edge_map.len(), self.edges.len());

        for (eid, edge) in self.edges.iter().enumerate() {
            assert_eq!(
                self.lookup(edge.origin, edge.destination),
                Some(eid as u32)
            );
            assert_ne!(edge.faces[0], INVALID_INDEX);
            assert_ne!(edge.faces[0], edge.faces[1]);

            for slot in 0..2 {
                let fid = edge.faces[slot];
                if fid == INVALID_INDEX {
                    continue;
                }

                let face = &self.faces[fid as usize];
                let k = face
                    .local_edge_index(eid as u32)
                    .unwrap_or_else(|| panic!("Edge {} is not part of face {}.", eid, fid));
                assert_eq!(edge.next[slot], face.edges[(k + 1) % 3]);
                assert_eq!(edge.prev[slot], face.edges[(k + 2) % 3]);
            }
        }

        for (fid, face) in self.faces.iter().enumerate() {
            for k in 0..3 {
                let edge = &self.edges[face.edges[k] as usize];
                assert!(edge.faces.contains(&(fid as u32)));
                assert_eq!(
                    SortedPair::new(edge.origin, edge.destination),
                    SortedPair::new(face.vertices[k], face.vertices[(k + 1) % 3])
                );
            }
        }
    }
}
