/// Index used in place of a missing face or edge.
///
/// An edge whose second incident face is `INVALID_INDEX` lies on the boundary of the mesh.
pub const INVALID_INDEX: u32 = u32::MAX;

/// A triangle of a [`SurfaceMesh`](crate::shape::SurfaceMesh).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct MeshFace {
    /// The three vertices of this face, in winding order.
    pub vertices: [u32; 3],
    /// The three edges of this face.
    ///
    /// `edges[k]` joins `vertices[k]` and `vertices[(k + 1) % 3]`.
    pub edges: [u32; 3],
}

impl MeshFace {
    /// The local index (0, 1, or 2) of `edge` in this face.
    pub fn local_edge_index(&self, edge: u32) -> Option<usize> {
        self.edges.iter().position(|e| *e == edge)
    }
}

/// An undirected edge of a [`SurfaceMesh`](crate::shape::SurfaceMesh) with direct adjacency links.
///
/// Slot `0` of `faces`, `next` and `prev` refers to the first face that registered this edge,
/// slot `1` to the second one. A boundary edge has `faces[1] == INVALID_INDEX`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct MeshEdge {
    /// The first vertex of this edge, as seen from its first incident face.
    pub origin: u32,
    /// The second vertex of this edge, as seen from its first incident face.
    pub destination: u32,
    /// The (up to) two faces sharing this edge.
    pub faces: [u32; 2],
    /// For each incident face, the edge following this one in that face's winding order.
    pub next: [u32; 2],
    /// For each incident face, the edge preceding this one in that face's winding order.
    pub prev: [u32; 2],
}

impl MeshEdge {
    pub(crate) fn new(origin: u32, destination: u32, face: u32) -> Self {
        Self {
            origin,
            destination,
            faces: [face, INVALID_INDEX],
            next: [INVALID_INDEX; 2],
            prev: [INVALID_INDEX; 2],
        }
    }

    /// The face that first registered this edge.
    #[inline]
    pub fn face_a(&self) -> u32 {
        self.faces[0]
    }

    /// The second incident face, if this edge isn't on the boundary.
    #[inline]
    pub fn face_b(&self) -> Option<u32> {
        (self.faces[1] != INVALID_INDEX).then_some(self.faces[1])
    }

    /// Is this edge shared by only one face?
    #[inline]
    pub fn is_boundary(&self) -> bool {
        self.faces[1] == INVALID_INDEX
    }

    /// The incident face that is not `face`.
    ///
    /// Passing [`INVALID_INDEX`] on a boundary edge returns its only face. Returns `None` if the
    /// other face doesn't exist or if `face` isn't incident to this edge.
    pub fn other_face(&self, face: u32) -> Option<u32> {
        let other = if self.faces[0] == face {
            self.faces[1]
        } else if self.faces[1] == face {
            self.faces[0]
        } else {
            return None;
        };

        (other != INVALID_INDEX).then_some(other)
    }

    fn slot(&self, face: u32) -> Option<usize> {
        if face == INVALID_INDEX {
            None
        } else {
            self.faces.iter().position(|f| *f == face)
        }
    }

    /// The edge following this one in the winding order of `face`.
    pub fn next_in(&self, face: u32) -> Option<u32> {
        self.slot(face).map(|i| self.next[i])
    }

    /// The edge preceding this one in the winding order of `face`.
    pub fn prev_in(&self, face: u32) -> Option<u32> {
        self.slot(face).map(|i| self.prev[i])
    }
}
