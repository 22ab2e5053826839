use crate::math::{Point, Real};

/// Which of the two meshes of an intersection an edge belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum MeshSide {
    /// The first mesh given to the intersector (the only one for plane intersections).
    First,
    /// The second mesh given to the intersector.
    Second,
}

impl MeshSide {
    /// The other side.
    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            MeshSide::First => MeshSide::Second,
            MeshSide::Second => MeshSide::First,
        }
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

/// What an edge was intersected with.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum Counterpart {
    /// A face of the other mesh.
    Face(u32),
    /// The cutting plane.
    Plane,
}

/// Identifies an edge/cutting-surface crossing.
///
/// Keys are ordered by side, then edge, then counterpart. The contour stitching always starts
/// from the smallest remaining key, which makes its output deterministic.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct IntersectionKey {
    /// The mesh `edge` belongs to.
    pub side: MeshSide,
    /// The intersected edge.
    pub edge: u32,
    /// The face or plane `edge` crosses.
    pub counterpart: Counterpart,
}

impl IntersectionKey {
    /// Creates a new key.
    #[inline]
    pub fn new(side: MeshSide, edge: u32, counterpart: Counterpart) -> Self {
        Self {
            side,
            edge,
            counterpart,
        }
    }
}

/// A point where an edge crosses the cutting surface.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct IntersectionPoint {
    /// What crossed what.
    pub key: IntersectionKey,
    /// The crossing location.
    pub point: Point<Real>,
}
