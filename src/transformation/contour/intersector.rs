use super::{Contour, Counterpart, IntersectionKey, MeshSide};
use crate::error::ContourError;
use crate::math::{Point, Real};
use crate::partitioning::BoundingVolumeTree;
use crate::query::{segment_orthogonal_plane, segment_triangle};
use crate::shape::SurfaceMesh;
use crate::utils::hashmap::HashMap;
use std::collections::BTreeSet;

/// Computes intersection contours between a mesh and another mesh or an axis-aligned plane.
///
/// Each computation runs in three phases:
/// 1. **Broad phase**: the bounding volume trees select the faces that may intersect.
/// 2. **Narrow phase**: the edges of those faces are intersected with the cutting surface.
///    Every edge/counterpart test is memoized, so shared edges are only tested once.
/// 3. **Stitching**: the crossing points are chained into [`Contour`]s by walking from face
///    to face through the mesh topology.
///
/// The intersector only keeps the memoized tests of the current call. It is cleared at the
/// start of every computation and can be reused to avoid reallocations.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use crosscut3d::partitioning::BoundingVolumeTree;
/// use crosscut3d::shape::SurfaceMesh;
/// use crosscut3d::transformation::contour::Intersector;
/// use nalgebra::Point3;
///
/// // A tetrahedron with its apex above the plane z = 0.5.
/// let vertices = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
///     Point3::new(0.0, 0.0, 1.0),
/// ];
/// let triangles = vec![[0, 2, 1], [0, 1, 3], [1, 2, 3], [2, 0, 3]];
/// let mesh = SurfaceMesh::new(vertices, triangles).unwrap();
/// let tree = BoundingVolumeTree::from_mesh(&mesh).unwrap();
///
/// let contours = Intersector::new()
///     .compute_intersection_with_plane(&mesh, &tree, 2, 0.5)
///     .unwrap();
/// assert_eq!(contours.len(), 1);
/// assert!(contours[0].closed);
/// assert_eq!(contours[0].num_vertices(), 3);
/// assert_eq!(contours[0].points.first(), contours[0].points.last());
/// # }
/// ```
#[derive(Clone, Debug, Default)]
pub struct Intersector {
    pub(super) cache: HashMap<IntersectionKey, Option<Point<Real>>>,
    pub(super) bag: BTreeSet<IntersectionKey>,
}

impl Intersector {
    /// Creates a new intersector with empty caches.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of edge/counterpart tests performed by the last computation.
    pub fn num_cached_tests(&self) -> usize {
        self.cache.len()
    }

    /// The number of crossing points found by the last computation.
    pub fn num_intersection_points(&self) -> usize {
        self.cache.values().filter(|pt| pt.is_some()).count()
    }

    fn clear(&mut self) {
        self.cache.clear();
        self.bag.clear();
    }

    /// Computes the contours along which the surfaces of `mesh1` and `mesh2` intersect.
    ///
    /// `tree1` and `tree2` must have been built over every face of (and refit to) `mesh1` and
    /// `mesh2`.
    /// Points on edges of `mesh1` are tagged [`MeshSide::First`], points on edges of `mesh2`
    /// [`MeshSide::Second`].
    pub fn compute_intersection_contour(
        &mut self,
        mesh1: &SurfaceMesh,
        tree1: &BoundingVolumeTree,
        mesh2: &SurfaceMesh,
        tree2: &BoundingVolumeTree,
    ) -> Result<Vec<Contour>, ContourError> {
        self.clear();
        tree1.check_matches(mesh1)?;
        tree2.check_matches(mesh2)?;

        let pairs = tree1.collides_with_tree(tree2)?;

        for (face1, face2) in &pairs {
            for edge in mesh1.face(*face1).edges {
                self.test_edge_against_face(MeshSide::First, edge, mesh1, *face2, mesh2);
            }

            for edge in mesh2.face(*face2).edges {
                self.test_edge_against_face(MeshSide::Second, edge, mesh2, *face1, mesh1);
            }
        }

        log::trace!(
            "Mesh/mesh narrow phase: {} face pairs, {} tests, {} crossings.",
            pairs.len(),
            self.cache.len(),
            self.bag.len()
        );

        Ok(self.stitch([mesh1, mesh2])?)
    }

    /// Computes the contours along which `mesh` crosses the plane orthogonal to the
    /// `axis`-th coordinate axis, located at `position` along that axis.
    ///
    /// `tree` must have been built for (and refit to) `mesh`. Mesh vertices lying exactly on
    /// the plane are treated as being above it, so a face lying in the plane does not
    /// contribute crossings and a contour through such a vertex visits it once.
    pub fn compute_intersection_with_plane(
        &mut self,
        mesh: &SurfaceMesh,
        tree: &BoundingVolumeTree,
        axis: usize,
        position: Real,
    ) -> Result<Vec<Contour>, ContourError> {
        self.clear();
        tree.check_matches(mesh)?;

        let faces = tree.collides_with_orthogonal_plane(axis, position)?;
        self.test_faces_against_plane(mesh, &faces, axis, position);

        log::trace!(
            "Plane narrow phase: {} faces, {} tests, {} crossings.",
            faces.len(),
            self.cache.len(),
            self.bag.len()
        );

        Ok(self.stitch([mesh, mesh])?)
    }

    // Vertices lying on the plane count as being above it. An edge crosses the plane iff its
    // endpoints are on different sides, so every face has either zero or two crossing edges.
    // An edge leaving the plane downward crosses it at its on-plane endpoint.
    fn test_faces_against_plane(
        &mut self,
        mesh: &SurfaceMesh,
        faces: &[u32],
        axis: usize,
        position: Real,
    ) {
        for face in faces {
            for edge in mesh.face(*face).edges {
                let key = IntersectionKey::new(MeshSide::First, edge, Counterpart::Plane);
                let hit = *self.cache.entry(key).or_insert_with(|| {
                    let (p0, p1) = mesh.edge_segment(edge);

                    if (p0[axis] < position) == (p1[axis] < position) {
                        None
                    } else if p0[axis] == position {
                        Some(p0)
                    } else if p1[axis] == position {
                        Some(p1)
                    } else {
                        segment_orthogonal_plane(&p0, &p1, axis, position)
                    }
                });

                if hit.is_some() {
                    let _ = self.bag.insert(key);
                }
            }
        }
    }

    fn test_edge_against_face(
        &mut self,
        side: MeshSide,
        edge: u32,
        edge_mesh: &SurfaceMesh,
        face: u32,
        face_mesh: &SurfaceMesh,
    ) {
        let key = IntersectionKey::new(side, edge, Counterpart::Face(face));
        let hit = *self.cache.entry(key).or_insert_with(|| {
            let (p0, p1) = edge_mesh.edge_segment(edge);
            let [a, b, c] = face_mesh.face_points(face);
            segment_triangle(&a, &b, &c, &p0, &p1, true)
        });

        if hit.is_some() {
            let _ = self.bag.insert(key);
        }
    }
}
