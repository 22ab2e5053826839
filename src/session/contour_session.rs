use crate::error::{ContourError, PreconditionError};
use crate::math::{Point, Real};
use crate::partitioning::BoundingVolumeTree;
use crate::session::{Orientation, SessionConfig, SlicePlane, SliceStack};
use crate::shape::SurfaceMesh;
use crate::transformation::contour::{Contour, Intersector};
use std::time::Instant;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
/// What a [`ContourSession`] still has to recompute.
pub struct RefreshFlags(u8);

bitflags::bitflags! {
    impl RefreshFlags: u8 {
        /// The tree must be refit to the current vertex positions.
        const TREE = 1;
        /// The vertex positions changed: every plane contour is stale.
        const MESH = 1 << 1;
        /// The sagittal plane moved.
        const SAGITTAL = 1 << 2;
        /// The coronal plane moved.
        const CORONAL = 1 << 3;
        /// The axial plane moved.
        const AXIAL = 1 << 4;
    }
}

impl RefreshFlags {
    /// The flag of the plane with the given orientation.
    pub fn plane(orientation: Orientation) -> Self {
        match orientation {
            Orientation::Sagittal => Self::SAGITTAL,
            Orientation::Coronal => Self::CORONAL,
            Orientation::Axial => Self::AXIAL,
        }
    }
}

/// Keeps the plane contours of one edited mesh up to date.
///
/// Edits are recorded cheaply by [`Self::set_vertex_positions`] and [`Self::move_plane`].
/// [`Self::refresh`] then refits the tree once if the mesh changed, and recomputes the
/// contours of the planes that moved (or of every plane if the mesh changed).
pub struct ContourSession {
    mesh: SurfaceMesh,
    tree: BoundingVolumeTree,
    intersector: Intersector,
    planes: [Option<SlicePlane>; 3],
    contours: [Vec<Contour>; 3],
    slice_stack: Option<SliceStack>,
    pending: RefreshFlags,
}

impl ContourSession {
    /// Builds the tree of `mesh` and the planes described by `config`.
    ///
    /// No contour is computed until the first [`Self::refresh`].
    pub fn new(mesh: SurfaceMesh, config: &SessionConfig) -> Result<Self, ContourError> {
        let tree = match config.tree_axis {
            Some(axis) => BoundingVolumeTree::directional(&mesh, axis)?,
            None => BoundingVolumeTree::from_mesh(&mesh)?,
        };

        let mut planes = [None; 3];
        let mut pending = RefreshFlags::empty();

        for orientation in Orientation::ALL {
            if let Some(position) = config.plane_positions[orientation.axis()] {
                let mut plane = SlicePlane::new(orientation, position);
                if let Some(stack) = &config.slice_stack {
                    plane = plane.with_origin(stack.center);
                }
                planes[orientation.axis()] = Some(plane);
                pending |= RefreshFlags::plane(orientation);
            }
        }

        Ok(Self {
            mesh,
            tree,
            intersector: Intersector::new(),
            planes,
            contours: Default::default(),
            slice_stack: config.slice_stack,
            pending,
        })
    }

    /// The mesh of this session.
    #[inline]
    pub fn mesh(&self) -> &SurfaceMesh {
        &self.mesh
    }

    /// The tree of this session.
    ///
    /// May be stale until the next [`Self::refresh`] if the mesh was edited.
    #[inline]
    pub fn tree(&self) -> &BoundingVolumeTree {
        &self.tree
    }

    /// The plane with the given orientation, if enabled.
    #[inline]
    pub fn plane(&self, orientation: Orientation) -> Option<&SlicePlane> {
        self.planes[orientation.axis()].as_ref()
    }

    /// The contours computed by the last refresh for the plane with the given orientation.
    #[inline]
    pub fn contours(&self, orientation: Orientation) -> &[Contour] {
        &self.contours[orientation.axis()]
    }

    /// What the next [`Self::refresh`] will recompute.
    #[inline]
    pub fn pending(&self) -> RefreshFlags {
        self.pending
    }

    /// Does anything need to be recomputed?
    #[inline]
    pub fn needs_refresh(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Replaces the vertex positions of the mesh.
    pub fn set_vertex_positions(
        &mut self,
        positions: &[Point<Real>],
    ) -> Result<(), PreconditionError> {
        self.mesh.set_vertex_positions(positions)?;
        self.pending |= RefreshFlags::TREE | RefreshFlags::MESH;
        Ok(())
    }

    /// Slides the plane with the given orientation to `position`.
    ///
    /// Returns `false` if the plane is disabled or didn't actually move.
    pub fn move_plane(&mut self, orientation: Orientation, position: Real) -> bool {
        let Some(plane) = self.planes[orientation.axis()].as_mut() else {
            return false;
        };

        let moved = plane.set_position(position);
        if moved {
            self.pending |= RefreshFlags::plane(orientation);
        }
        moved
    }

    /// Slides the plane with the given orientation to the projection of `location` on its
    /// track.
    ///
    /// Planes slide along lines through the slice stack center if one was configured, through
    /// the world origin otherwise.
    pub fn move_plane_to(&mut self, orientation: Orientation, location: &Point<Real>) -> bool {
        let Some(constrained) = self.plane(orientation).map(|p| p.constrain(location)) else {
            return false;
        };

        self.move_plane(orientation, constrained[orientation.axis()])
    }

    /// The index of the image the plane with the given orientation currently shows.
    ///
    /// Returns `None` if the plane is disabled or no image stack was configured.
    pub fn slice_index(&self, orientation: Orientation) -> Option<usize> {
        let plane = self.plane(orientation)?;
        self.slice_stack?
            .slice_index_at(orientation, plane.position())
    }

    fn refit_if_needed(&mut self) -> Result<(), PreconditionError> {
        if self.pending.contains(RefreshFlags::TREE) {
            let timer = Instant::now();
            self.tree.refit(&self.mesh)?;
            self.pending.remove(RefreshFlags::TREE);
            log::debug!(
                "Refit tree in {:.3} ms.",
                timer.elapsed().as_secs_f64() * 1000.0
            );
        }

        Ok(())
    }

    /// Brings the tree and the plane contours up to date.
    ///
    /// Returns what was recomputed. On error, the stale parts stay pending and the contours
    /// of the planes that were not recomputed are kept as they were.
    pub fn refresh(&mut self) -> Result<RefreshFlags, ContourError> {
        let refreshed = self.pending;

        if refreshed.is_empty() {
            return Ok(refreshed);
        }

        let timer = Instant::now();

        if let Err(err) = self.refit_if_needed() {
            log::warn!("Contour refresh skipped: {}", err);
            return Err(err.into());
        }

        let mesh_changed = self.pending.contains(RefreshFlags::MESH);

        for orientation in Orientation::ALL {
            let flag = RefreshFlags::plane(orientation);
            let Some(plane) = self.planes[orientation.axis()].as_mut() else {
                continue;
            };

            if !mesh_changed && !self.pending.contains(flag) {
                continue;
            }

            let plane_timer = Instant::now();
            let contours = self
                .intersector
                .compute_intersection_with_plane(
                    &self.mesh,
                    &self.tree,
                    plane.axis(),
                    plane.position(),
                )
                .inspect_err(|err| {
                    log::warn!("Contour refresh of the {:?} plane failed: {}", orientation, err)
                })?;

            log::debug!(
                "{:?} plane at {}: {} contours in {:.3} ms.",
                orientation,
                plane.position(),
                contours.len(),
                plane_timer.elapsed().as_secs_f64() * 1000.0
            );

            plane.clear_moved();
            self.contours[orientation.axis()] = contours;
            self.pending.remove(flag);
        }

        self.pending.remove(RefreshFlags::MESH);
        log::debug!(
            "Refreshed {:?} in {:.3} ms.",
            refreshed,
            timer.elapsed().as_secs_f64() * 1000.0
        );

        Ok(refreshed)
    }

    /// Computes the intersection contours between the mesh of this session and another mesh.
    ///
    /// Refits the tree first if the mesh was edited since the last refresh. `other_tree` must
    /// be up to date with `other_mesh`.
    pub fn intersect_with(
        &mut self,
        other_mesh: &SurfaceMesh,
        other_tree: &BoundingVolumeTree,
    ) -> Result<Vec<Contour>, ContourError> {
        self.refit_if_needed()?;
        self.intersector
            .compute_intersection_contour(&self.mesh, &self.tree, other_mesh, other_tree)
    }
}
