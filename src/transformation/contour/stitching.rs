use super::{Contour, Counterpart, IntersectionKey, IntersectionPoint, Intersector};
use crate::error::IntegrityError;
use crate::shape::SurfaceMesh;
use arrayvec::ArrayVec;

impl Intersector {
    /// Chains every point of the bag into contours.
    ///
    /// `meshes` is indexed by [`MeshSide`](super::MeshSide).
    pub(super) fn stitch(
        &mut self,
        meshes: [&SurfaceMesh; 2],
    ) -> Result<Vec<Contour>, IntegrityError> {
        let num_points = self.bag.len();
        let mut contours = vec![];

        while let Some(start) = self.bag.pop_first() {
            contours.push(self.walk(start, meshes)?);
        }

        log::debug!(
            "Stitched {} intersection points into {} contours ({} closed).",
            num_points,
            contours.len(),
            contours.iter().filter(|c| c.closed).count()
        );

        Ok(contours)
    }

    fn point(&self, key: IntersectionKey) -> Option<IntersectionPoint> {
        let point = (*self.cache.get(&key)?)?;
        Some(IntersectionPoint { key, point })
    }

    // A point can be appended to the contour if it exists and hasn't been consumed yet. The
    // start point is the exception: reaching it again closes the contour.
    fn is_next_candidate(
        &self,
        key: &IntersectionKey,
        start: &IntersectionKey,
        can_close: bool,
    ) -> bool {
        matches!(self.cache.get(key), Some(Some(_)))
            && (self.bag.contains(key) || (can_close && key == start))
    }

    fn walk(
        &mut self,
        start: IntersectionKey,
        meshes: [&SurfaceMesh; 2],
    ) -> Result<Contour, IntegrityError> {
        let start_edge = *meshes[start.side.index()].edge(start.edge);
        let mut points: Vec<_> = self.point(start).into_iter().collect();
        let mut current = start;
        // The walk enters the second face of the start edge first.
        let mut previous_face = start_edge.faces[0];
        let mut reversed = false;

        loop {
            let edge = meshes[current.side.index()].edge(current.edge);

            let Some(this_face) = edge.other_face(previous_face) else {
                if reversed {
                    // Second boundary: the contour is open.
                    break;
                }

                // First boundary: walk away from the start point in the other direction.
                log::trace!("Contour hit a boundary on edge {}, reversing.", current.edge);
                points.reverse();
                reversed = true;
                current = start;
                previous_face = start_edge.faces[1];
                continue;
            };

            let Some((next, next_previous_face)) =
                self.find_next(current, this_face, meshes, &start, !reversed)
            else {
                return Err(IntegrityError::DanglingContour {
                    edge: current.edge,
                    face: this_face,
                });
            };

            if next == start {
                let first = points.first().copied();

                if points.len() > 1 && points.last().map(|p| p.point) == first.map(|p| p.point) {
                    let _ = points.pop();
                }

                points.extend(first);
                return Ok(Contour {
                    points,
                    closed: true,
                });
            }

            log::trace!("Contour step: {:?} -> {:?}.", current, next);
            let _ = self.bag.remove(&next);
            push_distinct(&mut points, self.point(next));
            current = next;
            previous_face = next_previous_face;
        }

        Ok(Contour {
            points,
            closed: false,
        })
    }

    // Finds the point following `current` when entering `this_face`.
    //
    // Returns the next point and the face the walk comes from when reaching it.
    fn find_next(
        &self,
        current: IntersectionKey,
        this_face: u32,
        meshes: [&SurfaceMesh; 2],
        start: &IntersectionKey,
        can_close: bool,
    ) -> Option<(IntersectionKey, u32)> {
        // The curve leaves `this_face` through one of its other edges…
        let face = meshes[current.side.index()].face(this_face);
        let mut other_edges: ArrayVec<u32, 3> = face
            .edges
            .iter()
            .copied()
            .filter(|e| *e != current.edge)
            .collect();
        other_edges.sort_unstable();

        for edge in other_edges {
            let key = IntersectionKey::new(current.side, edge, current.counterpart);
            if self.is_next_candidate(&key, start, can_close) {
                return Some((key, this_face));
            }
        }

        // … or through an edge of the counterpart face, on the other mesh.
        if let Counterpart::Face(counterpart) = current.counterpart {
            let other_side = current.side.flipped();
            let mut counterpart_edges = meshes[other_side.index()].face(counterpart).edges;
            counterpart_edges.sort_unstable();

            for edge in counterpart_edges {
                let key = IntersectionKey::new(other_side, edge, Counterpart::Face(this_face));
                if self.is_next_candidate(&key, start, can_close) {
                    return Some((key, counterpart));
                }
            }
        }

        None
    }
}

// Crossings at a mesh vertex lying on the cutting surface are found once per edge incident to
// that vertex. Only the first of such a run of coincident points is kept.
fn push_distinct(points: &mut Vec<IntersectionPoint>, point: Option<IntersectionPoint>) {
    if let Some(point) = point {
        if points.last().map(|p| p.point) != Some(point.point) {
            points.push(point);
        }
    }
}
