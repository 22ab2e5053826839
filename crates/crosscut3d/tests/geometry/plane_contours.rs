use super::fixtures::{cuboid, diamond, height_grid, octahedron, tree, unit_cube};
use crosscut3d::error::{ContourError, PreconditionError};
use crosscut3d::math::{Point, Real, Vector};
use crosscut3d::partitioning::BoundingVolumeTree;
use crosscut3d::transformation::contour::{Contour, Counterpart, Intersector, MeshSide};

fn positions(contour: &Contour) -> Vec<Point<Real>> {
    contour.positions().collect()
}

#[test]
fn unit_cube_sliced_at_mid_height() {
    let mesh = unit_cube();
    let tree = tree(&mesh);
    let contours = Intersector::new()
        .compute_intersection_with_plane(&mesh, &tree, 2, 0.0)
        .unwrap();

    assert_eq!(contours.len(), 1);
    let contour = &contours[0];
    assert!(contour.closed);
    // Four vertical edges and four side diagonals, then the first point again.
    assert_eq!(contour.len(), 9);
    assert_eq!(contour.num_vertices(), 8);
    assert_eq!(contour.points.first(), contour.points.last());

    let points = positions(contour);
    for pt in &points {
        assert_eq!(pt.z, 0.0);
        assert!(pt.x.abs() <= 0.5 && pt.y.abs() <= 0.5);
        assert!(pt.x.abs() == 0.5 || pt.y.abs() == 0.5);
    }

    for corner in [
        Point::new(-0.5, -0.5, 0.0),
        Point::new(0.5, -0.5, 0.0),
        Point::new(0.5, 0.5, 0.0),
        Point::new(-0.5, 0.5, 0.0),
    ] {
        assert!(points.contains(&corner));
    }

    for pt in &contour.points {
        assert_eq!(pt.key.side, MeshSide::First);
        assert_eq!(pt.key.counterpart, Counterpart::Plane);
    }
}

#[test]
fn consecutive_points_share_a_face() {
    let mesh = unit_cube();
    let tree = tree(&mesh);
    let contours = Intersector::new()
        .compute_intersection_with_plane(&mesh, &tree, 0, 0.1)
        .unwrap();
    let contour = &contours[0];
    assert!(contour.closed);

    // The repeated last point also covers the closing segment.
    for (i, pair) in contour.points.windows(2).enumerate() {
        let e1 = mesh.edge(pair[0].key.edge);
        let e2 = mesh.edge(pair[1].key.edge);
        assert!(
            e1.faces.iter().any(|f| e2.faces.contains(f)),
            "Points {} and {} do not share a face.",
            i,
            i + 1
        );
    }
}

#[test]
fn diamond_sliced_above_its_equator() {
    let mesh = diamond();
    let tree = tree(&mesh);
    let contours = Intersector::new()
        .compute_intersection_with_plane(&mesh, &tree, 2, 0.5)
        .unwrap();

    assert_eq!(contours.len(), 1);
    assert!(contours[0].closed);

    assert_eq!(contours[0].len(), 4);

    let (vertices, segments) = contours[0].to_polyline();
    assert_eq!(vertices.len(), 3);
    assert!(vertices.contains(&Point::new(-1.5, -0.75, 0.5)));
    assert!(vertices.contains(&Point::new(1.5, -0.75, 0.5)));
    assert!(vertices.contains(&Point::new(0.0, 1.5, 0.5)));
    assert_eq!(segments, vec![[0, 1], [1, 2], [2, 0]]);
}

#[test]
fn planes_missing_the_mesh_yield_nothing() {
    let mesh = unit_cube();
    let tree = tree(&mesh);
    let mut intersector = Intersector::new();

    for (axis, position) in [(0, 0.75), (1, -2.0), (2, 100.0)] {
        let contours = intersector
            .compute_intersection_with_plane(&mesh, &tree, axis, position)
            .unwrap();
        assert!(contours.is_empty());
    }
}

#[test]
fn every_orientation_slices_an_offset_box() {
    let center = Point::new(0.1, 0.2, 0.3);
    let half_extents = Vector::new(0.5, 0.75, 1.0);
    let mesh = cuboid(center, half_extents);
    let tree = tree(&mesh);
    let mut intersector = Intersector::new();

    for axis in 0..3 {
        let contours = intersector
            .compute_intersection_with_plane(&mesh, &tree, axis, 0.0)
            .unwrap();
        assert_eq!(contours.len(), 1);
        assert!(contours[0].closed);
        assert_eq!(contours[0].num_vertices(), 8);

        for pt in contours[0].positions() {
            assert!(pt[axis].abs() <= 1.0e-6);
            assert!(super::fixtures::on_cuboid_surface(&pt, center, half_extents));
        }
    }
}

#[test]
fn open_surface_gives_open_contour() {
    let mesh = height_grid(6);
    let tree = tree(&mesh);
    let contours = Intersector::new()
        .compute_intersection_with_plane(&mesh, &tree, 0, 2.37)
        .unwrap();

    assert_eq!(contours.len(), 1);
    let contour = &contours[0];
    assert!(!contour.closed);

    let first = contour.points.first().unwrap();
    let last = contour.points.last().unwrap();
    assert!(mesh.edge(first.key.edge).is_boundary());
    assert!(mesh.edge(last.key.edge).is_boundary());

    // The slice of a height field by x = c is monotonic in y.
    let ys: Vec<_> = contour.positions().map(|p| p.y).collect();
    let increasing = ys.windows(2).all(|w| w[0] < w[1]);
    let decreasing = ys.windows(2).all(|w| w[0] > w[1]);
    assert!(increasing || decreasing);
    assert_eq!(ys.len(), 6 + 1 + 6);
}

#[test]
fn repeated_queries_are_identical() {
    let mesh = height_grid(5);
    let tree = tree(&mesh);
    let mut intersector = Intersector::new();

    let first = intersector
        .compute_intersection_with_plane(&mesh, &tree, 1, 1.6)
        .unwrap();
    let second = intersector
        .compute_intersection_with_plane(&mesh, &tree, 1, 1.6)
        .unwrap();
    let fresh = Intersector::new()
        .compute_intersection_with_plane(&mesh, &tree, 1, 1.6)
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(first, fresh);
}

#[test]
fn directional_tree_gives_the_same_contours() {
    let mesh = unit_cube();
    let default_tree = tree(&mesh);
    let directional = BoundingVolumeTree::directional(&mesh, 2).unwrap();
    let mut intersector = Intersector::new();

    let a = intersector
        .compute_intersection_with_plane(&mesh, &default_tree, 2, 0.2)
        .unwrap();
    let b = intersector
        .compute_intersection_with_plane(&mesh, &directional, 2, 0.2)
        .unwrap();
    assert_eq!(a, b);
}

#[test]
fn precondition_errors() {
    let mesh = unit_cube();
    let grid = height_grid(2);
    let tree = tree(&mesh);
    let mut intersector = Intersector::new();

    assert_eq!(
        intersector.compute_intersection_with_plane(&mesh, &tree, 3, 0.0),
        Err(ContourError::Precondition(PreconditionError::InvalidAxis(3)))
    );
    assert_eq!(
        intersector.compute_intersection_with_plane(&grid, &tree, 2, 0.0),
        Err(ContourError::Precondition(
            PreconditionError::TreeMeshMismatch {
                tree_faces: 12,
                mesh_faces: 8
            }
        ))
    );
    assert_eq!(
        intersector.compute_intersection_with_plane(&mesh, &BoundingVolumeTree::new(), 2, 0.0),
        Err(ContourError::Precondition(PreconditionError::EmptyTree))
    );
}

#[test]
fn tree_over_some_faces_is_rejected() {
    let mesh = octahedron();
    let subset = BoundingVolumeTree::from_faces(&mesh, &[0, 1], None).unwrap();

    assert_eq!(
        Intersector::new().compute_intersection_with_plane(&mesh, &subset, 2, 0.5),
        Err(ContourError::Precondition(PreconditionError::PartialTree {
            tree_faces: 2,
            mesh_faces: 8
        }))
    );
}

#[test]
fn plane_through_mesh_vertices() {
    let mesh = octahedron();
    let tree = tree(&mesh);
    let mut intersector = Intersector::new();

    // The equator passes through four vertices and no edge interior.
    let contours = intersector
        .compute_intersection_with_plane(&mesh, &tree, 2, 0.0)
        .unwrap();
    assert_eq!(contours.len(), 1);
    let contour = &contours[0];
    assert!(contour.closed);
    assert_eq!(contour.len(), 5);
    assert_eq!(contour.points.first(), contour.points.last());

    let (vertices, segments) = contour.to_polyline();
    assert_eq!(vertices.len(), 4);
    assert_eq!(segments.len(), 4);
    for equator in &mesh.vertices()[..4] {
        assert!(vertices.contains(equator));
    }

    // Off the vertices, the same mesh gives a regular square.
    let contours = intersector
        .compute_intersection_with_plane(&mesh, &tree, 2, 0.5)
        .unwrap();
    assert_eq!(contours.len(), 1);
    assert!(contours[0].closed);
    assert_eq!(contours[0].num_vertices(), 4);
}

#[test]
fn plane_containing_a_face() {
    let mesh = unit_cube();
    let tree = tree(&mesh);
    let mut intersector = Intersector::new();

    // The top side lies in the plane: the contour runs around its four corners.
    let contours = intersector
        .compute_intersection_with_plane(&mesh, &tree, 2, 0.5)
        .unwrap();
    assert_eq!(contours.len(), 1);
    assert!(contours[0].closed);

    let (vertices, segments) = contours[0].to_polyline();
    assert_eq!(vertices.len(), 4);
    assert_eq!(segments.len(), 4);
    for pt in &vertices {
        assert_eq!(pt.z, 0.5);
        assert_eq!(pt.x.abs(), 0.5);
        assert_eq!(pt.y.abs(), 0.5);
    }

    // Vertices on the plane count as above it, so the bottom side gives nothing.
    let contours = intersector
        .compute_intersection_with_plane(&mesh, &tree, 2, -0.5)
        .unwrap();
    assert!(contours.is_empty());
}

#[test]
fn plane_along_grid_lines() {
    let mesh = height_grid(4);
    let tree = tree(&mesh);
    let mut intersector = Intersector::new();

    for (axis, position) in [(0, 2.0), (1, 1.0)] {
        let contours = intersector
            .compute_intersection_with_plane(&mesh, &tree, axis, position)
            .unwrap();
        assert_eq!(contours.len(), 1);
        let contour = &contours[0];
        assert!(!contour.closed);
        assert_eq!(contour.len(), 5);

        // Every point is a grid vertex on the line, visited once.
        let mut along: Vec<_> = contour.positions().map(|p| p[1 - axis]).collect();
        for pt in contour.positions() {
            assert_eq!(pt[axis], position);
            assert!(mesh.vertices().contains(&pt));
        }
        along.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(along, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    }
}
