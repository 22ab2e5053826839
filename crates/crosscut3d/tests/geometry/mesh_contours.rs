use super::fixtures::{cuboid, on_cuboid_surface, tree, unit_cube};
use crosscut3d::error::{ContourError, PreconditionError};
use crosscut3d::math::{Point, Real, Vector};
use crosscut3d::shape::SurfaceMesh;
use crosscut3d::transformation::contour::{Contour, Counterpart, Intersector, MeshSide};

fn single_triangle(a: Point<Real>, b: Point<Real>, c: Point<Real>) -> SurfaceMesh {
    SurfaceMesh::new(vec![a, b, c], vec![[0, 1, 2]]).unwrap()
}

fn num_points(contours: &[Contour]) -> usize {
    contours.iter().map(Contour::num_vertices).sum()
}

#[test]
fn overlapping_cubes_meet_along_one_loop() {
    let half_extents = Vector::repeat(0.5);
    let offset = Point::new(0.37, 0.29, 0.23);
    let mesh1 = unit_cube();
    let mesh2 = cuboid(offset, half_extents);
    let (tree1, tree2) = (tree(&mesh1), tree(&mesh2));

    let mut intersector = Intersector::new();
    let contours = intersector
        .compute_intersection_contour(&mesh1, &tree1, &mesh2, &tree2)
        .unwrap();

    assert_eq!(contours.len(), 1);
    let contour = &contours[0];
    assert!(contour.closed);
    assert!(contour.num_vertices() >= 6);
    assert_eq!(contour.len(), contour.num_vertices() + 1);
    assert_eq!(contour.points.first(), contour.points.last());
    assert_eq!(intersector.num_intersection_points(), contour.num_vertices());

    for pt in contour.positions() {
        assert!(on_cuboid_surface(&pt, Point::origin(), half_extents));
        assert!(on_cuboid_surface(&pt, offset, half_extents));
    }

    // Both meshes contribute edges to the curve.
    assert!(contour.points.iter().any(|p| p.key.side == MeshSide::First));
    assert!(contour.points.iter().any(|p| p.key.side == MeshSide::Second));
    assert!(contour
        .points
        .iter()
        .all(|p| matches!(p.key.counterpart, Counterpart::Face(_))));
}

#[test]
fn swapping_the_meshes_finds_the_same_points() {
    let mesh1 = unit_cube();
    let mesh2 = cuboid(Point::new(-0.21, 0.33, -0.41), Vector::new(0.4, 0.45, 0.5));
    let (tree1, tree2) = (tree(&mesh1), tree(&mesh2));
    let mut intersector = Intersector::new();

    let forward = intersector
        .compute_intersection_contour(&mesh1, &tree1, &mesh2, &tree2)
        .unwrap();
    let backward = intersector
        .compute_intersection_contour(&mesh2, &tree2, &mesh1, &tree1)
        .unwrap();

    assert_eq!(forward.len(), backward.len());
    assert_eq!(num_points(&forward), num_points(&backward));
    assert!(num_points(&forward) > 0);
}

#[test]
fn disjoint_cubes_do_not_intersect() {
    let mesh1 = unit_cube();
    let mesh2 = cuboid(Point::new(0.0, 2.0, 0.0), Vector::repeat(0.5));
    let contours = Intersector::new()
        .compute_intersection_contour(&mesh1, &tree(&mesh1), &mesh2, &tree(&mesh2))
        .unwrap();
    assert!(contours.is_empty());
}

#[test]
fn parallel_triangles_have_overlapping_boxes_but_no_contour() {
    let mesh1 = single_triangle(
        Point::new(0.0, 0.0, 0.0),
        Point::new(1.0, 0.0, 0.0),
        Point::new(0.0, 1.0, 1.0),
    );
    let shift = Vector::new(0.0, 0.0, 0.5);
    let moved: Vec<_> = mesh1.vertices().iter().map(|p| *p + shift).collect();
    let mesh2 = SurfaceMesh::new(moved, vec![[0, 1, 2]]).unwrap();
    let (tree1, tree2) = (tree(&mesh1), tree(&mesh2));

    assert_eq!(tree1.collides_with_tree(&tree2).unwrap(), vec![(0, 0)]);

    let mut intersector = Intersector::new();
    let contours = intersector
        .compute_intersection_contour(&mesh1, &tree1, &mesh2, &tree2)
        .unwrap();
    assert!(contours.is_empty());
    assert_eq!(intersector.num_cached_tests(), 6);
    assert_eq!(intersector.num_intersection_points(), 0);
}

#[test]
fn crossing_triangles_give_an_open_segment() {
    let horizontal = single_triangle(
        Point::new(-1.0, -1.0, 0.0),
        Point::new(2.0, -1.0, 0.0),
        Point::new(-1.0, 2.0, 0.0),
    );
    let vertical = single_triangle(
        Point::new(0.0, 0.0, -1.0),
        Point::new(1.0, 0.0, -1.0),
        Point::new(0.5, 0.0, 1.0),
    );

    let contours = Intersector::new()
        .compute_intersection_contour(&horizontal, &tree(&horizontal), &vertical, &tree(&vertical))
        .unwrap();

    assert_eq!(contours.len(), 1);
    let contour = &contours[0];
    assert!(!contour.closed);
    assert_eq!(contour.len(), 2);

    for expected in [Point::new(0.75, 0.0, 0.0), Point::new(0.25, 0.0, 0.0)] {
        assert!(contour
            .positions()
            .any(|pt| approx::relative_eq!(pt, expected, epsilon = 1.0e-5)));
    }
    assert!(contour
        .points
        .iter()
        .all(|p| p.key.side == MeshSide::Second && p.key.counterpart == Counterpart::Face(0)));

    let (_, segments) = contour.to_polyline();
    assert_eq!(segments, vec![[0, 1]]);
}

#[test]
fn stale_tree_is_rejected() {
    let mesh1 = unit_cube();
    let mesh2 = single_triangle(
        Point::new(0.0, 0.0, -1.0),
        Point::new(1.0, 0.0, -1.0),
        Point::new(0.5, 0.0, 1.0),
    );

    let err = Intersector::new()
        .compute_intersection_contour(&mesh1, &tree(&mesh1), &mesh2, &tree(&mesh1))
        .unwrap_err();
    assert_eq!(
        err,
        ContourError::Precondition(PreconditionError::TreeMeshMismatch {
            tree_faces: 12,
            mesh_faces: 1
        })
    );
}
