use crosscut3d::math::Point;
use crosscut3d::partitioning::BoundingVolumeTree;
use crosscut3d::shape::SurfaceMesh;
use crosscut3d::transformation::contour::Intersector;

fn main() {
    let points = vec![
        Point::new(0.0, 2.0, 0.0),
        Point::new(-2.0, -1.0, 0.0),
        Point::new(0.0, 0.0, 2.0),
        Point::new(2.0, -1.0, 0.0),
        Point::new(0.0, 0.0, -2.0),
    ];
    let indices = vec![
        [0u32, 1, 2],
        [0, 2, 3],
        [1, 2, 3],
        [0, 1, 4],
        [0, 4, 3],
        [1, 4, 3],
    ];

    let mesh = SurfaceMesh::new(points, indices).unwrap();
    let tree = BoundingVolumeTree::from_mesh(&mesh).unwrap();
    let mut intersector = Intersector::new();

    for z in [-1.5, -0.5, 0.5, 1.5, 2.5] {
        let contours = intersector
            .compute_intersection_with_plane(&mesh, &tree, 2, z)
            .unwrap();

        println!("z = {}: {} contour(s)", z, contours.len());
        for contour in &contours {
            let (vertices, segments) = contour.to_polyline();
            println!(
                "  closed: {}, vertices: {:?}, segments: {:?}",
                contour.closed, vertices, segments
            );
        }
    }
}
