use crosscut3d::math::{Point, Vector};
use crosscut3d::session::{ContourSession, Orientation, SessionConfig};
use crosscut3d::shape::SurfaceMesh;

fn main() {
    // A 1x1x1 box centered at the origin.
    let vertices: Vec<_> = (0..8)
        .map(|i| {
            Point::new(
                if i & 1 == 0 { -0.5 } else { 0.5 },
                if i & 2 == 0 { -0.5 } else { 0.5 },
                if i & 4 == 0 { -0.5 } else { 0.5 },
            )
        })
        .collect();
    let indices = vec![
        [0u32, 2, 3],
        [0, 3, 1],
        [4, 5, 7],
        [4, 7, 6],
        [0, 1, 5],
        [0, 5, 4],
        [2, 6, 7],
        [2, 7, 3],
        [0, 4, 6],
        [0, 6, 2],
        [1, 3, 7],
        [1, 7, 5],
    ];

    let mesh = SurfaceMesh::new(vertices, indices).unwrap();
    let mut session = ContourSession::new(mesh, &SessionConfig::default()).unwrap();
    println!("Refreshed: {:?}", session.refresh().unwrap());

    // Simulate an edit: squash the box along z.
    let edited: Vec<_> = session
        .mesh()
        .vertices()
        .iter()
        .map(|p| Point::from(p.coords.component_mul(&Vector::new(1.0, 1.0, 0.5))))
        .collect();
    session.set_vertex_positions(&edited).unwrap();
    let _ = session.move_plane(Orientation::Axial, 0.2);
    println!("Refreshed: {:?}", session.refresh().unwrap());

    for orientation in Orientation::ALL {
        for contour in session.contours(orientation) {
            println!(
                "{:?}: {} vertices, closed: {}",
                orientation,
                contour.num_vertices(),
                contour.closed
            );
        }
    }
}
