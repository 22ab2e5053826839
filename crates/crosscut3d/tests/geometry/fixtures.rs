use crosscut3d::math::{Point, Real, Vector};
use crosscut3d::partitioning::BoundingVolumeTree;
use crosscut3d::shape::SurfaceMesh;

/// Vertices and triangles of an axis-aligned box, two triangles per side.
pub fn cuboid_buffers(center: Point<Real>, half_extents: Vector<Real>) -> (Vec<Point<Real>>, Vec<[u32; 3]>) {
    let vertices = (0..8)
        .map(|i| {
            let signs = Vector::new(
                if i & 1 == 0 { -1.0 } else { 1.0 },
                if i & 2 == 0 { -1.0 } else { 1.0 },
                if i & 4 == 0 { -1.0 } else { 1.0 },
            );
            center + half_extents.component_mul(&signs)
        })
        .collect();

    let triangles = vec![
        [0, 2, 3],
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

    (vertices, triangles)
}

pub fn cuboid(center: Point<Real>, half_extents: Vector<Real>) -> SurfaceMesh {
    let (vertices, triangles) = cuboid_buffers(center, half_extents);
    SurfaceMesh::new(vertices, triangles).unwrap()
}

/// The cube of side 1 centered at the origin.
pub fn unit_cube() -> SurfaceMesh {
    cuboid(Point::origin(), Vector::repeat(0.5))
}

/// Two tetrahedrons glued along a face.
pub fn diamond() -> SurfaceMesh {
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

    SurfaceMesh::new(points, indices).unwrap()
}

/// The regular octahedron with its six vertices on the unit axes, the four equator vertices
/// first.
pub fn octahedron() -> SurfaceMesh {
    let vertices = vec![
        Point::new(1.0, 0.0, 0.0),
        Point::new(-1.0, 0.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
        Point::new(0.0, -1.0, 0.0),
        Point::new(0.0, 0.0, 1.0),
        Point::new(0.0, 0.0, -1.0),
    ];
    let triangles = vec![
        [0, 2, 4],
        [2, 1, 4],
        [1, 3, 4],
        [3, 0, 4],
        [2, 0, 5],
        [1, 2, 5],
        [3, 1, 5],
        [0, 3, 5],
    ];

    SurfaceMesh::new(vertices, triangles).unwrap()
}

/// An open, gently curved grid over `[0, n] x [0, n]`, two triangles per cell.
pub fn height_grid(n: u32) -> SurfaceMesh {
    let mut vertices = vec![];
    let mut triangles = vec![];

    for j in 0..=n {
        for i in 0..=n {
            let (x, y) = (i as Real, j as Real);
            vertices.push(Point::new(x, y, 0.1 * (x * 0.7).sin() * (y * 0.3).cos()));
        }
    }

    for j in 0..n {
        for i in 0..n {
            let a = j * (n + 1) + i;
            let b = a + 1;
            let c = a + n + 1;
            let d = c + 1;
            triangles.push([a, b, d]);
            triangles.push([a, d, c]);
        }
    }

    SurfaceMesh::new(vertices, triangles).unwrap()
}

pub fn tree(mesh: &SurfaceMesh) -> BoundingVolumeTree {
    BoundingVolumeTree::from_mesh(mesh).unwrap()
}

/// Is `pt` on the surface of the box?
pub fn on_cuboid_surface(pt: &Point<Real>, center: Point<Real>, half_extents: Vector<Real>) -> bool {
    let local = (pt - center).component_div(&half_extents);
    let inside = local.iter().all(|c| c.abs() <= 1.0 + 1.0e-4);
    inside && (local.amax() - 1.0).abs() <= 1.0e-4
}
