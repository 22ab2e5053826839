use super::fixtures::{diamond, height_grid, unit_cube};
use crosscut3d::error::ConstructionError;
use crosscut3d::math::Point;
use crosscut3d::shape::SurfaceMesh;

#[test]
fn closed_meshes_have_two_faces_per_edge() {
    for mesh in [unit_cube(), diamond()] {
        mesh.assert_topology_is_valid();
        assert!(mesh.is_closed());
        assert_eq!(mesh.num_edges() * 2, mesh.num_faces() * 3);

        for edge in mesh.edges() {
            assert!(edge.face_b().is_some());
        }
    }
}

#[test]
fn lookup_is_symmetric() {
    let mesh = unit_cube();

    for u in 0..8 {
        for v in 0..8 {
            assert_eq!(mesh.lookup(u, v), mesh.lookup(v, u));
        }
    }

    // Cube edges plus one diagonal per side.
    assert_eq!(mesh.num_edges(), 18);
    assert!(mesh.lookup(0, 7).is_none());
}

#[test]
fn adjacency_follows_winding_order() {
    let mesh = diamond();

    for (fid, face) in mesh.faces().iter().enumerate() {
        for k in 0..3 {
            let edge = mesh.edge(face.edges[k]);
            assert_eq!(edge.next_in(fid as u32), Some(face.edges[(k + 1) % 3]));
            assert_eq!(edge.prev_in(fid as u32), Some(face.edges[(k + 2) % 3]));
        }
    }
}

#[test]
fn open_grid_boundary() {
    let n = 4;
    let mesh = height_grid(n);
    mesh.assert_topology_is_valid();
    assert!(!mesh.is_closed());
    assert_eq!(mesh.boundary_edges().count() as u32, 4 * n);

    for eid in mesh.boundary_edges() {
        let edge = mesh.edge(eid);
        assert_eq!(edge.face_b(), None);
        assert_eq!(edge.other_face(edge.face_a()), None);
    }
}

#[test]
fn non_manifold_fan_is_rejected() {
    let vertices = vec![
        Point::new(0.0, 0.0, 0.0),
        Point::new(0.0, 0.0, 1.0),
        Point::new(1.0, 0.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
        Point::new(-1.0, 0.0, 0.0),
    ];
    let triangles = vec![[0, 1, 2], [1, 0, 3], [0, 1, 4]];

    assert_eq!(
        SurfaceMesh::new(vertices, triangles).unwrap_err(),
        ConstructionError::NonManifoldEdge(0, 1, 2)
    );
}
