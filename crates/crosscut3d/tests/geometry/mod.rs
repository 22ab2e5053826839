mod fixtures;
mod mesh_contours;
mod plane_contours;
mod surface_mesh_topology;
