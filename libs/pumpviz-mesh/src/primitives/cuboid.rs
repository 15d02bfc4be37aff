//! # Cuboid Primitive
//!
//! Generates mesh for rectangular solids (mounting feet, pads).

use crate::error::MeshError;
use crate::mesh::Mesh;
use glam::DVec3;

/// Creates an origin-centered rectangular solid.
///
/// # Arguments
///
/// * `width` - Extent along X
/// * `height` - Extent along Y
/// * `depth` - Extent along Z
///
/// # Returns
///
/// A mesh with 8 vertices and 12 triangles (2 per face).
///
/// # Example
///
/// ```rust
/// use pumpviz_mesh::primitives::create_cuboid;
///
/// let mesh = create_cuboid(10.0, 20.0, 30.0).unwrap();
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.triangle_count(), 12);
/// ```
pub fn create_cuboid(width: f64, height: f64, depth: f64) -> Result<Mesh, MeshError> {
    if width <= 0.0 || height <= 0.0 || depth <= 0.0 {
        return Err(MeshError::invalid_parameter(format!(
            "cuboid extents must be positive: {} x {} x {}",
            width, height, depth
        )));
    }

    let mut mesh = Mesh::with_capacity(8, 12);

    let half = DVec3::new(width / 2.0, height / 2.0, depth / 2.0);
    let min = -half;
    let max = half;

    // Add 8 vertices (corners of the cuboid)
    // Bottom face (z = min.z)
    let v0 = mesh.add_vertex(DVec3::new(min.x, min.y, min.z));
    let v1 = mesh.add_vertex(DVec3::new(max.x, min.y, min.z));
    let v2 = mesh.add_vertex(DVec3::new(max.x, max.y, min.z));
    let v3 = mesh.add_vertex(DVec3::new(min.x, max.y, min.z));

    // Top face (z = max.z)
    let v4 = mesh.add_vertex(DVec3::new(min.x, min.y, max.z));
    let v5 = mesh.add_vertex(DVec3::new(max.x, min.y, max.z));
    let v6 = mesh.add_vertex(DVec3::new(max.x, max.y, max.z));
    let v7 = mesh.add_vertex(DVec3::new(min.x, max.y, max.z));

    // Add 12 triangles (2 per face, wound for outward normals)

    // Bottom face (z = min.z)
    mesh.add_triangle(v0, v2, v1);
    mesh.add_triangle(v0, v3, v2);

    // Top face (z = max.z)
    mesh.add_triangle(v4, v5, v6);
    mesh.add_triangle(v4, v6, v7);

    // Front face (y = min.y)
    mesh.add_triangle(v0, v1, v5);
    mesh.add_triangle(v0, v5, v4);

    // Back face (y = max.y)
    mesh.add_triangle(v2, v3, v7);
    mesh.add_triangle(v2, v7, v6);

    // Left face (x = min.x)
    mesh.add_triangle(v3, v0, v4);
    mesh.add_triangle(v3, v4, v7);

    // Right face (x = max.x)
    mesh.add_triangle(v1, v2, v6);
    mesh.add_triangle(v1, v6, v5);

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cuboid_counts() {
        let mesh = create_cuboid(10.0, 10.0, 10.0).unwrap();
        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.triangle_count(), 12);
    }

    #[test]
    fn test_cuboid_centered() {
        let mesh = create_cuboid(10.0, 20.0, 30.0).unwrap();
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::new(-5.0, -10.0, -15.0));
        assert_eq!(max, DVec3::new(5.0, 10.0, 15.0));
    }

    #[test]
    fn test_cuboid_volume() {
        let mesh = create_cuboid(2.0, 3.0, 4.0).unwrap();
        assert!((mesh.signed_volume() - 24.0).abs() < 1e-9);
    }

    #[test]
    fn test_cuboid_validates() {
        let mesh = create_cuboid(10.0, 10.0, 10.0).unwrap();
        assert!(mesh.validate());
    }

    #[test]
    fn test_cuboid_invalid_extent() {
        assert!(create_cuboid(0.0, 10.0, 10.0).is_err());
        assert!(create_cuboid(10.0, -5.0, 10.0).is_err());
    }
}
