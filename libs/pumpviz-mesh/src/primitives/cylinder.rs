//! # Cylinder Primitive
//!
//! Generates mesh for cylinder, cone, and frustum shapes.

use crate::error::MeshError;
use crate::mesh::Mesh;
use config::constants::MAX_RADIAL_SEGMENTS;
use glam::DVec3;
use std::f64::consts::PI;

/// Creates a cylinder, cone, or frustum mesh.
///
/// The solid is centered at the origin with its axis along Z: the bottom
/// circle sits at `z = -height / 2`, the top at `z = +height / 2`.
///
/// # Arguments
///
/// * `radius_top` - Radius at the top face
/// * `radius_bottom` - Radius at the bottom face
/// * `height` - Height along Z
/// * `segments` - Number of segments around the circumference
///
/// # Errors
///
/// - `InvalidParameter` for a non-positive height, negative radii, both
///   radii zero, or a segment count above `MAX_RADIAL_SEGMENTS`
/// - `UnsupportedSegmentCount` for fewer than 3 segments
///
/// # Example
///
/// ```rust
/// use pumpviz_mesh::primitives::create_cylinder;
///
/// // Regular cylinder
/// let mesh = create_cylinder(5.0, 5.0, 10.0, 32).unwrap();
///
/// // Cone (top radius 0)
/// let cone = create_cylinder(0.0, 5.0, 10.0, 32).unwrap();
/// ```
pub fn create_cylinder(
    radius_top: f64,
    radius_bottom: f64,
    height: f64,
    segments: u32,
) -> Result<Mesh, MeshError> {
    if height <= 0.0 {
        return Err(MeshError::invalid_parameter(format!(
            "cylinder height must be positive: {}",
            height
        )));
    }

    if radius_bottom < 0.0 || radius_top < 0.0 {
        return Err(MeshError::invalid_parameter(format!(
            "cylinder radii must be non-negative: bottom={}, top={}",
            radius_bottom, radius_top
        )));
    }

    if radius_bottom == 0.0 && radius_top == 0.0 {
        return Err(MeshError::invalid_parameter(
            "cylinder must have at least one non-zero radius",
        ));
    }

    if segments < 3 {
        return Err(MeshError::unsupported_segments(format!(
            "cylinder segments must be at least 3: {}",
            segments
        )));
    }

    if segments > MAX_RADIAL_SEGMENTS {
        return Err(MeshError::invalid_parameter(format!(
            "cylinder segments exceed the maximum of {}: {}",
            MAX_RADIAL_SEGMENTS, segments
        )));
    }

    let mut mesh = Mesh::new();

    let z_bottom = -height / 2.0;
    let z_top = height / 2.0;

    // Generate bottom circle vertices (or single apex for inverted cone)
    let bottom_indices: Vec<u32> = if radius_bottom > 0.0 {
        (0..segments)
            .map(|j| {
                let theta = 2.0 * PI * j as f64 / segments as f64;
                let x = radius_bottom * theta.cos();
                let y = radius_bottom * theta.sin();
                mesh.add_vertex(DVec3::new(x, y, z_bottom))
            })
            .collect()
    } else {
        vec![mesh.add_vertex(DVec3::new(0.0, 0.0, z_bottom))]
    };

    // Generate top circle vertices (or single apex for cone)
    let top_indices: Vec<u32> = if radius_top > 0.0 {
        (0..segments)
            .map(|j| {
                let theta = 2.0 * PI * j as f64 / segments as f64;
                let x = radius_top * theta.cos();
                let y = radius_top * theta.sin();
                mesh.add_vertex(DVec3::new(x, y, z_top))
            })
            .collect()
    } else {
        vec![mesh.add_vertex(DVec3::new(0.0, 0.0, z_top))]
    };

    // Generate side faces
    if radius_bottom > 0.0 && radius_top > 0.0 {
        // Frustum: quads between two circles
        for j in 0..segments {
            let j_next = (j + 1) % segments;

            let b0 = bottom_indices[j as usize];
            let b1 = bottom_indices[j_next as usize];
            let t0 = top_indices[j as usize];
            let t1 = top_indices[j_next as usize];

            mesh.add_triangle(b0, b1, t1);
            mesh.add_triangle(b0, t1, t0);
        }
    } else if radius_bottom > 0.0 {
        // Cone: triangles from bottom circle to top apex
        let apex = top_indices[0];
        for j in 0..segments {
            let j_next = (j + 1) % segments;
            let b0 = bottom_indices[j as usize];
            let b1 = bottom_indices[j_next as usize];
            mesh.add_triangle(b0, b1, apex);
        }
    } else {
        // Inverted cone: triangles from bottom apex to top circle
        let apex = bottom_indices[0];
        for j in 0..segments {
            let j_next = (j + 1) % segments;
            let t0 = top_indices[j as usize];
            let t1 = top_indices[j_next as usize];
            mesh.add_triangle(apex, t1, t0);
        }
    }

    // Generate bottom cap (if radius_bottom > 0)
    if radius_bottom > 0.0 {
        for j in 1..segments - 1 {
            mesh.add_triangle(
                bottom_indices[0],
                bottom_indices[(j + 1) as usize],
                bottom_indices[j as usize],
            );
        }
    }

    // Generate top cap (if radius_top > 0)
    if radius_top > 0.0 {
        for j in 1..segments - 1 {
            mesh.add_triangle(
                top_indices[0],
                top_indices[j as usize],
                top_indices[(j + 1) as usize],
            );
        }
    }

    Ok(mesh)
}
