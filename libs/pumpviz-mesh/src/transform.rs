//! # Vertex Transforms
//!
//! Pure mesh-in/mesh-out transforms. Each function takes the mesh by value
//! and returns the transformed mesh, so callers never observe a partially
//! transformed state and per-part application parallelizes safely.

use crate::error::MeshError;
use crate::mesh::Mesh;
use glam::{DMat4, DQuat, DVec3};

/// Applies a rigid rotation and translation to every vertex.
///
/// Normals, if present, are re-oriented by the rotation.
///
/// # Example
///
/// ```rust
/// use pumpviz_mesh::transform::apply_rigid;
/// use pumpviz_mesh::Mesh;
/// use glam::{DQuat, DVec3};
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::X);
/// let moved = apply_rigid(mesh, DQuat::IDENTITY, DVec3::new(0.0, 0.0, 3.0));
/// assert_eq!(moved.vertex(0), DVec3::new(1.0, 0.0, 3.0));
/// ```
pub fn apply_rigid(mut mesh: Mesh, rotation: DQuat, translation: DVec3) -> Mesh {
    let matrix = DMat4::from_rotation_translation(rotation, translation);
    mesh.transform(&matrix);
    mesh
}

/// Applies a uniform scale to every vertex.
///
/// Normal directions are unchanged by a uniform scale.
///
/// # Errors
///
/// `InvalidParameter` when the factor is not strictly positive.
pub fn apply_scale(mut mesh: Mesh, factor: f64) -> Result<Mesh, MeshError> {
    if !(factor > 0.0) {
        return Err(MeshError::invalid_parameter(format!(
            "scale factor must be positive: {}",
            factor
        )));
    }
    mesh.transform(&DMat4::from_scale(DVec3::splat(factor)));
    Ok(mesh)
}

/// Applies the radial sweep/twist deformation that curves a diffuser blade
/// backward.
///
/// For every vertex, the planar radius `r = sqrt(x² + y²)` is normalized to
/// `u = clamp((r - hub_radius) / (outer_radius - hub_radius), 0, 1)` and
/// the vertex's (x, z) pair is rotated about the spanwise Y axis by
/// `u * max_sweep_angle`. Twist grows smoothly from zero at the hub to the
/// full sweep at the tip.
///
/// The deformation depends only on each vertex's undeformed position and
/// the three scalar parameters, never on traversal order. It is non-rigid,
/// so vertex normals are recomputed afterwards.
///
/// # Errors
///
/// `InvalidParameter` when `hub_radius` is not positive or
/// `outer_radius <= hub_radius`.
pub fn apply_sweep_twist(
    mut mesh: Mesh,
    hub_radius: f64,
    outer_radius: f64,
    max_sweep_angle: f64,
) -> Result<Mesh, MeshError> {
    if !(hub_radius > 0.0) {
        return Err(MeshError::invalid_parameter(format!(
            "hub radius must be positive: {}",
            hub_radius
        )));
    }
    if outer_radius <= hub_radius {
        return Err(MeshError::invalid_parameter(format!(
            "outer radius must exceed hub radius: {} <= {}",
            outer_radius, hub_radius
        )));
    }

    let span = outer_radius - hub_radius;
    for v in mesh.vertices_mut() {
        let radius = (v.x * v.x + v.y * v.y).sqrt();
        let u = ((radius - hub_radius) / span).clamp(0.0, 1.0);
        let angle = u * max_sweep_angle;
        let (sin_a, cos_a) = angle.sin_cos();
        let x = v.x;
        let z = v.z;
        v.x = z * sin_a + x * cos_a;
        v.z = z * cos_a - x * sin_a;
    }

    mesh.compute_normals();
    Ok(mesh)
}
