//! # Partial Sphere Primitive
//!
//! Generates spherical caps and bands using latitude/longitude
//! tessellation over configurable azimuth and polar ranges. Used for the
//! streamlined nose dome behind the diffuser hub.

use crate::error::MeshError;
use crate::mesh::Mesh;
use config::constants::{EPSILON, MAX_RADIAL_SEGMENTS};
use glam::DVec3;
use std::f64::consts::{PI, TAU};

/// Creates a partial sphere over the given azimuth and polar ranges.
///
/// The sphere is centered at the origin with its poles on the Z axis. The
/// polar angle `theta` is measured from +Z, the azimuth `phi` from +X
/// toward +Y. Rows whose ring radius vanishes (poles) collapse to a single
/// vertex and their bands emit one triangle per column.
///
/// # Arguments
///
/// * `radius` - Sphere radius
/// * `width_segments` - Columns across the azimuth range
/// * `height_segments` - Rows across the polar range
/// * `phi_start` - Azimuth range start, in `[0, 2π]`
/// * `phi_length` - Azimuth range length, in `(0, 2π]`
/// * `theta_start` - Polar range start, in `[0, π]`
/// * `theta_length` - Polar range length, in `(0, π]`
///
/// # Errors
///
/// - `UnsupportedSegmentCount` for fewer than 3 width or 2 height segments
/// - `InvalidParameter` for a non-positive radius, ranges outside their
///   domains, or segment counts above `MAX_RADIAL_SEGMENTS`
///
/// # Example
///
/// ```rust
/// use pumpviz_mesh::primitives::create_partial_sphere;
/// use std::f64::consts::{FRAC_PI_2, TAU};
///
/// // Hemispherical dome around +Z
/// let dome = create_partial_sphere(0.285, 32, 16, 0.0, TAU, 0.0, FRAC_PI_2).unwrap();
/// assert!(dome.validate());
/// ```
pub fn create_partial_sphere(
    radius: f64,
    width_segments: u32,
    height_segments: u32,
    phi_start: f64,
    phi_length: f64,
    theta_start: f64,
    theta_length: f64,
) -> Result<Mesh, MeshError> {
    if radius <= 0.0 {
        return Err(MeshError::invalid_parameter(format!(
            "sphere radius must be positive: {}",
            radius
        )));
    }

    if width_segments < 3 || height_segments < 2 {
        return Err(MeshError::unsupported_segments(format!(
            "sphere needs at least 3 width and 2 height segments: {} x {}",
            width_segments, height_segments
        )));
    }

    if width_segments > MAX_RADIAL_SEGMENTS || height_segments > MAX_RADIAL_SEGMENTS {
        return Err(MeshError::invalid_parameter(format!(
            "sphere segments exceed the maximum of {}: {} x {}",
            MAX_RADIAL_SEGMENTS, width_segments, height_segments
        )));
    }

    if !(phi_start >= 0.0 && phi_start <= TAU) || !(phi_length > 0.0 && phi_length <= TAU) {
        return Err(MeshError::invalid_parameter(format!(
            "sphere azimuth range out of domain: start={}, length={}",
            phi_start, phi_length
        )));
    }

    if !(theta_start >= 0.0 && theta_start <= PI)
        || !(theta_length > 0.0 && theta_length <= PI)
        || theta_start + theta_length > PI + EPSILON
    {
        return Err(MeshError::invalid_parameter(format!(
            "sphere polar range out of domain: start={}, length={}",
            theta_start, theta_length
        )));
    }

    let full_phi = (phi_length - TAU).abs() < EPSILON;
    let columns = if full_phi {
        width_segments as usize
    } else {
        width_segments as usize + 1
    };

    let mut mesh = Mesh::new();

    // Generate vertex rows from the top of the polar range downward; pole
    // rows collapse to a single vertex.
    let mut rows: Vec<Vec<u32>> = Vec::with_capacity(height_segments as usize + 1);
    for i in 0..=height_segments {
        let theta = theta_start + theta_length * i as f64 / height_segments as f64;
        let (sin_theta, cos_theta) = theta.sin_cos();
        let ring_radius = radius * sin_theta;
        let z = radius * cos_theta;

        if ring_radius.abs() < EPSILON {
            rows.push(vec![mesh.add_vertex(DVec3::new(0.0, 0.0, z))]);
            continue;
        }

        let mut row = Vec::with_capacity(columns);
        for j in 0..columns {
            let phi = phi_start + phi_length * j as f64 / width_segments as f64;
            row.push(mesh.add_vertex(DVec3::new(
                ring_radius * phi.cos(),
                ring_radius * phi.sin(),
                z,
            )));
        }
        rows.push(row);
    }

    // Generate bands between adjacent rows
    for i in 0..height_segments as usize {
        let upper = &rows[i];
        let lower = &rows[i + 1];

        for j in 0..width_segments as usize {
            let j_next = if full_phi {
                (j + 1) % width_segments as usize
            } else {
                j + 1
            };

            match (upper.len() == 1, lower.len() == 1) {
                (true, true) => {}
                (true, false) => {
                    // Top pole fan
                    mesh.add_triangle(upper[0], lower[j], lower[j_next]);
                }
                (false, true) => {
                    // Bottom pole fan
                    mesh.add_triangle(upper[j], lower[0], upper[j_next]);
                }
                (false, false) => {
                    let a0 = upper[j];
                    let a1 = upper[j_next];
                    let b0 = lower[j];
                    let b1 = lower[j_next];

                    mesh.add_triangle(a0, b0, b1);
                    mesh.add_triangle(a0, b1, a1);
                }
            }
        }
    }

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_full_sphere() {
        let mesh = create_partial_sphere(5.0, 32, 16, 0.0, TAU, 0.0, PI).unwrap();
        assert!(mesh.validate());

        let (min, max) = mesh.bounding_box();
        assert!((max.z - 5.0).abs() < 1e-9);
        assert!((min.z + 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_full_sphere_volume() {
        let mesh = create_partial_sphere(5.0, 48, 24, 0.0, TAU, 0.0, PI).unwrap();
        let expected = 4.0 / 3.0 * PI * 125.0;
        let volume = mesh.signed_volume();
        assert!(volume > 0.9 * expected);
        assert!(volume < expected);
    }

    #[test]
    fn test_dome_covers_upper_hemisphere() {
        let mesh = create_partial_sphere(1.0, 32, 16, 0.0, TAU, 0.0, FRAC_PI_2).unwrap();
        assert!(mesh.validate());

        let (min, max) = mesh.bounding_box();
        assert!((max.z - 1.0).abs() < 1e-9);
        // Open equator rim at z = 0
        assert!(min.z.abs() < 1e-9);
    }

    #[test]
    fn test_dome_pole_collapses_to_single_vertex() {
        let mesh = create_partial_sphere(1.0, 8, 4, 0.0, TAU, 0.0, FRAC_PI_2).unwrap();
        // 1 pole vertex + 4 rings of 8
        assert_eq!(mesh.vertex_count(), 1 + 4 * 8);
    }

    #[test]
    fn test_partial_phi_keeps_seam_open() {
        let mesh = create_partial_sphere(1.0, 8, 4, 0.0, PI, FRAC_PI_2, FRAC_PI_2).unwrap();
        assert!(mesh.validate());
        // Half-azimuth band duplicates the seam column; the final row sits
        // on the -Z pole and collapses
        assert_eq!(mesh.vertex_count(), 4 * 9 + 1);
    }

    #[test]
    fn test_sphere_invalid_radius() {
        assert!(create_partial_sphere(0.0, 32, 16, 0.0, TAU, 0.0, PI).is_err());
    }

    #[test]
    fn test_sphere_invalid_ranges() {
        assert!(create_partial_sphere(1.0, 32, 16, 0.0, 0.0, 0.0, PI).is_err());
        assert!(create_partial_sphere(1.0, 32, 16, 0.0, TAU, FRAC_PI_2, PI).is_err());
        assert!(create_partial_sphere(1.0, 32, 16, -1.0, TAU, 0.0, PI).is_err());
    }

    #[test]
    fn test_sphere_too_few_segments() {
        let result = create_partial_sphere(1.0, 2, 16, 0.0, TAU, 0.0, PI);
        assert!(matches!(
            result,
            Err(MeshError::UnsupportedSegmentCount { .. })
        ));
    }
}
