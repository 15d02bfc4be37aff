//! # Partial Torus Primitive
//!
//! Revolves a circular tube section around the Z axis through a fraction of
//! a full turn. Used for the casing's internal flow-passage cutaway.
//!
//! ## Algorithm
//!
//! 1. The tube cross-section is a circle of `minor_radius` centered
//!    `major_radius` away from the Z axis
//! 2. The section is swept through `arc_fraction * 2π` radians
//! 3. Each sweep step generates a band of quads against the previous ring
//!
//! A full revolution wraps seamlessly onto its first ring. A partial arc
//! leaves its end rings open: the shape represents an internal passage
//! cutaway, not a solid, so the arc ends stay uncapped.

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::profile::Profile;
use config::constants::{EPSILON, MAX_RADIAL_SEGMENTS};
use glam::DVec3;
use std::f64::consts::TAU;

/// Creates a torus section swept through `arc_fraction * 2π` radians.
///
/// # Arguments
///
/// * `major_radius` - Distance from the Z axis to the tube center
/// * `minor_radius` - Tube radius
/// * `radial_segments` - Segments around the tube cross-section
/// * `tubular_segments` - Segments along the swept arc
/// * `arc_fraction` - Swept fraction of a full turn, in (0, 1]
///
/// # Errors
///
/// - `InvalidParameter` for non-positive radii, a tube radius at or above
///   the ring radius, an arc fraction outside (0, 1], or segment counts
///   above `MAX_RADIAL_SEGMENTS`
/// - `UnsupportedSegmentCount` for fewer than 3 segments on either axis
///
/// # Example
///
/// ```rust
/// use pumpviz_mesh::primitives::create_partial_torus;
///
/// // Three-quarter flow passage
/// let mesh = create_partial_torus(82.4, 18.0, 16, 64, 0.75).unwrap();
/// assert!(mesh.validate());
/// ```
pub fn create_partial_torus(
    major_radius: f64,
    minor_radius: f64,
    radial_segments: u32,
    tubular_segments: u32,
    arc_fraction: f64,
) -> Result<Mesh, MeshError> {
    if major_radius <= 0.0 || minor_radius <= 0.0 {
        return Err(MeshError::invalid_parameter(format!(
            "torus radii must be positive: major={}, minor={}",
            major_radius, minor_radius
        )));
    }

    if minor_radius >= major_radius {
        return Err(MeshError::invalid_parameter(format!(
            "torus tube radius must be smaller than the ring radius: {} >= {}",
            minor_radius, major_radius
        )));
    }

    if radial_segments < 3 || tubular_segments < 3 {
        return Err(MeshError::unsupported_segments(format!(
            "torus needs at least 3 segments on both axes: {} x {}",
            radial_segments, tubular_segments
        )));
    }

    if radial_segments > MAX_RADIAL_SEGMENTS || tubular_segments > MAX_RADIAL_SEGMENTS {
        return Err(MeshError::invalid_parameter(format!(
            "torus segments exceed the maximum of {}: {} x {}",
            MAX_RADIAL_SEGMENTS, radial_segments, tubular_segments
        )));
    }

    if !(arc_fraction > 0.0 && arc_fraction <= 1.0) {
        return Err(MeshError::invalid_parameter(format!(
            "torus arc fraction must be in (0, 1]: {}",
            arc_fraction
        )));
    }

    let full_turn = (arc_fraction - 1.0).abs() < EPSILON;
    let arc = arc_fraction * TAU;
    let tube = Profile::circle(minor_radius, radial_segments);
    let n = tube.ring_len();
    let num_rings = if full_turn {
        tubular_segments as usize
    } else {
        tubular_segments as usize + 1
    };

    let mut mesh = Mesh::with_capacity(n * num_rings, n * tubular_segments as usize * 2);

    // Revolve the tube section: its local x is radial distance from the
    // tube center, its local y the axial offset
    for step in 0..num_rings {
        let phi = arc * step as f64 / tubular_segments as f64;
        let (sin_phi, cos_phi) = phi.sin_cos();

        for p in tube.ring() {
            let ring_radius = major_radius + p.x;
            mesh.add_vertex(DVec3::new(
                ring_radius * cos_phi,
                ring_radius * sin_phi,
                p.y,
            ));
        }
    }

    // Generate band faces between consecutive rings
    for step in 0..tubular_segments as usize {
        let base = step * n;
        let next = if full_turn && step == tubular_segments as usize - 1 {
            0 // Wrap around to the first ring
        } else {
            (step + 1) * n
        };

        for j in 0..n {
            let j_next = (j + 1) % n;

            mesh.add_triangle(
                (base + j) as u32,
                (next + j) as u32,
                (next + j_next) as u32,
            );
            mesh.add_triangle(
                (base + j) as u32,
                (next + j_next) as u32,
                (base + j_next) as u32,
            );
        }
    }

    Ok(mesh)
}
