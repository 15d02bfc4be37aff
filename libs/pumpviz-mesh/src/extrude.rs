//! # Profile Extrusion
//!
//! Extrudes a closed 2D profile along the Z axis to create a 3D mesh.
//! Supports path steps and optional beveled ends.
//!
//! The extrusion spans `z` in `[0, depth]`. When the bevel is enabled,
//! `bevel_segments` extra boundary rings per end interpolate an inward
//! inset from `bevel_size` at the end faces down to zero over
//! `bevel_thickness` of depth, rounding the solid's edges while keeping it
//! inside the nominal depth.

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::profile::{inset_ring, ring_area, Profile};
use crate::triangulate::triangulate_ring;
use glam::{DVec2, DVec3};

/// Parameters for a profile extrusion.
#[derive(Debug, Clone)]
pub struct ExtrudeSpec {
    /// Extrusion distance along Z
    pub depth: f64,
    /// Number of path steps between the end faces
    pub steps: u32,
    /// Insert bevel rings at both ends
    pub bevel_enabled: bool,
    /// Depth over which each bevel transitions
    pub bevel_thickness: f64,
    /// Inward inset at the end faces
    pub bevel_size: f64,
    /// Number of intermediate rings per bevel
    pub bevel_segments: u32,
}

impl Default for ExtrudeSpec {
    fn default() -> Self {
        Self {
            depth: 1.0,
            steps: 1,
            bevel_enabled: false,
            bevel_thickness: 0.0,
            bevel_size: 0.0,
            bevel_segments: 0,
        }
    }
}

/// Extrudes a closed 2D profile along the Z axis.
///
/// The profile orientation is normalized to counter-clockwise before ring
/// generation, so side walls and caps always wind outward. Vertex normals
/// are computed after all rings exist.
///
/// # Arguments
///
/// * `profile` - The closed 2D profile to extrude
/// * `spec` - Extrusion parameters
///
/// # Errors
///
/// - `DegenerateProfile` when the profile has fewer than 3 distinct points
/// - `InvalidParameter` for a non-positive depth or zero path steps
/// - `InvalidBevelSpec` when bevel parameters would self-intersect the
///   solid; bevels are validated, never clamped
///
/// # Example
///
/// ```rust
/// use pumpviz_mesh::extrude::{extrude, ExtrudeSpec};
/// use pumpviz_mesh::profile::Profile;
/// use glam::DVec2;
///
/// let square = Profile::new(vec![
///     DVec2::new(-5.0, -5.0),
///     DVec2::new(5.0, -5.0),
///     DVec2::new(5.0, 5.0),
///     DVec2::new(-5.0, 5.0),
/// ]);
/// let spec = ExtrudeSpec { depth: 20.0, ..Default::default() };
/// let mesh = extrude(&square, &spec).unwrap();
/// assert_eq!(mesh.vertex_count(), 8);
/// ```
pub fn extrude(profile: &Profile, spec: &ExtrudeSpec) -> Result<Mesh, MeshError> {
    if !(spec.depth > 0.0) {
        return Err(MeshError::invalid_parameter(format!(
            "extrusion depth must be positive: {}",
            spec.depth
        )));
    }
    if spec.steps < 1 {
        return Err(MeshError::invalid_parameter(
            "extrusion needs at least 1 path step",
        ));
    }

    let mut ring: Vec<DVec2> = profile.ring().to_vec();
    if ring.len() < 3 {
        return Err(MeshError::degenerate_profile(format!(
            "extrusion profile needs at least 3 distinct points: {}",
            ring.len()
        )));
    }
    // Normalize to counter-clockwise so outward winding holds either way
    // the profile was authored.
    if ring_area(&ring) < 0.0 {
        ring.reverse();
    }
    let n = ring.len();

    if spec.bevel_enabled {
        validate_bevel(profile, &ring, spec)?;
    }

    // Boundary ring stations along the path: (z, inset amount)
    let mut stations: Vec<(f64, f64)> = Vec::new();
    if spec.bevel_enabled {
        let segs = spec.bevel_segments;
        for k in 0..segs {
            let t = k as f64 / segs as f64;
            stations.push((spec.bevel_thickness * t, spec.bevel_size * (1.0 - t)));
        }
        let body_bottom = spec.bevel_thickness;
        let body_top = spec.depth - spec.bevel_thickness;
        for s in 0..=spec.steps {
            let t = s as f64 / spec.steps as f64;
            stations.push((body_bottom + t * (body_top - body_bottom), 0.0));
        }
        for k in 1..=segs {
            let t = k as f64 / segs as f64;
            stations.push((
                spec.depth - spec.bevel_thickness + spec.bevel_thickness * t,
                spec.bevel_size * t,
            ));
        }
    } else {
        for s in 0..=spec.steps {
            let t = s as f64 / spec.steps as f64;
            stations.push((t * spec.depth, 0.0));
        }
    }

    let ring_count = stations.len();
    let mut mesh = Mesh::with_capacity(n * ring_count, n * ring_count * 2 + 2 * n);

    // Generate the boundary ring at each station
    let mut first_boundary: Vec<DVec2> = Vec::new();
    let mut last_boundary: Vec<DVec2> = Vec::new();
    for (station, (z, amount)) in stations.iter().enumerate() {
        let boundary = if *amount > 0.0 {
            inset_ring(&ring, *amount)?
        } else {
            ring.clone()
        };
        for p in &boundary {
            mesh.add_vertex(DVec3::new(p.x, p.y, *z));
        }
        if station == 0 {
            first_boundary = boundary.clone();
        }
        if station == ring_count - 1 {
            last_boundary = boundary;
        }
    }

    // Side walls: two outward triangles per quad
    for s in 0..ring_count - 1 {
        let base = s * n;
        let next = (s + 1) * n;
        for i in 0..n {
            let i_next = (i + 1) % n;
            mesh.add_triangle(
                (base + i) as u32,
                (base + i_next) as u32,
                (next + i_next) as u32,
            );
            mesh.add_triangle(
                (base + i) as u32,
                (next + i_next) as u32,
                (next + i) as u32,
            );
        }
    }

    // Bottom cap faces -Z, top cap faces +Z
    for tri in triangulate_ring(&first_boundary)? {
        mesh.add_triangle(tri[0], tri[2], tri[1]);
    }
    let top_base = ((ring_count - 1) * n) as u32;
    for tri in triangulate_ring(&last_boundary)? {
        mesh.add_triangle(top_base + tri[0], top_base + tri[1], top_base + tri[2]);
    }

    mesh.compute_normals();
    Ok(mesh)
}

/// Rejects bevel parameters that would self-intersect the extruded solid.
fn validate_bevel(profile: &Profile, ring: &[DVec2], spec: &ExtrudeSpec) -> Result<(), MeshError> {
    if spec.bevel_thickness < 0.0 || spec.bevel_size < 0.0 {
        return Err(MeshError::invalid_bevel(format!(
            "bevel thickness and size must be non-negative: {} / {}",
            spec.bevel_thickness, spec.bevel_size
        )));
    }
    if 2.0 * spec.bevel_thickness >= spec.depth {
        return Err(MeshError::invalid_bevel(format!(
            "bevel thickness {} leaves no body in depth {}",
            spec.bevel_thickness, spec.depth
        )));
    }
    let span = profile.span();
    let min_span = span.x.min(span.y);
    if spec.bevel_size > min_span / 2.0 {
        return Err(MeshError::invalid_bevel(format!(
            "bevel size {} exceeds half the minimum profile span {}",
            spec.bevel_size, min_span
        )));
    }
    // The deepest inset must keep a valid cross-section
    if spec.bevel_segments > 0 && spec.bevel_size > 0.0 {
        inset_ring(ring, spec.bevel_size)?;
    }
    Ok(())
}
