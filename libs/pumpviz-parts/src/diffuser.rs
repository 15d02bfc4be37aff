//! # Diffuser Blade Assembly
//!
//! Composes the stationary diffuser wheel: a ring of backward-swept
//! airfoil blades around a central hub, with a streamlined nose dome
//! behind it.
//!
//! Each blade is the same extruded airfoil section rotated to its angular
//! station and then deformed by the radial sweep/twist. Blades depend only
//! on their own station, so generation fans out across a thread pool and
//! collects in blade order.

use crate::assembly::PartAssembly;
use crate::material::Material;
use config::constants::{
    BLADE_CHORD_WIDTH, BLADE_EXTRUDE_STEPS, BLADE_PROFILE_POINTS, BLADE_SWEEP_ANGLE,
    DEFAULT_SEGMENTS, MAX_BLADE_COUNT,
};
use glam::{DQuat, DVec3};
use pumpviz_mesh::extrude::{extrude, ExtrudeSpec};
use pumpviz_mesh::primitives::{create_cylinder, create_partial_sphere};
use pumpviz_mesh::profile::airfoil_profile;
use pumpviz_mesh::transform::{apply_rigid, apply_sweep_twist};
use pumpviz_mesh::{Mesh, MeshError};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, PI, TAU};

/// Blade edge bevel (transition depth and inset)
const BLADE_BEVEL: f64 = 0.002;
/// Rings per blade bevel
const BLADE_BEVEL_SEGMENTS: u32 = 2;
/// Dome radius relative to the hub radius
const DOME_RADIUS_RATIO: f64 = 0.95;
/// Dome setback behind the hub, relative to the hub radius
const DOME_SETBACK_RATIO: f64 = 0.3;
/// Dome tessellation
const DOME_WIDTH_SEGMENTS: u32 = 32;
const DOME_HEIGHT_SEGMENTS: u32 = 16;

/// Parameters of the diffuser blade assembly, in scene units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiffuserParams {
    /// Number of blades around the hub
    pub blade_count: u32,
    /// Hub radius; blades start here
    pub hub_radius: f64,
    /// Blade tip radius
    pub outer_radius: f64,
    /// Axial thickness of hub and blades
    pub thickness: f64,
}

impl Default for DiffuserParams {
    fn default() -> Self {
        Self {
            blade_count: 24,
            hub_radius: 0.3,
            outer_radius: 1.5,
            thickness: 0.08,
        }
    }
}

impl DiffuserParams {
    /// Checks every parameter against its documented domain.
    pub fn validate(&self) -> Result<(), MeshError> {
        if self.blade_count < 1 {
            return Err(MeshError::invalid_parameter(format!(
                "diffuser needs at least 1 blade: {}",
                self.blade_count
            )));
        }
        if self.blade_count > MAX_BLADE_COUNT {
            return Err(MeshError::invalid_parameter(format!(
                "blade count exceeds the maximum of {}: {}",
                MAX_BLADE_COUNT, self.blade_count
            )));
        }
        if !(self.hub_radius > 0.0) {
            return Err(MeshError::invalid_parameter(format!(
                "hub radius must be positive: {}",
                self.hub_radius
            )));
        }
        if self.outer_radius <= self.hub_radius {
            return Err(MeshError::invalid_parameter(format!(
                "outer radius must exceed hub radius: {} <= {}",
                self.outer_radius, self.hub_radius
            )));
        }
        if !(self.thickness > 0.0) {
            return Err(MeshError::invalid_parameter(format!(
                "blade thickness must be positive: {}",
                self.thickness
            )));
        }
        Ok(())
    }
}

/// Composes the diffuser blade assembly.
///
/// Pure function of its parameters; no partial assembly is returned on
/// error. Groups: `blades` (one mesh per blade), `hub`, `dome`.
///
/// # Example
///
/// ```rust
/// use pumpviz_parts::diffuser::{compose_diffuser, DiffuserParams};
///
/// let assembly = compose_diffuser(&DiffuserParams::default()).unwrap();
/// assert_eq!(assembly.group("blades").unwrap().meshes.len(), 24);
/// ```
pub fn compose_diffuser(params: &DiffuserParams) -> Result<PartAssembly, MeshError> {
    params.validate()?;

    // One blade in its reference orientation; every station reuses it
    let section = airfoil_profile(
        params.hub_radius,
        params.outer_radius,
        BLADE_CHORD_WIDTH / 2.0,
        BLADE_PROFILE_POINTS,
    )?;
    let blade_spec = ExtrudeSpec {
        depth: params.thickness,
        steps: BLADE_EXTRUDE_STEPS,
        bevel_enabled: true,
        bevel_thickness: BLADE_BEVEL,
        bevel_size: BLADE_BEVEL,
        bevel_segments: BLADE_BEVEL_SEGMENTS,
    };
    let reference_blade = extrude(&section, &blade_spec)?;

    let angle_step = TAU / params.blade_count as f64;
    let blades = (0..params.blade_count)
        .into_par_iter()
        .map(|i| {
            let angle = i as f64 * angle_step;
            let placed = apply_rigid(
                reference_blade.clone(),
                DQuat::from_rotation_z(angle),
                DVec3::ZERO,
            );
            apply_sweep_twist(
                placed,
                params.hub_radius,
                params.outer_radius,
                BLADE_SWEEP_ANGLE,
            )
        })
        .collect::<Result<Vec<Mesh>, MeshError>>()?;

    let hub = create_cylinder(
        params.hub_radius,
        params.hub_radius,
        params.thickness,
        DEFAULT_SEGMENTS,
    )?;

    // Streamlined nose dome, flipped to bulge away from the blades and set
    // back behind the hub face
    let dome = apply_rigid(
        create_partial_sphere(
            params.hub_radius * DOME_RADIUS_RATIO,
            DOME_WIDTH_SEGMENTS,
            DOME_HEIGHT_SEGMENTS,
            0.0,
            TAU,
            0.0,
            FRAC_PI_2,
        )?,
        DQuat::from_rotation_x(PI),
        DVec3::new(
            0.0,
            0.0,
            -params.thickness / 2.0 - params.hub_radius * DOME_SETBACK_RATIO,
        ),
    );

    let mut assembly = PartAssembly::new();
    assembly.push_group("blades", Material::blade_alloy(), blades);
    assembly.push_group("hub", Material::hub_alloy(), vec![hub]);
    assembly.push_group("dome", Material::dome_alloy(), vec![dome]);

    Ok(assembly)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diffuser_blade_count() {
        for count in [1, 8, 24, 30] {
            let params = DiffuserParams {
                blade_count: count,
                ..Default::default()
            };
            let assembly = compose_diffuser(&params).unwrap();
            assert_eq!(
                assembly.group("blades").unwrap().meshes.len(),
                count as usize
            );
        }
    }

    #[test]
    fn test_diffuser_zero_blades_rejected() {
        let params = DiffuserParams {
            blade_count: 0,
            ..Default::default()
        };
        assert!(matches!(
            compose_diffuser(&params),
            Err(MeshError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_diffuser_blade_count_limit() {
        let params = DiffuserParams {
            blade_count: MAX_BLADE_COUNT + 1,
            ..Default::default()
        };
        assert!(compose_diffuser(&params).is_err());
    }

    #[test]
    fn test_diffuser_invalid_radii() {
        let params = DiffuserParams {
            hub_radius: 1.5,
            outer_radius: 0.3,
            ..Default::default()
        };
        assert!(compose_diffuser(&params).is_err());

        let params = DiffuserParams {
            hub_radius: 0.0,
            ..Default::default()
        };
        assert!(compose_diffuser(&params).is_err());
    }

    #[test]
    fn test_diffuser_invalid_thickness() {
        let params = DiffuserParams {
            thickness: -0.08,
            ..Default::default()
        };
        assert!(compose_diffuser(&params).is_err());
    }

    #[test]
    fn test_diffuser_blades_are_distinct_rotations() {
        let params = DiffuserParams {
            blade_count: 4,
            ..Default::default()
        };
        let assembly = compose_diffuser(&params).unwrap();
        let blades = &assembly.group("blades").unwrap().meshes;

        // Same topology, different placement
        assert_eq!(blades[0].vertex_count(), blades[1].vertex_count());
        let v0 = blades[0].vertex(0);
        let v1 = blades[1].vertex(0);
        assert!((v0 - v1).length() > 1e-6);
    }

    #[test]
    fn test_diffuser_hub_spans_thickness() {
        let assembly = compose_diffuser(&DiffuserParams::default()).unwrap();
        let hub = &assembly.group("hub").unwrap().meshes[0];
        let (min, max) = hub.bounding_box();
        assert!((max.z - 0.04).abs() < 1e-9);
        assert!((min.z + 0.04).abs() < 1e-9);
    }

    #[test]
    fn test_diffuser_dome_sits_behind_hub() {
        let assembly = compose_diffuser(&DiffuserParams::default()).unwrap();
        let dome = &assembly.group("dome").unwrap().meshes[0];
        let (min, max) = dome.bounding_box();
        // Entirely behind the hub's back face
        assert!(max.z <= -0.04 + 1e-9);
        assert!(min.z < max.z);
    }
}
