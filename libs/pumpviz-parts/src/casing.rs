//! # Volute Casing Assembly
//!
//! Composes the centrifugal pump casing: beveled volute body, suction and
//! discharge flanges with their nozzle barrels, mounting feet, and a
//! translucent cutaway of the internal flow passage.
//!
//! Every documented dimension arrives as data in [`CasingParams`]; the
//! defaults are the canonical configuration of the modeled pump. Dimensions
//! are in millimeters and the final uniform `scale` converts to scene
//! units.

use crate::assembly::PartAssembly;
use crate::material::Material;
use glam::{DQuat, DVec3};
use pumpviz_mesh::extrude::{extrude, ExtrudeSpec};
use pumpviz_mesh::primitives::{create_cuboid, create_cylinder, create_partial_torus};
use pumpviz_mesh::profile::volute_profile;
use pumpviz_mesh::transform::{apply_rigid, apply_scale};
use pumpviz_mesh::{Mesh, MeshError};
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, TAU};

/// Geometric parameters of the volute casing, in millimeters.
///
/// The canonical pump is a fixed design, so [`CasingParams::default`] is
/// the configuration the renderer normally asks for; accepting the values
/// as data keeps future configurability a pure data change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CasingParams {
    /// Volute base circle radius (R103)
    pub base_radius: f64,
    /// Throat width of the internal flow passage
    pub throat_width: f64,
    /// Casing height along the extrusion axis
    pub volute_height: f64,
    /// Spiral sample count
    pub spiral_segments: u32,
    /// Swept fraction of a full turn (0.75 = 270 degrees)
    pub sweep_fraction: f64,
    /// Cutoff-point fraction of a full turn closing the wedge
    pub cutoff_fraction: f64,
    /// Body edge bevel transition depth
    pub body_bevel_thickness: f64,
    /// Body edge bevel inset
    pub body_bevel_size: f64,
    /// Rings per body bevel
    pub body_bevel_segments: u32,

    /// Suction flange radius (bolt circle, DN 32 flange Ø125)
    pub suction_flange_radius: f64,
    /// Suction flange thickness
    pub suction_flange_thickness: f64,
    /// Suction nozzle bore radius
    pub suction_bore_radius: f64,
    /// Suction nozzle extension length
    pub suction_extension: f64,

    /// Discharge flange radius (bolt circle, DN 50 flange Ø140)
    pub discharge_flange_radius: f64,
    /// Discharge flange thickness
    pub discharge_flange_thickness: f64,
    /// Discharge nozzle bore radius (Ø75 opening)
    pub discharge_bore_radius: f64,
    /// Discharge nozzle length
    pub discharge_length: f64,
    /// Discharge station as a fraction of a full turn on the spiral
    pub discharge_angle_fraction: f64,
    /// Radial factor from the base circle to the discharge station
    pub discharge_radial_factor: f64,
    /// Discharge centerline height above the mounting plane
    pub discharge_height: f64,

    /// Mounting foot length
    pub foot_length: f64,
    /// Mounting foot height
    pub foot_height: f64,
    /// Mounting foot width
    pub foot_width: f64,
    /// Center-to-center foot spacing (165)
    pub foot_spacing: f64,
    /// How far the feet sink below the casing base
    pub foot_drop: f64,

    /// Cutaway torus center radius as a fraction of the base radius
    pub cutaway_radius_fraction: f64,
    /// Segments around the cutaway tube
    pub cutaway_radial_segments: u32,
    /// Segments along the cutaway arc
    pub cutaway_tubular_segments: u32,

    /// Tessellation segments for flange discs
    pub flange_segments: u32,
    /// Tessellation segments for nozzle barrels
    pub nozzle_segments: u32,

    /// Uniform millimeter-to-scene scale applied to the whole assembly
    pub scale: f64,
}

impl Default for CasingParams {
    fn default() -> Self {
        Self {
            base_radius: 103.0,
            throat_width: 36.0,
            volute_height: 112.0,
            spiral_segments: 64,
            sweep_fraction: 0.75,
            cutoff_fraction: 0.1,
            body_bevel_thickness: 5.0,
            body_bevel_size: 3.0,
            body_bevel_segments: 2,

            suction_flange_radius: 62.5,
            suction_flange_thickness: 15.0,
            suction_bore_radius: 40.0,
            suction_extension: 140.0,

            discharge_flange_radius: 70.0,
            discharge_flange_thickness: 15.0,
            discharge_bore_radius: 37.5,
            discharge_length: 80.0,
            discharge_angle_fraction: 0.65,
            discharge_radial_factor: 1.3,
            discharge_height: 75.0,

            foot_length: 60.0,
            foot_height: 20.0,
            foot_width: 40.0,
            foot_spacing: 165.0,
            foot_drop: 10.0,

            cutaway_radius_fraction: 0.8,
            cutaway_radial_segments: 16,
            cutaway_tubular_segments: 64,

            flange_segments: 32,
            nozzle_segments: 24,

            scale: 0.01,
        }
    }
}

impl CasingParams {
    /// Checks every dimension against its documented domain.
    ///
    /// Profile, primitive, and bevel constructors re-validate their own
    /// inputs; this catches the assembly-level parameters they never see.
    pub fn validate(&self) -> Result<(), MeshError> {
        if !(self.scale > 0.0) {
            return Err(MeshError::invalid_parameter(format!(
                "casing scale must be positive: {}",
                self.scale
            )));
        }
        if self.throat_width <= 0.0 {
            return Err(MeshError::invalid_parameter(format!(
                "throat width must be positive: {}",
                self.throat_width
            )));
        }
        if self.volute_height <= 0.0 {
            return Err(MeshError::invalid_parameter(format!(
                "volute height must be positive: {}",
                self.volute_height
            )));
        }
        if self.foot_spacing <= 0.0 {
            return Err(MeshError::invalid_parameter(format!(
                "foot spacing must be positive: {}",
                self.foot_spacing
            )));
        }
        if !(self.discharge_angle_fraction >= 0.0 && self.discharge_angle_fraction < 1.0) {
            return Err(MeshError::invalid_parameter(format!(
                "discharge station fraction must be in [0, 1): {}",
                self.discharge_angle_fraction
            )));
        }
        if self.discharge_radial_factor <= 0.0 || self.discharge_height < 0.0 {
            return Err(MeshError::invalid_parameter(
                "discharge placement must be non-negative and radially outside the axis",
            ));
        }
        Ok(())
    }
}

/// Composes the volute casing assembly.
///
/// Pure function of its parameters: identical input always yields an
/// identical assembly, so callers may memoize freely. No partial assembly
/// is returned on error.
///
/// Groups: `mainBody`, `suctionFlange`, `dischargeFlange`, `mountingFeet`,
/// `voluteCutaway`.
///
/// # Example
///
/// ```rust
/// use pumpviz_parts::casing::{compose_casing, CasingParams};
///
/// let assembly = compose_casing(&CasingParams::default()).unwrap();
/// assert!(assembly.group("mainBody").is_some());
/// ```
pub fn compose_casing(params: &CasingParams) -> Result<PartAssembly, MeshError> {
    params.validate()?;

    let half_height = params.volute_height / 2.0;
    // The profile plane becomes the horizontal plane; the spin axis ends up
    // vertical and the body is raised to straddle the mounting plane.
    let lay_flat = DQuat::from_rotation_x(FRAC_PI_2);
    let raise = DVec3::new(0.0, half_height, 0.0);

    // Main volute body
    let spiral = volute_profile(
        params.base_radius,
        params.spiral_segments,
        params.sweep_fraction,
        params.cutoff_fraction,
    )?;
    let body_spec = ExtrudeSpec {
        depth: params.volute_height,
        steps: 1,
        bevel_enabled: true,
        bevel_thickness: params.body_bevel_thickness,
        bevel_size: params.body_bevel_size,
        bevel_segments: params.body_bevel_segments,
    };
    let body = apply_rigid(extrude(&spiral, &body_spec)?, lay_flat, raise);

    // Suction flange disc and nozzle barrel
    let suction_flange = apply_rigid(
        create_cylinder(
            params.suction_flange_radius,
            params.suction_flange_radius,
            params.suction_flange_thickness,
            params.flange_segments,
        )?,
        DQuat::IDENTITY,
        DVec3::new(-params.suction_extension, half_height, 0.0),
    );
    let suction_nozzle = apply_rigid(
        create_cylinder(
            params.suction_bore_radius,
            params.suction_bore_radius,
            params.suction_extension,
            params.nozzle_segments,
        )?,
        DQuat::IDENTITY,
        DVec3::new(-params.suction_extension / 2.0, half_height, 0.0),
    );

    // Discharge flange and nozzle at the spiral discharge station
    let station = params.discharge_angle_fraction * TAU;
    let station_radius = params.base_radius * params.discharge_radial_factor;
    let station_x = station.cos() * station_radius;
    let station_z = station.sin() * station_radius;
    let outward = DQuat::from_rotation_y(FRAC_PI_2);

    let discharge_flange = apply_rigid(
        create_cylinder(
            params.discharge_flange_radius,
            params.discharge_flange_radius,
            params.discharge_flange_thickness,
            params.flange_segments,
        )?,
        outward,
        DVec3::new(station_x, params.discharge_height, station_z),
    );
    let discharge_nozzle = apply_rigid(
        create_cylinder(
            params.discharge_bore_radius,
            params.discharge_bore_radius,
            params.discharge_length,
            params.nozzle_segments,
        )?,
        outward,
        DVec3::new(
            station_x - params.discharge_length / 2.0,
            params.discharge_height,
            station_z,
        ),
    );

    // Mounting feet either side of the axis
    let foot_y = params.foot_height / 2.0 - params.foot_drop;
    let mut feet = Vec::with_capacity(2);
    for side in [-1.0, 1.0] {
        feet.push(apply_rigid(
            create_cuboid(params.foot_length, params.foot_height, params.foot_width)?,
            DQuat::IDENTITY,
            DVec3::new(side * params.foot_spacing / 2.0, foot_y, 0.0),
        ));
    }

    // Translucent cutaway of the internal flow passage, following the
    // spiral sweep
    let cutaway = apply_rigid(
        create_partial_torus(
            params.base_radius * params.cutaway_radius_fraction,
            params.throat_width / 2.0,
            params.cutaway_radial_segments,
            params.cutaway_tubular_segments,
            params.sweep_fraction,
        )?,
        lay_flat,
        raise,
    );

    let scale = |mesh: Mesh| apply_scale(mesh, params.scale);

    let mut assembly = PartAssembly::new();
    assembly.push_group("mainBody", Material::casing_body(), vec![scale(body)?]);
    assembly.push_group(
        "suctionFlange",
        Material::flange_steel(),
        vec![scale(suction_flange)?, scale(suction_nozzle)?],
    );
    assembly.push_group(
        "dischargeFlange",
        Material::flange_steel(),
        vec![scale(discharge_flange)?, scale(discharge_nozzle)?],
    );
    let mut scaled_feet = Vec::with_capacity(feet.len());
    for foot in feet {
        scaled_feet.push(scale(foot)?);
    }
    assembly.push_group("mountingFeet", Material::foot_iron(), scaled_feet);
    assembly.push_group(
        "voluteCutaway",
        Material::flow_passage(),
        vec![scale(cutaway)?],
    );

    Ok(assembly)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_casing_default_groups() {
        let assembly = compose_casing(&CasingParams::default()).unwrap();
        for label in [
            "mainBody",
            "suctionFlange",
            "dischargeFlange",
            "mountingFeet",
            "voluteCutaway",
        ] {
            let group = assembly.group(label).unwrap();
            assert!(!group.meshes.is_empty(), "{} is empty", label);
            for mesh in &group.meshes {
                assert!(!mesh.is_empty());
            }
        }
        assert_eq!(assembly.group("mountingFeet").unwrap().meshes.len(), 2);
        assert!(assembly.validate());
    }

    #[test]
    fn test_casing_invalid_scale() {
        let params = CasingParams {
            scale: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            compose_casing(&params),
            Err(MeshError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_casing_invalid_spiral() {
        let params = CasingParams {
            spiral_segments: 1,
            ..Default::default()
        };
        assert!(matches!(
            compose_casing(&params),
            Err(MeshError::UnsupportedSegmentCount { .. })
        ));
    }

    #[test]
    fn test_casing_cutaway_is_translucent() {
        let assembly = compose_casing(&CasingParams::default()).unwrap();
        let cutaway = assembly.group("voluteCutaway").unwrap();
        assert!(cutaway.material.opacity < 1.0);
        assert!(cutaway.material.double_sided);
    }

    #[test]
    fn test_casing_determinism() {
        let a = compose_casing(&CasingParams::default()).unwrap();
        let b = compose_casing(&CasingParams::default()).unwrap();
        let body_a = &a.group("mainBody").unwrap().meshes[0];
        let body_b = &b.group("mainBody").unwrap().meshes[0];
        assert_eq!(body_a.vertex_count(), body_b.vertex_count());
        for (va, vb) in body_a.vertices().iter().zip(body_b.vertices()) {
            assert_eq!(va, vb);
        }
    }
}
