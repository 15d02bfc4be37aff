//! # Display Materials
//!
//! Physically-based material descriptors attached to each mesh group.
//! The renderer interprets them; the generator only carries them.

use serde::{Deserialize, Serialize};

/// Display material for a mesh group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Linear RGB base color
    pub color: [f32; 3],
    /// Metalness factor in [0, 1]
    pub metalness: f32,
    /// Roughness factor in [0, 1]
    pub roughness: f32,
    /// Opacity in [0, 1]; below 1 the group renders transparent
    pub opacity: f32,
    /// Render both faces (thin or open geometry)
    pub double_sided: bool,
}

impl Material {
    /// Creates an opaque, single-sided material.
    pub const fn opaque(color: [f32; 3], metalness: f32, roughness: f32) -> Self {
        Self {
            color,
            metalness,
            roughness,
            opacity: 1.0,
            double_sided: false,
        }
    }

    /// Painted cast body of the volute casing.
    pub const fn casing_body() -> Self {
        Self::opaque([0.290, 0.486, 0.620], 0.6, 0.4)
    }

    /// Machined flange and nozzle steel.
    pub const fn flange_steel() -> Self {
        Self::opaque([0.353, 0.549, 0.690], 0.7, 0.3)
    }

    /// Rough cast iron of the mounting feet.
    pub const fn foot_iron() -> Self {
        Self::opaque([0.227, 0.424, 0.557], 0.5, 0.5)
    }

    /// Translucent overlay for the internal flow-passage cutaway.
    pub const fn flow_passage() -> Self {
        Self {
            color: [0.478, 0.722, 0.847],
            metalness: 0.3,
            roughness: 0.6,
            opacity: 0.4,
            double_sided: true,
        }
    }

    /// Polished hub alloy.
    pub const fn hub_alloy() -> Self {
        Self::opaque([0.722, 0.773, 0.839], 0.8, 0.2)
    }

    /// Polished nose-dome alloy.
    pub const fn dome_alloy() -> Self {
        Self::opaque([0.659, 0.710, 0.776], 0.85, 0.15)
    }

    /// Blade alloy; blades taper to zero thickness, so both faces render.
    pub const fn blade_alloy() -> Self {
        Self {
            color: [0.784, 0.835, 0.902],
            metalness: 0.75,
            roughness: 0.25,
            opacity: 1.0,
            double_sided: true,
        }
    }
}
