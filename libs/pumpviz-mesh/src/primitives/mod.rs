//! # Primitives
//!
//! Mesh generation for parametric solids used by the part assemblies
//! (flanges, nozzles, feet, hubs, domes, flow-passage cutaways).
//!
//! Every primitive is generated in a canonical local frame: origin-centered
//! with the principal axis along +Z. Placement into an assembly is the
//! vertex transformer's job, which keeps primitive generation
//! orientation-agnostic and testable in isolation.

pub mod cuboid;
pub mod cylinder;
pub mod sphere;
pub mod torus;

pub use cuboid::create_cuboid;
pub use cylinder::create_cylinder;
pub use sphere::create_partial_sphere;
pub use torus::create_partial_torus;
