//! # Pump Mesh
//!
//! Browser-safe parametric mesh generation for pump components.
//! Turns numeric parameters into triangle meshes through a pure pipeline:
//!
//! ```text
//! profile (2D curve) → extrude (3D solid) → transform (place/deform)
//! primitives (cylinder, cuboid, torus section, sphere cap) ─┘
//! ```
//!
//! ## Algorithms
//!
//! All algorithms are browser-safe (pure Rust, no native dependencies):
//! - **Profiles**: volute spiral wedge, airfoil blade section
//! - **Extrusion**: ring stacking with optional beveled ends
//! - **Cap triangulation**: ear clipping (earcutr)
//! - **Deformation**: radial sweep/twist with normal recomputation
//!
//! ## Usage
//!
//! ```rust
//! use pumpviz_mesh::extrude::{extrude, ExtrudeSpec};
//! use pumpviz_mesh::profile::airfoil_profile;
//!
//! let section = airfoil_profile(0.3, 1.5, 0.06, 20).unwrap();
//! let spec = ExtrudeSpec { depth: 0.08, steps: 12, ..Default::default() };
//! let blade = extrude(&section, &spec).unwrap();
//! assert!(blade.validate());
//! ```

pub mod error;
pub mod extrude;
pub mod mesh;
pub mod primitives;
pub mod profile;
pub mod transform;

mod triangulate;

pub use error::MeshError;
pub use mesh::Mesh;
