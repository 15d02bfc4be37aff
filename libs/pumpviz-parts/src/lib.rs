//! # Pump Parts
//!
//! Assembly composition for the two modeled pump components:
//!
//! - **Volute casing**: beveled spiral body, flanges, nozzles, mounting
//!   feet, and a translucent flow-passage cutaway
//! - **Diffuser blade assembly**: backward-swept airfoil blades around a
//!   hub with a streamlined nose dome
//!
//! Both composers are pure functions of a parameter struct. They build a
//! [`PartAssembly`] of labeled mesh groups with display materials, which
//! the external renderer consumes as an immutable resource. Rebuilds fully
//! replace the previous assembly; there is no incremental mutation.
//!
//! ## Usage
//!
//! ```rust
//! use pumpviz_parts::{compose_diffuser, DiffuserParams};
//!
//! let assembly = compose_diffuser(&DiffuserParams::default()).unwrap();
//! assert_eq!(assembly.group("blades").unwrap().meshes.len(), 24);
//! assert_eq!(assembly.group("hub").unwrap().meshes.len(), 1);
//! ```

pub mod assembly;
pub mod casing;
pub mod diffuser;
pub mod material;

pub use assembly::{MeshGroup, PartAssembly};
pub use casing::{compose_casing, CasingParams};
pub use diffuser::{compose_diffuser, DiffuserParams};
pub use material::Material;
