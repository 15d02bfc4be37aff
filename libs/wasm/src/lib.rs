//! WASM-facing entry points for the pump geometry pipeline.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Native tests interact with the internal helpers
//! `render_casing_internal` / `render_diffuser_internal` to avoid depending
//! on a JS host.
//!
//! ```
//! let assembly = pumpviz_wasm::render_diffuser_internal(24, 0.3, 1.5, 0.08).unwrap();
//! assert_eq!(assembly.group("blades").unwrap().meshes.len(), 24);
//! ```

use pumpviz_mesh::MeshError;
use pumpviz_parts::{compose_casing, compose_diffuser, CasingParams, DiffuserParams, PartAssembly};
use wasm_bindgen::prelude::*;

mod mesh_handle;

pub use mesh_handle::MeshHandle;


/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "pumpviz-wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// A rendered part assembly transferred to JavaScript.
///
/// Groups keep their build order. Each group carries a label, a display
/// material serialized as JSON, and one mesh handle per generated mesh.
#[wasm_bindgen]
pub struct AssemblyHandle {
    labels: Vec<String>,
    materials: Vec<String>,
    groups: Vec<Vec<MeshHandle>>,
}

#[wasm_bindgen]
impl AssemblyHandle {
    /// Number of mesh groups in the assembly.
    #[wasm_bindgen(getter)]
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Label of a group, e.g. "mainBody" or "blades".
    #[wasm_bindgen]
    pub fn group_label(&self, group: usize) -> Option<String> {
        self.labels.get(group).cloned()
    }

    /// Display material of a group as a JSON string
    /// (`color`, `metalness`, `roughness`, `opacity`, `double_sided`).
    #[wasm_bindgen]
    pub fn group_material_json(&self, group: usize) -> Option<String> {
        self.materials.get(group).cloned()
    }

    /// Number of meshes in a group.
    #[wasm_bindgen]
    pub fn group_mesh_count(&self, group: usize) -> usize {
        self.groups.get(group).map_or(0, Vec::len)
    }

    /// One mesh of a group.
    #[wasm_bindgen]
    pub fn group_mesh(&self, group: usize, index: usize) -> Option<MeshHandle> {
        self.groups.get(group).and_then(|g| g.get(index)).cloned()
    }
}

impl AssemblyHandle {
    /// Converts a composed assembly into transferable buffers.
    pub fn from_assembly(assembly: &PartAssembly) -> Self {
        let mut labels = Vec::with_capacity(assembly.group_count());
        let mut materials = Vec::with_capacity(assembly.group_count());
        let mut groups = Vec::with_capacity(assembly.group_count());

        for group in assembly.groups() {
            labels.push(group.label.clone());
            materials.push(
                serde_json::to_string(&group.material).unwrap_or_else(|_| "{}".to_string()),
            );
            groups.push(group.meshes.iter().map(MeshHandle::from_mesh).collect());
        }

        Self {
            labels,
            materials,
            groups,
        }
    }
}

/// Renders the volute casing in its canonical configuration.
///
/// # Errors
/// Returns a JavaScript error value containing a human-readable message
/// when generation fails.
///
/// # Examples
/// ```no_run
/// // In JavaScript: const assembly = render_casing();
/// ```
#[wasm_bindgen]
pub fn render_casing() -> Result<AssemblyHandle, JsValue> {
    render_casing_internal()
        .map(|assembly| AssemblyHandle::from_assembly(&assembly))
        .map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Renders a diffuser blade assembly for the given parameters.
///
/// # Errors
/// Returns a JavaScript error value containing a human-readable message
/// when a parameter is out of its documented domain.
///
/// # Examples
/// ```no_run
/// // In JavaScript: const assembly = render_diffuser(24, 0.3, 1.5, 0.08);
/// ```
#[wasm_bindgen]
pub fn render_diffuser(
    blade_count: u32,
    hub_radius: f64,
    outer_radius: f64,
    thickness: f64,
) -> Result<AssemblyHandle, JsValue> {
    render_diffuser_internal(blade_count, hub_radius, outer_radius, thickness)
        .map(|assembly| AssemblyHandle::from_assembly(&assembly))
        .map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Host-only helper that composes the canonical casing assembly.
///
/// # Examples
/// ```
/// let assembly = pumpviz_wasm::render_casing_internal().unwrap();
/// assert!(assembly.group("mainBody").is_some());
/// ```
pub fn render_casing_internal() -> Result<PartAssembly, MeshError> {
    compose_casing(&CasingParams::default())
}

/// Host-only helper that composes a diffuser assembly.
///
/// # Examples
/// ```
/// let assembly = pumpviz_wasm::render_diffuser_internal(24, 0.3, 1.5, 0.08).unwrap();
/// assert_eq!(assembly.group("hub").unwrap().meshes.len(), 1);
/// ```
pub fn render_diffuser_internal(
    blade_count: u32,
    hub_radius: f64,
    outer_radius: f64,
    thickness: f64,
) -> Result<PartAssembly, MeshError> {
    compose_diffuser(&DiffuserParams {
        blade_count,
        hub_radius,
        outer_radius,
        thickness,
    })
}
