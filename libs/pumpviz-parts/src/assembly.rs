//! # Part Assemblies
//!
//! Labeled collections of generated mesh groups. An assembly is built once
//! per parameter set, handed to the renderer as an immutable resource, and
//! fully replaced on the next rebuild.

use crate::material::Material;
use pumpviz_mesh::Mesh;

/// A labeled group of meshes sharing one display material.
#[derive(Debug, Clone)]
pub struct MeshGroup {
    /// Group label, e.g. "mainBody" or "blades"
    pub label: String,
    /// Display material for every mesh in the group
    pub material: Material,
    /// Generated meshes, in build order
    pub meshes: Vec<Mesh>,
}

/// An ordered collection of labeled mesh groups forming one part.
#[derive(Debug, Clone, Default)]
pub struct PartAssembly {
    groups: Vec<MeshGroup>,
}

impl PartAssembly {
    /// Creates an empty assembly.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a labeled group.
    pub fn push_group(
        &mut self,
        label: impl Into<String>,
        material: Material,
        meshes: Vec<Mesh>,
    ) {
        self.groups.push(MeshGroup {
            label: label.into(),
            material,
            meshes,
        });
    }

    /// Returns the groups in build order.
    pub fn groups(&self) -> &[MeshGroup] {
        &self.groups
    }

    /// Looks up a group by label.
    pub fn group(&self, label: &str) -> Option<&MeshGroup> {
        self.groups.iter().find(|g| g.label == label)
    }

    /// Number of groups.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Total mesh count across all groups.
    pub fn mesh_count(&self) -> usize {
        self.groups.iter().map(|g| g.meshes.len()).sum()
    }

    /// Validates every mesh in the assembly.
    pub fn validate(&self) -> bool {
        self.groups
            .iter()
            .all(|g| g.meshes.iter().all(|m| m.validate()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    fn triangle_mesh() -> Mesh {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_vertex(DVec3::X);
        mesh.add_vertex(DVec3::Y);
        mesh.add_triangle(0, 1, 2);
        mesh
    }

    #[test]
    fn test_assembly_group_lookup() {
        let mut assembly = PartAssembly::new();
        assembly.push_group("hub", Material::hub_alloy(), vec![triangle_mesh()]);
        assembly.push_group("blades", Material::blade_alloy(), vec![triangle_mesh(); 3]);

        assert_eq!(assembly.group_count(), 2);
        assert_eq!(assembly.mesh_count(), 4);
        assert_eq!(assembly.group("blades").unwrap().meshes.len(), 3);
        assert!(assembly.group("dome").is_none());
    }

    #[test]
    fn test_assembly_preserves_group_order() {
        let mut assembly = PartAssembly::new();
        assembly.push_group("first", Material::hub_alloy(), vec![]);
        assembly.push_group("second", Material::hub_alloy(), vec![]);
        let labels: Vec<_> = assembly.groups().iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, ["first", "second"]);
    }

    #[test]
    fn test_assembly_validate() {
        let mut assembly = PartAssembly::new();
        assembly.push_group("hub", Material::hub_alloy(), vec![triangle_mesh()]);
        assert!(assembly.validate());

        let mut broken = Mesh::new();
        broken.add_vertex(DVec3::ZERO);
        broken.add_triangle(0, 1, 2);
        assembly.push_group("broken", Material::hub_alloy(), vec![broken]);
        assert!(!assembly.validate());
    }
}
