//! The closed set of organism archetypes and their mesh builders.

use std::fmt;

use tracing::debug;

use crate::mesh::Mesh;
use crate::{organisms, whale};

/// An organism body kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Archetype {
    Copepod,
    Diatom,
    Larvae,
    Radiolarian,
    Whale,
}

impl Archetype {
    /// Plankton archetypes in population order; the position is the
    /// instance type index.
    pub const PLANKTON: [Archetype; 4] = [
        Archetype::Copepod,
        Archetype::Diatom,
        Archetype::Larvae,
        Archetype::Radiolarian,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Archetype::Copepod => "copepod",
            Archetype::Diatom => "diatom",
            Archetype::Larvae => "larvae",
            Archetype::Radiolarian => "radiolarian",
            Archetype::Whale => "whale",
        }
    }

    /// Index into [`Archetype::PLANKTON`], or `None` for the whale.
    pub fn plankton_index(self) -> Option<usize> {
        Self::PLANKTON.iter().position(|&a| a == self)
    }

    /// Build this archetype's mesh. Deterministic; callers build once and
    /// share the result.
    pub fn build_mesh(self) -> Mesh {
        let mesh = match self {
            Archetype::Copepod => organisms::copepod(),
            Archetype::Diatom => organisms::diatom(),
            Archetype::Larvae => organisms::larvae(),
            Archetype::Radiolarian => organisms::radiolarian(),
            Archetype::Whale => whale::whale(),
        };
        debug!(
            archetype = self.name(),
            vertices = mesh.vertex_count(),
            triangles = mesh.triangle_count(),
            "built archetype mesh"
        );
        mesh
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plankton_indices() {
        for (i, a) in Archetype::PLANKTON.iter().enumerate() {
            assert_eq!(a.plankton_index(), Some(i));
        }
        assert_eq!(Archetype::Whale.plankton_index(), None);
    }

    #[test]
    fn test_every_archetype_builds_valid_mesh() {
        for a in Archetype::PLANKTON.into_iter().chain([Archetype::Whale]) {
            let mesh = a.build_mesh();
            assert!(mesh.vertex_count() > 0, "{a} is empty");
            assert_eq!(mesh.indices.len() % 3, 0);
            assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.vertex_count()));
            assert_eq!(mesh.flat_normals().len(), mesh.flat_positions().len());
        }
    }

    #[test]
    fn test_build_is_deterministic() {
        assert_eq!(Archetype::Radiolarian.build_mesh(), Archetype::Radiolarian.build_mesh());
    }

    #[test]
    fn test_display_uses_name() {
        assert_eq!(Archetype::Diatom.to_string(), "diatom");
    }
}
