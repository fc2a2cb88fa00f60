//! Immutable, draw-ready mesh shared by every instance of an archetype.

/// Flat vertex/normal/index buffers.
///
/// Invariants, checked on construction: every index is below the vertex
/// count, there is one normal per position, and the index list holds whole
/// triangles.
#[derive(Clone, Debug, PartialEq)]
pub struct Mesh {
    /// Vertex positions.
    pub positions: Vec<[f32; 3]>,
    /// Vertex normals, parallel to `positions`.
    pub normals: Vec<[f32; 3]>,
    /// Triangle list indices.
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Build a mesh, asserting its invariants.
    ///
    /// # Panics
    ///
    /// Panics on a normal/position length mismatch, a partial triangle, or an
    /// out-of-range index. These are construction bugs, not runtime faults.
    pub fn new(positions: Vec<[f32; 3]>, normals: Vec<[f32; 3]>, indices: Vec<u32>) -> Self {
        assert_eq!(
            positions.len(),
            normals.len(),
            "mesh needs one normal per position"
        );
        assert!(
            indices.len() % 3 == 0,
            "index count {} is not a whole number of triangles",
            indices.len()
        );
        let vertex_count = positions.len();
        if let Some(bad) = indices.iter().find(|&&i| i as usize >= vertex_count) {
            panic!("index {bad} out of range for {vertex_count} vertices");
        }
        Self {
            positions,
            normals,
            indices,
        }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Positions as a flat `x, y, z, x, y, z, ...` slice.
    pub fn flat_positions(&self) -> &[f32] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Normals as a flat `x, y, z, ...` slice.
    pub fn flat_normals(&self) -> &[f32] {
        bytemuck::cast_slice(&self.normals)
    }

    /// Axis-aligned bounds as `(min, max)`, or `None` for an empty mesh.
    pub fn bounds(&self) -> Option<(glam::Vec3, glam::Vec3)> {
        let mut iter = self.positions.iter().map(|p| glam::Vec3::from_array(*p));
        let first = iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p))))
    }
}
