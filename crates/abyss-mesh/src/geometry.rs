//! Mutable intermediate geometry used while assembling organism bodies.
//!
//! A [`Geometry`] may lack normals or an index list, mirroring how the
//! individual primitives are produced. Transforms consume and return the
//! geometry so recipes read as a chain.

use glam::{Mat3, Mat4, Quat, Vec3};

use crate::mesh::Mesh;

/// Vertex positions with optional normals and optional triangle indices.
///
/// Without indices the positions are a triangle soup (every three
/// consecutive vertices form one triangle).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Geometry {
    /// Vertex positions.
    pub positions: Vec<Vec3>,
    /// Per-vertex normals, parallel to `positions` when present.
    pub normals: Option<Vec<Vec3>>,
    /// Triangle indices into `positions`.
    pub indices: Option<Vec<u32>>,
}

impl Geometry {
    /// Indexed geometry with normals.
    pub fn indexed(positions: Vec<Vec3>, normals: Vec<Vec3>, indices: Vec<u32>) -> Self {
        assert_eq!(
            positions.len(),
            normals.len(),
            "normal count must match position count"
        );
        Self {
            positions,
            normals: Some(normals),
            indices: Some(indices),
        }
    }

    /// Non-indexed triangle soup without normals.
    pub fn soup(positions: Vec<Vec3>) -> Self {
        assert!(
            positions.len() % 3 == 0,
            "triangle soup needs a multiple of 3 vertices, got {}",
            positions.len()
        );
        Self {
            positions,
            normals: None,
            indices: None,
        }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of entries the index list has, or would have once synthesized.
    pub fn index_count(&self) -> usize {
        self.indices
            .as_ref()
            .map_or(self.positions.len(), |indices| indices.len())
    }

    /// Apply an affine transform to positions and normals.
    pub fn transform(mut self, matrix: Mat4) -> Self {
        for p in &mut self.positions {
            *p = matrix.transform_point3(*p);
        }
        if let Some(normals) = &mut self.normals {
            let normal_matrix = Mat3::from_mat4(matrix).inverse().transpose();
            for n in normals.iter_mut() {
                *n = (normal_matrix * *n).normalize_or_zero();
            }
        }
        self
    }

    /// Translate by `offset`.
    pub fn translate(self, offset: Vec3) -> Self {
        self.transform(Mat4::from_translation(offset))
    }

    /// Rotate about the X axis by `angle` radians.
    pub fn rotate_x(self, angle: f32) -> Self {
        self.transform(Mat4::from_rotation_x(angle))
    }

    /// Rotate about the Y axis by `angle` radians.
    pub fn rotate_y(self, angle: f32) -> Self {
        self.transform(Mat4::from_rotation_y(angle))
    }

    /// Rotate about the Z axis by `angle` radians.
    pub fn rotate_z(self, angle: f32) -> Self {
        self.transform(Mat4::from_rotation_z(angle))
    }

    /// Rotate by a quaternion.
    pub fn rotate(self, rotation: Quat) -> Self {
        self.transform(Mat4::from_quat(rotation))
    }

    /// Scale per axis. Negative factors mirror the geometry.
    pub fn scale(self, factors: Vec3) -> Self {
        assert!(
            factors.x != 0.0 && factors.y != 0.0 && factors.z != 0.0,
            "scale factors must be non-zero, got {factors}"
        );
        self.transform(Mat4::from_scale(factors))
    }

    /// Replace the normals with area-weighted face normals.
    ///
    /// Indexed geometry accumulates each face normal onto its three
    /// vertices; a triangle soup gets flat per-face normals.
    pub fn compute_normals(mut self) -> Self {
        let mut normals = vec![Vec3::ZERO; self.positions.len()];
        match &self.indices {
            Some(indices) => {
                for tri in indices.chunks_exact(3) {
                    let (a, b, c) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
                    let face = face_normal(self.positions[a], self.positions[b], self.positions[c]);
                    normals[a] += face;
                    normals[b] += face;
                    normals[c] += face;
                }
            }
            None => {
                for (tri, out) in self
                    .positions
                    .chunks_exact(3)
                    .zip(normals.chunks_exact_mut(3))
                {
                    let face = face_normal(tri[0], tri[1], tri[2]);
                    out.fill(face);
                }
            }
        }
        for n in &mut normals {
            *n = n.normalize_or_zero();
        }
        self.normals = Some(normals);
        self
    }

    /// Finalize into an immutable, validated [`Mesh`].
    ///
    /// Synthesizes `0..n` indices for a soup and computes normals if absent.
    pub fn into_mesh(self) -> Mesh {
        let geometry = if self.normals.is_none() {
            self.compute_normals()
        } else {
            self
        };
        let vertex_count = u32::try_from(geometry.positions.len())
            .unwrap_or_else(|_| panic!("vertex count {} exceeds u32", geometry.positions.len()));
        let indices = geometry
            .indices
            .unwrap_or_else(|| (0..vertex_count).collect());
        let normals = geometry.normals.unwrap_or_default();
        Mesh::new(
            geometry.positions.iter().map(|p| p.to_array()).collect(),
            normals.iter().map(|n| n.to_array()).collect(),
            indices,
        )
    }
}

/// Unnormalized face normal, `(c − b) × (a − b)`.
fn face_normal(a: Vec3, b: Vec3, c: Vec3) -> Vec3 {
    (c - b).cross(a - b)
}
