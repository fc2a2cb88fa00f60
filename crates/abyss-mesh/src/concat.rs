//! Merging several geometries into one set of buffers.

use glam::Vec3;

use crate::geometry::Geometry;

/// Concatenate `parts` into a single indexed geometry.
///
/// Buffers are sized to the summed vertex and index counts up front. Each
/// part's vertices are copied verbatim and its indices are shifted by the
/// number of vertices emitted before it; a part without an index list
/// contributes the sequence `0..n` shifted the same way. If any part lacks
/// normals, normals are recomputed for the whole result.
pub fn concatenate(parts: &[Geometry]) -> Geometry {
    let total_vertices: usize = parts.iter().map(Geometry::vertex_count).sum();
    let total_indices: usize = parts.iter().map(Geometry::index_count).sum();
    assert!(
        u32::try_from(total_vertices).is_ok(),
        "merged vertex count {total_vertices} exceeds u32"
    );

    let mut positions = Vec::with_capacity(total_vertices);
    let mut normals = Vec::with_capacity(total_vertices);
    let mut indices = Vec::with_capacity(total_indices);
    let mut missing_normals = false;

    for part in parts {
        let offset = positions.len() as u32;
        positions.extend_from_slice(&part.positions);

        match &part.normals {
            Some(n) => normals.extend_from_slice(n),
            None => {
                missing_normals = true;
                normals.resize(positions.len(), Vec3::ZERO);
            }
        }

        match &part.indices {
            Some(part_indices) => indices.extend(part_indices.iter().map(|&i| i + offset)),
            None => indices.extend(offset..offset + part.vertex_count() as u32),
        }
    }

    let merged = Geometry {
        positions,
        normals: Some(normals),
        indices: Some(indices),
    };
    if missing_normals {
        merged.compute_normals()
    } else {
        merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{cone, icosahedron};

    #[test]
    fn test_empty_list() {
        let merged = concatenate(&[]);
        assert_eq!(merged.vertex_count(), 0);
        assert_eq!(merged.indices.unwrap().len(), 0);
    }

    #[test]
    fn test_vertex_counts_sum() {
        let a = cone(0.1, 0.2, 4);
        let b = cone(0.2, 0.3, 6);
        let c = icosahedron(0.5, 0);
        let expected = a.vertex_count() + b.vertex_count() + c.vertex_count();
        let merged = concatenate(&[a, b, c]);
        assert_eq!(merged.vertex_count(), expected);
    }

    #[test]
    fn test_second_part_indices_offset() {
        let a = cone(0.1, 0.2, 4);
        let b = cone(0.2, 0.3, 6);
        let first_vertices = a.vertex_count() as u32;
        let first_indices = a.index_count();
        let merged = concatenate(&[a, b]);
        let indices = merged.indices.unwrap();
        assert!(indices[first_indices..].iter().all(|&i| i >= first_vertices));
        assert!(indices[..first_indices].iter().all(|&i| i < first_vertices));
    }

    #[test]
    fn test_unindexed_part_gets_sequence() {
        let a = cone(0.1, 0.2, 4);
        let soup = icosahedron(1.0, 0);
        let offset = a.vertex_count() as u32;
        let soup_len = soup.vertex_count() as u32;
        let merged = concatenate(&[a.clone(), soup]);
        let indices = merged.indices.unwrap();
        let tail: Vec<u32> = indices[a.index_count()..].to_vec();
        let expected: Vec<u32> = (offset..offset + soup_len).collect();
        assert_eq!(tail, expected);
    }

    #[test]
    fn test_missing_normals_are_computed() {
        let soup = Geometry::soup(vec![Vec3::ZERO, Vec3::X, Vec3::Y]);
        let merged = concatenate(&[cone(0.1, 0.2, 4), soup]);
        let normals = merged.normals.unwrap();
        assert_eq!(normals.len(), merged.positions.len());
        let last = normals[normals.len() - 1];
        assert!((last - Vec3::Z).length() < 1e-5, "soup normal {last}");
    }

    #[test]
    fn test_result_is_valid_mesh() {
        let mesh = concatenate(&[cone(0.1, 0.2, 4), icosahedron(0.3, 1)]).into_mesh();
        assert_eq!(mesh.normals.len(), mesh.positions.len());
        assert!(
            mesh.indices
                .iter()
                .all(|&i| (i as usize) < mesh.vertex_count())
        );
    }
}
