//! Plankton body recipes.

use std::f32::consts::{FRAC_PI_2, PI};

use glam::{Quat, Vec2, Vec3};
use rustc_hash::FxHashSet;

use crate::concat::concatenate;
use crate::mesh::Mesh;
use crate::primitives::{capsule, cone, cylinder, icosahedron, lathe};

/// Radius floor that keeps the larvae profile from pinching to a point.
pub const LARVAE_MIN_RADIUS: f32 = 0.002;

/// Elongated body with two angled antennae and a tapering tail, lying along X.
pub fn copepod() -> Mesh {
    let body = capsule(0.03, 0.12, 6, 12);
    let antenna_left = cone(0.004, 0.08, 4)
        .translate(Vec3::new(0.0, 0.1, 0.015))
        .rotate_z(-0.4);
    let antenna_right = cone(0.004, 0.08, 4)
        .translate(Vec3::new(0.0, 0.1, -0.015))
        .rotate_z(0.4);
    let tail = cylinder(0.003, 0.001, 0.06, 4).translate(Vec3::new(0.0, -0.1, 0.0));

    concatenate(&[body, antenna_left, antenna_right, tail])
        .rotate_z(FRAC_PI_2)
        .into_mesh()
}

/// Pillbox diatom: barrel profile `r(t) = 0.025 + sin(tπ)·0.012`.
pub fn diatom() -> Mesh {
    let profile: Vec<Vec2> = (0..=12)
        .map(|i| {
            let t = i as f32 / 12.0;
            Vec2::new(0.025 + (t * PI).sin() * 0.012, (t - 0.5) * 0.08)
        })
        .collect();
    lathe(&profile, 8).into_mesh()
}

/// Teardrop larva with a trailing filament.
pub fn larvae() -> Mesh {
    let profile: Vec<Vec2> = (0..=14)
        .map(|i| {
            let t = i as f32 / 14.0;
            let r = 0.03 * (t * PI).sin() * (1.0 - t * 0.5);
            Vec2::new(r.max(LARVAE_MIN_RADIUS), (t - 0.3) * 0.15)
        })
        .collect();
    let body = lathe(&profile, 8);
    let filament = cylinder(0.002, 0.0005, 0.07, 3).translate(Vec3::new(0.0, -0.06, 0.0));

    concatenate(&[body, filament]).into_mesh()
}

/// Spine directions for a radiolarian: the unique vertices of a coarse
/// icosahedron, deduplicated on coordinates rounded to three decimals.
pub fn radiolarian_spine_directions(radius: f32) -> Vec<Vec3> {
    let base = icosahedron(radius, 0);
    let mut seen = FxHashSet::default();
    base.positions
        .iter()
        .filter(|p| seen.insert(rounded_key(**p)))
        .map(|p| p.normalize())
        .collect()
}

fn rounded_key(p: Vec3) -> [i32; 3] {
    // `+ 0.0` folds negative zero so ±0 share a key.
    p.to_array().map(|c| ((c * 1000.0).round() + 0.0) as i32)
}

/// Spiky sphere: a subdivided icosahedral core with one outward cone spine
/// per coarse icosahedron vertex.
pub fn radiolarian() -> Mesh {
    let mut parts = vec![icosahedron(0.025, 1)];
    for dir in radiolarian_spine_directions(0.025) {
        let spine = cone(0.003, 0.04, 3)
            .rotate(Quat::from_rotation_arc(Vec3::Y, dir))
            .translate(dir * 0.04);
        parts.push(spine);
    }
    concatenate(&parts).into_mesh()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_mesh_invariants(mesh: &Mesh) {
        let n = mesh.vertex_count();
        assert!(n > 0);
        assert!(mesh.indices.iter().all(|&i| (i as usize) < n));
        assert_eq!(mesh.flat_normals().len(), mesh.flat_positions().len());
    }

    #[test]
    fn test_copepod_lies_along_x() {
        let mesh = copepod();
        assert_mesh_invariants(&mesh);
        let (lo, hi) = mesh.bounds().unwrap();
        let extent = hi - lo;
        assert!(extent.x > extent.y, "copepod extent {extent}");
    }

    #[test]
    fn test_diatom_barrel_widest_in_middle() {
        let mesh = diatom();
        assert_mesh_invariants(&mesh);
        let radius_at = |y: f32| {
            mesh.positions
                .iter()
                .filter(|p| (p[1] - y).abs() < 1e-4)
                .map(|p| (p[0] * p[0] + p[2] * p[2]).sqrt())
                .fold(0.0, f32::max)
        };
        assert!(radius_at(0.0) > radius_at(0.04));
        assert!((radius_at(0.0) - 0.037).abs() < 1e-4);
    }

    #[test]
    fn test_larvae_radius_floor() {
        let mesh = larvae();
        assert_mesh_invariants(&mesh);
        // Lathe vertices come first: 15 profile points × 9 columns.
        for p in &mesh.positions[..15 * 9] {
            let r = (p[0] * p[0] + p[2] * p[2]).sqrt();
            assert!(r >= LARVAE_MIN_RADIUS - 1e-6, "radius {r} below floor");
        }
    }

    #[test]
    fn test_radiolarian_has_twelve_spines() {
        let dirs = radiolarian_spine_directions(0.025);
        assert_eq!(dirs.len(), 12);
        for d in &dirs {
            assert!((d.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_radiolarian_vertex_count() {
        let mesh = radiolarian();
        assert_mesh_invariants(&mesh);
        // Core 240 + 12 cones of (2 × 4 torso + 3 + 4 cap) vertices.
        assert_eq!(mesh.vertex_count(), 240 + 12 * 15);
    }

    #[test]
    fn test_radiolarian_spines_reach_outward() {
        let mesh = radiolarian();
        let max_r = mesh
            .positions
            .iter()
            .map(|p| Vec3::from_array(*p).length())
            .fold(0.0, f32::max);
        // Spine tip sits at 0.04 + half the cone height.
        assert!((max_r - 0.06).abs() < 1e-4, "max radius {max_r}");
    }
}
