//! Whale body: a lathed hull with dorsal fin, twin flukes and pectoral fins.

use std::f32::consts::FRAC_PI_2;

use glam::{Vec2, Vec3};

use crate::concat::concatenate;
use crate::extrude::{Outline, extrude};
use crate::geometry::Geometry;
use crate::mesh::Mesh;
use crate::primitives::lathe;

/// Points in the hull profile, nose to tail.
pub const BODY_PROFILE_POINTS: u32 = 33;
/// Radial segments of the hull lathe.
pub const BODY_SEGMENTS: u32 = 16;
/// Smallest hull radius; keeps the nose and tail tip from collapsing.
pub const MIN_BODY_RADIUS: f32 = 0.005;

/// Hull radius at normalised body position `t` (0 = nose, 1 = tail).
///
/// Rounded nose up to 0.15, a belly bulge peaking at 0.2 up to 0.55, then a
/// taper into the tail stock.
pub fn body_radius(t: f32) -> f32 {
    let radius = if t < 0.15 {
        let n = (t - 0.15) / 0.15;
        0.15 * (1.0 - n * n).max(0.0).sqrt()
    } else if t < 0.55 {
        let bt = (t - 0.15) / 0.4;
        0.15 + 0.05 * (bt * std::f32::consts::PI).sin()
    } else {
        let u = (t - 0.55) / 0.45;
        0.2 * (1.0 - u) * (1.0 - u * 0.3)
    };
    radius.max(MIN_BODY_RADIUS)
}

fn body() -> Geometry {
    let last = (BODY_PROFILE_POINTS - 1) as f32;
    let profile: Vec<Vec2> = (0..BODY_PROFILE_POINTS)
        .map(|i| {
            let t = i as f32 / last;
            Vec2::new(body_radius(t), (t - 0.5) * 2.0)
        })
        .collect();
    lathe(&profile, BODY_SEGMENTS)
}

fn dorsal_fin() -> Geometry {
    let outline = Outline::new(Vec2::ZERO)
        .bezier_to(Vec2::new(0.02, 0.08), Vec2::new(0.08, 0.1), Vec2::new(0.1, 0.0))
        .line_to(Vec2::ZERO);
    extrude(&outline, 0.008)
        .rotate_x(FRAC_PI_2)
        .rotate_z(FRAC_PI_2)
        .translate(Vec3::new(-0.004, 0.15, 0.1))
}

fn fluke() -> Geometry {
    let outline = Outline::new(Vec2::ZERO)
        .bezier_to(Vec2::new(0.15, 0.02), Vec2::new(0.2, 0.08), Vec2::new(0.22, 0.12))
        .bezier_to(Vec2::new(0.18, 0.06), Vec2::new(0.1, 0.02), Vec2::ZERO);
    extrude(&outline, 0.006)
        .rotate_y(FRAC_PI_2)
        .translate(Vec3::new(0.0, -0.003, -0.9))
}

fn pectoral_fin() -> Geometry {
    let outline = Outline::new(Vec2::ZERO)
        .bezier_to(Vec2::new(0.04, -0.01), Vec2::new(0.12, -0.03), Vec2::new(0.15, -0.08))
        .bezier_to(Vec2::new(0.1, -0.04), Vec2::new(0.05, -0.01), Vec2::ZERO);
    extrude(&outline, 0.005)
        .rotate_y(FRAC_PI_2)
        .translate(Vec3::new(0.06, -0.08, 0.35))
}

/// Assemble the whale mesh, oriented to swim along +X.
pub fn whale() -> Mesh {
    let fluke = fluke();
    let fluke_mirror = fluke.clone().scale(Vec3::new(1.0, 1.0, -1.0));
    let pectoral = pectoral_fin();
    let pectoral_mirror = pectoral.clone().scale(Vec3::new(-1.0, 1.0, 1.0));

    concatenate(&[body(), dorsal_fin(), fluke, fluke_mirror, pectoral, pectoral_mirror])
        .rotate_z(-FRAC_PI_2)
        .compute_normals()
        .into_mesh()
}
