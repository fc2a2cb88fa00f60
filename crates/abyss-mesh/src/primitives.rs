//! Primitive shapes: cylinder/cone, capsule, lathe, icosahedron and plane.
//!
//! Vertex layouts follow the conventional scene-graph definitions so that
//! recipes written against those shapes produce the same buffers: lathes
//! duplicate their seam column, cylinders omit the cap of a zero radius and
//! icosahedra are emitted as a non-indexed triangle soup.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use glam::{Vec2, Vec3};

use crate::geometry::Geometry;

/// Cylinder (or truncated cone) centred on the origin along +Y.
///
/// A cap is only generated for an end whose radius is positive.
///
/// # Panics
///
/// Panics if `radial_segments < 3`, `height <= 0`, a radius is negative, or
/// both radii are zero.
pub fn cylinder(radius_top: f32, radius_bottom: f32, height: f32, radial_segments: u32) -> Geometry {
    assert!(
        radial_segments >= 3,
        "cylinder needs at least 3 radial segments, got {radial_segments}"
    );
    assert!(height > 0.0, "cylinder height must be positive, got {height}");
    assert!(
        radius_top >= 0.0 && radius_bottom >= 0.0,
        "cylinder radii must not be negative"
    );
    assert!(
        radius_top > 0.0 || radius_bottom > 0.0,
        "cylinder needs at least one positive radius"
    );

    let half_height = height * 0.5;
    let slope = (radius_bottom - radius_top) / height;
    let columns = radial_segments + 1;
    let mut positions = Vec::new();
    let mut normals = Vec::new();
    let mut indices = Vec::new();

    // Torso: row 0 is the top ring, row 1 the bottom ring.
    for row in 0..2 {
        let v = row as f32;
        let radius = v * (radius_bottom - radius_top) + radius_top;
        for x in 0..columns {
            let theta = x as f32 / radial_segments as f32 * TAU;
            let (sin, cos) = theta.sin_cos();
            positions.push(Vec3::new(radius * sin, -v * height + half_height, radius * cos));
            normals.push(Vec3::new(sin, slope, cos).normalize());
        }
    }
    for x in 0..radial_segments {
        let a = x;
        let b = columns + x;
        let c = columns + x + 1;
        let d = x + 1;
        if radius_top > 0.0 {
            indices.extend_from_slice(&[a, b, d]);
        }
        if radius_bottom > 0.0 {
            indices.extend_from_slice(&[b, c, d]);
        }
    }

    if radius_top > 0.0 {
        push_cap(&mut positions, &mut normals, &mut indices, radius_top, half_height, radial_segments, true);
    }
    if radius_bottom > 0.0 {
        push_cap(&mut positions, &mut normals, &mut indices, radius_bottom, half_height, radial_segments, false);
    }

    Geometry::indexed(positions, normals, indices)
}

fn push_cap(
    positions: &mut Vec<Vec3>,
    normals: &mut Vec<Vec3>,
    indices: &mut Vec<u32>,
    radius: f32,
    half_height: f32,
    radial_segments: u32,
    top: bool,
) {
    let sign = if top { 1.0 } else { -1.0 };
    let y = half_height * sign;
    let normal = Vec3::new(0.0, sign, 0.0);

    let center_start = positions.len() as u32;
    for _ in 0..radial_segments {
        positions.push(Vec3::new(0.0, y, 0.0));
        normals.push(normal);
    }
    let ring_start = positions.len() as u32;
    for x in 0..=radial_segments {
        let theta = x as f32 / radial_segments as f32 * TAU;
        let (sin, cos) = theta.sin_cos();
        positions.push(Vec3::new(radius * sin, y, radius * cos));
        normals.push(normal);
    }
    for x in 0..radial_segments {
        let c = center_start + x;
        let i = ring_start + x;
        if top {
            indices.extend_from_slice(&[i, i + 1, c]);
        } else {
            indices.extend_from_slice(&[i + 1, i, c]);
        }
    }
}

/// Cone with its apex at +Y and its base at −Y.
pub fn cone(radius: f32, height: f32, radial_segments: u32) -> Geometry {
    cylinder(0.0, radius, height, radial_segments)
}

/// Solid of revolution of a `(radius, y)` profile about the +Y axis.
///
/// Produces `segments + 1` columns of `points.len()` vertices; the first and
/// last column coincide.
///
/// # Panics
///
/// Panics with fewer than 2 profile points or fewer than 3 segments.
pub fn lathe(points: &[Vec2], segments: u32) -> Geometry {
    assert!(
        points.len() >= 2,
        "lathe profile needs at least 2 points, got {}",
        points.len()
    );
    assert!(segments >= 3, "lathe needs at least 3 segments, got {segments}");

    let profile_normals = lathe_profile_normals(points);
    let n = points.len() as u32;
    let mut positions = Vec::with_capacity(((segments + 1) * n) as usize);
    let mut normals = Vec::with_capacity(positions.capacity());

    for i in 0..=segments {
        let phi = i as f32 / segments as f32 * TAU;
        let (sin, cos) = phi.sin_cos();
        for (p, pn) in points.iter().zip(&profile_normals) {
            positions.push(Vec3::new(p.x * sin, p.y, p.x * cos));
            normals.push(Vec3::new(pn.x * sin, pn.y, pn.x * cos));
        }
    }

    let mut indices = Vec::with_capacity((segments * (n - 1) * 6) as usize);
    for i in 0..segments {
        for j in 0..n - 1 {
            let base = j + i * n;
            let a = base;
            let b = base + n;
            let c = base + n + 1;
            let d = base + 1;
            indices.extend_from_slice(&[a, b, d, c, d, b]);
        }
    }

    Geometry::indexed(positions, normals, indices)
}

/// 2D profile normals: perpendicular to the local tangent, averaged across
/// interior points.
fn lathe_profile_normals(points: &[Vec2]) -> Vec<Vec2> {
    let last = points.len() - 1;
    let mut out = Vec::with_capacity(points.len());
    let mut prev = Vec2::ZERO;
    for j in 0..=last {
        if j == last {
            out.push(prev.normalize_or_zero());
            continue;
        }
        let d = points[j + 1] - points[j];
        let current = Vec2::new(d.y, -d.x);
        if j == 0 {
            out.push(current.normalize_or_zero());
        } else {
            out.push((prev + current).normalize_or_zero());
        }
        prev = current;
    }
    out
}

/// Capsule along +Y: a cylinder of `length` with hemispherical ends.
///
/// Built as a lathe of two quarter arcs, each sampled with
/// `2 * cap_segments` divisions.
///
/// # Panics
///
/// Panics if `radius <= 0`, `length < 0`, `cap_segments == 0` or
/// `radial_segments < 3`.
pub fn capsule(radius: f32, length: f32, cap_segments: u32, radial_segments: u32) -> Geometry {
    assert!(radius > 0.0, "capsule radius must be positive, got {radius}");
    assert!(length >= 0.0, "capsule length must not be negative, got {length}");
    assert!(cap_segments >= 1, "capsule needs at least 1 cap segment");

    let divisions = cap_segments * 2;
    let half = length * 0.5;
    let mut profile = Vec::with_capacity(((divisions + 1) * 2) as usize);
    // Lower arc sweeps from the bottom pole (270°) round to the equator (360°).
    for i in 0..=divisions {
        let angle = 1.5 * PI + i as f32 / divisions as f32 * FRAC_PI_2;
        profile.push(Vec2::new(radius * angle.cos(), -half + radius * angle.sin()));
    }
    // Upper arc from the equator (0°) to the top pole (90°).
    for i in 0..=divisions {
        let angle = i as f32 / divisions as f32 * FRAC_PI_2;
        let point = Vec2::new(radius * angle.cos(), half + radius * angle.sin());
        if profile.last().is_some_and(|last| last.distance(point) < 1e-7) {
            continue;
        }
        profile.push(point);
    }
    lathe(&profile, radial_segments)
}

const ICOSAHEDRON_VERTICES: [[f32; 3]; 12] = {
    let t = 1.618_034;
    [
        [-1.0, t, 0.0],
        [1.0, t, 0.0],
        [-1.0, -t, 0.0],
        [1.0, -t, 0.0],
        [0.0, -1.0, t],
        [0.0, 1.0, t],
        [0.0, -1.0, -t],
        [0.0, 1.0, -t],
        [t, 0.0, -1.0],
        [t, 0.0, 1.0],
        [-t, 0.0, -1.0],
        [-t, 0.0, 1.0],
    ]
};

const ICOSAHEDRON_FACES: [[usize; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

/// Icosphere of `radius`, each face subdivided `detail` times.
///
/// Emitted as a non-indexed triangle soup of `20 · (detail + 1)² · 3`
/// vertices. Detail 0 carries flat face normals; finer levels use smooth
/// radial normals.
///
/// # Panics
///
/// Panics if `radius <= 0`.
pub fn icosahedron(radius: f32, detail: u32) -> Geometry {
    assert!(radius > 0.0, "icosahedron radius must be positive, got {radius}");

    let cols = detail as usize + 1;
    let mut positions = Vec::with_capacity(20 * cols * cols * 3);
    for face in ICOSAHEDRON_FACES {
        let [a, b, c] = face.map(|i| Vec3::from_array(ICOSAHEDRON_VERTICES[i]));
        subdivide_face(a, b, c, cols, &mut positions);
    }
    for p in &mut positions {
        *p = p.normalize() * radius;
    }

    if detail == 0 {
        Geometry::soup(positions).compute_normals()
    } else {
        let normals = positions.iter().map(|p| p.normalize()).collect();
        Geometry {
            positions,
            normals: Some(normals),
            indices: None,
        }
    }
}

fn subdivide_face(a: Vec3, b: Vec3, c: Vec3, cols: usize, out: &mut Vec<Vec3>) {
    let mut grid: Vec<Vec<Vec3>> = Vec::with_capacity(cols + 1);
    for i in 0..=cols {
        let t = i as f32 / cols as f32;
        let aj = a.lerp(c, t);
        let bj = b.lerp(c, t);
        let rows = cols - i;
        let row = (0..=rows)
            .map(|j| {
                if rows == 0 {
                    aj
                } else {
                    aj.lerp(bj, j as f32 / rows as f32)
                }
            })
            .collect();
        grid.push(row);
    }
    for i in 0..cols {
        for j in 0..2 * (cols - i) - 1 {
            let k = j / 2;
            if j % 2 == 0 {
                out.extend_from_slice(&[grid[i][k + 1], grid[i + 1][k], grid[i][k]]);
            } else {
                out.extend_from_slice(&[grid[i][k + 1], grid[i + 1][k + 1], grid[i + 1][k]]);
            }
        }
    }
}

/// Single-quad plane in the XY plane facing +Z.
///
/// # Panics
///
/// Panics if either side is not positive.
pub fn plane(width: f32, height: f32) -> Geometry {
    assert!(
        width > 0.0 && height > 0.0,
        "plane sides must be positive, got {width} x {height}"
    );
    let (hw, hh) = (width * 0.5, height * 0.5);
    let positions = vec![
        Vec3::new(-hw, hh, 0.0),
        Vec3::new(hw, hh, 0.0),
        Vec3::new(-hw, -hh, 0.0),
        Vec3::new(hw, -hh, 0.0),
    ];
    Geometry::indexed(positions, vec![Vec3::Z; 4], vec![0, 2, 1, 2, 3, 1])
}
