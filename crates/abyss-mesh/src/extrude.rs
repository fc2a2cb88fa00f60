//! Closed 2D outlines and their linear extrusion along +Z.

use glam::{Vec2, Vec3};

use crate::geometry::Geometry;

/// Samples taken along each Bézier segment when an outline is flattened.
pub const CURVE_SAMPLES: u32 = 12;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Segment {
    Line { to: Vec2 },
    Cubic { c1: Vec2, c2: Vec2, to: Vec2 },
}

/// A closed outline made of line and cubic Bézier segments.
#[derive(Clone, Debug, PartialEq)]
pub struct Outline {
    start: Vec2,
    segments: Vec<Segment>,
}

impl Outline {
    /// Begin an outline at `start`.
    pub fn new(start: Vec2) -> Self {
        Self {
            start,
            segments: Vec::new(),
        }
    }

    /// Straight segment to `to`.
    pub fn line_to(mut self, to: Vec2) -> Self {
        self.segments.push(Segment::Line { to });
        self
    }

    /// Cubic Bézier segment with control points `c1`, `c2`, ending at `to`.
    pub fn bezier_to(mut self, c1: Vec2, c2: Vec2, to: Vec2) -> Self {
        self.segments.push(Segment::Cubic { c1, c2, to });
        self
    }

    /// Flatten to a polygon.
    ///
    /// Lines contribute their end point, curves `samples` points. Repeated
    /// consecutive points and the closing point (equal to the start) are
    /// dropped.
    pub fn sample(&self, samples: u32) -> Vec<Vec2> {
        assert!(samples >= 1, "outline needs at least 1 sample per curve");
        let mut points = vec![self.start];
        let mut cursor = self.start;
        for segment in &self.segments {
            match *segment {
                Segment::Line { to } => push_distinct(&mut points, to),
                Segment::Cubic { c1, c2, to } => {
                    for i in 1..=samples {
                        let t = i as f32 / samples as f32;
                        push_distinct(&mut points, cubic_bezier(cursor, c1, c2, to, t));
                    }
                }
            }
            cursor = match *segment {
                Segment::Line { to } | Segment::Cubic { to, .. } => to,
            };
        }
        if points.len() > 1 && points[points.len() - 1].distance(points[0]) < 1e-9 {
            points.pop();
        }
        points
    }
}

fn push_distinct(points: &mut Vec<Vec2>, p: Vec2) {
    if points.last().is_some_and(|last| last.distance(p) < 1e-9) {
        return;
    }
    points.push(p);
}

fn cubic_bezier(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let k = 1.0 - t;
    p0 * (k * k * k) + p1 * (3.0 * k * k * t) + p2 * (3.0 * k * t * t) + p3 * (t * t * t)
}

/// Twice the signed area; positive for counter-clockwise polygons.
fn signed_area(points: &[Vec2]) -> f32 {
    let n = points.len();
    (0..n)
        .map(|i| {
            let p = points[(i + n - 1) % n];
            let q = points[i];
            p.x * q.y - q.x * p.y
        })
        .sum()
}

/// Extrude `outline` from `z = 0` to `z = depth`.
///
/// The contour is brought to clockwise order, both caps are fan-triangulated
/// about the first contour point (the outline must be star-shaped about
/// it), and each edge gets a two-triangle side wall. The result is a
/// non-indexed triangle soup without normals.
///
/// # Panics
///
/// Panics if `depth <= 0` or the outline flattens to fewer than 3 points.
pub fn extrude(outline: &Outline, depth: f32) -> Geometry {
    assert!(depth > 0.0, "extrusion depth must be positive, got {depth}");
    let mut contour = outline.sample(CURVE_SAMPLES);
    assert!(
        contour.len() >= 3,
        "extruded outline needs at least 3 points, got {}",
        contour.len()
    );
    if signed_area(&contour) > 0.0 {
        contour.reverse();
    }

    let n = contour.len();
    let layer = |i: usize, z: f32| Vec3::new(contour[i].x, contour[i].y, z);
    let mut positions = Vec::with_capacity(3 * (2 * (n - 2) + 2 * n));

    // Fan faces wound counter-clockwise over the clockwise contour.
    let faces: Vec<[usize; 3]> = (1..n - 1).map(|i| [0, i + 1, i]).collect();
    for [a, b, c] in &faces {
        positions.extend_from_slice(&[layer(*c, 0.0), layer(*b, 0.0), layer(*a, 0.0)]);
    }
    for [a, b, c] in &faces {
        positions.extend_from_slice(&[layer(*a, depth), layer(*b, depth), layer(*c, depth)]);
    }

    for j in 0..n {
        let k = (j + n - 1) % n;
        let a = layer(j, 0.0);
        let b = layer(k, 0.0);
        let c = layer(k, depth);
        let d = layer(j, depth);
        positions.extend_from_slice(&[a, b, d, b, c, d]);
    }

    Geometry::soup(positions)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Outline {
        Outline::new(Vec2::ZERO)
            .line_to(Vec2::new(1.0, 0.0))
            .line_to(Vec2::new(1.0, 1.0))
            .line_to(Vec2::new(0.0, 1.0))
            .line_to(Vec2::ZERO)
    }

    #[test]
    fn test_sample_drops_closing_point() {
        let points = square().sample(CURVE_SAMPLES);
        assert_eq!(points.len(), 4);
    }

    #[test]
    fn test_bezier_sampling_hits_endpoints() {
        let outline = Outline::new(Vec2::ZERO)
            .bezier_to(Vec2::new(0.02, 0.08), Vec2::new(0.08, 0.1), Vec2::new(0.1, 0.0))
            .line_to(Vec2::ZERO);
        let points = outline.sample(12);
        assert_eq!(points.len(), 13);
        assert_eq!(points[0], Vec2::ZERO);
        assert!((points[12] - Vec2::new(0.1, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_extrude_vertex_count() {
        let g = extrude(&square(), 0.5);
        // 2 caps × 2 triangles + 4 walls × 2 triangles.
        assert_eq!(g.vertex_count(), 3 * (4 + 8));
        assert!(g.indices.is_none());
        assert!(g.normals.is_none());
    }

    #[test]
    fn test_extrude_normals_point_outward() {
        let g = extrude(&square(), 1.0).compute_normals();
        let center = Vec3::new(0.5, 0.5, 0.5);
        let normals = g.normals.as_ref().unwrap();
        for (tri, n) in g.positions.chunks_exact(3).zip(normals.chunks_exact(3)) {
            let centroid = (tri[0] + tri[1] + tri[2]) / 3.0;
            assert!(
                n[0].dot(centroid - center) > 0.0,
                "face at {centroid} has inward normal {}",
                n[0]
            );
        }
    }

    #[test]
    fn test_counter_clockwise_and_clockwise_agree() {
        let ccw = square();
        let cw = Outline::new(Vec2::ZERO)
            .line_to(Vec2::new(0.0, 1.0))
            .line_to(Vec2::new(1.0, 1.0))
            .line_to(Vec2::new(1.0, 0.0))
            .line_to(Vec2::ZERO);
        let a = extrude(&ccw, 1.0);
        let b = extrude(&cw, 1.0);
        assert_eq!(a.vertex_count(), b.vertex_count());
    }

    #[test]
    #[should_panic(expected = "depth must be positive")]
    fn test_zero_depth_panics() {
        let _ = extrude(&square(), 0.0);
    }

    #[test]
    #[should_panic(expected = "at least 3 points")]
    fn test_degenerate_outline_panics() {
        let outline = Outline::new(Vec2::ZERO).line_to(Vec2::X).line_to(Vec2::ZERO);
        let _ = extrude(&outline, 1.0);
    }
}
