//! Named uniform values and their std140-style packing.

use abyss_math::Rgb;
use glam::{Mat4, Vec2, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum UniformValue {
    Float(f32),
    Vec2(Vec2),
    Vec3(Vec3),
    /// sRGB colour; packed as linear RGB.
    Color(Rgb),
    Mat4(Mat4),
}

impl UniformValue {
    pub fn as_float(&self) -> Option<f32> {
        match *self {
            UniformValue::Float(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_vec3(&self) -> Option<Vec3> {
        match *self {
            UniformValue::Vec3(v) => Some(v),
            _ => None,
        }
    }

    fn push_padded(&self, out: &mut Vec<f32>) {
        match *self {
            UniformValue::Float(v) => out.extend_from_slice(&[v, 0.0, 0.0, 0.0]),
            UniformValue::Vec2(v) => out.extend_from_slice(&[v.x, v.y, 0.0, 0.0]),
            UniformValue::Vec3(v) => out.extend_from_slice(&[v.x, v.y, v.z, 0.0]),
            UniformValue::Color(c) => {
                let l = c.to_linear();
                out.extend_from_slice(&[l.x, l.y, l.z, 0.0]);
            }
            UniformValue::Mat4(m) => out.extend_from_slice(&m.to_cols_array()),
        }
    }
}

/// A uniform as `(name, value)`.
pub type Uniform = (&'static str, UniformValue);

/// Pack uniforms in order, each scalar and vector occupying one 16-byte
/// slot and each matrix four.
pub fn pack_uniforms(uniforms: &[Uniform]) -> Vec<f32> {
    let mut out = Vec::with_capacity(uniforms.len() * 4);
    for (_, value) in uniforms {
        value.push_padded(&mut out);
    }
    out
}
