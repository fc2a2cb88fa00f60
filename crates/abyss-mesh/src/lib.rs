//! Procedural organism geometry: primitive shapes, buffer concatenation,
//! normal generation and the per-archetype body recipes.
//!
//! Every archetype is built once into an immutable [`Mesh`] and shared by all
//! instances of that archetype.

pub mod archetype;
pub mod concat;
pub mod extrude;
pub mod geometry;
pub mod mesh;
pub mod organisms;
pub mod primitives;
pub mod whale;

pub use archetype::Archetype;
pub use concat::concatenate;
pub use extrude::{Outline, extrude};
pub use geometry::Geometry;
pub use mesh::Mesh;
pub use primitives::{capsule, cone, cylinder, icosahedron, lathe, plane};
