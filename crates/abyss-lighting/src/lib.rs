//! Underwater light rig: ambient fill, a shimmering sun filtered through the
//! surface, a sky/seabed hemisphere and two coloured point fills.

mod ambient;
mod directional;
mod point;
mod rig;

pub use ambient::{AmbientLight, HemisphereLight};
pub use directional::{SunLight, SunShimmer, sun_shimmer};
pub use point::PointLight;
pub use rig::{LightingParams, LightingRig};
