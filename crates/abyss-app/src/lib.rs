//! Headless driver for the Abyss scene: resolves the config directory and
//! steps the composed scene through a fixed number of frames.

pub mod headless;
pub mod paths;
