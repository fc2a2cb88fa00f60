//! Organism populations: per-instance data generation for the plankton
//! field and the whale pod, plus the shared per-population uniforms each
//! population refreshes once per frame.

pub mod generator;
pub mod instance;
pub mod plankton;
pub mod whales;

pub use generator::{SIZE_RANGE, generate_instances, partition_counts, sample_offset, type_scalar};
pub use instance::{InstanceRaw, InstanceRecord};
pub use plankton::{PlanktonField, PlanktonParams, PlanktonPopulation, PlanktonUniforms};
pub use whales::{Whale, WhaleParams, WhalePod, WhaleUniforms};
