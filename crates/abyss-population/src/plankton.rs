//! The mixed plankton field: one instanced population per plankton
//! archetype, all sharing one set of drift/pulse/colour parameters.

use abyss_math::Rgb;
use abyss_mesh::{Archetype, Mesh};
use rand::Rng;
use tracing::info;

use crate::generator::{generate_instances, partition_counts};
use crate::instance::{InstanceRaw, InstanceRecord};

/// Adjustable plankton parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct PlanktonParams {
    /// Total individuals across all archetypes.
    pub count: u32,
    /// Side of the cube the field fills.
    pub spread: f32,
    pub drift_speed: f32,
    pub pulse_intensity: f32,
    pub bioluminescence: f32,
    pub translucency: f32,
    pub color: Rgb,
}

impl Default for PlanktonParams {
    fn default() -> Self {
        Self {
            count: 4000,
            spread: 35.0,
            drift_speed: 1.0,
            pulse_intensity: 1.0,
            bioluminescence: 0.5,
            translucency: 0.8,
            color: Rgb::from_u32(0x55ccbb),
        }
    }
}

/// Values shared by every instance of one population, refreshed each frame.
#[derive(Clone, Debug, PartialEq)]
pub struct PlanktonUniforms {
    pub time: f32,
    pub drift_speed: f32,
    pub pulse_intensity: f32,
    /// Half the spread: the vertical wrap-around bound of the drift.
    pub bounds_y: f32,
    pub spread: f32,
    pub color: Rgb,
    pub bioluminescence: f32,
    pub translucency: f32,
}

impl PlanktonUniforms {
    fn from_params(params: &PlanktonParams, time: f32) -> Self {
        Self {
            time,
            drift_speed: params.drift_speed,
            pulse_intensity: params.pulse_intensity,
            bounds_y: params.spread * 0.5,
            spread: params.spread,
            color: params.color,
            bioluminescence: params.bioluminescence,
            translucency: params.translucency,
        }
    }
}

/// A fixed-count group of one archetype sharing one mesh.
#[derive(Clone, Debug)]
pub struct PlanktonPopulation {
    archetype: Archetype,
    mesh: Mesh,
    instances: Vec<InstanceRecord>,
    pub uniforms: PlanktonUniforms,
}

impl PlanktonPopulation {
    pub fn archetype(&self) -> Archetype {
        self.archetype
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn instances(&self) -> &[InstanceRecord] {
        &self.instances
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Instance buffer contents in upload order.
    pub fn instance_data(&self) -> Vec<InstanceRaw> {
        self.instances.iter().map(InstanceRecord::to_raw).collect()
    }
}

/// All four plankton populations.
#[derive(Clone, Debug)]
pub struct PlanktonField {
    params: PlanktonParams,
    populations: Vec<PlanktonPopulation>,
}

impl PlanktonField {
    /// Build meshes and instances for every plankton archetype.
    pub fn new<R: Rng + ?Sized>(params: PlanktonParams, rng: &mut R) -> Self {
        let populations = Self::build(&params, rng, 0.0);
        Self { params, populations }
    }

    fn build<R: Rng + ?Sized>(params: &PlanktonParams, rng: &mut R, time: f32) -> Vec<PlanktonPopulation> {
        let counts = partition_counts(params.count, Archetype::PLANKTON.len());
        info!(total = params.count, ?counts, spread = params.spread, "building plankton field");
        Archetype::PLANKTON
            .iter()
            .zip(counts)
            .enumerate()
            .map(|(type_index, (&archetype, count))| PlanktonPopulation {
                archetype,
                mesh: archetype.build_mesh(),
                instances: generate_instances(
                    count,
                    params.spread,
                    type_index,
                    Archetype::PLANKTON.len(),
                    rng,
                ),
                uniforms: PlanktonUniforms::from_params(params, time),
            })
            .collect()
    }

    pub fn params(&self) -> &PlanktonParams {
        &self.params
    }

    pub fn populations(&self) -> &[PlanktonPopulation] {
        &self.populations
    }

    pub fn total_count(&self) -> usize {
        self.populations.iter().map(PlanktonPopulation::len).sum()
    }

    /// Apply new parameters. A count or spread change regenerates every
    /// population and returns `true`; anything else is updated in place.
    pub fn set_params<R: Rng + ?Sized>(&mut self, params: PlanktonParams, rng: &mut R) -> bool {
        let rebuild = params.count != self.params.count || params.spread != self.params.spread;
        let time = self.populations.first().map_or(0.0, |p| p.uniforms.time);
        if rebuild {
            self.populations = Self::build(&params, rng, time);
        } else {
            for population in &mut self.populations {
                population.uniforms = PlanktonUniforms::from_params(&params, time);
            }
        }
        self.params = params;
        rebuild
    }

    /// Copy the current time and parameters into every population's
    /// uniforms.
    pub fn tick(&mut self, time: f32) {
        for population in &mut self.populations {
            population.uniforms = PlanktonUniforms::from_params(&self.params, time);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256StarStar;

    fn rng() -> Xoshiro256StarStar {
        Xoshiro256StarStar::seed_from_u64(3)
    }

    fn small_params(count: u32) -> PlanktonParams {
        PlanktonParams {
            count,
            ..PlanktonParams::default()
        }
    }

    #[test]
    fn test_field_partitions_total() {
        let field = PlanktonField::new(small_params(401), &mut rng());
        let counts: Vec<usize> = field.populations().iter().map(PlanktonPopulation::len).collect();
        assert_eq!(counts, vec![100, 100, 100, 101]);
        assert_eq!(field.total_count(), 401);
    }

    #[test]
    fn test_population_kinds_are_normalised_indices() {
        let field = PlanktonField::new(small_params(40), &mut rng());
        for (i, population) in field.populations().iter().enumerate() {
            assert_eq!(population.archetype(), Archetype::PLANKTON[i]);
            assert!(population.instances().iter().all(|r| (r.kind - i as f32 / 3.0).abs() < 1e-6));
        }
    }

    #[test]
    fn test_uniforms_follow_params() {
        let mut field = PlanktonField::new(small_params(8), &mut rng());
        field.tick(2.5);
        let u = &field.populations()[0].uniforms;
        assert_eq!(u.time, 2.5);
        assert!((u.bounds_y - 17.5).abs() < 1e-6);
        assert_eq!(u.color, Rgb::from_u32(0x55ccbb));
    }

    #[test]
    fn test_tick_is_idempotent() {
        let mut field = PlanktonField::new(small_params(8), &mut rng());
        field.tick(9.0);
        let first: Vec<_> = field.populations().iter().map(|p| p.uniforms.clone()).collect();
        field.tick(9.0);
        let second: Vec<_> = field.populations().iter().map(|p| p.uniforms.clone()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_param_change_updates_in_place() {
        let mut rng = rng();
        let mut field = PlanktonField::new(small_params(20), &mut rng);
        let before = field.populations()[1].instances().to_vec();
        let params = PlanktonParams {
            drift_speed: 2.0,
            ..small_params(20)
        };
        assert!(!field.set_params(params, &mut rng));
        assert_eq!(field.populations()[1].instances(), before.as_slice());
        assert_eq!(field.populations()[1].uniforms.drift_speed, 2.0);
    }

    #[test]
    fn test_count_change_rebuilds() {
        let mut rng = rng();
        let mut field = PlanktonField::new(small_params(20), &mut rng);
        assert!(field.set_params(small_params(44), &mut rng));
        assert_eq!(field.total_count(), 44);
    }

    #[test]
    fn test_instance_data_matches_records() {
        let field = PlanktonField::new(small_params(12), &mut rng());
        let population = &field.populations()[2];
        let raw = population.instance_data();
        assert_eq!(raw.len(), population.len());
        assert_eq!(raw[0].size, population.instances()[0].size);
    }
}
