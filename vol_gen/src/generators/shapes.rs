use fastrand::Rng;
use nalgebra::{vector, Vector3};

use crate::config::{Config, GeneratorConfig};

use super::SampleGenerator;

/// Generate volume with a number of randomly placed boxes
pub struct ShapesGenerator {
    shapes: Vec<ShapeInfo>,
}

struct ShapeInfo {
    position_low: Vector3<u32>,
    position_high: Vector3<u32>,
    sample: f32,
}

impl ShapesGenerator {
    /// Each channel gets its own placement, derived from the seed.
    pub fn from_config(config: &Config, channel: u32) -> ShapesGenerator {
        let (n_of_shapes, sample) = match config.generator {
            GeneratorConfig::Shapes { n_of_shapes, sample } => (n_of_shapes, sample),
            // Should not happen
            _ => panic!("Bad generator args"),
        };

        let rng = Rng::with_seed(config.seed + channel as u64);
        let shapes = (0..n_of_shapes)
            .map(|_| ShapeInfo::random(&rng, config.dims, sample))
            .collect();
        ShapesGenerator { shapes }
    }
}

impl ShapeInfo {
    fn random(rng: &Rng, dims: Vector3<u32>, sample: f32) -> ShapeInfo {
        // sides up to a quarter of the volume, at least one cell
        let max_side = (dims.x.min(dims.y).min(dims.z) / 4).max(1);
        let position_low = vector![
            rng.u32(0..dims.x),
            rng.u32(0..dims.y),
            rng.u32(0..dims.z)
        ];
        let side = rng.u32(1..=max_side);
        let position_high = position_low.zip_map(&dims, |low, dim| (low + side).min(dim - 1));

        // dim shapes down a bit so overlaps stay visible
        let sample = sample * (0.25 + 0.75 * rng.f32());

        ShapeInfo {
            position_low,
            position_high,
            sample,
        }
    }

    fn contains(&self, coords: Vector3<u32>) -> bool {
        coords.x >= self.position_low.x
            && coords.y >= self.position_low.y
            && coords.z >= self.position_low.z
            && coords.x <= self.position_high.x
            && coords.y <= self.position_high.y
            && coords.z <= self.position_high.z
    }
}

impl SampleGenerator for ShapesGenerator {
    fn sample_at(&self, coords: Vector3<u32>) -> f32 {
        for shape in &self.shapes {
            if shape.contains(coords) {
                return shape.sample;
            }
        }
        0.0
    }
}

#[cfg(test)]
mod test {

    use super::*;
    use crate::config::SampleKind;

    fn shapes_config(seed: u64) -> Config {
        Config {
            dims: vector![32, 32, 32],
            kind: SampleKind::U8,
            channels: 1,
            generator: GeneratorConfig::Shapes {
                n_of_shapes: 10,
                sample: 1.0,
            },
            seed,
            file_name: "test.csvf".into(),
        }
    }

    #[test]
    fn deterministic_per_seed() {
        let cfg = shapes_config(7);
        let a = ShapesGenerator::from_config(&cfg, 0);
        let b = ShapesGenerator::from_config(&cfg, 0);

        for x in 0..32 {
            for z in 0..32 {
                let coords = vector![x, 16, z];
                assert_eq!(a.sample_at(coords), b.sample_at(coords));
            }
        }
    }

    #[test]
    fn channels_differ() {
        let cfg = shapes_config(7);
        let a = ShapesGenerator::from_config(&cfg, 0);
        let b = ShapesGenerator::from_config(&cfg, 1);

        let mut differences = 0;
        for x in 0..32 {
            for z in 0..32 {
                let coords = vector![x, 16, z];
                if a.sample_at(coords) != b.sample_at(coords) {
                    differences += 1;
                }
            }
        }
        assert!(differences > 0);
    }

    #[test]
    fn samples_normalized() {
        let cfg = shapes_config(13);
        let gen = ShapesGenerator::from_config(&cfg, 0);

        for x in 0..32 {
            for y in 0..32 {
                let sample = gen.sample_at(vector![x, y, 16]);
                assert!((0.0..=1.0).contains(&sample));
            }
        }
    }
}
