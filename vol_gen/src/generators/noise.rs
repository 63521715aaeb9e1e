use fastrand::Rng;
use nalgebra::Vector3;

use super::SampleGenerator;

/// White noise, deterministic per coordinate
pub struct NoiseGenerator {
    seed: u64,
}

impl NoiseGenerator {
    pub fn new(seed: u64) -> NoiseGenerator {
        NoiseGenerator { seed }
    }
}

impl SampleGenerator for NoiseGenerator {
    fn sample_at(&self, coords: Vector3<u32>) -> f32 {
        // pack the coordinates into one seed, 21 bits per axis
        let packed =
            coords.x as u64 | ((coords.y as u64) << 21) | ((coords.z as u64) << 42);
        let rng = Rng::with_seed(self.seed ^ packed.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        rng.f32()
    }
}
